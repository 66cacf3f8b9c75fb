use crate::output;
use anyhow::Context;
use clap::ValueEnum;
use skillgate_core::allowlist::build_allowlist_with;
use skillgate_core::config::Config;
use skillgate_core::discovery::{discover_capabilities, Discovery};
use skillgate_core::paths;
use skillgate_core::render::{render, render_report, write_settings, Format};
use skillgate_core::types::AutonomyLevel;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Report on stderr, allowlist entries on stdout
    #[default]
    Report,
    /// Write the settings file; report on stderr
    Json,
    /// Allowlist entries only
    Raw,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(
    root: &Path,
    level: Option<&str>,
    mode: Option<&str>,
    skills_dir: Option<&Path>,
) -> anyhow::Result<()> {
    // Usage errors come before any filesystem work, level first.
    let explicit = level.map(str::parse::<AutonomyLevel>).transpose()?;
    let mode = parse_mode(mode)?;

    let config = Config::load(root).context("failed to load config")?;
    let level = match explicit {
        Some(level) => level,
        None => config.autonomy_level()?,
    };

    let skills_path = skills_root(root, &config, skills_dir);
    tracing::debug!(path = %skills_path.display(), %level, "discovering skills");

    let discovery = discover_capabilities(&skills_path);
    report_discovery(&discovery, &skills_path, mode);

    let doc = build_allowlist_with(&config.tier_table(), &discovery.capabilities, level);
    tracing::debug!(
        allow = doc.allow.len(),
        deny = doc.deny.len(),
        "allowlist assembled"
    );

    match mode {
        OutputMode::Report => {
            // Framing on stderr, entries on stdout.
            eprint!("{}", render_report(&doc));
            eprintln!();
            print!("{}", render(&doc, Format::Raw)?);
        }
        OutputMode::Raw => {
            print!("{}", render(&doc, Format::Raw)?);
        }
        OutputMode::Json => {
            let path = config.settings_path(root);
            write_settings(&doc, &path)?;
            eprint!("{}", render(&doc, Format::Report)?);
            eprintln!();
            output::ok(&format!(
                "wrote {} ({} allow, {} deny)",
                path.display(),
                doc.allow.len(),
                doc.deny.len()
            ));
        }
    }

    Ok(())
}

fn parse_mode(mode: Option<&str>) -> anyhow::Result<OutputMode> {
    match mode {
        None => Ok(OutputMode::default()),
        Some(s) => OutputMode::from_str(s, true)
            .map_err(|_| anyhow::anyhow!("invalid output mode '{s}': must be report, json, or raw")),
    }
}

pub(crate) fn skills_root(root: &Path, config: &Config, flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(dir) => paths::resolve_under(root, dir),
        None => config.skills_path(root),
    }
}

fn report_discovery(discovery: &Discovery, path: &Path, mode: OutputMode) {
    match &discovery.warning {
        Some(w) => output::warn(&format!("{w}; continuing with no skills")),
        None if mode != OutputMode::Raw => output::ok(&format!(
            "found {} skills in {}",
            discovery.capabilities.len(),
            path.display()
        )),
        None => {}
    }
}
