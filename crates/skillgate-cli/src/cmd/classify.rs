use crate::output::print_json;
use anyhow::Context;
use serde::Serialize;
use skillgate_core::config::Config;
use skillgate_core::discovery::discover_capabilities;
use skillgate_core::render::format_table;
use skillgate_core::tiers::builtin_tier;
use skillgate_core::types::RiskTier;
use std::path::Path;

/// Where a skill's tier came from.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum TierSource {
    Builtin,
    Config,
    Fallback,
}

impl TierSource {
    fn as_str(self) -> &'static str {
        match self {
            TierSource::Builtin => "builtin",
            TierSource::Config => "config",
            TierSource::Fallback => "fallback",
        }
    }
}

#[derive(Serialize)]
struct Row {
    name: String,
    tier: RiskTier,
    source: TierSource,
}

pub fn run(root: &Path, skills_dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let skills_path = super::generate::skills_root(root, &config, skills_dir);

    let discovery = discover_capabilities(&skills_path);
    if let Some(w) = &discovery.warning {
        crate::output::warn(&w.to_string());
    }

    let table = config.tier_table();
    let rows: Vec<Row> = table
        .classify_all(&discovery.capabilities)
        .into_iter()
        .map(|c| {
            let source = if config.tiers.contains_key(&c.name) {
                TierSource::Config
            } else if builtin_tier(&c.name).is_some() {
                TierSource::Builtin
            } else {
                TierSource::Fallback
            };
            Row {
                name: c.name,
                tier: c.tier,
                source,
            }
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No skills found.");
        return Ok(());
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.tier.to_string(),
                r.source.as_str().to_string(),
            ]
        })
        .collect();
    print!("{}", format_table(&["SKILL", "TIER", "SOURCE"], &cells));

    let fallback = rows
        .iter()
        .filter(|r| matches!(r.source, TierSource::Fallback))
        .count();
    if fallback > 0 {
        crate::output::warn(&format!(
            "{fallback} skill(s) not in the tier table, classified as {}",
            table.unknown_tier()
        ));
    }
    Ok(())
}
