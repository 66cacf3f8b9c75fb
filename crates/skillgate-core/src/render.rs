use crate::allowlist::AllowlistDocument;
use crate::error::Result;
use crate::io::atomic_write;
use crate::types::{AutonomyLevel, RiskTier};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-oriented table, legend and entries.
    Report,
    /// Allow entries then deny entries, one per line.
    Raw,
    /// The JSON settings document.
    StructuredConfig,
}

pub fn render(doc: &AllowlistDocument, format: Format) -> Result<String> {
    match format {
        Format::Report => {
            let mut out = render_report(doc);
            out.push('\n');
            out.push_str(&render_raw(doc));
            Ok(out)
        }
        Format::Raw => Ok(render_raw(doc)),
        Format::StructuredConfig => render_settings(doc),
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// What the AUTO-ALLOWED column says for `tier` at `level`.
pub fn auto_allowed_label(tier: RiskTier, level: AutonomyLevel) -> &'static str {
    match tier {
        RiskTier::ReadOnly | RiskTier::LocalReversible => "yes",
        RiskTier::ExternalWrite if tier.is_allowed_at(level) => "yes (level2+)",
        RiskTier::ExternalWrite => "no",
        RiskTier::Destructive => "never",
    }
}

/// The classification table, legend and summary. Does not include the
/// entries themselves.
pub fn render_report(doc: &AllowlistDocument) -> String {
    let mut out = String::new();
    let title = format!("Skill permissions at autonomy level {}", doc.level);
    out.push_str(&format!("{title}\n{}\n\n", "=".repeat(title.len())));

    if doc.capabilities.is_empty() {
        out.push_str("(no skills discovered)\n");
    } else {
        let rows: Vec<Vec<String>> = doc
            .capabilities
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.tier.to_string(),
                    auto_allowed_label(c.tier, doc.level).to_string(),
                ]
            })
            .collect();
        out.push_str(&format_table(&["SKILL", "TIER", "AUTO-ALLOWED"], &rows));
    }

    out.push_str("\nLegend:\n");
    let width = RiskTier::all()
        .iter()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);
    for &tier in RiskTier::all() {
        let when = match tier.min_level() {
            Some(AutonomyLevel::One) => "allowed at every level".to_string(),
            Some(min) => format!("allowed from level {min}"),
            None => "never allowed".to_string(),
        };
        out.push_str(&format!(
            "  {:width$}  {}; {}\n",
            tier.as_str(),
            tier.description(),
            when,
            width = width
        ));
    }

    let allowed_skills = doc.allowed_capabilities().count();
    out.push_str(&format!(
        "\n{} skills, {} auto-allowed; {} allow entries, {} deny entries\n",
        doc.capabilities.len(),
        allowed_skills,
        doc.allow.len(),
        doc.deny.len()
    ));
    out
}

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<String>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.iter().map(|h| h.to_string()).collect()));
    out.push('\n');
    out.push_str(&line(widths.iter().map(|&w| "-".repeat(w)).collect()));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.clone()));
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Raw
// ---------------------------------------------------------------------------

pub fn render_raw(doc: &AllowlistDocument) -> String {
    let mut out = String::new();
    for entry in doc.allow.iter().chain(doc.deny.iter()) {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Settings document
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Permissions<'a> {
    allow: &'a [String],
    deny: &'a [String],
}

#[derive(Serialize)]
struct SettingsFile<'a> {
    generated_at: &'a DateTime<Utc>,
    level: AutonomyLevel,
    permissions: Permissions<'a>,
}

pub fn render_settings(doc: &AllowlistDocument) -> Result<String> {
    let file = SettingsFile {
        generated_at: &doc.generated_at,
        level: doc.level,
        permissions: Permissions {
            allow: &doc.allow,
            deny: &doc.deny,
        },
    };
    let mut json = serde_json::to_string_pretty(&file)?;
    json.push('\n');
    Ok(json)
}

/// Replace the settings file at `path` with `doc`. The previous content is
/// discarded, never merged.
pub fn write_settings(doc: &AllowlistDocument, path: &Path) -> Result<()> {
    let json = render(doc, Format::StructuredConfig)?;
    atomic_write(path, json.as_bytes())
}
