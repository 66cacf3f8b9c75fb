use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const CONFIG_FILE: &str = ".claude/skillgate.yaml";
pub const SETTINGS_FILE: &str = ".claude/settings.local.json";
pub const SKILLS_DIR: &str = "skills";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Join `rel` onto `root` unless it is already absolute.
pub fn resolve_under(root: &Path, rel: &Path) -> PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        root.join(rel)
    }
}

// ---------------------------------------------------------------------------
// Skill name validation
// ---------------------------------------------------------------------------

static SKILL_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn skill_name_re() -> &'static Regex {
    SKILL_NAME_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").expect("static regex")
    })
}

/// Skill directories follow the same slug shape as the rest of the plugin
/// tree: lowercase alphanumerics and hyphens, no leading or trailing hyphen.
pub fn is_valid_skill_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= 64 && skill_name_re().is_match(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
