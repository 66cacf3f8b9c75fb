use crate::error::{Result, SkillgateError};
use crate::paths;
use crate::tiers::{builtin_tier, TierTable};
use crate::types::{AutonomyLevel, RiskTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project settings read from `.claude/skillgate.yaml`. Every field is
/// optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_skills_dir")]
    pub skills_dir: PathBuf,
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,
    /// Kept as a raw number so `validate` can report a bad value instead
    /// of failing the load.
    #[serde(default = "default_level")]
    pub default_level: u8,
    #[serde(default = "default_unknown_tier")]
    pub unknown_tier: RiskTier,
    #[serde(default)]
    pub tiers: BTreeMap<String, RiskTier>,
}

fn default_skills_dir() -> PathBuf {
    PathBuf::from(paths::SKILLS_DIR)
}

fn default_settings_file() -> PathBuf {
    PathBuf::from(paths::SETTINGS_FILE)
}

fn default_level() -> u8 {
    1
}

fn default_unknown_tier() -> RiskTier {
    RiskTier::LocalReversible
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skills_dir: default_skills_dir(),
            settings_file: default_settings_file(),
            default_level: default_level(),
            unknown_tier: default_unknown_tier(),
            tiers: BTreeMap::new(),
        }
    }
}

impl Config {
    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Load the project config. A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    // -----------------------------------------------------------------------
    // Derived values
    // -----------------------------------------------------------------------

    pub fn skills_path(&self, root: &Path) -> PathBuf {
        paths::resolve_under(root, &self.skills_dir)
    }

    pub fn settings_path(&self, root: &Path) -> PathBuf {
        paths::resolve_under(root, &self.settings_file)
    }

    /// `default_level` as an autonomy level.
    pub fn autonomy_level(&self) -> Result<AutonomyLevel> {
        AutonomyLevel::from_u8(self.default_level).ok_or_else(|| {
            SkillgateError::InvalidConfig(format!(
                "default_level {} is out of range: must be 1, 2, or 3",
                self.default_level
            ))
        })
    }

    pub fn tier_table(&self) -> TierTable {
        TierTable::with_overrides(&self.tiers, self.unknown_tier)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        // 1. default_level must be a real autonomy level
        if let Err(SkillgateError::InvalidConfig(message)) = self.autonomy_level() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message,
            });
        }

        // 2. override keys must look like skill directory names
        for name in self.tiers.keys() {
            if !paths::is_valid_skill_name(name) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("tiers: '{name}' is not a valid skill name"),
                });
            }
        }

        // 3. lowering a built-in destructive skill
        for (name, tier) in &self.tiers {
            if builtin_tier(name) == Some(RiskTier::Destructive) && *tier != RiskTier::Destructive {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "tiers: '{name}' is destructive by default but overridden to {tier}"
                    ),
                });
            }
        }

        // 4. unknown skills as destructive hides every new skill from the allowlist
        if self.unknown_tier == RiskTier::Destructive {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "unknown_tier is destructive: new skills will never be auto-allowed"
                    .to_string(),
            });
        }

        // 5. skills directory present
        let skills = self.skills_path(root);
        if !skills.is_dir() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("skills directory {} does not exist", skills.display()),
            });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, yaml: &str) {
        let path = paths::config_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.skills_dir, PathBuf::from("skills"));
        assert_eq!(cfg.settings_file, PathBuf::from(".claude/settings.local.json"));
        assert_eq!(cfg.default_level, 1);
        assert_eq!(cfg.unknown_tier, RiskTier::LocalReversible);
        assert!(cfg.tiers.is_empty());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "skills_dir: plugin/skills\ntiers:\n  house-deploy: external_write\n",
        );
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.skills_path(dir.path()), dir.path().join("plugin/skills"));
        assert_eq!(cfg.tiers["house-deploy"], RiskTier::ExternalWrite);
        assert_eq!(cfg.default_level, 1);
        assert_eq!(cfg.tier_table().classify("house-deploy"), RiskTier::ExternalWrite);
    }

    #[test]
    fn bad_tier_name_fails_to_load() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "tiers:\n  foo: dangerous\n");
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn default_level_from_file() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "default_level: 2\n");
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.autonomy_level().unwrap(), AutonomyLevel::Two);
    }

    #[test]
    fn out_of_range_default_level_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "default_level: 7\n");
        let cfg = Config::load(dir.path()).unwrap();
        let err = cfg.autonomy_level().unwrap_err();
        assert!(matches!(err, SkillgateError::InvalidConfig(_)));
        assert!(err.to_string().contains("default_level 7"));
    }

    #[test]
    fn validate_clean_config() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("skills")).unwrap();
        let warnings = Config::default().validate(dir.path());
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn validate_flags_problems() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.default_level = 4;
        cfg.unknown_tier = RiskTier::Destructive;
        cfg.tiers.insert("Bad Name".to_string(), RiskTier::ReadOnly);
        cfg.tiers
            .insert("cleaning-up-git-worktrees".to_string(), RiskTier::ReadOnly);

        let warnings = cfg.validate(dir.path());
        let errors: Vec<_> = warnings.iter().filter(|w| w.level == WarnLevel::Error).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("default_level 4"));

        let text: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(text.iter().any(|m| m.contains("'Bad Name'")));
        assert!(text.iter().any(|m| m.contains("cleaning-up-git-worktrees")));
        assert!(text.iter().any(|m| m.contains("unknown_tier")));
        assert!(text.iter().any(|m| m.contains("does not exist")));
    }
}
