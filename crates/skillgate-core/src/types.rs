use crate::error::SkillgateError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RiskTier
// ---------------------------------------------------------------------------

/// Blast radius of a skill or command, from harmless to irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    ReadOnly,
    LocalReversible,
    ExternalWrite,
    Destructive,
}

impl RiskTier {
    pub fn all() -> &'static [RiskTier] {
        &[
            RiskTier::ReadOnly,
            RiskTier::LocalReversible,
            RiskTier::ExternalWrite,
            RiskTier::Destructive,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::ReadOnly => "read_only",
            RiskTier::LocalReversible => "local_reversible",
            RiskTier::ExternalWrite => "external_write",
            RiskTier::Destructive => "destructive",
        }
    }

    /// Lowest autonomy level at which this tier is auto-allowed.
    /// `None` means never.
    pub fn min_level(self) -> Option<AutonomyLevel> {
        match self {
            RiskTier::ReadOnly | RiskTier::LocalReversible => Some(AutonomyLevel::One),
            RiskTier::ExternalWrite => Some(AutonomyLevel::Two),
            RiskTier::Destructive => None,
        }
    }

    pub fn is_allowed_at(self, level: AutonomyLevel) -> bool {
        self.min_level().is_some_and(|min| level >= min)
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskTier::ReadOnly => "reads files and state, changes nothing",
            RiskTier::LocalReversible => "changes local files, undoable with git",
            RiskTier::ExternalWrite => "writes to external systems (issues, PRs, remotes)",
            RiskTier::Destructive => "deletes work or rewrites history",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AutonomyLevel
// ---------------------------------------------------------------------------

/// How much the agent may do without asking.
///
/// 1. read-only and local-reversible work
/// 2. plus writes to external systems
/// 3. plus publishing (push, PR mutation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AutonomyLevel {
    #[default]
    One = 1,
    Two = 2,
    Three = 3,
}

impl AutonomyLevel {
    pub fn all() -> &'static [AutonomyLevel] {
        &[AutonomyLevel::One, AutonomyLevel::Two, AutonomyLevel::Three]
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(n: u8) -> Option<AutonomyLevel> {
        match n {
            1 => Some(AutonomyLevel::One),
            2 => Some(AutonomyLevel::Two),
            3 => Some(AutonomyLevel::Three),
            _ => None,
        }
    }
}

impl fmt::Display for AutonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl std::str::FromStr for AutonomyLevel {
    type Err = SkillgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(AutonomyLevel::from_u8)
            .ok_or_else(|| SkillgateError::InvalidLevel(s.to_string()))
    }
}

impl Serialize for AutonomyLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A skill discovered on disk, identified by its directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    pub name: String,
}

impl Capability {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Output of the classification pass: one row per discovered skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCapability {
    pub name: String,
    pub tier: RiskTier,
}

impl ClassifiedCapability {
    /// Allowlist token referencing this skill.
    pub fn allow_entry(&self) -> String {
        format!("Skill({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_valid_values() {
        assert_eq!("1".parse::<AutonomyLevel>().unwrap(), AutonomyLevel::One);
        assert_eq!("2".parse::<AutonomyLevel>().unwrap(), AutonomyLevel::Two);
        assert_eq!(" 3 ".parse::<AutonomyLevel>().unwrap(), AutonomyLevel::Three);
    }

    #[test]
    fn level_rejects_out_of_range() {
        for bad in ["0", "4", "-1", "two", "", "1.5", "256"] {
            let err = bad.parse::<AutonomyLevel>().unwrap_err();
            assert!(
                matches!(err, SkillgateError::InvalidLevel(ref s) if s == bad),
                "expected InvalidLevel for {bad:?}"
            );
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(AutonomyLevel::One < AutonomyLevel::Two);
        assert!(AutonomyLevel::Two < AutonomyLevel::Three);
    }

    #[test]
    fn destructive_is_never_allowed() {
        for &level in AutonomyLevel::all() {
            assert!(!RiskTier::Destructive.is_allowed_at(level));
        }
    }

    #[test]
    fn external_write_needs_level_two() {
        assert!(!RiskTier::ExternalWrite.is_allowed_at(AutonomyLevel::One));
        assert!(RiskTier::ExternalWrite.is_allowed_at(AutonomyLevel::Two));
        assert!(RiskTier::ExternalWrite.is_allowed_at(AutonomyLevel::Three));
    }

    #[test]
    fn tier_names_match_serde() {
        for &tier in RiskTier::all() {
            let yaml: RiskTier = serde_yaml::from_str(tier.as_str()).unwrap();
            assert_eq!(yaml, tier);
        }
        assert!(serde_yaml::from_str::<RiskTier>("risky").is_err());
    }

    #[test]
    fn level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&AutonomyLevel::Two).unwrap(), "2");
    }

    #[test]
    fn capability_allow_entry_shape() {
        let c = ClassifiedCapability {
            name: Capability::new("systematic-debugging").name,
            tier: RiskTier::ReadOnly,
        };
        assert_eq!(c.allow_entry(), "Skill(systematic-debugging)");
    }
}
