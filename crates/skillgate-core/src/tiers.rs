use crate::types::{Capability, ClassifiedCapability, RiskTier};
use std::collections::{BTreeMap, HashMap};

// ---------------------------------------------------------------------------
// Built-in tier assignments
// ---------------------------------------------------------------------------

/// Known skills and their risk tier. Add new skills here; names missing
/// from this table fall back to the table's unknown tier.
pub const BUILTIN_TIERS: &[(&str, RiskTier)] = &[
    // read-only: inspect, plan, explain
    ("systematic-debugging", RiskTier::ReadOnly),
    ("brainstorming", RiskTier::ReadOnly),
    ("exploring-codebase", RiskTier::ReadOnly),
    ("explaining-code", RiskTier::ReadOnly),
    ("reviewing-code", RiskTier::ReadOnly),
    ("researching-libraries", RiskTier::ReadOnly),
    ("writing-plans", RiskTier::ReadOnly),
    ("verification-before-completion", RiskTier::ReadOnly),
    // local-reversible: edit the working tree, commit locally
    ("test-driven-development", RiskTier::LocalReversible),
    ("executing-plans", RiskTier::LocalReversible),
    ("refactoring-code", RiskTier::LocalReversible),
    ("writing-skills", RiskTier::LocalReversible),
    ("using-git-worktrees", RiskTier::LocalReversible),
    ("applying-naming-conventions", RiskTier::LocalReversible),
    ("implementing-cqrs", RiskTier::LocalReversible),
    ("scaffolding-services", RiskTier::LocalReversible),
    // external-write: issue trackers, pull requests, remotes
    ("refining-issues", RiskTier::ExternalWrite),
    ("triaging-issues", RiskTier::ExternalWrite),
    ("creating-pull-requests", RiskTier::ExternalWrite),
    ("responding-to-review", RiskTier::ExternalWrite),
    ("finishing-a-development-branch", RiskTier::ExternalWrite),
    ("publishing-docs", RiskTier::ExternalWrite),
    // destructive: removes work or rewrites history
    ("cleaning-up-git-worktrees", RiskTier::Destructive),
    ("pruning-stale-branches", RiskTier::Destructive),
    ("resetting-branches", RiskTier::Destructive),
    ("purging-caches", RiskTier::Destructive),
];

// ---------------------------------------------------------------------------
// TierTable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: HashMap<String, RiskTier>,
    unknown: RiskTier,
}

impl Default for TierTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TierTable {
    /// The built-in table. Unknown skills are treated as local-reversible.
    pub fn builtin() -> Self {
        Self {
            tiers: BUILTIN_TIERS
                .iter()
                .map(|&(name, tier)| (name.to_string(), tier))
                .collect(),
            unknown: RiskTier::LocalReversible,
        }
    }

    /// The built-in table with project overrides layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, RiskTier>, unknown: RiskTier) -> Self {
        let mut table = Self::builtin();
        for (name, tier) in overrides {
            table.tiers.insert(name.clone(), *tier);
        }
        table.unknown = unknown;
        table
    }

    pub fn unknown_tier(&self) -> RiskTier {
        self.unknown
    }

    pub fn classify(&self, name: &str) -> RiskTier {
        self.tiers.get(name).copied().unwrap_or(self.unknown)
    }

    /// Classify every capability, preserving input order.
    pub fn classify_all(&self, capabilities: &[Capability]) -> Vec<ClassifiedCapability> {
        capabilities
            .iter()
            .map(|c| ClassifiedCapability {
                name: c.name.clone(),
                tier: self.classify(&c.name),
            })
            .collect()
    }
}

/// Tier of `name` according to the built-in table only.
pub fn builtin_tier(name: &str) -> Option<RiskTier> {
    BUILTIN_TIERS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, tier)| tier)
}

/// Classify against the built-in table.
pub fn classify(name: &str) -> RiskTier {
    builtin_tier(name).unwrap_or(RiskTier::LocalReversible)
}
