use crate::catalog;
use crate::tiers::TierTable;
use crate::types::{AutonomyLevel, Capability, ClassifiedCapability};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// AllowlistDocument
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AllowlistDocument {
    pub generated_at: DateTime<Utc>,
    pub level: AutonomyLevel,
    /// Every discovered skill with its tier, in discovery order.
    pub capabilities: Vec<ClassifiedCapability>,
    pub allow: Vec<String>,
    pub deny: Vec<String>,
}

impl AllowlistDocument {
    pub fn is_allowed(&self, entry: &str) -> bool {
        self.allow.iter().any(|e| e == entry)
    }

    pub fn is_denied(&self, entry: &str) -> bool {
        self.deny.iter().any(|e| e == entry)
    }

    /// Skills included in the allow list.
    pub fn allowed_capabilities(&self) -> impl Iterator<Item = &ClassifiedCapability> {
        self.capabilities
            .iter()
            .filter(|c| c.tier.is_allowed_at(self.level))
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Ordered list that ignores repeated entries.
#[derive(Default)]
struct EntryList {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl EntryList {
    fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if self.seen.insert(entry.clone()) {
            self.entries.push(entry);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

/// Build the allowlist for `capabilities` at `level` using the built-in
/// tier table.
pub fn build_allowlist(capabilities: &[Capability], level: AutonomyLevel) -> AllowlistDocument {
    build_allowlist_with(&TierTable::builtin(), capabilities, level)
}

/// Build the allowlist with an explicit tier table.
///
/// Allow order is skills (discovery order), then shell commands, then
/// integration operations (both in catalog order). The deny list does not
/// depend on `level`.
pub fn build_allowlist_with(
    table: &TierTable,
    capabilities: &[Capability],
    level: AutonomyLevel,
) -> AllowlistDocument {
    let classified = table.classify_all(capabilities);

    let deny: Vec<String> = catalog::denied_patterns().map(String::from).collect();
    let denied: HashSet<&str> = deny.iter().map(String::as_str).collect();

    let mut allow = EntryList::default();
    for c in &classified {
        if c.tier.is_allowed_at(level) {
            allow.push(c.allow_entry());
        }
    }
    for pattern in catalog::allowed_commands(level) {
        allow.push(pattern);
    }
    for id in catalog::allowed_operations(level) {
        allow.push(id);
    }

    let allow: Vec<String> = allow
        .into_vec()
        .into_iter()
        .filter(|e| !denied.contains(e.as_str()))
        .collect();

    AllowlistDocument {
        generated_at: Utc::now(),
        level,
        capabilities: classified,
        allow,
        deny,
    }
}
