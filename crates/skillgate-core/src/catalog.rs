//! Fixed catalogs of shell commands and integration operations.
//!
//! Commands are grouped by what they can touch. Integration operations are
//! MCP tool identifiers for the issue tracker. Both lists are emitted in
//! declaration order.

use crate::types::AutonomyLevel;

// ---------------------------------------------------------------------------
// Shell commands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    /// Inspection only.
    ReadOnly,
    /// Git operations that stay inside the local clone.
    LocalGit,
    /// Build, test and lint runners.
    BuildTool,
    /// Pushes and pull-request / issue mutation.
    Publish,
}

impl CommandCategory {
    pub fn min_level(self) -> AutonomyLevel {
        match self {
            CommandCategory::ReadOnly | CommandCategory::LocalGit | CommandCategory::BuildTool => {
                AutonomyLevel::One
            }
            CommandCategory::Publish => AutonomyLevel::Three,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CommandPattern {
    pub pattern: &'static str,
    pub category: CommandCategory,
}

const fn cmd(pattern: &'static str, category: CommandCategory) -> CommandPattern {
    CommandPattern { pattern, category }
}

pub const COMMANDS: &[CommandPattern] = &[
    cmd("Bash(ls:*)", CommandCategory::ReadOnly),
    cmd("Bash(cat:*)", CommandCategory::ReadOnly),
    cmd("Bash(head:*)", CommandCategory::ReadOnly),
    cmd("Bash(tail:*)", CommandCategory::ReadOnly),
    cmd("Bash(wc:*)", CommandCategory::ReadOnly),
    cmd("Bash(grep:*)", CommandCategory::ReadOnly),
    cmd("Bash(rg:*)", CommandCategory::ReadOnly),
    cmd("Bash(find:*)", CommandCategory::ReadOnly),
    cmd("Bash(tree:*)", CommandCategory::ReadOnly),
    cmd("Bash(git status:*)", CommandCategory::ReadOnly),
    cmd("Bash(git diff:*)", CommandCategory::ReadOnly),
    cmd("Bash(git log:*)", CommandCategory::ReadOnly),
    cmd("Bash(git show:*)", CommandCategory::ReadOnly),
    cmd("Bash(git branch --list:*)", CommandCategory::ReadOnly),
    cmd("Bash(git worktree list:*)", CommandCategory::ReadOnly),
    cmd("Bash(gh pr view:*)", CommandCategory::ReadOnly),
    cmd("Bash(gh pr list:*)", CommandCategory::ReadOnly),
    cmd("Bash(gh issue view:*)", CommandCategory::ReadOnly),
    cmd("Bash(git add:*)", CommandCategory::LocalGit),
    cmd("Bash(git commit:*)", CommandCategory::LocalGit),
    cmd("Bash(git checkout -b:*)", CommandCategory::LocalGit),
    cmd("Bash(git switch:*)", CommandCategory::LocalGit),
    cmd("Bash(git stash:*)", CommandCategory::LocalGit),
    cmd("Bash(git fetch:*)", CommandCategory::LocalGit),
    cmd("Bash(git worktree add:*)", CommandCategory::LocalGit),
    cmd("Bash(git rebase:*)", CommandCategory::LocalGit),
    cmd("Bash(make:*)", CommandCategory::BuildTool),
    cmd("Bash(npm run:*)", CommandCategory::BuildTool),
    cmd("Bash(npm test:*)", CommandCategory::BuildTool),
    cmd("Bash(cargo build:*)", CommandCategory::BuildTool),
    cmd("Bash(cargo test:*)", CommandCategory::BuildTool),
    cmd("Bash(cargo clippy:*)", CommandCategory::BuildTool),
    cmd("Bash(pytest:*)", CommandCategory::BuildTool),
    cmd("Bash(uv run:*)", CommandCategory::BuildTool),
    cmd("Bash(git push:*)", CommandCategory::Publish),
    cmd("Bash(git push -u origin:*)", CommandCategory::Publish),
    cmd("Bash(gh pr create:*)", CommandCategory::Publish),
    cmd("Bash(gh pr edit:*)", CommandCategory::Publish),
    cmd("Bash(gh pr comment:*)", CommandCategory::Publish),
    cmd("Bash(gh pr merge:*)", CommandCategory::Publish),
    cmd("Bash(gh issue comment:*)", CommandCategory::Publish),
];

// ---------------------------------------------------------------------------
// Integration operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Read,
    Write,
}

impl OperationKind {
    pub fn min_level(self) -> AutonomyLevel {
        match self {
            OperationKind::Read => AutonomyLevel::One,
            OperationKind::Write => AutonomyLevel::Two,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntegrationOperation {
    pub id: &'static str,
    pub kind: OperationKind,
}

const fn op(id: &'static str, kind: OperationKind) -> IntegrationOperation {
    IntegrationOperation { id, kind }
}

pub const INTEGRATION_OPERATIONS: &[IntegrationOperation] = &[
    op("mcp__linear__get_issue", OperationKind::Read),
    op("mcp__linear__list_issues", OperationKind::Read),
    op("mcp__linear__list_comments", OperationKind::Read),
    op("mcp__linear__list_projects", OperationKind::Read),
    op("mcp__linear__list_teams", OperationKind::Read),
    op("mcp__linear__list_issue_statuses", OperationKind::Read),
    op("mcp__linear__search_documentation", OperationKind::Read),
    op("mcp__linear__create_issue", OperationKind::Write),
    op("mcp__linear__update_issue", OperationKind::Write),
    op("mcp__linear__create_comment", OperationKind::Write),
];

// ---------------------------------------------------------------------------
// Destructive patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct DestructivePattern {
    pub pattern: &'static str,
    /// Irreversible patterns are always denied. The rest are left to the
    /// enforcement system's per-call prompt.
    pub irreversible: bool,
}

const fn destructive(pattern: &'static str, irreversible: bool) -> DestructivePattern {
    DestructivePattern {
        pattern,
        irreversible,
    }
}

pub const DESTRUCTIVE_PATTERNS: &[DestructivePattern] = &[
    destructive("Bash(git push --force:*)", true),
    destructive("Bash(git push -f:*)", true),
    destructive("Bash(git reset --hard:*)", true),
    destructive("Bash(rm -rf:*)", true),
    destructive("Bash(git clean -fd:*)", true),
    destructive("Bash(git branch -D:*)", false),
    destructive("Bash(git worktree remove:*)", false),
    destructive("Bash(git checkout -- .:*)", false),
];

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Command patterns auto-allowed at `level`, in catalog order.
pub fn allowed_commands(level: AutonomyLevel) -> impl Iterator<Item = &'static str> {
    COMMANDS
        .iter()
        .filter(move |c| level >= c.category.min_level())
        .map(|c| c.pattern)
}

/// Integration operations auto-allowed at `level`, in catalog order.
pub fn allowed_operations(level: AutonomyLevel) -> impl Iterator<Item = &'static str> {
    INTEGRATION_OPERATIONS
        .iter()
        .filter(move |o| level >= o.kind.min_level())
        .map(|o| o.id)
}

/// The deny list. Independent of autonomy level.
pub fn denied_patterns() -> impl Iterator<Item = &'static str> {
    DESTRUCTIVE_PATTERNS
        .iter()
        .filter(|d| d.irreversible)
        .map(|d| d.pattern)
}

pub fn is_destructive_pattern(pattern: &str) -> bool {
    DESTRUCTIVE_PATTERNS.iter().any(|d| d.pattern == pattern)
}
