use crate::types::Capability;
use std::path::{Path, PathBuf};

/// The skills root could not be listed. The run continues with no skills.
#[derive(Debug, Clone)]
pub struct DiscoveryWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skills directory {}: {}", self.path.display(), self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub capabilities: Vec<Capability>,
    pub warning: Option<DiscoveryWarning>,
}

/// List the skills under `root`: one per immediate, non-hidden
/// subdirectory, sorted by name.
pub fn discover_capabilities(root: &Path) -> Discovery {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            let reason = if e.kind() == std::io::ErrorKind::NotFound {
                "not found".to_string()
            } else {
                e.to_string()
            };
            return Discovery {
                capabilities: Vec::new(),
                warning: Some(DiscoveryWarning {
                    path: root.to_path_buf(),
                    reason,
                }),
            };
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();

    Discovery {
        capabilities: names.into_iter().map(Capability::new).collect(),
        warning: None,
    }
}
