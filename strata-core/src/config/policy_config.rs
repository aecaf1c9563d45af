//! Dependency and boundary policy configuration.

use serde::{Deserialize, Serialize};

/// `[policy]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Banned third-party coordinates. Entries are either a full
    /// `group:name` coordinate or a bare artifact name.
    pub banned: Vec<String>,
    /// Extend boundary checking from direct edges to reachability.
    pub transitive: Option<bool>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            // Lombok is banned across all modules out of the box.
            banned: vec!["org.projectlombok:lombok".to_string()],
            transitive: None,
        }
    }
}

impl PolicyConfig {
    pub fn transitive(&self) -> bool {
        self.transitive.unwrap_or(false)
    }

    /// Whether `external` matches a banned entry. Full coordinates match
    /// exactly; bare entries match the artifact-name segment.
    pub fn is_banned(&self, external: &str) -> Option<&str> {
        for entry in &self.banned {
            let hit = if entry.contains(':') {
                external == entry
            } else {
                external == entry
                    || external
                        .rsplit_once(':')
                        .is_some_and(|(_, name)| name == entry)
            };
            if hit {
                return Some(entry);
            }
        }
        None
    }
}
