//! Focus mode preferences: completion sound and the blocked sites list

use serde::{Deserialize, Serialize};

use crate::error::{FocusError, Result};

/// Sites listed out of the box. The list is informational; nothing is blocked.
pub const DEFAULT_BLOCKED_SITES: [&str; 6] = [
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "youtube.com",
    "tiktok.com",
    "reddit.com",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusPreferences {
    /// Chime when a phase completes
    pub sound_enabled: bool,
    pub blocked_sites: Vec<String>,
}

impl FocusPreferences {
    pub fn new() -> Self {
        Self {
            sound_enabled: true,
            blocked_sites: DEFAULT_BLOCKED_SITES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add a site, returning whether it was new.
    ///
    /// Input is trimmed; an empty entry is an error, a duplicate is a no-op.
    pub fn add_site(&mut self, site: &str) -> Result<bool> {
        let site = site.trim();
        if site.is_empty() {
            return Err(FocusError::InvalidSite(site.to_string()));
        }

        if self.blocked_sites.iter().any(|s| s == site) {
            return Ok(false);
        }

        self.blocked_sites.push(site.to_string());
        Ok(true)
    }

    /// Remove a site, returning whether it was listed
    pub fn remove_site(&mut self, site: &str) -> bool {
        let initial_count = self.blocked_sites.len();
        self.blocked_sites.retain(|s| s != site);

        if self.blocked_sites.len() != initial_count {
            tracing::info!("Removed blocked site: {}", site);
            true
        } else {
            false
        }
    }
}

impl Default for FocusPreferences {
    fn default() -> Self {
        Self::new()
    }
}
