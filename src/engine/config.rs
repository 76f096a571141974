//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Load caps used by the matching tiers.
///
/// Defaults: a faculty normally takes a student while below 3 current
/// students; the courtesy relaxation and the least-loaded fallback allow
/// up to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strict upper bound on current load for a preferred match.
    pub preferred_load_cap: i32,
    /// Strict upper bound on current load for courtesy and least-loaded matches.
    pub absolute_load_cap: i32,
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preferred-match load cap.
    pub fn with_preferred_load_cap(mut self, cap: i32) -> Self {
        self.preferred_load_cap = cap;
        self
    }

    /// Sets the absolute load cap.
    pub fn with_absolute_load_cap(mut self, cap: i32) -> Self {
        self.absolute_load_cap = cap;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preferred_load_cap: 3,
            absolute_load_cap: 4,
        }
    }
}
