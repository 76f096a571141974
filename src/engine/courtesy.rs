//! One-shot courtesy relaxation.

use serde::{Deserialize, Serialize};

/// Capability permitting a single load-cap relaxation per run.
///
/// Starts available. Once spent it stays spent: there is no way to
/// reactivate a token, only to create a fresh one for a new run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtesyToken {
    spent_on: Option<String>,
}

impl CourtesyToken {
    /// Creates an available token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the relaxation can still be granted.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.spent_on.is_none()
    }

    /// Spends the token on `faculty`.
    ///
    /// Returns `false` and leaves the token untouched if it was already spent.
    pub fn spend(&mut self, faculty: &str) -> bool {
        if self.spent_on.is_some() {
            return false;
        }
        self.spent_on = Some(faculty.to_string());
        true
    }

    /// Faculty that received the relaxed assignment, if any.
    pub fn spent_on(&self) -> Option<&str> {
        self.spent_on.as_deref()
    }
}
