//! Caller identities.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Public identity of a party that can own or move in a game.
///
/// The engine only ever compares identities for equality. The
/// [`Default`] value is the unassigned identity found in a freshly
/// allocated, unstarted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Creates an identity from its public representation.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Empty`] for an empty or all-whitespace value.
    #[instrument(skip(value))]
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(value))
    }

    /// Returns the raw public representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns false for the unassigned identity of an unstarted record.
    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }

    /// Abbreviated `abcd...wxyz` form for log lines.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 11 {
            return self.0.clone();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error constructing an [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IdentityError {
    /// The identity string was empty.
    #[display("Identity must not be empty")]
    Empty,
}

impl std::error::Error for IdentityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Identity::new(""), Err(IdentityError::Empty));
        assert_eq!(Identity::new("   "), Err(IdentityError::Empty));
    }

    #[test]
    fn test_default_is_unassigned() {
        assert!(!Identity::default().is_assigned());
        assert!(Identity::new("alice").unwrap().is_assigned());
    }

    #[test]
    fn test_short_form() {
        let id = Identity::new("6a9rKhtTGmCtKuxJCetCopbW5A5Z3A6hUsBq5mf1i3D").unwrap();
        assert_eq!(id.short(), "6a9r...1i3D");
        assert_eq!(Identity::new("bob").unwrap().short(), "bob");
    }
}
