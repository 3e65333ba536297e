//! Public error types for the profile model.
//!
//! These errors are safe to expose to SDK consumers.

use thiserror::Error;

/// Errors that can be returned by the [`Profile`](crate::Profile) model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A scope name did not match any of the four reserved wire keys.
    ///
    /// Indicates a programming error at the call site, not an environmental
    /// failure.
    #[error("unknown visibility scope '{name}'")]
    UnknownScope { name: String },

    /// A reserved scope key was present in a decoded body but did not hold
    /// a JSON object.
    #[error("scope field '{key}' is not a JSON object")]
    MalformedScope { key: &'static str },
}

impl ProfileError {
    /// Create an `UnknownScope` error.
    #[must_use]
    pub fn unknown_scope(name: impl Into<String>) -> Self {
        Self::UnknownScope { name: name.into() }
    }

    /// Create a `MalformedScope` error.
    #[must_use]
    pub fn malformed_scope(key: &'static str) -> Self {
        Self::MalformedScope { key }
    }
}
