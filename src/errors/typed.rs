// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Business exceptions raised by processors, predicates-driven steps and endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a failure kind in the exception taxonomy.
///
/// Kinds are plain names; their subtype relationships live in
/// [`Taxonomy`](crate::errors::Taxonomy), not in the kind itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kind(String);

impl Kind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Kind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A typed business failure: a taxonomy kind plus a human readable message.
///
/// # Example
/// ```
/// use the_switchyard::errors::TypedError;
///
/// let error = TypedError::new("FooBarException", "can't handle the message");
/// assert_eq!(error.kind().as_str(), "FooBarException");
/// assert_eq!(error.to_string(), "FooBarException: can't handle the message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TypedError {
    kind: Kind,
    message: String,
}

impl TypedError {
    pub fn new(kind: impl Into<Kind>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
