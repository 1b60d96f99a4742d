// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error scopes: kind-matched handler sets bound to routes.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::{ConfigError, Kind, Taxonomy};
use crate::routing::Step;

/// Whether an unresolved exception stops at the owning route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Isolation {
    /// No local handling: every exception is offered to the calling route.
    None,
    /// Resolve locally; unresolved exceptions are final here.
    #[default]
    Default,
    /// A named, reusable scope. Resolves exactly like `Default`.
    Shared,
}

/// A recovery pipeline for one exception kind (and its refinements).
#[derive(Debug, Clone)]
pub struct ExceptionHandler {
    kind: Kind,
    handled: bool,
    steps: Vec<Step>,
}

impl ExceptionHandler {
    pub fn new(kind: impl Into<Kind>, handled: bool, steps: Vec<Step>) -> Self {
        Self {
            kind: kind.into(),
            handled,
            steps,
        }
    }

    /// The exchange continues successfully once the handler has run.
    pub fn handled(kind: impl Into<Kind>, steps: Vec<Step>) -> Self {
        Self::new(kind, true, steps)
    }

    /// The handler runs, then the exchange fails with the caught exception.
    pub fn unhandled(kind: impl Into<Kind>, steps: Vec<Step>) -> Self {
        Self::new(kind, false, steps)
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// An ordered handler set plus its isolation mode.
///
/// Immutable once built. No two handlers share a kind, so handler lookup by
/// lineage is unambiguous.
#[derive(Debug, Clone)]
pub struct ErrorScope {
    id: String,
    isolation: Isolation,
    handlers: Vec<ExceptionHandler>,
}

impl ErrorScope {
    pub fn new(
        id: impl Into<String>,
        isolation: Isolation,
        handlers: Vec<ExceptionHandler>,
    ) -> Result<Self, ConfigError> {
        let id = id.into();

        if isolation == Isolation::None && !handlers.is_empty() {
            return Err(ConfigError::HandlersOnNoneScope { scope: id });
        }

        let mut seen = HashSet::new();
        for handler in &handlers {
            if !seen.insert(&handler.kind) {
                return Err(ConfigError::DuplicateHandler {
                    scope: id,
                    kind: handler.kind.to_string(),
                });
            }
        }

        Ok(Self {
            id,
            isolation,
            handlers,
        })
    }

    /// A scope that resolves nothing and defers to the caller.
    pub fn none(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            isolation: Isolation::None,
            handlers: Vec::new(),
        }
    }

    /// A local scope; unresolved exceptions end the exchange here.
    pub fn local(id: impl Into<String>, handlers: Vec<ExceptionHandler>) -> Result<Self, ConfigError> {
        Self::new(id, Isolation::Default, handlers)
    }

    /// A reusable scope registered once and referenced by id.
    pub fn shared(id: impl Into<String>, handlers: Vec<ExceptionHandler>) -> Result<Self, ConfigError> {
        Self::new(id, Isolation::Shared, handlers)
    }

    /// Merge several shared scopes into one effective scope.
    ///
    /// A kind handled by more than one of the parts is rejected.
    pub fn compose(parts: &[Arc<ErrorScope>]) -> Result<Self, ConfigError> {
        let id = parts
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let handlers = parts
            .iter()
            .flat_map(|s| s.handlers.iter().cloned())
            .collect();
        Self::new(id, Isolation::Shared, handlers)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn isolation(&self) -> Isolation {
        self.isolation
    }

    pub fn handlers(&self) -> &[ExceptionHandler] {
        &self.handlers
    }

    /// `false` for `Isolation::None`: such a scope never resolves.
    pub fn resolves_locally(&self) -> bool {
        self.isolation != Isolation::None
    }

    /// The handler for the most specific kind in `kind`'s lineage.
    pub fn find_handler(&self, kind: &Kind, taxonomy: &Taxonomy) -> Option<&ExceptionHandler> {
        taxonomy
            .lineage(kind)
            .find_map(|candidate| self.handlers.iter().find(|h| &h.kind == candidate))
    }

    /// Handler kinds that the taxonomy does not declare.
    pub(crate) fn undeclared_kinds(&self, taxonomy: &Taxonomy) -> Vec<ConfigError> {
        self.handlers
            .iter()
            .filter(|h| !taxonomy.contains(&h.kind))
            .map(|h| ConfigError::UnknownHandlerKind {
                scope: self.id.clone(),
                kind: h.kind.to_string(),
            })
            .collect()
    }
}
