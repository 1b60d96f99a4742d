// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::routing::{ErrorScope, Step};

/// How a route definition obtains its error scope.
#[derive(Debug, Clone, Default)]
pub enum ScopeBinding {
    /// No scope: exceptions propagate to the caller unresolved.
    #[default]
    Unbound,
    /// A scope owned by this route alone.
    Scope(ErrorScope),
    /// References to shared scopes registered on the router, by id.
    Shared(Vec<String>),
}

/// A route as declared, before shared scope references are resolved.
///
/// # Example
/// ```
/// use the_switchyard::routing::{RouteDefinition, Step};
///
/// let route = RouteDefinition::new("grokRoute", "direct:grok")
///     .step(Step::log("grokking along"))
///     .shared_scopes(["fooErrorConfig", "spikeErrorConfig"]);
///
/// assert_eq!(route.entry, "direct:grok");
/// assert_eq!(route.steps.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    pub id: String,
    pub entry: String,
    pub steps: Vec<Step>,
    pub binding: ScopeBinding,
}

impl RouteDefinition {
    pub fn new(id: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entry: entry.into(),
            steps: Vec::new(),
            binding: ScopeBinding::Unbound,
        }
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn scope(mut self, scope: ErrorScope) -> Self {
        self.binding = ScopeBinding::Scope(scope);
        self
    }

    pub fn shared_scopes<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binding = ScopeBinding::Shared(ids.into_iter().map(Into::into).collect());
        self
    }
}

/// A registered, immutable route.
#[derive(Debug, Clone)]
pub struct Route {
    id: String,
    entry: String,
    steps: Vec<Step>,
    scope: Option<Arc<ErrorScope>>,
}

impl Route {
    pub fn new(
        id: impl Into<String>,
        entry: impl Into<String>,
        steps: Vec<Step>,
        scope: Option<Arc<ErrorScope>>,
    ) -> Self {
        Self {
            id: id.into(),
            entry: entry.into(),
            steps,
            scope,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn scope(&self) -> Option<&Arc<ErrorScope>> {
        self.scope.as_ref()
    }

    /// The scope that resolves exceptions raised here, if any.
    ///
    /// `None` for unbound routes and for scopes with `Isolation::None`.
    pub fn resolving_scope(&self) -> Option<&ErrorScope> {
        self.scope.as_deref().filter(|s| s.resolves_locally())
    }
}
