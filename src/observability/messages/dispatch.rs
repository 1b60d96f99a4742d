// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dispatch lifecycle and route execution events.
//!
//! This module contains message types for logging events related to:
//! * Dispatch start, completion and abort
//! * Route entry along the nested call stack
//! * Steps raising exceptions and exceptions escaping to the caller

use crate::errors::{RouterError, TypedError};
use crate::message::Outcome;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Dispatch started on an entry.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_switchyard::observability::messages::dispatch::DispatchStarted;
///
/// let msg = DispatchStarted {
///     entry: "direct:foo",
///     route_id: "fooRoute",
///     body_size: 6,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Dispatching to 'direct:foo' (route 'fooRoute'): body_size=6 bytes"
/// );
/// ```
pub struct DispatchStarted<'a> {
    pub entry: &'a str,
    pub route_id: &'a str,
    pub body_size: usize,
}

impl Display for DispatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching to '{}' (route '{}'): body_size={} bytes",
            self.entry, self.route_id, self.body_size
        )
    }
}

impl StructuredLog for DispatchStarted<'_> {
    fn log(&self) {
        tracing::info!(
            entry = self.entry,
            route_id = self.route_id,
            body_size = self.body_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch",
            span_name = name,
            entry = self.entry,
            route_id = self.route_id,
        )
    }
}

/// Dispatch returned a message to the caller.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DispatchCompleted<'a> {
    pub entry: &'a str,
    pub outcome: Outcome,
    pub routes_visited: usize,
    pub duration: Duration,
}

impl Display for DispatchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatch to '{}' finished {:?} after {} routes in {:?}",
            self.entry, self.outcome, self.routes_visited, self.duration
        )
    }
}

impl StructuredLog for DispatchCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            entry = self.entry,
            outcome = ?self.outcome,
            routes_visited = self.routes_visited,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch_completed",
            span_name = name,
            entry = self.entry,
            outcome = ?self.outcome,
        )
    }
}

/// Dispatch aborted on a configuration error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DispatchAborted<'a> {
    pub entry: &'a str,
    pub error: &'a RouterError,
}

impl Display for DispatchAborted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dispatch to '{}' aborted: {}", self.entry, self.error)
    }
}

impl StructuredLog for DispatchAborted<'_> {
    fn log(&self) {
        tracing::error!(entry = self.entry, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "dispatch_aborted",
            span_name = name,
            entry = self.entry,
            error = %self.error,
        )
    }
}

/// A route was entered.
///
/// # Log Level
/// `debug!` - Step-level detail
pub struct RouteEntered<'a> {
    pub route_id: &'a str,
    pub depth: usize,
}

impl Display for RouteEntered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Entering route '{}' at depth {}", self.route_id, self.depth)
    }
}

impl StructuredLog for RouteEntered<'_> {
    fn log(&self) {
        tracing::debug!(route_id = self.route_id, depth = self.depth, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "route",
            span_name = name,
            route_id = self.route_id,
            depth = self.depth,
        )
    }
}

/// A step raised a business exception.
///
/// # Log Level
/// `debug!` - Step-level detail; the scope logs the outcome
pub struct StepRaised<'a> {
    pub route_id: &'a str,
    pub step: &'a str,
    pub error: &'a TypedError,
}

impl Display for StepRaised<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step {} in route '{}' raised {}",
            self.step, self.route_id, self.error
        )
    }
}

impl StructuredLog for StepRaised<'_> {
    fn log(&self) {
        tracing::debug!(
            route_id = self.route_id,
            step = self.step,
            kind = %self.error.kind(),
            error = self.error.message(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "step_raised",
            span_name = name,
            route_id = self.route_id,
            step = self.step,
        )
    }
}

/// An exception left a route without resolution and is offered to the caller.
///
/// # Log Level
/// `debug!` - Step-level detail
pub struct ExceptionPropagated<'a> {
    pub route_id: &'a str,
    pub error: &'a TypedError,
}

impl Display for ExceptionPropagated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Route '{}' has no resolving scope; propagating {} to caller",
            self.route_id, self.error
        )
    }
}

impl StructuredLog for ExceptionPropagated<'_> {
    fn log(&self) {
        tracing::debug!(
            route_id = self.route_id,
            kind = %self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "exception_propagated",
            span_name = name,
            route_id = self.route_id,
        )
    }
}
