// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for exception resolution inside error scopes.

use crate::errors::TypedError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A scope took ownership of an exception and starts resolving it.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ExceptionCaught<'a> {
    pub route_id: &'a str,
    pub scope_id: &'a str,
    pub error: &'a TypedError,
}

impl Display for ExceptionCaught<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Scope '{}' on route '{}' caught {}",
            self.scope_id, self.route_id, self.error
        )
    }
}

impl StructuredLog for ExceptionCaught<'_> {
    fn log(&self) {
        tracing::info!(
            route_id = self.route_id,
            scope_id = self.scope_id,
            kind = %self.error.kind(),
            error = self.error.message(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "resolution",
            span_name = name,
            route_id = self.route_id,
            scope_id = self.scope_id,
            kind = %self.error.kind(),
        )
    }
}

/// A handler was selected for an exception.
///
/// # Log Level
/// `debug!` - Resolution detail
pub struct HandlerMatched<'a> {
    pub scope_id: &'a str,
    pub handler_kind: &'a str,
    pub error: &'a TypedError,
    pub handled: bool,
}

impl Display for HandlerMatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Scope '{}' matched handler for '{}' (handled={}) on {}",
            self.scope_id, self.handler_kind, self.handled, self.error
        )
    }
}

impl StructuredLog for HandlerMatched<'_> {
    fn log(&self) {
        tracing::debug!(
            scope_id = self.scope_id,
            handler_kind = self.handler_kind,
            kind = %self.error.kind(),
            handled = self.handled,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "handler",
            span_name = name,
            scope_id = self.scope_id,
            handler_kind = self.handler_kind,
        )
    }
}

/// A handler's own steps raised a new exception.
///
/// # Log Level
/// `warn!` - The pending resolution is discarded
pub struct HandlerRethrew<'a> {
    pub scope_id: &'a str,
    pub original: &'a TypedError,
    pub rethrown: &'a TypedError,
}

impl Display for HandlerRethrew<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler in scope '{}' for {} raised {}",
            self.scope_id, self.original, self.rethrown
        )
    }
}

impl StructuredLog for HandlerRethrew<'_> {
    fn log(&self) {
        tracing::warn!(
            scope_id = self.scope_id,
            original_kind = %self.original.kind(),
            rethrown_kind = %self.rethrown.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "handler_rethrew",
            span_name = name,
            scope_id = self.scope_id,
            rethrown_kind = %self.rethrown.kind(),
        )
    }
}

/// An exception was resolved; the exchange completes successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ExceptionHandled<'a> {
    pub route_id: &'a str,
    pub scope_id: &'a str,
    pub error: &'a TypedError,
}

impl Display for ExceptionHandled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Scope '{}' on route '{}' handled {}",
            self.scope_id, self.route_id, self.error
        )
    }
}

impl StructuredLog for ExceptionHandled<'_> {
    fn log(&self) {
        tracing::info!(
            route_id = self.route_id,
            scope_id = self.scope_id,
            kind = %self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "exception_handled",
            span_name = name,
            route_id = self.route_id,
            scope_id = self.scope_id,
        )
    }
}

/// An exception stays unresolved and terminates the exchange.
///
/// # Log Level
/// `warn!` - The message is returned failed
pub struct ExceptionUnresolved<'a> {
    pub route_id: &'a str,
    pub scope_id: Option<&'a str>,
    pub error: &'a TypedError,
    pub handler_ran: bool,
}

impl Display for ExceptionUnresolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.scope_id {
            Some(scope_id) if self.handler_ran => write!(
                f,
                "Scope '{}' on route '{}' ran an unhandled handler for {}",
                scope_id, self.route_id, self.error
            ),
            Some(scope_id) => write!(
                f,
                "Scope '{}' on route '{}' has no handler for {}",
                scope_id, self.route_id, self.error
            ),
            None => write!(
                f,
                "No scope resolved {}; exchange failed at route '{}'",
                self.error, self.route_id
            ),
        }
    }
}

impl StructuredLog for ExceptionUnresolved<'_> {
    fn log(&self) {
        tracing::warn!(
            route_id = self.route_id,
            scope_id = self.scope_id.unwrap_or("-"),
            kind = %self.error.kind(),
            error = self.error.message(),
            handler_ran = self.handler_ran,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "exception_unresolved",
            span_name = name,
            route_id = self.route_id,
            kind = %self.error.kind(),
        )
    }
}
