// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `dispatch` - dispatch lifecycle and route/step execution events
//! * `scope` - exception resolution events inside error scopes
//! * `config` - configuration loading and router assembly events

use tracing::Span;

pub mod config;
pub mod dispatch;
pub mod scope;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event at its designated level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
