// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic and operational log lines in The Switchyard are emitted
//! through the message types in [`messages`]. Each type implements `Display`
//! for the human readable line and [`messages::StructuredLog`] for the
//! structured fields, so:
//!
//! * no magic strings are scattered through the engine
//! * field names stay consistent between subsystems
//! * wording can change without touching call sites
//!
//! # Usage
//!
//! ```rust
//! use the_switchyard::observability::messages::scope::ExceptionCaught;
//! use the_switchyard::observability::messages::StructuredLog;
//! use the_switchyard::errors::TypedError;
//!
//! let error = TypedError::new("FooBarException", "boom!");
//! let msg = ExceptionCaught {
//!     route_id: "fooRoute",
//!     scope_id: "fooRoute",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
