// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in processors, predicates and endpoints.
//!
//! # Local Backend
//! In-process implementations selected by name from configuration:
//! - **Processors**: case conversion, reversal, prefix/suffix addition, fixed
//!   bodies, and `raise_error` for rejecting messages with a typed exception
//! - **Predicates**: body prefix, substring and equality tests
//! - **Endpoints**: `RecordingEndpoint` keeps delivered bodies in memory,
//!   `LogEndpoint` writes them to the log
//!
//! Business logic of your own is registered on a
//! [`Components`](crate::config::Components) bundle and takes precedence over
//! these built-ins.
//!
//! # Stub Backend (Test-Only)
//! Counting processors and failing endpoints for engine tests.
//!
//! # Examples
//!
//! ```rust
//! use the_switchyard::backends::local::LocalProcessorFactory;
//! use the_switchyard::config::Options;
//! use the_switchyard::message::Message;
//! use the_switchyard::traits::Processor;
//!
//! let mut options = Options::new();
//! options.insert("prefix".to_string(), "handled_exception_".into());
//!
//! let processor = LocalProcessorFactory::create_processor("prefix_suffix_adder", &options).unwrap();
//! let mut message = Message::new("foo");
//! processor.process(&mut message).unwrap();
//! assert_eq!(message.body(), "handled_exception_foo");
//! ```

pub mod local;

#[cfg(test)]
pub mod stub;
