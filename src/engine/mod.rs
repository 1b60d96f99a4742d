// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The dispatch engine and its assembly.

pub mod builder;
pub mod router;
#[cfg(test)]
pub mod integration_tests;

pub use builder::RouterBuilder;
pub use router::Router;
