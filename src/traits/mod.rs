// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod endpoint;
pub mod processor;

pub use endpoint::Endpoint;
pub use processor::{FnPredicate, FnProcessor, Predicate, Processor};
