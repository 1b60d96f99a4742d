// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod endpoints;
pub mod factory;
pub mod predicates;
pub mod processors;

pub use endpoints::{LogEndpoint, RecordingEndpoint};
pub use factory::{LocalEndpointFactory, LocalPredicateFactory, LocalProcessorFactory};
pub use predicates::{BodyMatch, BodyPredicate};
pub use processors::*;
