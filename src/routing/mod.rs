// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Route building blocks: steps, error scopes, routes and the route registry.

mod registry;
mod route;
mod scope;
mod step;

pub use registry::RouteRegistry;
pub use route::{Route, RouteDefinition, ScopeBinding};
pub use scope::{ErrorScope, ExceptionHandler, Isolation};
pub use step::{Step, When};
pub(crate) use step::walk_steps;
