// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Fatal conditions surfaced by [`Router::dispatch`](crate::engine::Router::dispatch).
///
/// Business exceptions never appear here; they are recorded on the returned
/// [`Message`](crate::message::Message).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("No route consumes from '{entry}'")]
    RouteNotFound { entry: String },

    #[error(
        "Scope '{scope}' exceeded {limit} resolution attempts while resolving '{kind}'; handlers keep re-throwing into each other"
    )]
    ResolutionLimitExceeded {
        scope: String,
        kind: String,
        limit: usize,
    },

    #[error("No endpoint named '{endpoint}' is registered")]
    EndpointNotFound { endpoint: String },

    #[error("Route nesting exceeded {limit} levels at route '{route_id}'")]
    RouteDepthExceeded { route_id: String, limit: usize },
}
