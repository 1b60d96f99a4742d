// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and router assembly.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration file was parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub route_count: usize,
    pub shared_scope_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': {} routes, {} shared scopes",
            self.path, self.route_count, self.shared_scope_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            route_count = self.route_count,
            shared_scope_count = self.shared_scope_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config_loaded", span_name = name, path = self.path)
    }
}

/// A route was registered on the router.
///
/// # Log Level
/// `debug!` - Assembly detail
pub struct RouteRegistered<'a> {
    pub route_id: &'a str,
    pub entry: &'a str,
    pub scope_id: Option<&'a str>,
}

impl Display for RouteRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.scope_id {
            Some(scope_id) => write!(
                f,
                "Registered route '{}' from '{}' with scope '{}'",
                self.route_id, self.entry, scope_id
            ),
            None => write!(
                f,
                "Registered route '{}' from '{}' without a scope",
                self.route_id, self.entry
            ),
        }
    }
}

impl StructuredLog for RouteRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            route_id = self.route_id,
            entry = self.entry,
            scope_id = self.scope_id.unwrap_or("-"),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "route_registered",
            span_name = name,
            route_id = self.route_id,
        )
    }
}

/// The router finished assembling.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RouterBuilt {
    pub route_count: usize,
    pub shared_scope_count: usize,
    pub kind_count: usize,
}

impl Display for RouterBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Router ready: {} routes, {} shared scopes, {} exception kinds",
            self.route_count, self.shared_scope_count, self.kind_count
        )
    }
}

impl StructuredLog for RouterBuilt {
    fn log(&self) {
        tracing::info!(
            route_count = self.route_count,
            shared_scope_count = self.shared_scope_count,
            kind_count = self.kind_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "router_built",
            span_name = name,
            route_count = self.route_count,
        )
    }
}
