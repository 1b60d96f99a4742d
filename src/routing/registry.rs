// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{ConfigError, RouterError};
use crate::routing::Route;

/// Destination registry: routes keyed by the entry they consume from.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry(HashMap<String, Arc<Route>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a route under its entry name. Entries are unique.
    pub fn register(&mut self, route: Route) -> Result<Arc<Route>, ConfigError> {
        if self.0.contains_key(route.entry()) {
            return Err(ConfigError::DuplicateEntry {
                entry: route.entry().to_string(),
            });
        }
        let route = Arc::new(route);
        self.0.insert(route.entry().to_string(), Arc::clone(&route));
        Ok(route)
    }

    pub fn lookup(&self, entry: &str) -> Result<&Arc<Route>, RouterError> {
        self.0.get(entry).ok_or_else(|| RouterError::RouteNotFound {
            entry: entry.to_string(),
        })
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.0.contains_key(entry)
    }

    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
