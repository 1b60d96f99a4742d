// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration errors: fatal at load or registration time, never offered to
//! an error scope.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or assembling a router.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{}': {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported config format for '{}': expected .yaml, .yml or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Setting '{setting}' {reason}")]
    InvalidSetting { setting: String, reason: String },

    #[error("Exception kind '{kind}' is declared more than once")]
    DuplicateKind { kind: String },

    #[error("Exception kind '{kind}' refines '{parent}' which is not declared")]
    UnknownParentKind { kind: String, parent: String },

    #[error("Exception taxonomy contains a cycle: {}", cycle.join(" -> "))]
    KindCycle { cycle: Vec<String> },

    #[error("Scope '{scope}' handles '{kind}' which is not in the exception taxonomy")]
    UnknownHandlerKind { scope: String, kind: String },

    #[error("Scope '{scope}' declares more than one handler for '{kind}'")]
    DuplicateHandler { scope: String, kind: String },

    #[error("Scope '{scope}' has isolation 'none' but declares handlers")]
    HandlersOnNoneScope { scope: String },

    #[error("Shared scope '{scope}' is declared more than once")]
    DuplicateSharedScope { scope: String },

    #[error("Route '{route_id}' references shared scope '{scope}' which does not exist")]
    UnknownSharedScope { route_id: String, scope: String },

    #[error("Route '{route_id}' declares both inline error handling and shared scopes")]
    ConflictingScopeBinding { route_id: String },

    #[error("Duplicate route ID: '{route_id}'")]
    DuplicateRouteId { route_id: String },

    #[error("Route entry '{entry}' is claimed by more than one route")]
    DuplicateEntry { entry: String },

    #[error("Route '{route_id}' sends to '{destination}' which no route consumes")]
    UnknownDestination {
        route_id: String,
        destination: String,
    },

    #[error("Endpoint '{endpoint}' is declared more than once")]
    DuplicateEndpoint { endpoint: String },

    #[error("Route '{route_id}' delivers to endpoint '{endpoint}' which is not registered")]
    UnknownEndpoint { route_id: String, endpoint: String },

    #[error("Unknown processor implementation: '{name}'")]
    UnknownProcessor { name: String },

    #[error("Unknown predicate implementation: '{name}'")]
    UnknownPredicate { name: String },

    #[error("Invalid option '{option}' for '{component}': {reason}")]
    InvalidOption {
        component: String,
        option: String,
        reason: String,
    },

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl ConfigError {
    /// Collapse accumulated errors: a single error is returned as-is.
    pub fn from_many(mut errors: Vec<ConfigError>) -> Self {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            ConfigError::Validation(errors)
        }
    }

    pub(crate) fn missing_option(component: &str, option: &str) -> Self {
        ConfigError::InvalidOption {
            component: component.to_string(),
            option: option.to_string(),
            reason: "required option is missing".to_string(),
        }
    }
}
