// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MAX_RESOLUTION_ATTEMPTS, DEFAULT_MAX_ROUTE_DEPTH};
use crate::errors::ConfigError;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};
use crate::routing::Isolation;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Processor and predicate options, as written in the config file.
pub type Options = HashMap<String, serde_yaml::Value>;

/// Main configuration structure for a route set.
///
/// Typically loaded from a YAML file; TOML is accepted as well.
///
/// # Fields
/// * `settings` - Engine limits and re-throw policy (optional)
/// * `taxonomy` - Exception kinds and their refinements
/// * `endpoints` - Outgoing destinations the routes deliver to
/// * `shared_scopes` - Error scopes declared once and referenced by id
/// * `routes` - The routes themselves
///
/// # Example
/// ```yaml
/// taxonomy:
///   - kind: FooBarException
///   - kind: SpikeException
/// endpoints:
///   - name: mock:end
///     type: recording
/// routes:
///   - id: fooRoute
///     from: direct:foo
///     error_handling:
///       handlers:
///         - on: FooBarException
///           handled: true
///           steps:
///             - process: { processor: prefix_suffix_adder, options: { prefix: "handled_exception_" } }
///     steps:
///       - log: chugging along
///       - process: { processor: raise_error, options: { kind: FooBarException, message: "can't handle the message", when_prefix: error } }
///       - deliver: mock:end
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: RouterSettings,
    #[serde(default)]
    pub taxonomy: Vec<KindConfig>,
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
    #[serde(default)]
    pub shared_scopes: Vec<SharedScopeConfig>,
    pub routes: Vec<RouteConfig>,
}

/// What happens when a handler's own steps raise a new exception.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RethrowPolicy {
    /// The re-thrown exception is recorded as caught and terminates the
    /// exchange; no further handler runs.
    #[default]
    Terminate,
    /// The re-thrown exception is resolved again against the same scope,
    /// up to `max_resolution_attempts` handler runs.
    Cascade,
}

/// Engine limits.
///
/// # Example
/// ```
/// use the_switchyard::config::{RethrowPolicy, RouterSettings};
///
/// let settings = RouterSettings::default();
/// assert_eq!(settings.max_resolution_attempts, 16);
/// assert_eq!(settings.max_route_depth, 64);
/// assert_eq!(settings.rethrow_policy, RethrowPolicy::Terminate);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterSettings {
    pub max_resolution_attempts: usize,
    pub max_route_depth: usize,
    pub rethrow_policy: RethrowPolicy,
}

impl RouterSettings {
    /// Problems with the limits themselves.
    ///
    /// A resolution always runs at least one handler, so
    /// `max_resolution_attempts` must be at least 1. `max_route_depth: 0` is
    /// accepted and permits top-level routes only.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_resolution_attempts == 0 {
            errors.push(ConfigError::InvalidSetting {
                setting: "max_resolution_attempts".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        errors
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            max_resolution_attempts: DEFAULT_MAX_RESOLUTION_ATTEMPTS,
            max_route_depth: DEFAULT_MAX_ROUTE_DEPTH,
            rethrow_policy: RethrowPolicy::default(),
        }
    }
}

/// One exception kind, optionally refining a parent kind.
#[derive(Debug, Deserialize)]
pub struct KindConfig {
    pub kind: String,
    #[serde(default)]
    pub parent: Option<String>,
}

/// Built-in endpoint implementations.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    /// Keeps every delivered body in memory.
    #[default]
    Recording,
    /// Logs every delivery.
    Log,
}

#[derive(Debug, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    #[serde(rename = "type", default)]
    pub endpoint_type: EndpointType,
}

#[derive(Debug, Deserialize)]
pub struct SharedScopeConfig {
    pub id: String,
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

/// A handler for one exception kind.
#[derive(Debug, Deserialize)]
pub struct HandlerConfig {
    pub on: String,
    #[serde(default)]
    pub handled: bool,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// Inline error handling owned by a single route.
#[derive(Debug, Deserialize)]
pub struct ErrorHandlingConfig {
    #[serde(default)]
    pub isolation: Isolation,
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

/// Configuration for a single route.
///
/// # Fields
/// * `id` - Unique identifier for this route
/// * `from` - Entry name other routes and callers dispatch to
/// * `error_handling` - Inline scope (optional)
/// * `scopes` - Shared scope ids (optional, exclusive with `error_handling`)
/// * `steps` - The pipeline
#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    pub id: String,
    pub from: String,
    #[serde(default)]
    pub error_handling: Option<ErrorHandlingConfig>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// A pipeline step as written in config.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepConfig {
    Process(ProcessConfig),
    Branch(BranchConfig),
    Invoke(String),
    Choice(ChoiceConfig),
    Deliver(String),
    Log(String),
}

#[derive(Debug, Deserialize)]
pub struct ProcessConfig {
    pub processor: String,
    #[serde(default)]
    pub options: Options,
}

#[derive(Debug, Deserialize)]
pub struct PredicateConfig {
    pub predicate: String,
    #[serde(default)]
    pub options: Options,
}

#[derive(Debug, Deserialize)]
pub struct BranchConfig {
    pub when: PredicateConfig,
    pub to: String,
    #[serde(default)]
    pub otherwise: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WhenConfig {
    pub predicate: String,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceConfig {
    pub when: Vec<WhenConfig>,
    #[serde(default)]
    pub otherwise: Vec<StepConfig>,
}

/// Parse a YAML route set.
///
/// Steps are written as single-key maps (`- deliver: mock:end`) rather than
/// YAML tags, so every enum is read through `singleton_map_recursive`.
pub fn from_yaml_str(content: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::with::singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(
        content,
    ))
}

/// Load a config from a YAML (`.yaml`/`.yml`) or TOML (`.toml`) file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let parse_error = |reason: String| ConfigError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let cfg: Config = match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            from_yaml_str(&content).map_err(|e| parse_error(e.to_string()))?
        }
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    ConfigLoaded {
        path: &path.display().to_string(),
        route_count: cfg.routes.len(),
        shared_scope_count: cfg.shared_scopes.len(),
    }
    .log();

    Ok(cfg)
}

/// Load a config file and validate its structure.
///
/// Every structural problem found is reported at once.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::from_many)?;
    Ok(cfg)
}
