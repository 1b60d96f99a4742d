// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural validation of a route configuration.
//!
//! Checks run over names only, before any processor or predicate is built:
//!
//! 1. **Uniqueness**: route ids, route entries, shared scope ids, endpoint names
//! 2. **Scope binding**: a route uses inline error handling or shared scopes, not both,
//!    and every shared scope reference exists
//! 3. **Destinations**: every `invoke` and `branch` target is consumed by some route,
//!    including targets inside handler steps and choice blocks
//! 4. **Settings**: engine limits are usable
//!
//! All problems are collected so a single run reports everything wrong with the file.
//! Kind and endpoint checks need the taxonomy and the injected components, so they
//! happen later in [`RouterBuilder::build`](crate::engine::RouterBuilder::build).

use std::collections::HashSet;

use crate::config::{Config, StepConfig};
use crate::errors::ConfigError;

/// Validate a configuration's structure.
///
/// # Returns
///
/// * `Ok(())` - the route set is structurally sound
/// * `Err(Vec<ConfigError>)` - every problem found
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    errors.extend(find_duplicates(
        cfg.routes.iter().map(|r| r.id.as_str()),
        |id| ConfigError::DuplicateRouteId {
            route_id: id.to_string(),
        },
    ));
    errors.extend(find_duplicates(
        cfg.routes.iter().map(|r| r.from.as_str()),
        |entry| ConfigError::DuplicateEntry {
            entry: entry.to_string(),
        },
    ));
    errors.extend(find_duplicates(
        cfg.shared_scopes.iter().map(|s| s.id.as_str()),
        |id| ConfigError::DuplicateSharedScope {
            scope: id.to_string(),
        },
    ));
    errors.extend(find_duplicates(
        cfg.endpoints.iter().map(|e| e.name.as_str()),
        |name| ConfigError::DuplicateEndpoint {
            endpoint: name.to_string(),
        },
    ));

    errors.extend(cfg.settings.validate());
    errors.extend(validate_scope_bindings(cfg));
    errors.extend(validate_destinations(cfg));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn find_duplicates<'a, I, F>(names: I, to_error: F) -> Vec<ConfigError>
where
    I: Iterator<Item = &'a str>,
    F: Fn(&str) -> ConfigError,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    names
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .map(to_error)
        .collect()
}

fn validate_scope_bindings(cfg: &Config) -> Vec<ConfigError> {
    let shared: HashSet<&str> = cfg.shared_scopes.iter().map(|s| s.id.as_str()).collect();
    let mut errors = Vec::new();

    for route in &cfg.routes {
        if route.error_handling.is_some() && !route.scopes.is_empty() {
            errors.push(ConfigError::ConflictingScopeBinding {
                route_id: route.id.clone(),
            });
        }
        for scope in &route.scopes {
            if !shared.contains(scope.as_str()) {
                errors.push(ConfigError::UnknownSharedScope {
                    route_id: route.id.clone(),
                    scope: scope.clone(),
                });
            }
        }
    }

    errors
}

fn validate_destinations(cfg: &Config) -> Vec<ConfigError> {
    let entries: HashSet<&str> = cfg.routes.iter().map(|r| r.from.as_str()).collect();
    let mut errors = Vec::new();

    let mut check = |owner: &str, steps: &[StepConfig]| {
        for destination in destinations(steps) {
            if !entries.contains(destination) {
                errors.push(ConfigError::UnknownDestination {
                    route_id: owner.to_string(),
                    destination: destination.to_string(),
                });
            }
        }
    };

    for route in &cfg.routes {
        check(&route.id, &route.steps);
        if let Some(handling) = &route.error_handling {
            for handler in &handling.handlers {
                check(&route.id, &handler.steps);
            }
        }
    }
    for scope in &cfg.shared_scopes {
        for handler in &scope.handlers {
            check(&scope.id, &handler.steps);
        }
    }

    errors
}

/// Every route entry named by `invoke` and `branch` steps, descending into choices.
fn destinations(steps: &[StepConfig]) -> Vec<&str> {
    let mut found = Vec::new();
    for step in steps {
        match step {
            StepConfig::Invoke(entry) => found.push(entry.as_str()),
            StepConfig::Branch(branch) => {
                found.push(branch.to.as_str());
                if let Some(otherwise) = &branch.otherwise {
                    found.push(otherwise.as_str());
                }
            }
            StepConfig::Choice(choice) => {
                for when in &choice.when {
                    found.extend(destinations(&when.steps));
                }
                found.extend(destinations(&choice.otherwise));
            }
            StepConfig::Process(_) | StepConfig::Deliver(_) | StepConfig::Log(_) => {}
        }
    }
    found
}
