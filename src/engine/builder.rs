// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::config::RouterSettings;
use crate::engine::Router;
use crate::errors::{ConfigError, Taxonomy};
use crate::observability::messages::config::{RouteRegistered, RouterBuilt};
use crate::observability::messages::StructuredLog;
use crate::routing::{
    walk_steps, ErrorScope, Route, RouteDefinition, RouteRegistry, ScopeBinding, Step,
};
use crate::traits::Endpoint;

/// Collects routes, shared scopes and endpoints, then validates them together.
///
/// Nothing is checked until [`build`](RouterBuilder::build), which reports
/// every problem it finds at once.
///
/// # Example
/// ```
/// use the_switchyard::engine::Router;
/// use the_switchyard::errors::{Kind, Taxonomy, TypedError};
/// use the_switchyard::message::Message;
/// use the_switchyard::routing::{ErrorScope, ExceptionHandler, RouteDefinition, Step};
/// use the_switchyard::traits::FnProcessor;
///
/// let taxonomy = Taxonomy::from_declarations([(Kind::from("FooBarException"), None)]).unwrap();
/// let scope = ErrorScope::local(
///     "fooScope",
///     vec![ExceptionHandler::handled("FooBarException", vec![])],
/// )
/// .unwrap();
///
/// let router = Router::builder()
///     .taxonomy(taxonomy)
///     .route(
///         RouteDefinition::new("fooRoute", "direct:foo")
///             .scope(scope)
///             .step(Step::transform(FnProcessor::new("reject", |_: &mut Message| {
///                 Err(TypedError::new("FooBarException", "can't handle the message"))
///             }))),
///     )
///     .build()
///     .unwrap();
///
/// let message = router.dispatch("direct:foo", "foo").unwrap();
/// assert!(!message.is_failed());
/// assert_eq!(message.caught_exception().unwrap().kind().as_str(), "FooBarException");
/// ```
#[derive(Default)]
pub struct RouterBuilder {
    taxonomy: Taxonomy,
    settings: RouterSettings,
    shared_scopes: Vec<ErrorScope>,
    routes: Vec<RouteDefinition>,
    endpoints: Vec<Arc<dyn Endpoint>>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    pub fn settings(mut self, settings: RouterSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Register a scope that routes can reference by id.
    pub fn shared_scope(mut self, scope: ErrorScope) -> Self {
        self.shared_scopes.push(scope);
        self
    }

    pub fn route(mut self, route: RouteDefinition) -> Self {
        self.routes.push(route);
        self
    }

    pub fn endpoint(self, endpoint: impl Endpoint + 'static) -> Self {
        self.shared_endpoint(Arc::new(endpoint))
    }

    /// Register an endpoint the caller keeps a handle to.
    pub fn shared_endpoint(mut self, endpoint: Arc<dyn Endpoint>) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Validate everything and freeze it into a [`Router`].
    pub fn build(self) -> Result<Router, ConfigError> {
        let RouterBuilder {
            taxonomy,
            settings,
            shared_scopes: declared_scopes,
            routes: definitions,
            endpoints: declared_endpoints,
        } = self;
        let mut errors = settings.validate();

        let mut endpoints: HashMap<String, Arc<dyn Endpoint>> = HashMap::new();
        for endpoint in declared_endpoints {
            let name = endpoint.name().to_string();
            if endpoints.contains_key(&name) {
                errors.push(ConfigError::DuplicateEndpoint { endpoint: name });
            } else {
                endpoints.insert(name, endpoint);
            }
        }

        let mut shared_scopes: HashMap<String, Arc<ErrorScope>> = HashMap::new();
        for scope in declared_scopes {
            if shared_scopes.contains_key(scope.id()) {
                errors.push(ConfigError::DuplicateSharedScope {
                    scope: scope.id().to_string(),
                });
                continue;
            }
            errors.extend(scope.undeclared_kinds(&taxonomy));
            shared_scopes.insert(scope.id().to_string(), Arc::new(scope));
        }

        let mut registry = RouteRegistry::new();
        let mut route_ids = HashSet::new();
        // (owner, steps) pairs whose destinations are checked once every route is registered.
        let mut step_owners: Vec<(String, Vec<Step>)> = Vec::new();

        for definition in definitions {
            if !route_ids.insert(definition.id.clone()) {
                errors.push(ConfigError::DuplicateRouteId {
                    route_id: definition.id.clone(),
                });
                continue;
            }

            let scope = match definition.binding {
                ScopeBinding::Unbound => None,
                ScopeBinding::Scope(scope) => {
                    errors.extend(scope.undeclared_kinds(&taxonomy));
                    for handler in scope.handlers() {
                        step_owners.push((definition.id.clone(), handler.steps().to_vec()));
                    }
                    Some(Arc::new(scope))
                }
                ScopeBinding::Shared(ids) => {
                    resolve_shared(&definition.id, &ids, &shared_scopes, &mut errors)
                }
            };

            step_owners.push((definition.id.clone(), definition.steps.clone()));
            let route = Route::new(definition.id, definition.entry, definition.steps, scope);
            match registry.register(route) {
                Ok(route) => RouteRegistered {
                    route_id: route.id(),
                    entry: route.entry(),
                    scope_id: route.scope().map(|s| s.id()),
                }
                .log(),
                Err(e) => errors.push(e),
            }
        }

        for scope in shared_scopes.values() {
            for handler in scope.handlers() {
                step_owners.push((scope.id().to_string(), handler.steps().to_vec()));
            }
        }

        for (owner, steps) in &step_owners {
            errors.extend(check_references(owner, steps, &registry, &endpoints));
        }

        if !errors.is_empty() {
            return Err(ConfigError::from_many(errors));
        }

        RouterBuilt {
            route_count: registry.len(),
            shared_scope_count: shared_scopes.len(),
            kind_count: taxonomy.len(),
        }
        .log();

        Ok(Router {
            routes: registry,
            shared_scopes,
            endpoints,
            taxonomy,
            settings,
        })
    }
}

/// A single reference is used as-is; several are composed into one scope.
fn resolve_shared(
    route_id: &str,
    ids: &[String],
    shared_scopes: &HashMap<String, Arc<ErrorScope>>,
    errors: &mut Vec<ConfigError>,
) -> Option<Arc<ErrorScope>> {
    let mut parts = Vec::with_capacity(ids.len());
    for id in ids {
        match shared_scopes.get(id) {
            Some(scope) => parts.push(Arc::clone(scope)),
            None => errors.push(ConfigError::UnknownSharedScope {
                route_id: route_id.to_string(),
                scope: id.clone(),
            }),
        }
    }

    if parts.len() != ids.len() {
        return None;
    }
    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => match ErrorScope::compose(&parts) {
            Ok(scope) => Some(Arc::new(scope)),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    }
}

fn check_references(
    owner: &str,
    steps: &[Step],
    registry: &RouteRegistry,
    endpoints: &HashMap<String, Arc<dyn Endpoint>>,
) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let check_destination = |destination: &str, errors: &mut Vec<ConfigError>| {
        if !registry.contains(destination) {
            errors.push(ConfigError::UnknownDestination {
                route_id: owner.to_string(),
                destination: destination.to_string(),
            });
        }
    };

    walk_steps(steps, &mut |step: &Step| match step {
        Step::Invoke(entry) => check_destination(entry.as_str(), &mut errors),
        Step::Branch {
            on_true, on_false, ..
        } => {
            check_destination(on_true.as_str(), &mut errors);
            if let Some(on_false) = on_false {
                check_destination(on_false.as_str(), &mut errors);
            }
        }
        Step::Deliver(endpoint) => {
            if !endpoints.contains_key(endpoint) {
                errors.push(ConfigError::UnknownEndpoint {
                    route_id: owner.to_string(),
                    endpoint: endpoint.clone(),
                });
            }
        }
        Step::Transform(_) | Step::Choice { .. } | Step::Log(_) => {}
    });

    errors
}
