// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Route execution and scoped exception resolution.
//!
//! A dispatch is one synchronous call stack. Every route call returns a
//! [`Flow`]; anything other than normal completion travels back up the stack
//! as an [`Interrupt`]:
//!
//! * `Raised` - a business exception no scope has resolved yet. It climbs
//!   until it meets a route whose scope resolves locally.
//! * `Handled` - a scope resolved the exception. The exchange is complete and
//!   every caller returns without running further steps.
//! * `Exhausted` - a scope gave up. The message already carries the terminal
//!   failure and no enclosing scope may see it.
//! * `Fatal` - an engine error that aborts the dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{RethrowPolicy, RouterSettings};
use crate::engine::RouterBuilder;
use crate::errors::{RouterError, Taxonomy, TypedError};
use crate::message::Message;
use crate::observability::messages::dispatch::{
    DispatchAborted, DispatchCompleted, DispatchStarted, ExceptionPropagated, RouteEntered,
    StepRaised,
};
use crate::observability::messages::scope::{
    ExceptionCaught, ExceptionHandled, ExceptionUnresolved, HandlerMatched, HandlerRethrew,
};
use crate::observability::messages::StructuredLog;
use crate::routing::{ErrorScope, Route, RouteRegistry, Step};
use crate::traits::Endpoint;

enum Interrupt {
    Raised(TypedError),
    Handled,
    Exhausted,
    Fatal(RouterError),
}

impl From<RouterError> for Interrupt {
    fn from(error: RouterError) -> Self {
        Interrupt::Fatal(error)
    }
}

type Flow = Result<(), Interrupt>;

enum Resolution {
    Resolved,
    Unresolved {
        terminal: TypedError,
        handler_ran: bool,
    },
    /// A sub-route called from a handler already finalized a failure.
    Exhausted,
}

/// An immutable set of routes, shared scopes and endpoints.
///
/// `Router` is `Send + Sync`; wrap it in an `Arc` to dispatch from many
/// threads at once. Each dispatch works on its own [`Message`] and shares
/// nothing else mutable.
pub struct Router {
    pub(crate) routes: RouteRegistry,
    pub(crate) shared_scopes: HashMap<String, Arc<ErrorScope>>,
    pub(crate) endpoints: HashMap<String, Arc<dyn Endpoint>>,
    pub(crate) taxonomy: Taxonomy,
    pub(crate) settings: RouterSettings,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Send a message into the route consuming from `entry` and return the
    /// terminal message.
    ///
    /// Business exceptions never surface as `Err`: read
    /// [`Message::is_failed`] and [`Message::exception`] instead. `Err` means
    /// the dispatch itself could not complete.
    pub fn dispatch(&self, entry: &str, message: impl Into<Message>) -> Result<Message, RouterError> {
        let route = self.routes.lookup(entry).map_err(|error| {
            DispatchAborted {
                entry,
                error: &error,
            }
            .log();
            error
        })?;
        let mut message = message.into();

        let started = DispatchStarted {
            entry,
            route_id: route.id(),
            body_size: message.body().len(),
        };
        let span = started.span("dispatch");
        let _guard = span.enter();
        started.log();
        let start_time = Instant::now();

        match self.execute(route, &mut message, 0) {
            Ok(()) | Err(Interrupt::Handled) | Err(Interrupt::Exhausted) => {}
            Err(Interrupt::Raised(error)) => {
                ExceptionUnresolved {
                    route_id: route.id(),
                    scope_id: None,
                    error: &error,
                    handler_ran: false,
                }
                .log();
                message.fail(error);
            }
            Err(Interrupt::Fatal(error)) => {
                DispatchAborted {
                    entry,
                    error: &error,
                }
                .log();
                return Err(error);
            }
        }

        DispatchCompleted {
            entry,
            outcome: message.outcome(),
            routes_visited: message.route_history().len(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(message)
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    pub fn shared_scope(&self, id: &str) -> Option<&Arc<ErrorScope>> {
        self.shared_scopes.get(id)
    }

    pub fn endpoint(&self, name: &str) -> Option<&Arc<dyn Endpoint>> {
        self.endpoints.get(name)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    fn execute(&self, route: &Route, message: &mut Message, depth: usize) -> Flow {
        if depth > self.settings.max_route_depth {
            return Err(RouterError::RouteDepthExceeded {
                route_id: route.id().to_string(),
                limit: self.settings.max_route_depth,
            }
            .into());
        }

        message.record_route(route.id());
        RouteEntered {
            route_id: route.id(),
            depth,
        }
        .log();

        match self.run_steps(route, route.steps(), message, depth) {
            Err(Interrupt::Raised(error)) => match route.resolving_scope() {
                None => {
                    ExceptionPropagated {
                        route_id: route.id(),
                        error: &error,
                    }
                    .log();
                    Err(Interrupt::Raised(error))
                }
                Some(scope) => match self.resolve(route, scope, error, message, depth)? {
                    Resolution::Resolved => Err(Interrupt::Handled),
                    Resolution::Unresolved {
                        terminal,
                        handler_ran,
                    } => {
                        ExceptionUnresolved {
                            route_id: route.id(),
                            scope_id: Some(scope.id()),
                            error: &terminal,
                            handler_ran,
                        }
                        .log();
                        message.fail(terminal);
                        Err(Interrupt::Exhausted)
                    }
                    Resolution::Exhausted => Err(Interrupt::Exhausted),
                },
            },
            other => other,
        }
    }

    /// Run steps in order on behalf of `route`; the first interrupt stops the run.
    fn run_steps(&self, route: &Route, steps: &[Step], message: &mut Message, depth: usize) -> Flow {
        for step in steps {
            match step {
                Step::Transform(processor) => processor
                    .process(message)
                    .map_err(|error| raised(route, step, error))?,
                Step::Branch {
                    predicate,
                    on_true,
                    on_false,
                } => {
                    if predicate.test(message) {
                        self.call(on_true, message, depth)?;
                    } else if let Some(on_false) = on_false {
                        self.call(on_false, message, depth)?;
                    }
                }
                Step::Invoke(entry) => self.call(entry, message, depth)?,
                Step::Choice { whens, otherwise } => {
                    let block = whens
                        .iter()
                        .find(|when| when.predicate.test(message))
                        .map_or(otherwise.as_slice(), |when| when.steps.as_slice());
                    self.run_steps(route, block, message, depth)?;
                }
                Step::Deliver(name) => {
                    let endpoint =
                        self.endpoints
                            .get(name)
                            .ok_or_else(|| RouterError::EndpointNotFound {
                                endpoint: name.clone(),
                            })?;
                    endpoint
                        .deliver(message)
                        .map_err(|error| raised(route, step, error))?;
                }
                Step::Log(text) => {
                    tracing::info!(route_id = %route.id(), "{}", text);
                }
            }
        }
        Ok(())
    }

    fn call(&self, entry: &str, message: &mut Message, depth: usize) -> Flow {
        let target = self.routes.lookup(entry)?;
        self.execute(target, message, depth + 1)
    }

    /// Offer `error` to `scope`, running the matching handler's steps.
    ///
    /// Every attempt is recorded on the message, matched or not. A handler
    /// that raises either ends resolution with the new exception or, under
    /// [`RethrowPolicy::Cascade`], starts another attempt against the same
    /// scope, up to `max_resolution_attempts` handler runs.
    fn resolve(
        &self,
        route: &Route,
        scope: &ErrorScope,
        error: TypedError,
        message: &mut Message,
        depth: usize,
    ) -> Result<Resolution, RouterError> {
        let mut current = error;
        let mut attempts = 0;

        loop {
            message.record_caught(&current, route.id());
            ExceptionCaught {
                route_id: route.id(),
                scope_id: scope.id(),
                error: &current,
            }
            .log();

            let Some(handler) = scope.find_handler(current.kind(), &self.taxonomy) else {
                return Ok(Resolution::Unresolved {
                    terminal: current,
                    handler_ran: attempts > 0,
                });
            };

            attempts += 1;
            if attempts > self.settings.max_resolution_attempts {
                return Err(RouterError::ResolutionLimitExceeded {
                    scope: scope.id().to_string(),
                    kind: current.kind().to_string(),
                    limit: self.settings.max_resolution_attempts,
                });
            }

            HandlerMatched {
                scope_id: scope.id(),
                handler_kind: handler.kind().as_str(),
                error: &current,
                handled: handler.is_handled(),
            }
            .log();

            match self.run_steps(route, handler.steps(), message, depth) {
                // A sub-route resolving its own exception inside the handler
                // counts as the handler finishing normally.
                Ok(()) | Err(Interrupt::Handled) => {
                    if handler.is_handled() {
                        ExceptionHandled {
                            route_id: route.id(),
                            scope_id: scope.id(),
                            error: &current,
                        }
                        .log();
                        return Ok(Resolution::Resolved);
                    }
                    return Ok(Resolution::Unresolved {
                        terminal: current,
                        handler_ran: true,
                    });
                }
                Err(Interrupt::Exhausted) => return Ok(Resolution::Exhausted),
                Err(Interrupt::Fatal(fatal)) => return Err(fatal),
                Err(Interrupt::Raised(rethrown)) => {
                    HandlerRethrew {
                        scope_id: scope.id(),
                        original: &current,
                        rethrown: &rethrown,
                    }
                    .log();

                    match self.settings.rethrow_policy {
                        RethrowPolicy::Terminate => {
                            message.record_caught(&rethrown, route.id());
                            return Ok(Resolution::Unresolved {
                                terminal: rethrown,
                                handler_ran: true,
                            });
                        }
                        RethrowPolicy::Cascade => current = rethrown,
                    }
                }
            }
        }
    }
}

fn raised(route: &Route, step: &Step, error: TypedError) -> Interrupt {
    StepRaised {
        route_id: route.id(),
        step: &step.label(),
        error: &error,
    }
    .log();
    Interrupt::Raised(error)
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("entries", &self.routes.entries().collect::<Vec<_>>())
            .field("shared_scopes", &self.shared_scopes.keys().collect::<Vec<_>>())
            .field("endpoints", &self.endpoints.keys().collect::<Vec<_>>())
            .field("kind_count", &self.taxonomy.len())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_router_is_send_and_sync() {
        assert_send_sync::<Router>();
    }
}
