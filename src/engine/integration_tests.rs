// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::{
    BodyPredicate, PrefixSuffixAdderProcessor, RaiseCondition, RaiseErrorProcessor,
    RecordingEndpoint, SetBodyProcessor,
};
use crate::config::{RethrowPolicy, RouterSettings};
use crate::engine::{Router, RouterBuilder};
use crate::errors::{Kind, RouterError, Taxonomy};
use crate::message::Outcome;
use crate::routing::{ErrorScope, ExceptionHandler, RouteDefinition, Step, When};

/// End-to-end dispatch tests over routers assembled in code
#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{CountingProcessor, FailingEndpoint};

    const FOO: &str = "FooBarException";
    const SPIKE: &str = "SpikeException";
    const GROK: &str = "GrokException";
    const HEISENBUG: &str = "HeisenbugException";

    fn taxonomy() -> Taxonomy {
        Taxonomy::from_declarations([
            (Kind::from("Exception"), None),
            (Kind::from(FOO), Some(Kind::from("Exception"))),
            (Kind::from(SPIKE), Some(Kind::from(FOO))),
            (Kind::from(GROK), Some(Kind::from("Exception"))),
            (Kind::from(HEISENBUG), Some(Kind::from("Exception"))),
            (Kind::from("DeliveryException"), None),
        ])
        .unwrap()
    }

    fn raise_when_prefix(kind: &str, message: &str, prefix: &str) -> Step {
        Step::transform(RaiseErrorProcessor::new(
            kind,
            message,
            RaiseCondition::BodyStartsWith(prefix.to_string()),
        ))
    }

    fn raise_always(kind: &str, message: &str) -> Step {
        Step::transform(RaiseErrorProcessor::always(kind, message))
    }

    fn prefix(text: &str) -> Step {
        Step::transform(PrefixSuffixAdderProcessor::with_prefix(text))
    }

    fn builder(mock: &Arc<RecordingEndpoint>) -> RouterBuilder {
        Router::builder()
            .taxonomy(taxonomy())
            .shared_endpoint(mock.clone())
    }

    /// `fooRoute` with the handler pair from the reference system: the
    /// FooBarException handler re-throws a SpikeException for bodies starting
    /// with "error", and the SpikeException handler leaves it unhandled.
    fn foo_router(policy: RethrowPolicy, mock: &Arc<RecordingEndpoint>) -> Router {
        let scope = ErrorScope::local(
            "fooRoute",
            vec![
                ExceptionHandler::handled(
                    FOO,
                    vec![
                        Step::log("houston we have a problem..."),
                        Step::choice(
                            vec![When::new(
                                Arc::new(BodyPredicate::starts_with("error")),
                                vec![
                                    prefix("another_exception_"),
                                    raise_always(SPIKE, "still can't handle the message"),
                                ],
                            )],
                            vec![prefix("handled_exception_")],
                        ),
                    ],
                ),
                ExceptionHandler::unhandled(SPIKE, vec![prefix("unhandled_exception_")]),
            ],
        )
        .unwrap();

        builder(mock)
            .settings(RouterSettings {
                rethrow_policy: policy,
                ..RouterSettings::default()
            })
            .route(
                RouteDefinition::new("fooRoute", "direct:foo")
                    .scope(scope)
                    .steps([
                        Step::log("chugging along"),
                        Step::transform(RaiseErrorProcessor::new(
                            FOO,
                            "can't handle the message",
                            RaiseCondition::BodyContains("error".to_string()),
                        )),
                        Step::deliver("mock:end"),
                    ]),
            )
            .build()
            .unwrap()
    }

    /// A route raising FooBarException for bodies starting with "error",
    /// guarded by a single handler.
    fn single_handler_router(handler: ExceptionHandler, mock: &Arc<RecordingEndpoint>) -> Router {
        builder(mock)
            .route(
                RouteDefinition::new("fooRoute", "direct:foo")
                    .scope(ErrorScope::local("fooRoute", vec![handler]).unwrap())
                    .steps([
                        raise_when_prefix(FOO, "can't handle the message", "error"),
                        Step::deliver("mock:end"),
                    ]),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_happy_path_leaves_message_untouched() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = foo_router(RethrowPolicy::Terminate, &mock);

        let message = router.dispatch("direct:foo", "foo").unwrap();

        assert!(!message.is_failed());
        assert_eq!(message.body(), "foo");
        assert!(message.exception().is_none());
        assert!(message.caught_exception().is_none());
        assert_eq!(message.outcome(), Outcome::Succeeded);
        assert_eq!(message.route_history(), ["fooRoute"]);
        assert_eq!(mock.received(), vec!["foo"]);
    }

    #[test]
    fn test_handled_exception_completes_the_exchange() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = single_handler_router(
            ExceptionHandler::handled(FOO, vec![prefix("handled_exception_")]),
            &mock,
        );

        let message = router.dispatch("direct:foo", "error").unwrap();

        assert!(!message.is_failed());
        assert!(message.exception().is_none());
        assert_eq!(message.caught_exception().unwrap().kind().as_str(), FOO);
        assert_eq!(message.failure_route_id(), Some("fooRoute"));
        assert_eq!(message.body(), "handled_exception_error");
        assert_eq!(message.outcome(), Outcome::HandledAndContinued);
        assert_eq!(mock.count(), 0);
    }

    #[test]
    fn test_unhandled_exception_fails_after_handler_runs() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = single_handler_router(
            ExceptionHandler::unhandled(FOO, vec![prefix("unhandled_exception_")]),
            &mock,
        );

        let message = router.dispatch("direct:foo", "error").unwrap();

        assert!(message.is_failed());
        assert_eq!(message.exception().unwrap().kind().as_str(), FOO);
        assert_eq!(message.caught_exception().unwrap().kind().as_str(), FOO);
        assert_eq!(message.body(), "unhandled_exception_error");
        assert_eq!(message.outcome(), Outcome::Failed);
        assert_eq!(mock.count(), 0);
    }

    #[test]
    fn test_foo_route_scenario() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = foo_router(RethrowPolicy::Terminate, &mock);

        let message = router.dispatch("direct:foo", "error").unwrap();

        assert!(message.is_failed());
        assert_eq!(message.body(), "another_exception_error");
        let exception = message.exception().unwrap();
        assert_eq!(exception.kind().as_str(), SPIKE);
        assert_eq!(exception.message(), "still can't handle the message");
        assert_eq!(message.caught_exception(), Some(exception));
        assert_eq!(mock.count(), 0);
    }

    #[test]
    fn test_foo_route_handles_bodies_that_merely_contain_error() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = foo_router(RethrowPolicy::Terminate, &mock);

        let message = router.dispatch("direct:foo", "foo_error").unwrap();

        assert!(!message.is_failed());
        assert_eq!(message.body(), "handled_exception_foo_error");
        assert_eq!(message.caught_exception().unwrap().kind().as_str(), FOO);
    }

    #[test]
    fn test_cascade_offers_rethrown_exception_to_same_scope() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = foo_router(RethrowPolicy::Cascade, &mock);

        let message = router.dispatch("direct:foo", "error").unwrap();

        assert!(message.is_failed());
        assert_eq!(message.body(), "unhandled_exception_another_exception_error");
        assert_eq!(message.exception().unwrap().kind().as_str(), SPIKE);
        assert_eq!(message.caught_exception().unwrap().kind().as_str(), SPIKE);
    }

    #[test]
    fn test_rethrow_of_unhandled_kind_is_authoritative() {
        for policy in [RethrowPolicy::Terminate, RethrowPolicy::Cascade] {
            let mock = Arc::new(RecordingEndpoint::new("mock:end"));
            let router = builder(&mock)
                .settings(RouterSettings {
                    rethrow_policy: policy,
                    ..RouterSettings::default()
                })
                .route(
                    RouteDefinition::new("fooRoute", "direct:foo")
                        .scope(
                            ErrorScope::local(
                                "fooRoute",
                                vec![ExceptionHandler::handled(
                                    FOO,
                                    vec![raise_always(GROK, "grok failed too")],
                                )],
                            )
                            .unwrap(),
                        )
                        .step(raise_always(FOO, "boom")),
                )
                .build()
                .unwrap();

            let message = router.dispatch("direct:foo", "x").unwrap();

            assert!(message.is_failed(), "{:?}", policy);
            assert_eq!(message.exception().unwrap().kind().as_str(), GROK, "{:?}", policy);
            assert_eq!(
                message.caught_exception().unwrap().kind().as_str(),
                GROK,
                "{:?}",
                policy
            );
        }
    }

    #[test]
    fn test_cascade_limit_is_fatal() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let looping = ErrorScope::local(
            "loopRoute",
            vec![ExceptionHandler::handled(FOO, vec![raise_always(FOO, "again")])],
        )
        .unwrap();
        let definition = RouteDefinition::new("loopRoute", "direct:loop")
            .scope(looping)
            .step(raise_always(FOO, "first"));

        let cascading = builder(&mock)
            .settings(RouterSettings {
                rethrow_policy: RethrowPolicy::Cascade,
                max_resolution_attempts: 3,
                ..RouterSettings::default()
            })
            .route(definition.clone())
            .build()
            .unwrap();

        assert_eq!(
            cascading.dispatch("direct:loop", "x").unwrap_err(),
            RouterError::ResolutionLimitExceeded {
                scope: "loopRoute".to_string(),
                kind: FOO.to_string(),
                limit: 3,
            }
        );

        let terminating = builder(&mock).route(definition).build().unwrap();
        let message = terminating.dispatch("direct:loop", "x").unwrap();
        assert!(message.is_failed());
        assert_eq!(message.exception().unwrap().message(), "again");
    }

    /// `mainRoute` handles FooBarException and invokes `direct:grok`, whose
    /// route raises FooBarException under the given binding.
    fn nested_router(grok: RouteDefinition, mock: &Arc<RecordingEndpoint>) -> Router {
        let main_scope = ErrorScope::local(
            "mainRoute",
            vec![ExceptionHandler::handled(FOO, vec![prefix("handled_by_main_")])],
        )
        .unwrap();

        builder(mock)
            .route(
                RouteDefinition::new("mainRoute", "direct:main")
                    .scope(main_scope)
                    .steps([Step::invoke("direct:grok"), Step::deliver("mock:end")]),
            )
            .route(grok.step(raise_always(FOO, "can't handle the message")))
            .build()
            .unwrap()
    }

    #[test]
    fn test_isolation_none_defers_to_caller_scope() {
        let cases = vec![
            (
                "isolation none",
                RouteDefinition::new("grokRoute", "direct:grok").scope(ErrorScope::none("grokRoute")),
            ),
            ("unbound", RouteDefinition::new("grokRoute", "direct:grok")),
        ];

        for (name, grok) in cases {
            let mock = Arc::new(RecordingEndpoint::new("mock:end"));
            let router = nested_router(grok, &mock);

            let message = router.dispatch("direct:main", "grok").unwrap();

            assert!(!message.is_failed(), "{}", name);
            assert_eq!(message.body(), "handled_by_main_grok", "{}", name);
            assert_eq!(message.caught_exception().unwrap().kind().as_str(), FOO, "{}", name);
            assert_eq!(message.failure_route_id(), Some("mainRoute"), "{}", name);
            assert_eq!(message.route_history(), ["mainRoute", "grokRoute"], "{}", name);
            assert_eq!(mock.count(), 0, "{}", name);
        }
    }

    #[test]
    fn test_isolation_default_never_reaches_caller_scope() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let grok = RouteDefinition::new("grokRoute", "direct:grok").scope(
            ErrorScope::local(
                "grokRoute",
                vec![ExceptionHandler::handled(GROK, vec![prefix("never_")])],
            )
            .unwrap(),
        );
        let router = nested_router(grok, &mock);

        let message = router.dispatch("direct:main", "grok").unwrap();

        assert!(message.is_failed());
        assert_eq!(message.body(), "grok");
        assert_eq!(message.exception().unwrap().kind().as_str(), FOO);
        assert_eq!(message.caught_exception().unwrap().kind().as_str(), FOO);
        assert_eq!(message.failure_route_id(), Some("grokRoute"));
        assert_eq!(mock.count(), 0);
    }

    #[test]
    fn test_default_scope_without_handlers_fails_in_place() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let (after_branch, after_branch_calls) = CountingProcessor::new("after_branch");
        let router = builder(&mock)
            .route(
                RouteDefinition::new("fooRoute", "direct:foo")
                    .scope(
                        ErrorScope::local(
                            "fooRoute",
                            vec![ExceptionHandler::handled(HEISENBUG, vec![])],
                        )
                        .unwrap(),
                    )
                    .steps([
                        Step::branch(
                            BodyPredicate::contains("heisenbug"),
                            "direct:heisenbug",
                            None,
                        ),
                        Step::transform(after_branch),
                        Step::deliver("mock:end"),
                    ]),
            )
            .route(
                RouteDefinition::new("hesienbugRoute", "direct:heisenbug")
                    .scope(ErrorScope::local("hesienbugRoute", vec![]).unwrap())
                    .step(raise_always(HEISENBUG, "now you see it")),
            )
            .build()
            .unwrap();

        let message = router.dispatch("direct:foo", "heisenbug").unwrap();

        assert!(message.is_failed());
        assert_eq!(message.body(), "heisenbug");
        assert_eq!(message.exception().unwrap().kind().as_str(), HEISENBUG);
        assert_eq!(message.caught_exception(), message.exception());
        assert_eq!(message.failure_route_id(), Some("hesienbugRoute"));
        assert_eq!(after_branch_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert_eq!(mock.count(), 0);

        let passing = router.dispatch("direct:foo", "foo").unwrap();
        assert!(!passing.is_failed());
        assert_eq!(after_branch_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(mock.received(), vec!["foo"]);
    }

    #[test]
    fn test_unscoped_top_level_failure() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = builder(&mock)
            .route(
                RouteDefinition::new("bareRoute", "direct:bare")
                    .steps([raise_always(GROK, "nobody listens"), Step::deliver("mock:end")]),
            )
            .build()
            .unwrap();

        let message = router.dispatch("direct:bare", "x").unwrap();

        assert!(message.is_failed());
        assert_eq!(message.exception().unwrap().message(), "nobody listens");
        assert!(message.caught_exception().is_none());
        assert!(message.failure_route_id().is_none());
        assert_eq!(mock.count(), 0);
    }

    #[test]
    fn test_shared_scopes_resolve_in_subroute() {
        let mock = Arc::new(RecordingEndpoint::new("mock:endConfig"));
        let router = builder(&mock)
            .shared_scope(
                ErrorScope::shared(
                    "fooErrorConfig",
                    vec![ExceptionHandler::handled(
                        FOO,
                        vec![prefix("handled_foo_exception_")],
                    )],
                )
                .unwrap(),
            )
            .shared_scope(
                ErrorScope::shared(
                    "spikeErrorConfig",
                    vec![ExceptionHandler::unhandled(
                        GROK,
                        vec![prefix("unhandled_grok_exception_")],
                    )],
                )
                .unwrap(),
            )
            .route(
                RouteDefinition::new("fooRouteConfig", "direct:fooConfig")
                    .shared_scopes(["fooErrorConfig"])
                    .steps([
                        Step::branch(BodyPredicate::contains("grok"), "direct:grokConfig", None),
                        Step::deliver("mock:endConfig"),
                    ]),
            )
            .route(
                RouteDefinition::new("grokRouteConfig", "direct:grokConfig")
                    .shared_scopes(["fooErrorConfig", "spikeErrorConfig"])
                    .steps([
                        raise_when_prefix(FOO, "can't handle the message", "grok"),
                        raise_when_prefix(GROK, "grok failed", "spike"),
                    ]),
            )
            .build()
            .unwrap();

        let handled = router.dispatch("direct:fooConfig", "grok").unwrap();
        assert!(!handled.is_failed());
        assert_eq!(handled.body(), "handled_foo_exception_grok");
        assert_eq!(handled.failure_route_id(), Some("grokRouteConfig"));

        let unhandled = router.dispatch("direct:fooConfig", "spike_grok").unwrap();
        assert!(unhandled.is_failed());
        assert_eq!(unhandled.body(), "unhandled_grok_exception_spike_grok");
        assert_eq!(unhandled.exception().unwrap().kind().as_str(), GROK);

        assert_eq!(mock.count(), 0);
    }

    #[test]
    fn test_most_specific_handler_is_selected() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let scope = ErrorScope::local(
            "fooRoute",
            vec![
                ExceptionHandler::handled("Exception", vec![Step::transform(SetBodyProcessor::new("generic"))]),
                ExceptionHandler::handled(FOO, vec![Step::transform(SetBodyProcessor::new("foo"))]),
            ],
        )
        .unwrap();
        let router = builder(&mock)
            .route(
                RouteDefinition::new("fooRoute", "direct:foo")
                    .scope(scope)
                    .steps([
                        raise_when_prefix(SPIKE, "spike", "spike"),
                        raise_when_prefix(GROK, "grok", "grok"),
                    ]),
            )
            .build()
            .unwrap();

        struct TestCase {
            body: &'static str,
            expected_body: &'static str,
            expected_kind: &'static str,
        }

        let cases = vec![
            TestCase {
                body: "spike",
                expected_body: "foo",
                expected_kind: SPIKE,
            },
            TestCase {
                body: "grok",
                expected_body: "generic",
                expected_kind: GROK,
            },
        ];

        for case in cases {
            let message = router.dispatch("direct:foo", case.body).unwrap();
            assert!(!message.is_failed(), "{}", case.body);
            assert_eq!(message.body(), case.expected_body, "{}", case.body);
            assert_eq!(
                message.caught_exception().unwrap().kind().as_str(),
                case.expected_kind,
                "{}",
                case.body
            );
        }
    }

    #[test]
    fn test_handler_steps_can_invoke_subroutes() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let (after_audit, after_audit_calls) = CountingProcessor::new("after_audit");
        let router = builder(&mock)
            .route(
                RouteDefinition::new("fooRoute", "direct:foo")
                    .scope(
                        ErrorScope::local(
                            "fooRoute",
                            vec![ExceptionHandler::handled(
                                FOO,
                                vec![Step::invoke("direct:audit"), Step::transform(after_audit)],
                            )],
                        )
                        .unwrap(),
                    )
                    .step(raise_always(FOO, "boom")),
            )
            .route(
                RouteDefinition::new("auditRoute", "direct:audit")
                    .scope(
                        ErrorScope::local(
                            "auditRoute",
                            vec![ExceptionHandler::unhandled(GROK, vec![])],
                        )
                        .unwrap(),
                    )
                    .steps([prefix("audited_"), raise_when_prefix(GROK, "audit failed", "audited_grok")]),
            )
            .build()
            .unwrap();

        let audited = router.dispatch("direct:foo", "foo").unwrap();
        assert!(!audited.is_failed());
        assert_eq!(audited.body(), "audited_foo");
        assert_eq!(audited.route_history(), ["fooRoute", "auditRoute"]);
        assert_eq!(after_audit_calls.load(std::sync::atomic::Ordering::SeqCst), 1);

        let failed = router.dispatch("direct:foo", "grok").unwrap();
        assert!(failed.is_failed());
        assert_eq!(failed.exception().unwrap().kind().as_str(), GROK);
        assert_eq!(failed.failure_route_id(), Some("auditRoute"));
        assert_eq!(after_audit_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delivery_failure_is_a_business_exception() {
        let router = Router::builder()
            .taxonomy(taxonomy())
            .endpoint(FailingEndpoint::new("smtp:out", "DeliveryException"))
            .route(
                RouteDefinition::new("mailRoute", "direct:mail")
                    .scope(
                        ErrorScope::local(
                            "mailRoute",
                            vec![ExceptionHandler::handled(
                                "DeliveryException",
                                vec![prefix("undeliverable_")],
                            )],
                        )
                        .unwrap(),
                    )
                    .step(Step::deliver("smtp:out")),
            )
            .build()
            .unwrap();

        let message = router.dispatch("direct:mail", "hi").unwrap();
        assert!(!message.is_failed());
        assert_eq!(message.body(), "undeliverable_hi");
        assert_eq!(
            message.caught_exception().unwrap().message(),
            "endpoint 'smtp:out' is unavailable"
        );
    }

    #[test]
    fn test_branch_and_choice_routing() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = builder(&mock)
            .route(
                RouteDefinition::new("mainRoute", "direct:main").steps([
                    Step::branch(
                        BodyPredicate::starts_with("left"),
                        "direct:left",
                        Some("direct:right".to_string()),
                    ),
                    Step::choice(
                        vec![When::new(
                            Arc::new(BodyPredicate::contains("left")),
                            vec![prefix("chose_")],
                        )],
                        vec![prefix("otherwise_")],
                    ),
                    Step::deliver("mock:end"),
                ]),
            )
            .route(RouteDefinition::new("leftRoute", "direct:left").step(prefix("L_")))
            .route(RouteDefinition::new("rightRoute", "direct:right").step(prefix("R_")))
            .build()
            .unwrap();

        let left = router.dispatch("direct:main", "left").unwrap();
        assert_eq!(left.body(), "chose_L_left");
        assert_eq!(left.route_history(), ["mainRoute", "leftRoute"]);

        let right = router.dispatch("direct:main", "up").unwrap();
        assert_eq!(right.body(), "otherwise_R_up");
        assert_eq!(right.route_history(), ["mainRoute", "rightRoute"]);

        assert_eq!(mock.received(), vec!["chose_L_left", "otherwise_R_up"]);
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = foo_router(RethrowPolicy::Terminate, &mock);

        for body in ["foo", "error", "foo_error"] {
            let first = router.dispatch("direct:foo", body).unwrap();
            let second = router.dispatch("direct:foo", body).unwrap();
            assert_eq!(first, second, "{}", body);
        }
    }

    #[test]
    fn test_fatal_dispatch_errors() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = builder(&mock)
            .settings(RouterSettings {
                max_route_depth: 5,
                ..RouterSettings::default()
            })
            .route(RouteDefinition::new("loopRoute", "direct:loop").step(Step::invoke("direct:loop")))
            .build()
            .unwrap();

        assert_eq!(
            router.dispatch("direct:nowhere", "x").unwrap_err(),
            RouterError::RouteNotFound {
                entry: "direct:nowhere".to_string()
            }
        );
        assert_eq!(
            router.dispatch("direct:loop", "x").unwrap_err(),
            RouterError::RouteDepthExceeded {
                route_id: "loopRoute".to_string(),
                limit: 5,
            }
        );
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_are_independent() {
        let mock = Arc::new(RecordingEndpoint::new("mock:end"));
        let router = Arc::new(foo_router(RethrowPolicy::Terminate, &mock));

        let mut handles = Vec::new();
        for i in 0..16 {
            let router = Arc::clone(&router);
            let body = if i % 2 == 0 { "error".to_string() } else { format!("foo{}", i) };
            handles.push(tokio::task::spawn_blocking(move || {
                router.dispatch("direct:foo", body).unwrap()
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let message = handle.await.unwrap();
            assert_eq!(message.is_failed(), i % 2 == 0, "dispatch {}", i);
        }
        assert_eq!(mock.count(), 8);
    }
}
