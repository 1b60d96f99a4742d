// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalEndpointFactory;
use crate::config::{Components, Config, HandlerConfig, StepConfig};
use crate::engine::{Router, RouterBuilder};
use crate::errors::{ConfigError, Kind, Taxonomy};
use crate::routing::{ErrorScope, ExceptionHandler, RouteDefinition, Step, When};

/// Router builder - turns a loaded configuration into a ready [`Router`].
///
/// Processor, predicate and endpoint names are resolved through the supplied
/// [`Components`] first, then against the local built-ins. Endpoints injected
/// through `Components` replace config-declared endpoints of the same name.
///
/// # Examples
///
/// ```
/// use the_switchyard::config::{from_yaml_str, Components, RuntimeBuilder};
///
/// let config = from_yaml_str(r#"
/// routes:
///   - id: fooRoute
///     from: direct:foo
///     steps:
///       - process: { processor: change_text_case_upper }
/// "#).unwrap();
///
/// let router = RuntimeBuilder::from_config(&config, &Components::new()).unwrap();
/// let message = router.dispatch("direct:foo", "foo").unwrap();
/// assert_eq!(message.body(), "FOO");
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a complete router from configuration.
    ///
    /// Every component that fails to resolve is reported, followed by the
    /// router's own registration checks.
    pub fn from_config(cfg: &Config, components: &Components) -> Result<Router, ConfigError> {
        let taxonomy = Taxonomy::from_declarations(cfg.taxonomy.iter().map(|k| {
            (
                Kind::new(k.kind.as_str()),
                k.parent.as_deref().map(Kind::new),
            )
        }))?;

        let mut errors = Vec::new();
        let mut builder = RouterBuilder::new()
            .settings(cfg.settings)
            .taxonomy(taxonomy);

        for endpoint in &cfg.endpoints {
            if !components.endpoints.contains_key(&endpoint.name) {
                builder = builder.shared_endpoint(LocalEndpointFactory::create_endpoint(endpoint));
            }
        }
        for endpoint in components.endpoints.values() {
            builder = builder.shared_endpoint(endpoint.clone());
        }

        for scope in &cfg.shared_scopes {
            let handlers = build_handlers(&scope.handlers, components, &mut errors);
            match ErrorScope::shared(scope.id.as_str(), handlers) {
                Ok(scope) => builder = builder.shared_scope(scope),
                Err(e) => errors.push(e),
            }
        }

        for route in &cfg.routes {
            let mut definition = RouteDefinition::new(route.id.as_str(), route.from.as_str())
                .steps(build_steps(&route.steps, components, &mut errors));

            if let Some(handling) = &route.error_handling {
                let handlers = build_handlers(&handling.handlers, components, &mut errors);
                match ErrorScope::new(route.id.as_str(), handling.isolation, handlers) {
                    Ok(scope) => definition = definition.scope(scope),
                    Err(e) => errors.push(e),
                }
            } else if !route.scopes.is_empty() {
                definition = definition.shared_scopes(route.scopes.iter().cloned());
            }

            builder = builder.route(definition);
        }

        if !errors.is_empty() {
            return Err(ConfigError::from_many(errors));
        }

        builder.build()
    }
}

fn build_handlers(
    handlers: &[HandlerConfig],
    components: &Components,
    errors: &mut Vec<ConfigError>,
) -> Vec<ExceptionHandler> {
    handlers
        .iter()
        .map(|h| {
            ExceptionHandler::new(
                h.on.as_str(),
                h.handled,
                build_steps(&h.steps, components, errors),
            )
        })
        .collect()
}

fn build_steps(
    steps: &[StepConfig],
    components: &Components,
    errors: &mut Vec<ConfigError>,
) -> Vec<Step> {
    let mut built = Vec::with_capacity(steps.len());

    for step in steps {
        let step = match step {
            StepConfig::Process(p) => match components.processor(&p.processor, &p.options) {
                Ok(processor) => Step::Transform(processor),
                Err(e) => {
                    errors.push(e);
                    continue;
                }
            },
            StepConfig::Branch(b) => match components.predicate(&b.when.predicate, &b.when.options) {
                Ok(predicate) => Step::Branch {
                    predicate,
                    on_true: b.to.clone(),
                    on_false: b.otherwise.clone(),
                },
                Err(e) => {
                    errors.push(e);
                    continue;
                }
            },
            StepConfig::Invoke(entry) => Step::invoke(entry.as_str()),
            StepConfig::Choice(c) => {
                let mut whens = Vec::with_capacity(c.when.len());
                for when in &c.when {
                    let steps = build_steps(&when.steps, components, errors);
                    match components.predicate(&when.predicate, &when.options) {
                        Ok(predicate) => whens.push(When::new(predicate, steps)),
                        Err(e) => errors.push(e),
                    }
                }
                Step::choice(whens, build_steps(&c.otherwise, components, errors))
            }
            StepConfig::Deliver(endpoint) => Step::deliver(endpoint.as_str()),
            StepConfig::Log(text) => Step::log(text.as_str()),
        };
        built.push(step);
    }

    built
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Config {
        crate::config::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn test_every_unresolvable_component_is_reported() {
        let cfg = parse(
            r#"
routes:
  - id: fooRoute
    from: direct:foo
    steps:
      - process: { processor: no_such_processor }
      - branch: { when: { predicate: no_such_predicate }, to: direct:foo }
      - process: { processor: set_body }
"#,
        );

        match RuntimeBuilder::from_config(&cfg, &Components::new()) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation errors, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_inline_scope_with_unknown_kind_is_rejected() {
        let cfg = parse(
            r#"
taxonomy:
  - kind: FooBarException
routes:
  - id: fooRoute
    from: direct:foo
    error_handling:
      handlers:
        - on: GrokException
          handled: true
"#,
        );

        let error = RuntimeBuilder::from_config(&cfg, &Components::new()).unwrap_err();
        assert!(matches!(error, ConfigError::UnknownHandlerKind { ref kind, .. } if kind == "GrokException"));
    }

    #[test]
    fn test_taxonomy_errors_are_reported_first() {
        let cfg = parse(
            r#"
taxonomy:
  - kind: SpikeException
    parent: FooBarException
routes:
  - { id: fooRoute, from: direct:foo }
"#,
        );

        let error = RuntimeBuilder::from_config(&cfg, &Components::new()).unwrap_err();
        assert!(matches!(error, ConfigError::UnknownParentKind { .. }));
    }
}
