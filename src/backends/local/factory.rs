// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::endpoints::{LogEndpoint, RecordingEndpoint};
use super::predicates::BodyPredicate;
use super::processors::*;
use crate::config::{EndpointConfig, EndpointType, Options};
use crate::errors::ConfigError;
use crate::traits::{Endpoint, Predicate, Processor};

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from its name and options
    ///
    /// - "change_text_case_upper" / "_lower" / "_proper" / "_title" -> ChangeTextCaseProcessor
    /// - "reverse_text" -> ReverseTextProcessor
    /// - "prefix_suffix_adder" -> PrefixSuffixAdderProcessor (options `prefix`, `suffix`)
    /// - "set_body" -> SetBodyProcessor (option `value`)
    /// - "raise_error" -> RaiseErrorProcessor (options `kind`, `message`, and at most
    ///   one of `when_prefix` / `when_contains`)
    pub fn create_processor(name: &str, options: &Options) -> Result<Arc<dyn Processor>, ConfigError> {
        match name {
            "change_text_case_upper" => Ok(Arc::new(ChangeTextCaseProcessor::upper())),
            "change_text_case_lower" => Ok(Arc::new(ChangeTextCaseProcessor::lower())),
            "change_text_case_proper" => Ok(Arc::new(ChangeTextCaseProcessor::proper())),
            "change_text_case_title" => Ok(Arc::new(ChangeTextCaseProcessor::title())),

            "reverse_text" => Ok(Arc::new(ReverseTextProcessor::new())),

            "prefix_suffix_adder" => Ok(Arc::new(PrefixSuffixAdderProcessor::new(
                PrefixSuffixConfig {
                    prefix: string_option(name, options, "prefix")?,
                    suffix: string_option(name, options, "suffix")?,
                },
            ))),

            "set_body" => Ok(Arc::new(SetBodyProcessor::new(required_string(
                name, options, "value",
            )?))),

            "raise_error" => {
                let kind = required_string(name, options, "kind")?;
                let message = string_option(name, options, "message")?.unwrap_or_default();
                let condition = match (
                    string_option(name, options, "when_prefix")?,
                    string_option(name, options, "when_contains")?,
                ) {
                    (None, None) => RaiseCondition::Always,
                    (Some(prefix), None) => RaiseCondition::BodyStartsWith(prefix),
                    (None, Some(needle)) => RaiseCondition::BodyContains(needle),
                    (Some(_), Some(_)) => {
                        return Err(ConfigError::InvalidOption {
                            component: name.to_string(),
                            option: "when_contains".to_string(),
                            reason: "cannot be combined with 'when_prefix'".to_string(),
                        })
                    }
                };
                Ok(Arc::new(RaiseErrorProcessor::new(kind, message, condition)))
            }

            _ => Err(ConfigError::UnknownProcessor {
                name: name.to_string(),
            }),
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "change_text_case_upper",
            "change_text_case_lower",
            "change_text_case_proper",
            "change_text_case_title",
            "reverse_text",
            "prefix_suffix_adder",
            "set_body",
            "raise_error",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

/// Factory for the built-in body predicates
pub struct LocalPredicateFactory;

impl LocalPredicateFactory {
    /// - "body_starts_with" / "body_contains" / "body_equals" -> BodyPredicate (option `value`)
    pub fn create_predicate(name: &str, options: &Options) -> Result<Arc<dyn Predicate>, ConfigError> {
        match name {
            "body_starts_with" => Ok(Arc::new(BodyPredicate::starts_with(required_string(
                name, options, "value",
            )?))),
            "body_contains" => Ok(Arc::new(BodyPredicate::contains(required_string(
                name, options, "value",
            )?))),
            "body_equals" => Ok(Arc::new(BodyPredicate::equals(required_string(
                name, options, "value",
            )?))),
            _ => Err(ConfigError::UnknownPredicate {
                name: name.to_string(),
            }),
        }
    }

    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["body_starts_with", "body_contains", "body_equals"]
    }
}

/// Factory for endpoints declared in config
pub struct LocalEndpointFactory;

impl LocalEndpointFactory {
    pub fn create_endpoint(config: &EndpointConfig) -> Arc<dyn Endpoint> {
        match config.endpoint_type {
            EndpointType::Recording => Arc::new(RecordingEndpoint::new(config.name.clone())),
            EndpointType::Log => Arc::new(LogEndpoint::new(config.name.clone())),
        }
    }
}

fn string_option(component: &str, options: &Options, key: &str) -> Result<Option<String>, ConfigError> {
    match options.get(key) {
        None => Ok(None),
        Some(serde_yaml::Value::String(value)) => Ok(Some(value.clone())),
        Some(serde_yaml::Value::Number(value)) => Ok(Some(value.to_string())),
        Some(serde_yaml::Value::Bool(value)) => Ok(Some(value.to_string())),
        Some(_) => Err(ConfigError::InvalidOption {
            component: component.to_string(),
            option: key.to_string(),
            reason: "expected a string".to_string(),
        }),
    }
}

fn required_string(component: &str, options: &Options, key: &str) -> Result<String, ConfigError> {
    string_option(component, options, key)?.ok_or_else(|| ConfigError::missing_option(component, key))
}
