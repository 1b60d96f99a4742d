// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Route set configuration: file loading, structural validation and router assembly.

mod loader;
mod processor_map;
mod runtime;
mod validation;

pub mod consts;

pub use loader::{
    from_yaml_str, load_and_validate_config, load_config, BranchConfig, ChoiceConfig, Config,
    EndpointConfig, EndpointType, ErrorHandlingConfig, HandlerConfig, KindConfig, Options,
    PredicateConfig, ProcessConfig, RethrowPolicy, RouteConfig, RouterSettings,
    SharedScopeConfig, StepConfig, WhenConfig,
};
pub use processor_map::{Components, EndpointMap, PredicateMap, ProcessorMap};
pub use runtime::RuntimeBuilder;
pub use validation::validate_config;
