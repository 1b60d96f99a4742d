// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::backends::local::{LocalPredicateFactory, LocalProcessorFactory};
use crate::config::Options;
use crate::errors::ConfigError;
use crate::traits::{Endpoint, Predicate, Processor};

/// A registry mapping processor names to caller-supplied implementations.
///
/// Names registered here shadow the built-in local processors of the same
/// name, which is how business logic is injected into configured routes.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use the_switchyard::config::ProcessorMap;
/// use the_switchyard::errors::TypedError;
/// use the_switchyard::message::Message;
/// use the_switchyard::traits::{FnProcessor, Processor};
///
/// let mut processors = ProcessorMap::new();
/// let stamp: Arc<dyn Processor> = Arc::new(FnProcessor::new("stamp", |m: &mut Message| -> Result<(), TypedError> {
///     m.set_body(format!("{}_stamped", m.body()));
///     Ok(())
/// }));
/// processors.insert("stamp".to_string(), stamp);
///
/// assert!(processors.contains_key("stamp"));
/// assert_eq!(processors.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct ProcessorMap(pub HashMap<String, Arc<dyn Processor>>);

impl ProcessorMap {
    /// Create a new empty processor map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a processor into the map
    pub fn insert(&mut self, name: String, processor: Arc<dyn Processor>) {
        self.0.insert(name, processor);
    }

    /// Get a processor by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Processor>> {
        self.0.get(name)
    }

    /// Check if a processor exists
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Get all processor names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ProcessorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorMap")
            .field("processor_count", &self.0.len())
            .field("processor_names", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Processor>>> for ProcessorMap {
    fn from(map: HashMap<String, Arc<dyn Processor>>) -> Self {
        Self(map)
    }
}

/// Caller-supplied predicates, keyed by name.
#[derive(Clone, Default)]
pub struct PredicateMap(pub HashMap<String, Arc<dyn Predicate>>);

impl PredicateMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, name: String, predicate: Arc<dyn Predicate>) {
        self.0.insert(name, predicate);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Predicate>> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for PredicateMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateMap")
            .field("predicate_names", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Caller-supplied endpoints, keyed by their own name.
#[derive(Clone, Default)]
pub struct EndpointMap(pub HashMap<String, Arc<dyn Endpoint>>);

impl EndpointMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert an endpoint under [`Endpoint::name`].
    pub fn insert(&mut self, endpoint: Arc<dyn Endpoint>) {
        self.0.insert(endpoint.name().to_string(), endpoint);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Endpoint>> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<dyn Endpoint>> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for EndpointMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointMap")
            .field("endpoint_names", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Everything a configuration can refer to by name that is not declared in it.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub processors: ProcessorMap,
    pub predicates: PredicateMap,
    pub endpoints: EndpointMap,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processor(mut self, name: impl Into<String>, processor: Arc<dyn Processor>) -> Self {
        self.processors.insert(name.into(), processor);
        self
    }

    pub fn with_predicate(mut self, name: impl Into<String>, predicate: Arc<dyn Predicate>) -> Self {
        self.predicates.insert(name.into(), predicate);
        self
    }

    pub fn with_endpoint(mut self, endpoint: Arc<dyn Endpoint>) -> Self {
        self.endpoints.insert(endpoint);
        self
    }

    /// Resolve a processor: registered names first, then the local built-ins.
    pub fn processor(&self, name: &str, options: &Options) -> Result<Arc<dyn Processor>, ConfigError> {
        match self.processors.get(name) {
            Some(processor) => Ok(Arc::clone(processor)),
            None => LocalProcessorFactory::create_processor(name, options),
        }
    }

    /// Resolve a predicate: registered names first, then the local built-ins.
    pub fn predicate(&self, name: &str, options: &Options) -> Result<Arc<dyn Predicate>, ConfigError> {
        match self.predicates.get(name) {
            Some(predicate) => Ok(Arc::clone(predicate)),
            None => LocalPredicateFactory::create_predicate(name, options),
        }
    }
}
