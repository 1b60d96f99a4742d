// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::errors::TypedError;
use crate::message::Message;
use crate::traits::Endpoint;

/// Keeps every delivered body, in delivery order.
///
/// The in-memory counterpart of a mock endpoint: tests and the CLI read back
/// what reached it.
///
/// # Example
/// ```
/// use the_switchyard::backends::local::RecordingEndpoint;
/// use the_switchyard::message::Message;
/// use the_switchyard::traits::Endpoint;
///
/// let endpoint = RecordingEndpoint::new("mock:end");
/// endpoint.deliver(&Message::new("foo")).unwrap();
///
/// assert_eq!(endpoint.received(), vec!["foo".to_string()]);
/// ```
pub struct RecordingEndpoint {
    name: String,
    received: Mutex<Vec<String>>,
}

impl RecordingEndpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Bodies delivered so far.
    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count(&self) -> usize {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn reset(&self) {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Endpoint for RecordingEndpoint {
    fn deliver(&self, message: &Message) -> Result<(), TypedError> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.body().to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Logs each delivery and discards the message.
pub struct LogEndpoint {
    name: String,
}

impl LogEndpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Endpoint for LogEndpoint {
    fn deliver(&self, message: &Message) -> Result<(), TypedError> {
        tracing::info!(
            endpoint = %self.name,
            body_size = message.body().len(),
            "Delivered to '{}': {}",
            self.name,
            message.body()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
