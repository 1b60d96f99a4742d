// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::TypedError;
use crate::message::Message;
use crate::traits::{Endpoint, Processor};

/// A processor that leaves the message alone and counts its invocations
pub struct CountingProcessor {
    pub id: String,
    calls: Arc<AtomicUsize>,
}

impl CountingProcessor {
    pub fn new(id: impl Into<String>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                id: id.into(),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Processor for CountingProcessor {
    fn process(&self, _message: &mut Message) -> Result<(), TypedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// An endpoint that rejects every delivery
pub struct FailingEndpoint {
    pub id: String,
    pub kind: String,
}

impl FailingEndpoint {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

impl Endpoint for FailingEndpoint {
    fn deliver(&self, _message: &Message) -> Result<(), TypedError> {
        Err(TypedError::new(
            self.kind.as_str(),
            format!("endpoint '{}' is unavailable", self.id),
        ))
    }

    fn name(&self) -> &str {
        &self.id
    }
}
