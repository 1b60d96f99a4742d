// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The exchange envelope carried through a dispatch.

use serde::Serialize;

use crate::errors::TypedError;

/// Terminal shape of a dispatch, derived from a message's failure fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every step ran and nothing was raised.
    Succeeded,
    /// Something was raised and a scope resolved it.
    HandledAndContinued,
    /// An exception terminated the exchange.
    Failed,
}

/// A message in flight.
///
/// Processors own `body`; the failure diagnostics are written only by the
/// engine. `failed` is monotonic within a dispatch and `exception` is present
/// exactly when `failed` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Message {
    body: String,
    failed: bool,
    exception: Option<TypedError>,
    caught_exception: Option<TypedError>,
    failure_route_id: Option<String>,
    route_history: Vec<String>,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// The exception that terminated the exchange.
    pub fn exception(&self) -> Option<&TypedError> {
        self.exception.as_ref()
    }

    /// The exception an error scope last attempted to resolve.
    pub fn caught_exception(&self) -> Option<&TypedError> {
        self.caught_exception.as_ref()
    }

    /// Route whose scope last attempted a resolution.
    pub fn failure_route_id(&self) -> Option<&str> {
        self.failure_route_id.as_deref()
    }

    /// Route ids entered during the dispatch, in order.
    pub fn route_history(&self) -> &[String] {
        &self.route_history
    }

    pub fn outcome(&self) -> Outcome {
        if self.failed {
            Outcome::Failed
        } else if self.caught_exception.is_some() {
            Outcome::HandledAndContinued
        } else {
            Outcome::Succeeded
        }
    }

    pub(crate) fn fail(&mut self, error: TypedError) {
        self.failed = true;
        self.exception = Some(error);
    }

    pub(crate) fn record_caught(&mut self, error: &TypedError, route_id: &str) {
        self.caught_exception = Some(error.clone());
        self.failure_route_id = Some(route_id.to_string());
    }

    pub(crate) fn record_route(&mut self, route_id: &str) {
        self.route_history.push(route_id.to_string());
    }
}

impl From<&str> for Message {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Message {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}
