// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{Kind, TypedError};
use crate::message::Message;
use crate::traits::Processor;

/// When a [`RaiseErrorProcessor`] fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaiseCondition {
    Always,
    BodyStartsWith(String),
    BodyContains(String),
}

impl RaiseCondition {
    fn holds(&self, body: &str) -> bool {
        match self {
            RaiseCondition::Always => true,
            RaiseCondition::BodyStartsWith(prefix) => body.starts_with(prefix.as_str()),
            RaiseCondition::BodyContains(needle) => body.contains(needle.as_str()),
        }
    }
}

/// Raises a typed exception, optionally only for matching bodies.
///
/// The stand-in for business logic that rejects a message.
///
/// # Example
/// ```
/// use the_switchyard::backends::local::{RaiseCondition, RaiseErrorProcessor};
/// use the_switchyard::message::Message;
/// use the_switchyard::traits::Processor;
///
/// let processor = RaiseErrorProcessor::new(
///     "FooBarException",
///     "can't handle the message",
///     RaiseCondition::BodyStartsWith("error".to_string()),
/// );
///
/// assert!(processor.process(&mut Message::new("fine")).is_ok());
/// let error = processor.process(&mut Message::new("error")).unwrap_err();
/// assert_eq!(error.kind().as_str(), "FooBarException");
/// ```
pub struct RaiseErrorProcessor {
    kind: Kind,
    message: String,
    condition: RaiseCondition,
}

impl RaiseErrorProcessor {
    pub fn new(
        kind: impl Into<Kind>,
        message: impl Into<String>,
        condition: RaiseCondition,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            condition,
        }
    }

    pub fn always(kind: impl Into<Kind>, message: impl Into<String>) -> Self {
        Self::new(kind, message, RaiseCondition::Always)
    }
}

impl Processor for RaiseErrorProcessor {
    fn process(&self, message: &mut Message) -> Result<(), TypedError> {
        if self.condition.holds(message.body()) {
            return Err(TypedError::new(self.kind.clone(), self.message.clone()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "raise_error"
    }
}
