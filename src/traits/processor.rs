// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Seams for externally supplied business logic.
//!
//! Steps hold these behind `Arc` so one route definition can be shared by any
//! number of concurrent dispatches; implementations must therefore be
//! `Send + Sync` and keep no per-message state.

use crate::errors::TypedError;
use crate::message::Message;

/// A business step: rewrites the message or raises a typed exception.
pub trait Processor: Send + Sync {
    fn process(&self, message: &mut Message) -> Result<(), TypedError>;

    fn name(&self) -> &str;
}

/// A routing decision over the current message.
pub trait Predicate: Send + Sync {
    fn test(&self, message: &Message) -> bool;

    fn name(&self) -> &str;
}

/// Adapts a closure into a [`Processor`].
///
/// # Example
/// ```
/// use the_switchyard::message::Message;
/// use the_switchyard::traits::{FnProcessor, Processor};
///
/// let shout = FnProcessor::new("shout", |message: &mut Message| {
///     let loud = message.body().to_uppercase();
///     message.set_body(loud);
///     Ok(())
/// });
///
/// let mut message = Message::new("hello");
/// shout.process(&mut message).unwrap();
/// assert_eq!(message.body(), "HELLO");
/// ```
pub struct FnProcessor<F> {
    name: String,
    func: F,
}

impl<F> FnProcessor<F>
where
    F: Fn(&mut Message) -> Result<(), TypedError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Processor for FnProcessor<F>
where
    F: Fn(&mut Message) -> Result<(), TypedError> + Send + Sync,
{
    fn process(&self, message: &mut Message) -> Result<(), TypedError> {
        (self.func)(message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Adapts a closure into a [`Predicate`].
pub struct FnPredicate<F> {
    name: String,
    func: F,
}

impl<F> FnPredicate<F>
where
    F: Fn(&Message) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&Message) -> bool + Send + Sync,
{
    fn test(&self, message: &Message) -> bool {
        (self.func)(message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_processor_can_raise() {
        let grumpy = FnProcessor::new("grumpy", |_: &mut Message| -> Result<(), TypedError> {
            Err(TypedError::new("GrokException", "nope"))
        });

        let mut message = Message::new("grok");
        let error = grumpy.process(&mut message).unwrap_err();
        assert_eq!(error.kind().as_str(), "GrokException");
        assert_eq!(grumpy.name(), "grumpy");
    }

    #[test]
    fn test_fn_predicate() {
        let is_grokking = FnPredicate::new("is_grokking", |m: &Message| m.body().contains("grok"));
        assert!(is_grokking.test(&Message::new("let's grok")));
        assert!(!is_grokking.test(&Message::new("foobar")));
    }
}
