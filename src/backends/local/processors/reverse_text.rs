// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TypedError;
use crate::message::Message;
use crate::traits::Processor;

/// Reverse Text processor - reverses the body
#[derive(Default)]
pub struct ReverseTextProcessor;

impl ReverseTextProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for ReverseTextProcessor {
    fn process(&self, message: &mut Message) -> Result<(), TypedError> {
        let reversed: String = message.body().chars().rev().collect();
        message.set_body(reversed);
        Ok(())
    }

    fn name(&self) -> &str {
        "reverse_text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_text() {
        let mut message = Message::new("grok");
        ReverseTextProcessor::new().process(&mut message).unwrap();
        assert_eq!(message.body(), "korg");
    }
}
