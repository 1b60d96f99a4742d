// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TypedError;
use crate::message::Message;
use crate::traits::Processor;

/// Replaces the body with a fixed value.
pub struct SetBodyProcessor {
    value: String,
}

impl SetBodyProcessor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Processor for SetBodyProcessor {
    fn process(&self, message: &mut Message) -> Result<(), TypedError> {
        message.set_body(self.value.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "set_body"
    }
}
