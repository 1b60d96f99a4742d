// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::message::Message;
use crate::traits::Predicate;

/// How a [`BodyPredicate`] compares the body with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMatch {
    StartsWith,
    Contains,
    Equals,
}

/// Tests the message body against a fixed string.
pub struct BodyPredicate {
    mode: BodyMatch,
    value: String,
}

impl BodyPredicate {
    pub fn new(mode: BodyMatch, value: impl Into<String>) -> Self {
        Self {
            mode,
            value: value.into(),
        }
    }

    pub fn starts_with(value: impl Into<String>) -> Self {
        Self::new(BodyMatch::StartsWith, value)
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(BodyMatch::Contains, value)
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::new(BodyMatch::Equals, value)
    }
}

impl Predicate for BodyPredicate {
    fn test(&self, message: &Message) -> bool {
        let body = message.body();
        match self.mode {
            BodyMatch::StartsWith => body.starts_with(self.value.as_str()),
            BodyMatch::Contains => body.contains(self.value.as_str()),
            BodyMatch::Equals => body == self.value,
        }
    }

    fn name(&self) -> &str {
        match self.mode {
            BodyMatch::StartsWith => "body_starts_with",
            BodyMatch::Contains => "body_contains",
            BodyMatch::Equals => "body_equals",
        }
    }
}
