// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::errors::TypedError;
use crate::message::Message;
use crate::traits::Processor;

/// Target case for [`ChangeTextCaseProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    Upper,
    Lower,
    Proper,
    Title,
}

/// Change Text Case processor - converts the body to a different case
pub struct ChangeTextCaseProcessor {
    case: TextCase,
}

impl ChangeTextCaseProcessor {
    pub fn new(case: TextCase) -> Self {
        Self { case }
    }

    pub fn upper() -> Self {
        Self::new(TextCase::Upper)
    }

    pub fn lower() -> Self {
        Self::new(TextCase::Lower)
    }

    pub fn proper() -> Self {
        Self::new(TextCase::Proper)
    }

    pub fn title() -> Self {
        Self::new(TextCase::Title)
    }

    fn convert(&self, text: &str) -> String {
        match self.case {
            TextCase::Upper => text.to_uppercase(),
            TextCase::Lower => text.to_lowercase(),
            TextCase::Proper => text
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TextCase::Title => text
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    if i > 0 && is_minor_word(word) {
                        word.to_lowercase()
                    } else {
                        capitalize(word)
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn is_minor_word(word: &str) -> bool {
    matches!(
        word.to_lowercase().as_str(),
        "a" | "an" | "and" | "as" | "at" | "but" | "by" | "for" | "in" | "of" | "on" | "or"
            | "the" | "to"
    )
}

impl Processor for ChangeTextCaseProcessor {
    fn process(&self, message: &mut Message) -> Result<(), TypedError> {
        let converted = self.convert(message.body());
        message.set_body(converted);
        Ok(())
    }

    fn name(&self) -> &str {
        match self.case {
            TextCase::Upper => "change_text_case_upper",
            TextCase::Lower => "change_text_case_lower",
            TextCase::Proper => "change_text_case_proper",
            TextCase::Title => "change_text_case_title",
        }
    }
}
