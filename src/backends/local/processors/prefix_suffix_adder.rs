// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::errors::TypedError;
use crate::message::Message;
use crate::traits::Processor;

/// Configuration for the Prefix/Suffix Adder processor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PrefixSuffixConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Prefix/Suffix Adder processor - wraps the body in a prefix and/or suffix
pub struct PrefixSuffixAdderProcessor {
    config: PrefixSuffixConfig,
}

impl PrefixSuffixAdderProcessor {
    pub fn new(config: PrefixSuffixConfig) -> Self {
        Self { config }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix.into()),
            suffix: None,
        })
    }

    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: None,
            suffix: Some(suffix.into()),
        })
    }

    pub fn with_prefix_and_suffix(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix.into()),
            suffix: Some(suffix.into()),
        })
    }
}

impl Processor for PrefixSuffixAdderProcessor {
    fn process(&self, message: &mut Message) -> Result<(), TypedError> {
        let mut result = String::new();

        if let Some(prefix) = &self.config.prefix {
            result.push_str(prefix);
        }

        result.push_str(message.body());

        if let Some(suffix) = &self.config.suffix {
            result.push_str(suffix);
        }

        message.set_body(result);
        Ok(())
    }

    fn name(&self) -> &str {
        "prefix_suffix_adder"
    }
}
