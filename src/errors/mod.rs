// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod dispatch;
mod taxonomy;
mod typed;

pub use config::ConfigError;
pub use dispatch::RouterError;
pub use taxonomy::Taxonomy;
pub use typed::{Kind, TypedError};
