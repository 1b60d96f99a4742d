// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // built-in processors, predicates, endpoints
pub mod config;     // config loading + router assembly
pub mod engine;     // dispatch + exception resolution
pub mod errors;     // error handling
pub mod message;    // the exchange envelope
pub mod observability;
pub mod routing;    // steps, scopes, routes
pub mod traits;     // external seams
