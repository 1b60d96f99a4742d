// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default cap on handler executions within one resolution when handlers cascade
pub const DEFAULT_MAX_RESOLUTION_ATTEMPTS: usize = 16;
/// Default cap on nested route calls within one dispatch
pub const DEFAULT_MAX_ROUTE_DEPTH: usize = 64;
