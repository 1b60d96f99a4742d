// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TypedError;
use crate::message::Message;

/// An opaque named destination a route can hand messages to.
///
/// How the message physically leaves the process is the implementor's
/// concern. A delivery failure is a business exception like any other step.
pub trait Endpoint: Send + Sync {
    fn deliver(&self, message: &Message) -> Result<(), TypedError>;

    fn name(&self) -> &str;
}
