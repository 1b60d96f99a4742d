// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod prefix_suffix_adder;
pub mod raise_error;
pub mod reverse_text;
pub mod set_body;

pub use change_text_case::*;
pub use prefix_suffix_adder::*;
pub use raise_error::*;
pub use reverse_text::*;
pub use set_body::*;
