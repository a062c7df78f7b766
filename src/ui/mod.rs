// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: the carousel component and shared design tokens.

pub mod carousel;
pub mod design_tokens;
