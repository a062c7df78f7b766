// SPDX-License-Identifier: MPL-2.0
//! The carousel: engine state machine, swipe interpretation, controls, and
//! the component tying them together.

pub mod component;
pub mod controls;
pub mod engine;
pub mod swipe;
