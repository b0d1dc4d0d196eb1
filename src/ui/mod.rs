// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, the toast system, and the sound
//! preferences pane.

pub mod design_tokens;
pub mod notifications;
pub mod settings;
