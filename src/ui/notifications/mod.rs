// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions (settings saved, capture finished, errors) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` struct with kinds and corner positions
//! - [`registry`] - Process-wide `Registry` owning the active collection
//! - [`overlay`] - Widgets rendering the cards and the corner overlay
//!
//! # Usage
//!
//! ```ignore
//! use shutterbox::ui::notifications::{self, Toast};
//!
//! // Anywhere in the process: push a toast into the shared registry.
//! notifications::registry().show(Toast::success("Capture saved"));
//!
//! // In the view, render the overlay from a snapshot.
//! let overlay = notifications::overlay::view_overlay(&toasts, position)
//!     .map(Message::Notification);
//! ```

pub mod overlay;
mod registry;
mod toast;

pub use overlay::Message as OverlayMessage;
pub use registry::{registry, registry_at, Registry};
pub use toast::{Kind, Position, Toast, ToastId, DEFAULT_DURATION};
