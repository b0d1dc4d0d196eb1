// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{OverlayMessage, Position};
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    Notification(OverlayMessage),
    /// Periodic tick to observe shared state (toast expiry, save flush).
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional corner for the toast overlay (e.g. `top-left`).
    pub corner: Option<Position>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `SHUTTERBOX_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
