// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct together with the `Kind`
//! severity enum and the `Position` corner preference.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::str::FromStr;
use std::time::Duration;

/// Default display duration for a toast.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Unique identifier for a toast.
///
/// Allocated from a process-wide counter, so two toasts created in the
/// same instant still receive distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast kind, determining the accent color of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// Corner of the window where the toast overlay is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl FromStr for Position {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-right" => Ok(Position::BottomRight),
            other => Err(format!("invalid corner: {}", other)),
        }
    }
}

/// A transient notification shown to the user.
///
/// A toast is created, lives in the registry until it is removed (by its
/// expiry timer or an explicit call), and is never mutated in place.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    title: String,
    description: Option<String>,
    kind: Kind,
    duration: Duration,
}

impl Toast {
    /// Creates a new toast with the given kind and title.
    ///
    /// The duration defaults to [`DEFAULT_DURATION`]; use
    /// [`Toast::duration`] with `Duration::ZERO` for a toast that stays
    /// until explicitly removed.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            title: title.into(),
            description: None,
            kind,
            duration: DEFAULT_DURATION,
        }
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Adds a secondary description line.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the display duration. `Duration::ZERO` disables
    /// auto-removal entirely.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the title line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description line.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the toast kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the display duration (zero = sticky).
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.duration
    }
}
