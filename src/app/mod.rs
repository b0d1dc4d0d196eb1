// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct bridges the shared subsystems (toast registry, sound
//! settings) and the Iced view. Both subsystems are process-wide and
//! mutate from timer callbacks, so `App` keeps a snapshot of their state
//! that it refreshes after every message; a gated tick subscription
//! drives the refresh while anything can change in the background.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::sound;
use crate::ui;
use crate::ui::notifications::{self, OverlayMessage, Position, Toast};
use iced::widget::{Container, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 380;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    /// Snapshot of the active toasts, in display order.
    toasts: Vec<Toast>,
    /// Snapshot of the overlay corner preference.
    position: Position,
    /// Snapshot of the current volume (0-100).
    volume: u8,
    /// Snapshot of the mute state.
    muted: bool,
    /// Whether a settings flush is scheduled.
    save_pending: bool,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher: path overrides, the overlay corner, and the persisted
    /// sound preferences.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        if let Some(corner) = flags.corner {
            notifications::registry_at(corner);
        }

        // First access loads persisted values and builds the player.
        sound::settings();

        let mut app = App::default();
        app.sync_shared();
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Settings(msg) => ui::settings::update(msg),
            Message::Notification(OverlayMessage::Dismiss(id)) => {
                notifications::registry().remove(id);
            }
            Message::Tick(_) => {
                // Nothing to route; the refresh below observes whatever
                // the timer callbacks changed.
            }
        }

        self.sync_shared();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let pane =
            ui::settings::view(self.volume, self.muted, self.save_pending).map(Message::Settings);

        let overlay = notifications::overlay::view_overlay(&self.toasts, self.position)
            .map(Message::Notification);

        Stack::new()
            .push(
                Container::new(pane)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.toasts.is_empty(), self.save_pending)
    }

    fn title(&self) -> String {
        format!("Shutterbox {}", env!("CARGO_PKG_VERSION"))
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Re-reads the shared registry and settings into the snapshot the
    /// view renders from.
    fn sync_shared(&mut self) {
        let registry = notifications::registry();
        self.toasts = registry.toasts();
        self.position = registry.position();

        let settings = sound::settings();
        self.volume = settings.volume();
        self.muted = settings.muted();
        self.save_pending = settings.is_save_pending();
    }
}
