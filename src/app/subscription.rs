// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for observing shared state.
///
/// The registry and the settings writer mutate their state from timer
/// callbacks; the tick makes the UI re-read both. It only runs while
/// something can actually change (live toasts or a pending save), so an
/// idle window schedules nothing.
pub fn create_tick_subscription(has_toasts: bool, save_pending: bool) -> Subscription<Message> {
    if has_toasts || save_pending {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
