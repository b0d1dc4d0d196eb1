// SPDX-License-Identifier: MPL-2.0
//! Sound preferences pane.
//!
//! Volume slider, mute toggle, and a test button for the shutter sound.
//! The pane renders from values passed in by the application root and
//! routes its messages straight into the shared sound settings.

use crate::sound;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use iced::widget::{button, checkbox, slider, Column, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages produced by the sound preferences pane.
#[derive(Debug, Clone)]
pub enum Message {
    VolumeChanged(u8),
    MuteToggled(bool),
    PlayTestSound,
}

/// Applies a pane message to the shared sound settings.
pub fn update(message: Message) {
    let settings = sound::settings();
    match message {
        Message::VolumeChanged(volume) => settings.set_volume(volume),
        Message::MuteToggled(muted) => settings.set_muted(muted),
        Message::PlayTestSound => settings.play_shutter_sound(),
    }
}

/// Renders the pane for the given current values.
pub fn view<'a>(volume: u8, muted: bool, save_pending: bool) -> Element<'a, Message> {
    let title = Text::new("Sound").size(typography::TITLE_LG);

    let volume_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Volume").size(typography::BODY))
        .push(
            slider(0..=sound::MAX_VOLUME, volume, Message::VolumeChanged)
                .width(Length::Fixed(sizing::SLIDER_WIDTH)),
        )
        .push(Text::new(format!("{volume}%")).size(typography::BODY));

    let mute_toggle = checkbox(muted)
        .label("Mute all sounds")
        .on_toggle(Message::MuteToggled);

    let test_button = button(Text::new("Play shutter sound").size(typography::BODY))
        .on_press(Message::PlayTestSound)
        .padding([6, 12]);

    let status_label = if save_pending { "Saving…" } else { "" };
    let status = Text::new(status_label)
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(Color {
                a: opacity::MUTED_TEXT,
                ..theme.palette().text
            }),
        });

    Column::new()
        .push(title)
        .push(volume_row)
        .push(mute_toggle)
        .push(test_button)
        .push(status)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
