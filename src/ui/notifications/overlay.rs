// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: individual cards and the corner-anchored overlay.
//!
//! Toasts appear as small cards with a kind-colored accent border and a
//! dismiss button, stacked vertically in the corner selected by the
//! registry's [`Position`].

use super::toast::{Position, Toast, ToastId};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

/// Renders a single toast card.
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let accent_color = toast.kind().color();

    let mut lines = Column::new().spacing(spacing::XXS).push(
        Text::new(toast.title())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );

    if let Some(description) = toast.description_text() {
        lines = lines.push(
            Text::new(description)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::MUTED_TEXT,
                        ..theme.palette().text
                    }),
                }),
        );
    }

    let dismiss_button = button(Text::new("\u{2715}").size(typography::CAPTION))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(lines).width(Length::Fill))
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the overlay with all active toasts, anchored at `position`.
pub fn view_overlay<'a>(toasts: &'a [Toast], position: Position) -> Element<'a, Message> {
    if toasts.is_empty() {
        // An empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let (align_x, align_y) = anchor(position);

    let toast_column = Column::with_children(toasts.iter().map(view_toast))
        .spacing(spacing::XS)
        .align_x(align_x);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::MD)
        .into()
}

/// Maps a corner preference to container alignment.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
