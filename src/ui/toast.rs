// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the published snapshot.
//!
//! Each toast is a small card with a category-colored border, its message, an
//! optional action button and a dismiss button. The overlay stacks every card
//! at the offsets computed by the reconciler.

use crate::domain::toast::{Category, Notification, ToastId};
use crate::reconciler::ToastView;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Messages emitted by toast cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Dismiss(ToastId),
    Action(ToastId),
    /// Pointer pressed on the card body; starts a swipe.
    Pressed(ToastId),
}

/// Average glyph advance relative to the font size, used for height estimates.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

const DISMISS_GLYPH: &str = "\u{2715}";

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view<'a, A>(toast: &'a Notification<A>, dragging: bool) -> Element<'a, Message> {
        let accent_color = accent(toast.category());
        let id = toast.id().clone();

        let glyph = Text::new(category_glyph(toast.category()))
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(toast.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut body = Column::new().spacing(spacing::XS).push(message_widget);
        if let Some(label) = toast.action_label() {
            body = body.push(
                button(text(label).size(typography::CAPTION))
                    .on_press(Message::Action(id.clone()))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| action_button_style(theme, status, accent_color)),
            );
        }

        let dismiss_label = toast.dismiss_label().unwrap_or(DISMISS_GLYPH);
        let dismiss_button = button(text(dismiss_label).size(sizing::ICON_SM))
            .on_press(Message::Dismiss(id.clone()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [message + action] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, dragging));

        mouse_area(card).on_press(Message::Pressed(id)).into()
    }

    /// Renders every toast at its reconciled offset.
    ///
    /// Cards are centered horizontally in `screen_width` and shifted by their
    /// swipe offset. Offsets above or left of the window are clamped to its
    /// edge.
    pub fn view_overlay<'a, A>(
        views: Vec<ToastView<'a, A>>,
        screen_width: f32,
        dragging: Option<&ToastId>,
    ) -> Element<'a, Message> {
        if views.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        // Later children draw on top; the newest toast sits first in the snapshot.
        let cards = views.into_iter().rev().map(|view| {
            let is_dragging = dragging == Some(view.toast.id());
            Container::new(Self::view(view.toast, is_dragging))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Top)
                .padding(card_padding(view.x, view.y, screen_width))
                .into()
        });

        Stack::with_children(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Height the card will take once laid out, used until a real measurement exists.
#[must_use]
pub fn estimated_height<A>(toast: &Notification<A>) -> f32 {
    let text_width = sizing::TOAST_WIDTH
        - 2.0 * spacing::SM
        - 2.0 * spacing::SM
        - (typography::TITLE_SM + 2.0 * spacing::XXS)
        - (sizing::ICON_SM + 2.0 * spacing::XXS);
    let glyph_width = typography::BODY * GLYPH_WIDTH_RATIO;
    let chars_per_line = (text_width / glyph_width).floor().max(1.0);
    let lines = (toast.message().chars().count() as f32 / chars_per_line)
        .ceil()
        .max(1.0);

    let mut height = 2.0 * spacing::SM + lines * typography::BODY * typography::LINE_HEIGHT;
    if toast.action_label().is_some() {
        height += spacing::XS + typography::CAPTION * typography::LINE_HEIGHT + 2.0 * spacing::XXS;
    }
    height
}

fn card_padding(x: f32, y: f32, screen_width: f32) -> Padding {
    let centered = (screen_width - sizing::TOAST_WIDTH) / 2.0;
    Padding {
        top: y.max(0.0),
        left: (centered + x).max(0.0),
        right: 0.0,
        bottom: 0.0,
    }
}

fn accent(category: Category) -> Color {
    match category {
        Category::Success => palette::SUCCESS_500,
        Category::Error => palette::ERROR_500,
        Category::Warning => palette::WARNING_500,
        Category::Info => palette::INFO_500,
    }
}

fn category_glyph(category: Category) -> &'static str {
    match category {
        Category::Success => "\u{2714}",
        Category::Error => "\u{2716}",
        Category::Warning => "!",
        Category::Info => "i",
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, dragging: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let bg_color = if dragging {
        Color {
            a: opacity::DRAGGING,
            ..base
        }
    } else {
        base
    };

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

fn action_button_style(theme: &Theme, status: button::Status, accent_color: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let fill = match status {
        button::Status::Active => opacity::OVERLAY_SUBTLE,
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        button::Status::Disabled => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(iced::Background::Color(Color {
            a: fill,
            ..accent_color
        })),
        text_color: base.text,
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
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
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: if status == button::Status::Pressed {
                    opacity::OVERLAY_MEDIUM
                } else {
                    opacity::OVERLAY_SUBTLE
                },
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
