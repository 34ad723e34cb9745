// SPDX-License-Identifier: MPL-2.0
//! Banner widget for rendering the toast on screen.
//!
//! The banner is drawn as a full-width card clipped to the part of its frame
//! that is below the top edge, so sliding the frame upward reveals less of
//! it. Pointer events over the banner are reported as [`SwipeEvent`]s so the
//! host can dismiss it on a tap or an upward swipe.

use super::platform::DesktopPlatform;
use super::swipe::SwipeEvent;
use crate::toast::{
    Clock, FontSpec, Heights, Insets, Metrics, ScreenGeometry, TextAlignment, ToastRequest,
    Toaster,
};
use iced::border::Radius;
use iced::widget::image::Image;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Renders the toast currently owned by `toaster`, or nothing.
pub fn view<'a, C, Message, F>(
    toaster: &'a Toaster<DesktopPlatform<C>>,
    now: Instant,
    on_swipe: F,
) -> Element<'a, Message>
where
    C: Clock,
    Message: Clone + 'a,
    F: Fn(SwipeEvent) -> Message + Copy + 'a,
{
    let (Some(request), Some(surface)) = (toaster.current(), toaster.surface()) else {
        return empty();
    };
    if surface.is_hidden() {
        return empty();
    }

    let frame = surface.frame_at(now);
    let visible_height = (frame.height + frame.y).max(0.0);
    let insets = toaster.platform().safe_area_insets();
    let metrics = toaster.metrics();
    let heights = toaster.heights();
    let style = request.style();

    let text_column = text_column(request, heights, metrics, insets);

    let mut content = Row::new().width(Length::Fill);
    let body = if let Some(handle) = request.image() {
        let scale = if style.image_animation {
            surface.image_scale(now)
        } else {
            1.0
        };
        let side = metrics.image_side(heights.message) * scale;
        let image_top = metrics.top_padding(insets)
            + if request.title().is_some() {
                metrics.vertical_spacing + heights.title
            } else {
                0.0
            };
        let image = Container::new(
            Image::new(handle.clone())
                .width(Length::Fixed(side))
                .height(Length::Fixed(side)),
        )
        .width(Length::Fixed(metrics.image_side_reservation))
        .align_x(alignment::Horizontal::Center)
        .padding(Padding {
            top: image_top,
            ..Padding::ZERO
        });

        let text_padding = side_padding(metrics, true, style.image_on_trailing_side());
        let text_part = Container::new(text_column)
            .width(Length::Fill)
            .padding(text_padding);
        if style.image_on_trailing_side() {
            content = content.push(text_part).push(image);
        } else {
            content = content.push(image).push(text_part);
        }
        Container::new(content)
    } else {
        let text_part = Container::new(text_column)
            .width(Length::Fill)
            .padding(side_padding(metrics, false, true));
        Container::new(content.push(text_part))
    };

    let background = style.background;
    let corner_radius = style.corner_radius;
    let banner = body
        .width(Length::Fill)
        .height(Length::Fixed(heights.total))
        .padding(Padding {
            left: insets.left,
            right: insets.right,
            ..Padding::ZERO
        })
        .style(move |_theme: &Theme| banner_style(background, corner_radius));

    let revealed = Container::new(banner)
        .width(Length::Fill)
        .height(Length::Fixed(visible_height))
        .align_y(alignment::Vertical::Bottom)
        .clip(true);

    mouse_area(revealed)
        .on_press(on_swipe(SwipeEvent::Pressed))
        .on_release(on_swipe(SwipeEvent::Released))
        .on_exit(on_swipe(SwipeEvent::Exited))
        .on_move(move |position| on_swipe(SwipeEvent::Moved(position)))
        .into()
}

fn text_column<'a, Message: 'a>(
    request: &'a ToastRequest,
    heights: Heights,
    metrics: &Metrics,
    insets: Insets,
) -> Column<'a, Message> {
    let style = request.style();
    let mut column = Column::new()
        .spacing(metrics.vertical_spacing)
        .padding(Padding {
            top: metrics.top_padding(insets),
            bottom: metrics.bottom_padding,
            ..Padding::ZERO
        });

    if let Some(title) = request.title() {
        column = column.push(label(
            title,
            &style.title_font,
            style.title_color,
            style.title_alignment,
            heights.title,
        ));
    }
    column.push(label(
        request.message(),
        &style.message_font,
        style.message_color,
        style.message_alignment,
        heights.message,
    ))
}

fn label<'a, Message: 'a>(
    content: &'a str,
    font: &FontSpec,
    color: Color,
    alignment: TextAlignment,
    height: f32,
) -> Element<'a, Message> {
    let text = Text::new(content)
        .size(font.size)
        .font(font.font)
        .color(color)
        .align_x(alignment.to_horizontal())
        .width(Length::Fill);

    Container::new(text)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

/// Padding around the text: the image side reserves the image column.
fn side_padding(metrics: &Metrics, has_image: bool, image_on_trailing_side: bool) -> Padding {
    let image_side = if has_image {
        0.0
    } else {
        metrics.horizontal_padding
    };
    let (left, right) = if image_on_trailing_side {
        (metrics.horizontal_padding, image_side)
    } else {
        (image_side, metrics.horizontal_padding)
    };
    Padding {
        left,
        right,
        ..Padding::ZERO
    }
}

/// Style function for the banner card: flat top, rounded bottom corners.
fn banner_style(background: Color, corner_radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: corner_radius,
                bottom_left: corner_radius,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn empty<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastStyle;
    use crate::ui::design_tokens::DesignTokens;

    #[test]
    fn banner_style_rounds_only_bottom_corners() {
        let style = banner_style(Color::BLACK, 21.0);
        assert_eq!(style.border.radius.top_left, 0.0);
        assert_eq!(style.border.radius.top_right, 0.0);
        assert_eq!(style.border.radius.bottom_left, 21.0);
        assert_eq!(style.border.radius.bottom_right, 21.0);
        assert!(style.background.is_some());
    }

    #[test]
    fn side_padding_reserves_nothing_on_image_side() {
        let metrics = Metrics::default();
        let trailing = side_padding(&metrics, true, true);
        assert_eq!(trailing.left, metrics.horizontal_padding);
        assert_eq!(trailing.right, 0.0);

        let leading = side_padding(&metrics, true, false);
        assert_eq!(leading.left, 0.0);
        assert_eq!(leading.right, metrics.horizontal_padding);
    }

    #[test]
    fn side_padding_is_symmetric_without_image() {
        let metrics = Metrics::default();
        let padding = side_padding(&metrics, false, true);
        assert_eq!(padding.left, padding.right);
    }

    #[test]
    fn banner_uses_preset_background() {
        let style = ToastStyle::mars(&DesignTokens);
        let card = banner_style(style.background, style.corner_radius);
        assert_eq!(card.background, Some(Background::Color(style.background)));
    }
}
