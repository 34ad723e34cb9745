// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo screen.

use super::Message;
use crate::toast::Toaster;
use crate::ui::banner;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::platform::DesktopPlatform;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toaster: &'a Toaster<DesktopPlatform>,
    pub now: Instant,
}

/// Renders the demo buttons with the toast banner layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let queued = Text::new(format!("Queued: {}", ctx.toaster.queued_count()))
        .size(typography::BODY);

    let buttons = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(demo_button(
            "Show toast with single line text",
            Message::ShowSingleLine,
        ))
        .push(demo_button(
            "Show toast with multi line text",
            Message::ShowMultiLine,
        ))
        .push(demo_button("Show toast with image", Message::ShowWithImage))
        .push(demo_button("Show toast", Message::ShowPlain))
        .push(demo_button("Cancel next toasts", Message::CancelNext))
        .push(demo_button("Cancel all toasts", Message::CancelAll))
        .push(queued);

    let screen = Container::new(buttons)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, spacing::MD])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let overlay = banner::view(ctx.toaster, ctx.now, Message::Banner);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(overlay)
        .into()
}

fn demo_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .into()
}
