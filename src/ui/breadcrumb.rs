// SPDX-License-Identifier: MPL-2.0
//! Breadcrumb trail for screen navigation.
//!
//! Purely presentational: a link back to the parent listing plus a terminal
//! entry naming the current item. The link's message is supplied by the
//! caller, so the widget stays generic over the host's message type.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Row, Text};
use iced::Element;

pub fn trail<'a, M: Clone + 'a>(
    parent_label: String,
    current: &'a str,
    on_parent: M,
) -> Element<'a, M> {
    let parent = button(Text::new(parent_label).size(typography::BODY))
        .on_press(on_parent)
        .padding(0)
        .style(styles::button::link);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(parent)
        .push(Text::new("/").size(typography::BODY))
        .push(Text::new(current).size(typography::BODY))
        .into()
}
