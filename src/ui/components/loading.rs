// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while the catalog is being fetched.
//!
//! The detail and menu screens delegate to this component whenever their
//! loading input is set; no other content is rendered in that mode.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use iced::widget::{center, Text};
use iced::Element;

/// Centered loading indicator, generic over the host's message type.
pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    center(Text::new(i18n.tr("loading-message")).size(typography::TITLE_SM)).into()
}
