// SPDX-License-Identifier: MPL-2.0
//! Pure display card for the selected dish: image, name, description.
//!
//! No state, no validation, no messages. The image path is resolved against
//! the externally supplied assets base directory; reachability is not
//! checked here.

use crate::catalog::Dish;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, Column, Space, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(dish: Option<&'a Dish>, assets_base: &std::path::Path) -> Element<'a, M> {
    // Unreachable behind the Ready gate, but the fallback keeps this a
    // total function.
    let Some(dish) = dish else {
        return Space::new().into();
    };

    let image = Image::new(Handle::from_path(assets_base.join(&dish.image)))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT));

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(Text::new(&dish.name).size(typography::TITLE_MD))
        .push(Text::new(&dish.description).size(typography::BODY));

    container(Column::new().push(image).push(body))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}
