// SPDX-License-Identifier: MPL-2.0
//! The listing screen: one row per dish, navigating to the detail screen.

use crate::catalog::{Dish, DishId};
use crate::i18n::fluent::I18n;
use crate::ui::components::loading;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, scrollable, Column, Text};
use iced::{Element, Length};

/// Messages emitted by the menu screen.
#[derive(Debug, Clone)]
pub enum Message {
    DishSelected(DishId),
}

/// Contextual data needed to render the menu screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub dishes: Option<&'a [Dish]>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.loading {
        return loading::view(ctx.i18n);
    }

    if let Some(message) = ctx.error.filter(|msg| !msg.is_empty()) {
        return center(
            container(Text::new(message).size(typography::BODY))
                .padding(spacing::MD)
                .style(styles::container::error_banner),
        )
        .into();
    }

    let title = Text::new(ctx.i18n.tr("menu-title")).size(typography::TITLE_LG);

    let mut listing = Column::new().spacing(spacing::SM);
    match ctx.dishes {
        Some(dishes) if !dishes.is_empty() => {
            for dish in dishes {
                listing = listing.push(dish_row(dish));
            }
        }
        _ => {
            listing = listing.push(Text::new(ctx.i18n.tr("menu-empty")).size(typography::BODY));
        }
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(title)
        .push(listing);

    scrollable(content).into()
}

fn dish_row(dish: &Dish) -> Element<'_, Message> {
    let label = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&dish.name).size(typography::TITLE_SM))
        .push(Text::new(&dish.description).size(typography::CAPTION));

    button(label)
        .on_press(Message::DishSelected(dish.id))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::outline)
        .into()
}
