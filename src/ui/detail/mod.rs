// SPDX-License-Identifier: MPL-2.0
//! The dish detail screen.
//!
//! The screen is resolved to exactly one of four render modes from its
//! inputs (loading flag, upstream error, dish presence), recomputed on every
//! view pass with strict priority and no stored transitions. The Ready mode
//! composes the breadcrumb, the dish card, and the comment column with its
//! modal submission form.

pub mod comment_form;
pub mod comment_list;
pub mod item_panel;

use crate::catalog::{Comment, Dish, DishId};
use crate::i18n::fluent::I18n;
use crate::ui::breadcrumb;
use crate::ui::components::loading;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{center, container, scrollable, stack, Column, Row, Space, Text};
use iced::{Element, Length};
use std::path::Path;

/// The mutually exclusive top-level render state of the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a Dish),
    Empty,
}

/// Pick the render mode from the screen inputs. First match wins:
/// loading, then a non-empty upstream error, then a present dish, then
/// nothing. An empty error string counts as no error.
#[must_use]
pub fn resolve_mode<'a>(
    loading: bool,
    error: Option<&'a str>,
    dish: Option<&'a Dish>,
) -> ViewMode<'a> {
    if loading {
        ViewMode::Loading
    } else if let Some(message) = error.filter(|msg| !msg.is_empty()) {
        ViewMode::Error(message)
    } else if let Some(dish) = dish {
        ViewMode::Ready(dish)
    } else {
        ViewMode::Empty
    }
}

/// Messages for the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    Form(comment_form::Message),
    BackToMenu,
}

/// Events propagated to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Breadcrumb navigation back to the listing.
    BackToMenu,
    /// A validated comment to forward to the catalog sink.
    CommentSubmitted {
        dish_id: DishId,
        rating: u8,
        author: String,
        body: String,
    },
}

/// Process a detail screen message against the form state owned by this
/// screen instance and return the event for the root to act on.
pub fn update(form: &mut comment_form::State, message: Message) -> Event {
    match message {
        Message::Form(form_message) => match form.handle(form_message) {
            comment_form::Event::None => Event::None,
            comment_form::Event::Submitted {
                dish_id,
                rating,
                author,
                body,
            } => Event::CommentSubmitted {
                dish_id,
                rating,
                author,
                body,
            },
        },
        Message::BackToMenu => Event::BackToMenu,
    }
}

/// Contextual data needed to render the detail screen. All inputs are
/// borrowed, immutable for the duration of the render pass.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub dish: Option<&'a Dish>,
    pub comments: Option<&'a [Comment]>,
    pub assets_base: &'a Path,
    pub form: &'a comment_form::State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match resolve_mode(ctx.loading, ctx.error, ctx.dish) {
        ViewMode::Loading => loading::view(ctx.i18n),
        ViewMode::Error(message) => center(
            container(Text::new(message).size(typography::BODY))
                .padding(spacing::MD)
                .style(styles::container::error_banner),
        )
        .into(),
        ViewMode::Ready(dish) => view_ready(&ctx, dish),
        ViewMode::Empty => Space::new().into(),
    }
}

fn view_ready<'a>(ctx: &ViewContext<'a>, dish: &'a Dish) -> Element<'a, Message> {
    let trail = breadcrumb::trail(
        ctx.i18n.tr("breadcrumb-menu"),
        &dish.name,
        Message::BackToMenu,
    );

    let heading = Text::new(&dish.name).size(typography::TITLE_LG);

    let panels = Row::new()
        .spacing(spacing::LG)
        .push(item_panel::view(Some(dish), ctx.assets_base))
        .push(comment_list::view(ctx.i18n, ctx.comments).map(Message::Form));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(trail)
        .push(heading)
        .push(panels);

    let base: Element<'a, Message> = scrollable(content).into();

    if ctx.form.is_open() {
        stack![base, comment_form::modal(ctx.i18n, ctx.form).map(Message::Form)].into()
    } else {
        base
    }
}
