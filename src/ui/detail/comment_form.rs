// SPDX-License-Identifier: MPL-2.0
//! Modal comment submission form.
//!
//! The form is a two-state machine per detail screen instance: closed
//! (initial) or open with an editable draft. A fresh draft is created every
//! time the modal opens, so nothing carries over between openings. The only
//! effect crossing the component boundary is the [`Event::Submitted`]
//! returned from [`State::handle`] on a valid submit; cancelling never
//! produces one.

use crate::catalog::DishId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, container, mouse_area, opaque, pick_list, text_input, Column, Row, Text,
};
use iced::{Element, Length};

/// Author name must be at least this many characters.
pub const AUTHOR_MIN_LEN: usize = 3;
/// Author name must be at most this many characters.
pub const AUTHOR_MAX_LEN: usize = 15;

/// The closed enumeration of ratings the pick list offers. Input is
/// restricted to this set, so the draft needs no separate rating check.
pub const RATING_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];

/// In-progress, unsaved comment input held while the modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub rating: u8,
    pub author: String,
    pub body: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            // First pick-list entry, mirroring a freshly rendered select.
            rating: RATING_CHOICES[0],
            author: String::new(),
            body: String::new(),
        }
    }
}

/// Validation failures for the author field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorError {
    Required,
    TooShort,
    TooLong,
}

impl AuthorError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthorError::Required => "comment-error-author-required",
            AuthorError::TooShort => "comment-error-author-too-short",
            AuthorError::TooLong => "comment-error-author-too-long",
        }
    }
}

fn required(value: &str) -> bool {
    !value.is_empty()
}

fn min_length(value: &str, len: usize) -> bool {
    value.chars().count() >= len
}

fn max_length(value: &str, len: usize) -> bool {
    value.chars().count() <= len
}

/// Validate the author field. Rules are checked in order; the first
/// violation wins.
#[must_use]
pub fn validate_author(value: &str) -> Option<AuthorError> {
    if !required(value) {
        Some(AuthorError::Required)
    } else if !min_length(value, AUTHOR_MIN_LEN) {
        Some(AuthorError::TooShort)
    } else if !max_length(value, AUTHOR_MAX_LEN) {
        Some(AuthorError::TooLong)
    } else {
        None
    }
}

/// Messages for the comment form.
#[derive(Debug, Clone)]
pub enum Message {
    OpenModal,
    CloseModal,
    RatingPicked(u8),
    AuthorChanged(String),
    BodyChanged(String),
    Submit,
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A valid draft was submitted. Emitted at most once per open/close
    /// cycle, and only on the submit path.
    Submitted {
        dish_id: DishId,
        rating: u8,
        author: String,
        body: String,
    },
}

/// Comment form state, owned by one detail screen instance.
#[derive(Debug, Clone)]
pub struct State {
    dish_id: DishId,
    modal_open: bool,
    draft: Draft,
    /// Whether the author field has been interacted with. Errors are only
    /// shown once this is set, so a pristine form never flashes them.
    author_touched: bool,
    author_error: Option<AuthorError>,
}

impl State {
    #[must_use]
    pub fn new(dish_id: DishId) -> Self {
        Self {
            dish_id,
            modal_open: false,
            draft: Draft::default(),
            author_touched: false,
            author_error: None,
        }
    }

    /// Handle a form message.
    pub fn handle(&mut self, message: Message) -> Event {
        match message {
            Message::OpenModal => {
                self.draft = Draft::default();
                self.author_touched = false;
                self.author_error = None;
                self.modal_open = true;
                Event::None
            }
            Message::CloseModal => {
                self.modal_open = false;
                Event::None
            }
            Message::RatingPicked(rating) => {
                self.draft.rating = rating;
                Event::None
            }
            Message::AuthorChanged(value) => {
                self.draft.author = value;
                self.author_touched = true;
                self.author_error = validate_author(&self.draft.author);
                Event::None
            }
            Message::BodyChanged(value) => {
                self.draft.body = value;
                Event::None
            }
            Message::Submit => {
                self.author_touched = true;
                self.author_error = validate_author(&self.draft.author);
                if self.author_error.is_some() {
                    // Invalid draft: stay open, surface the inline error.
                    return Event::None;
                }

                let event = Event::Submitted {
                    dish_id: self.dish_id,
                    rating: self.draft.rating,
                    author: self.draft.author.clone(),
                    body: self.draft.body.clone(),
                };
                self.modal_open = false;
                event
            }
        }
    }

    #[must_use]
    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The author error to display, gated on the field having been touched.
    #[must_use]
    pub fn visible_author_error(&self) -> Option<AuthorError> {
        if self.author_touched {
            self.author_error
        } else {
            None
        }
    }
}

/// The trigger button that opens the modal, rendered inside the comment list.
pub fn open_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(i18n.tr("comment-form-open")).size(typography::BODY))
        .on_press(Message::OpenModal)
        .padding(spacing::XS)
        .style(styles::button::outline)
        .into()
}

/// The modal layer, stacked above the screen content while the form is
/// open. Clicking the dimmed backdrop closes the modal, same as cancel.
pub fn modal<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(center(opaque(modal_card(i18n, state))))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::modal_backdrop),
    )
    .on_press(Message::CloseModal);

    opaque(backdrop)
}

fn modal_card<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("comment-form-title")).size(typography::TITLE_MD);

    let rating_field = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("comment-form-rating")).size(typography::BODY))
        .push(
            pick_list(
                RATING_CHOICES,
                Some(state.draft().rating),
                Message::RatingPicked,
            )
            .width(Length::Fill),
        );

    let mut author_field = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("comment-form-author")).size(typography::BODY))
        .push(
            text_input(
                &i18n.tr("comment-form-author-placeholder"),
                &state.draft().author,
            )
            .on_input(Message::AuthorChanged),
        );
    if let Some(error) = state.visible_author_error() {
        author_field = author_field.push(
            Text::new(i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(crate::ui::design_tokens::palette::ERROR_500),
                }),
        );
    }

    let body_field = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("comment-form-body")).size(typography::BODY))
        .push(text_input("", &state.draft().body).on_input(Message::BodyChanged));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("comment-form-submit")).size(typography::BODY))
                .on_press(Message::Submit)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("comment-form-cancel")).size(typography::BODY))
                .on_press(Message::CloseModal)
                .style(styles::button::outline),
        );

    container(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(title)
            .push(rating_field)
            .push(author_field)
            .push(body_field)
            .push(actions),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .style(styles::container::modal_card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_form() -> State {
        let mut state = State::new(DishId(7));
        state.handle(Message::OpenModal);
        state
    }

    #[test]
    fn starts_closed_with_pristine_draft() {
        let state = State::new(DishId(1));
        assert!(!state.is_open());
        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.visible_author_error(), None);
    }

    #[test]
    fn empty_author_is_rejected_with_required() {
        let mut state = open_form();
        state.handle(Message::RatingPicked(3));
        state.handle(Message::BodyChanged("x".to_string()));

        let event = state.handle(Message::Submit);

        assert_eq!(event, Event::None);
        assert!(state.is_open());
        assert_eq!(state.visible_author_error(), Some(AuthorError::Required));
    }

    #[test]
    fn two_character_author_is_too_short() {
        let mut state = open_form();
        state.handle(Message::AuthorChanged("Al".to_string()));
        state.handle(Message::RatingPicked(4));

        let event = state.handle(Message::Submit);

        assert_eq!(event, Event::None);
        assert!(state.is_open());
        assert_eq!(state.visible_author_error(), Some(AuthorError::TooShort));
    }

    #[test]
    fn seventeen_character_author_is_too_long() {
        let mut state = open_form();
        state.handle(Message::AuthorChanged("Alexandria1234567".to_string()));
        state.handle(Message::RatingPicked(2));
        state.handle(Message::BodyChanged("great".to_string()));

        let event = state.handle(Message::Submit);

        assert_eq!(event, Event::None);
        assert!(state.is_open());
        assert_eq!(state.visible_author_error(), Some(AuthorError::TooLong));
    }

    #[test]
    fn valid_draft_submits_once_and_closes() {
        let mut state = open_form();
        state.handle(Message::AuthorChanged("Ana".to_string()));
        state.handle(Message::RatingPicked(5));
        state.handle(Message::BodyChanged("Loved it".to_string()));

        let event = state.handle(Message::Submit);

        assert_eq!(
            event,
            Event::Submitted {
                dish_id: DishId(7),
                rating: 5,
                author: "Ana".to_string(),
                body: "Loved it".to_string(),
            }
        );
        assert!(!state.is_open());
    }

    #[test]
    fn empty_body_is_accepted() {
        let mut state = open_form();
        state.handle(Message::AuthorChanged("Ana".to_string()));

        let event = state.handle(Message::Submit);

        assert!(matches!(event, Event::Submitted { body, .. } if body.is_empty()));
    }

    #[test]
    fn cancel_never_emits_an_event() {
        let mut state = open_form();
        state.handle(Message::AuthorChanged("Ana".to_string()));
        state.handle(Message::BodyChanged("draft to discard".to_string()));

        let event = state.handle(Message::CloseModal);

        assert_eq!(event, Event::None);
        assert!(!state.is_open());
    }

    #[test]
    fn reopening_discards_the_previous_draft() {
        let mut state = open_form();
        state.handle(Message::AuthorChanged("Al".to_string()));
        state.handle(Message::Submit);
        state.handle(Message::CloseModal);

        state.handle(Message::OpenModal);

        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.visible_author_error(), None);
    }

    #[test]
    fn errors_are_hidden_until_the_field_is_touched() {
        let mut state = open_form();
        // Author is empty (invalid), but the field was never interacted with.
        assert_eq!(state.visible_author_error(), None);

        state.handle(Message::AuthorChanged("A".to_string()));
        assert_eq!(state.visible_author_error(), Some(AuthorError::TooShort));

        // Live re-validation clears the error as the user types.
        state.handle(Message::AuthorChanged("Ana".to_string()));
        assert_eq!(state.visible_author_error(), None);
    }

    #[test]
    fn validate_author_checks_rules_in_order() {
        assert_eq!(validate_author(""), Some(AuthorError::Required));
        assert_eq!(validate_author("Al"), Some(AuthorError::TooShort));
        assert_eq!(validate_author("Ana"), None);
        assert_eq!(validate_author("FifteenCharName"), None); // exactly 15
        assert_eq!(
            validate_author("SixteenCharNames"),
            Some(AuthorError::TooLong)
        );
    }
}
