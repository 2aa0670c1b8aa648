// SPDX-License-Identifier: MPL-2.0
//! The comment column of the detail screen.
//!
//! Renders the dish's comments in exactly the order the caller supplies
//! (no sorting, filtering, or deduplication) and hosts the single comment
//! form trigger after the rows. An absent comment sequence renders an empty
//! placeholder; a present-but-empty one renders the header with zero rows.

use super::comment_form;
use crate::catalog::Comment;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use chrono::{DateTime, NaiveDate};
use iced::widget::{Column, Space, Text};
use iced::{Element, Length};

/// Display data for one comment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub body: &'a str,
    pub author: &'a str,
    pub date_label: String,
}

/// Format a stored date string as a long calendar date, e.g.
/// "October 16, 2014". The month name is fixed to English regardless of the
/// UI locale, so reformatting is stable.
///
/// An unparseable date is shown verbatim rather than dropping the row.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format("%B %d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %d, %Y").to_string();
    }
    raw.to_string()
}

/// Map comments to display rows, preserving order and multiplicity.
#[must_use]
pub fn display_rows(comments: &[Comment]) -> Vec<Row<'_>> {
    comments
        .iter()
        .map(|comment| Row {
            body: &comment.body,
            author: &comment.author,
            date_label: format_long_date(&comment.date),
        })
        .collect()
}

pub fn view<'a>(
    i18n: &'a I18n,
    comments: Option<&'a [Comment]>,
) -> Element<'a, comment_form::Message> {
    let Some(comments) = comments else {
        return Space::new().into();
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(Text::new(i18n.tr("detail-comments-title")).size(typography::TITLE_SM));

    for row in display_rows(comments) {
        let attribution = i18n.tr_with_args(
            "comment-attribution",
            &[("author", row.author), ("date", &row.date_label)],
        );
        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(row.body.to_string()).size(typography::BODY))
                .push(Text::new(attribution).size(typography::CAPTION)),
        );
    }

    column.push(comment_form::open_button(i18n)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DishId;

    fn comment(id: u32, author: &str, body: &str, date: &str) -> Comment {
        Comment {
            id,
            dish_id: DishId(0),
            rating: 4,
            author: author.to_string(),
            body: body.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn formats_rfc3339_as_long_date() {
        assert_eq!(
            format_long_date("2014-10-16T17:57:28.556094Z"),
            "October 16, 2014"
        );
        assert_eq!(format_long_date("2012-02-03T00:00:00Z"), "February 03, 2012");
    }

    #[test]
    fn formats_bare_dates_too() {
        assert_eq!(format_long_date("2015-09-05"), "September 05, 2015");
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        assert_eq!(format_long_date("not a date"), "not a date");
    }

    #[test]
    fn formatting_is_idempotent_across_calls() {
        let raw = "2013-12-02T17:57:28.556094Z";
        assert_eq!(format_long_date(raw), format_long_date(raw));
    }

    #[test]
    fn rows_preserve_order_and_multiplicity() {
        let comments = vec![
            comment(0, "Ana", "first", "2014-01-01T00:00:00Z"),
            comment(1, "Bob", "second", "2012-01-01T00:00:00Z"),
            comment(2, "Ana", "first", "2014-01-01T00:00:00Z"), // duplicate kept
        ];

        let rows = display_rows(&comments);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].body, "first");
        assert_eq!(rows[1].body, "second");
        assert_eq!(rows[0], rows[2]);
    }

    #[test]
    fn no_comments_means_no_rows() {
        assert!(display_rows(&[]).is_empty());
    }
}
