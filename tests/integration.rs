// SPDX-License-Identifier: MPL-2.0
use iced_carte::catalog::{Catalog, DishId};
use iced_carte::config::{self, Config};
use iced_carte::i18n::fluent::I18n;
use iced_carte::ui::detail::{self, comment_form};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_catalog_round_trip_through_a_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.json");

    let json = r#"{
        "dishes": [
            {"id": 0, "name": "Vadonut", "image": "vadonut.png", "description": "Savory and sweet."}
        ],
        "comments": [
            {"id": 0, "dish_id": 0, "rating": 4, "author": "Ringo Starry", "body": "Reaching for the stars!", "date": "2013-12-02T17:57:28.556094Z"}
        ]
    }"#;
    std::fs::write(&path, json).expect("Failed to write catalog file");

    let content = std::fs::read_to_string(&path).expect("Failed to read catalog file");
    let catalog = Catalog::from_json(&content).expect("Failed to parse catalog");

    assert_eq!(catalog.dishes().len(), 1);
    let comments = catalog.comments_for(DishId(0)).expect("comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(
        detail::comment_list::format_long_date(&comments[0].date),
        "December 02, 2013"
    );
}

#[test]
fn test_submission_flow_end_to_end() {
    let mut catalog = Catalog::sample().expect("embedded sample catalog");
    let dish_id = catalog.dishes()[0].id;
    let before = catalog.comments_for(dish_id).expect("comments").len();

    let mut form = comment_form::State::new(dish_id);
    for message in [
        comment_form::Message::OpenModal,
        comment_form::Message::AuthorChanged("Ana".to_string()),
        comment_form::Message::RatingPicked(5),
        comment_form::Message::BodyChanged("Loved it".to_string()),
    ] {
        assert_eq!(
            detail::update(&mut form, detail::Message::Form(message)),
            detail::Event::None
        );
    }

    let event = detail::update(
        &mut form,
        detail::Message::Form(comment_form::Message::Submit),
    );
    let detail::Event::CommentSubmitted {
        dish_id,
        rating,
        author,
        body,
    } = event
    else {
        panic!("expected a submission event");
    };

    catalog.add_comment(dish_id, rating, &author, &body);

    let comments = catalog.comments_for(dish_id).expect("comments");
    assert_eq!(comments.len(), before + 1);
    let submitted = comments.last().expect("submitted comment");
    assert_eq!(submitted.author, "Ana");
    assert_eq!(submitted.rating, 5);
    assert_eq!(submitted.body, "Loved it");
    assert!(!form.is_open());

    // The stamped date renders through the same formatter as stored ones,
    // and reformatting is stable.
    let first = detail::comment_list::format_long_date(&submitted.date);
    let second = detail::comment_list::format_long_date(&submitted.date);
    assert_eq!(first, second);
    assert_ne!(first, submitted.date);
}
