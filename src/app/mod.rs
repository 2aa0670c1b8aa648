// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the menu and detail
//! screens.
//!
//! The `App` struct owns the catalog store, the loading/error signals from
//! the startup fetch, and the per-detail-screen comment form. It translates
//! component events into navigation and catalog mutations, keeping a single
//! update entrypoint so user-facing behavior is easy to audit.

mod message;
mod screen;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::detail::{self, comment_form};
use crate::ui::menu;
use iced::{window, Element, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Directory the dish image paths are resolved against.
const ASSETS_BASE: &str = "assets/images";

/// Root Iced application state bridging UI components, localization, and
/// the catalog store.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: Option<Catalog>,
    /// True while the startup catalog fetch is in flight.
    loading: bool,
    /// Upstream error message shown verbatim by the error render mode.
    load_error: Option<String>,
    /// Comment form for the current detail screen. Re-created on every
    /// navigation into a detail screen, so each instance owns its own
    /// modal and draft state.
    form: comment_form::State,
    assets_base: PathBuf,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Menu,
            catalog: None,
            loading: false,
            load_error: None,
            form: comment_form::State::new(crate::catalog::DishId(0)),
            assets_base: PathBuf::from(ASSETS_BASE),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous catalog
    /// fetch based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            loading: true,
            ..Self::default()
        };

        let path = flags.catalog_path.map(PathBuf::from);
        let task = Task::perform(Catalog::load(path), Message::CatalogLoaded);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if let Screen::Detail(id) = self.screen {
            if let Some(dish) = self.catalog.as_ref().and_then(|c| c.dish(id)) {
                return format!("{} - {app_name}", dish.name);
            }
        }

        app_name
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.loading = false;
                self.load_error = None;
                self.catalog = Some(catalog);
            }
            Message::CatalogLoaded(Err(error)) => {
                self.loading = false;
                self.load_error = Some(error.to_string());
            }
            Message::Menu(menu::Message::DishSelected(id)) => {
                self.screen = Screen::Detail(id);
                self.form = comment_form::State::new(id);
            }
            Message::Detail(detail_message) => {
                match detail::update(&mut self.form, detail_message) {
                    detail::Event::None => {}
                    detail::Event::BackToMenu => {
                        self.screen = Screen::Menu;
                    }
                    detail::Event::CommentSubmitted {
                        dish_id,
                        rating,
                        author,
                        body,
                    } => {
                        if let Some(catalog) = self.catalog.as_mut() {
                            catalog.add_comment(dish_id, rating, &author, &body);
                        }
                    }
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Menu => menu::view(menu::ViewContext {
                i18n: &self.i18n,
                loading: self.loading,
                error: self.load_error.as_deref(),
                dishes: self.catalog.as_ref().map(Catalog::dishes),
            })
            .map(Message::Menu),
            Screen::Detail(id) => detail::view(detail::ViewContext {
                i18n: &self.i18n,
                loading: self.loading,
                error: self.load_error.as_deref(),
                dish: self.catalog.as_ref().and_then(|c| c.dish(id)),
                comments: self.catalog.as_ref().and_then(|c| c.comments_for(id)),
                assets_base: &self.assets_base,
                form: &self.form,
            })
            .map(Message::Detail),
        }
    }
}
