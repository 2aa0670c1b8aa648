// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::ui::detail;
use crate::ui::menu;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The catalog fetch resolved, successfully or not.
    CatalogLoaded(Result<Catalog, Error>),
    Menu(menu::Message),
    Detail(detail::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog JSON file overriding the embedded sample data.
    pub catalog_path: Option<String>,
}
