// SPDX-License-Identifier: MPL-2.0
//! The dish catalog and its comment store.
//!
//! The catalog is the application's external data source: dishes and their
//! user comments, loaded once at startup either from the embedded sample
//! data or from a JSON file passed on the command line. The detail screen
//! only ever borrows from it; the single mutation path is [`Catalog::add_comment`],
//! which is the sink for the submission form.

use crate::error::{Error, Result};
use chrono::Utc;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct SampleData;

const SAMPLE_FILE: &str = "catalog.json";

/// Identifier of a dish in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u32);

/// A catalog entry: the entity being detailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    /// Image path relative to the assets base directory.
    pub image: String,
    pub description: String,
}

/// A user-submitted comment-with-rating attached to a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub dish_id: DishId,
    /// Rating on the 1-5 scale.
    pub rating: u8,
    pub author: String,
    pub body: String,
    /// RFC 3339 timestamp of submission.
    pub date: String,
}

/// On-disk shape of a catalog file: flat lists, comments keyed by `dish_id`.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    dishes: Vec<Dish>,
    comments: Vec<Comment>,
}

/// In-memory catalog with comments grouped per dish.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
    comments: BTreeMap<DishId, Vec<Comment>>,
    next_comment_id: u32,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    ///
    /// File order is preserved: dishes as listed, and each dish's comments
    /// in the order they appear in the file. Every listed dish gets a
    /// comment bucket, so a dish without comments yields an empty (not
    /// absent) sequence.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;

        let mut comments: BTreeMap<DishId, Vec<Comment>> = BTreeMap::new();
        for dish in &file.dishes {
            comments.insert(dish.id, Vec::new());
        }

        let mut next_comment_id = 0;
        for comment in file.comments {
            next_comment_id = next_comment_id.max(comment.id + 1);
            match comments.get_mut(&comment.dish_id) {
                Some(bucket) => bucket.push(comment),
                None => {
                    return Err(Error::Catalog(format!(
                        "comment {} references unknown dish {}",
                        comment.id, comment.dish_id.0
                    )))
                }
            }
        }

        Ok(Self {
            dishes: file.dishes,
            comments,
            next_comment_id,
        })
    }

    /// The embedded sample catalog shipped with the binary.
    pub fn sample() -> Result<Self> {
        let data = SampleData::get(SAMPLE_FILE)
            .ok_or_else(|| Error::Catalog(format!("embedded {SAMPLE_FILE} missing")))?;
        Self::from_json(&String::from_utf8_lossy(data.data.as_ref()))
    }

    /// Load the catalog, from `path` when given, otherwise the embedded
    /// sample. This is the one asynchronous operation in the application;
    /// the UI shows the loading state until it resolves.
    pub async fn load(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
                Self::from_json(&content)
            }
            None => Self::sample(),
        }
    }

    #[must_use]
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    #[must_use]
    pub fn dish(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    /// Comments for a dish, in stored order. `None` means the dish is not
    /// in the catalog at all; a known dish without comments yields an
    /// empty slice.
    #[must_use]
    pub fn comments_for(&self, id: DishId) -> Option<&[Comment]> {
        self.comments.get(&id).map(Vec::as_slice)
    }

    /// Append a submitted comment, stamped with the current time. This is
    /// the sink for the submission form; there is no other mutation path.
    pub fn add_comment(&mut self, dish_id: DishId, rating: u8, author: &str, body: &str) {
        let comment = Comment {
            id: self.next_comment_id,
            dish_id,
            rating,
            author: author.to_string(),
            body: body.to_string(),
            date: Utc::now().to_rfc3339(),
        };
        self.next_comment_id += 1;
        self.comments.entry(dish_id).or_default().push(comment);
    }
}
