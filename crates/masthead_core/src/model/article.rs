//! Article join entity.
//!
//! # Invariants
//! - Every article belongs to exactly one author and one magazine for its
//!   whole lifetime.
//! - `title` length stays within [5, 50] characters.
//! - No field changes after construction; every mutator returns
//!   `ImmutabilityError`.

use crate::model::author::Author;
use crate::model::error::{
    char_len, ImmutabilityError, ValidationError, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::model::magazine::MagazineId;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a registered article.
pub type ArticleId = Uuid;

/// One article written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: Author,
    magazine_id: MagazineId,
}

impl Article {
    /// Validates the title and binds both references.
    ///
    /// Reference existence is checked by the catalog, which is the only
    /// caller.
    pub(crate) fn new(
        author: Author,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            author,
            magazine_id,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn set_title(&mut self, _title: impl Into<String>) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::set("article", "title"))
    }

    pub fn remove_title(&mut self) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::remove("article", "title"))
    }

    pub fn set_author(&mut self, _author: Author) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::set("article", "author"))
    }

    pub fn set_magazine(&mut self, _magazine_id: MagazineId) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::set("article", "magazine"))
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = char_len(title);
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
