//! Author domain model.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - Identity is the name: equal names mean equal authors, equal hashes and
//!   one entry in any set.

use crate::model::error::{ImmutabilityError, ValidationError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A person who writes articles.
///
/// Cheap to clone; articles and contributor lists hold authors by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Author {
    name: String,
}

impl Author {
    /// Builds an author after validating the name.
    ///
    /// The author is not registered anywhere; use
    /// [`Catalog::create_author`](crate::Catalog::create_author) before
    /// writing articles.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: author names are fixed for the author's lifetime.
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::set("author", "name"))
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
