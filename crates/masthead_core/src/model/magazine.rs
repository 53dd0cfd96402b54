//! Magazine domain model.
//!
//! # Invariants
//! - `id` is generated once and never reused for another magazine.
//! - `name` length stays within [2, 16] characters.
//! - `category` is never empty.
//! - Setters re-validate; a rejected value leaves the old one in place.

use crate::model::error::{
    char_len, ImmutabilityError, ValidationError, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS,
};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a registered magazine.
pub type MagazineId = Uuid;

/// A publication with a name and a category.
///
/// Equality is by `id`: two magazines that share a name are still distinct.
#[derive(Debug, Clone, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the magazine, applying the construction rules.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Recategorizes the magazine, applying the construction rules.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Always fails: a magazine must keep a name.
    pub fn remove_name(&mut self) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::remove("magazine", "name"))
    }

    /// Always fails: a magazine must keep a category.
    pub fn remove_category(&mut self) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::remove("magazine", "category"))
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Display for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = char_len(name);
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}
