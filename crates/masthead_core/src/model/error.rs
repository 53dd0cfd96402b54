//! Construction and mutation errors shared by all entities.
//!
//! # Invariants
//! - A `ValidationError` is returned before anything is registered.
//! - An `ImmutabilityError` never leaves a field partially changed.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum article title length, in characters, inclusive.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length, in characters, inclusive.
pub const TITLE_MAX_CHARS: usize = 50;
/// Minimum magazine name length, in characters, inclusive.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length, in characters, inclusive.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// Field-level validation failures raised by entity constructors and
/// validated setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    MagazineNameLength { len: usize },
    EmptyCategory,
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}..={MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {TITLE_MIN_CHARS}..={TITLE_MAX_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Kind of rejected write against a read-only field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    Set,
    Remove,
}

impl Display for FieldAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set => write!(f, "set"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Raised when a caller tries to set or remove a read-only field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutabilityError {
    pub entity: &'static str,
    pub field: &'static str,
    pub action: FieldAction,
}

impl ImmutabilityError {
    pub(crate) fn set(entity: &'static str, field: &'static str) -> Self {
        Self {
            entity,
            field,
            action: FieldAction::Set,
        }
    }

    pub(crate) fn remove(entity: &'static str, field: &'static str) -> Self {
        Self {
            entity,
            field,
            action: FieldAction::Remove,
        }
    }
}

impl Display for ImmutabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} is immutable; {} rejected",
            self.entity, self.field, self.action
        )
    }
}

impl Error for ImmutabilityError {}

/// Counts characters the way users perceive length, not UTF-8 bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
