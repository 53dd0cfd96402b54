//! Registry layer for the relationship graph.
//!
//! # Responsibility
//! - Own the process-wide collections of authors, magazines and articles.
//! - Keep relation lookup strategy behind the `RelationIndex` seam.
//!
//! # Invariants
//! - Entity constructors validate before the catalog registers anything.
//! - Catalog APIs return semantic errors (`UnknownMagazine`, ...) in addition
//!   to validation errors.

pub mod catalog;
pub mod relation_index;
