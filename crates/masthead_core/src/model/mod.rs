//! Domain entities for the author/article/magazine graph.
//!
//! # Responsibility
//! - Define the three entities and the rules checked when they are built.
//! - Keep relationship bookkeeping out of the entities; the catalog owns it.
//!
//! # Invariants
//! - Entities are never constructed in an invalid state.
//! - `Article` is the only type that links an author to a magazine.

pub mod article;
pub mod author;
pub mod error;
pub mod magazine;
