//! Derived read queries for authors and magazines.
//!
//! # Responsibility
//! - Answer relationship questions ("topic areas", "contributors", "top
//!   publisher") from catalog state.
//!
//! # Invariants
//! - Queries never mutate the catalog; `Author::add_article` is the one
//!   write entry point here and goes through `Catalog::create_article`.
//! - "No data" is `None`, never an empty collection, for `topic_areas` and
//!   `article_titles`.

mod author;
mod magazine;
