//! Core domain logic for Masthead.
//! Models the many-to-many graph between authors, articles and magazines,
//! validates entities at construction and answers derived queries.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;

pub use config::{CatalogConfig, ConfigError, LoggingConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::Author;
pub use model::error::{FieldAction, ImmutabilityError, ValidationError};
pub use model::magazine::{Magazine, MagazineId};
pub use repo::catalog::{Catalog, CatalogError, CatalogResult, CatalogSnapshot};
pub use repo::relation_index::{BackReferenceIndex, RegistryScan, RelationIndex};

