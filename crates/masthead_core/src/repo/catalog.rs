//! In-memory registries for authors, magazines and articles.
//!
//! # Responsibility
//! - Own every registered entity for the lifetime of the application root.
//! - Enforce referential integrity when articles are created.
//! - Delegate per-entity relation lookups to a `RelationIndex` strategy.
//!
//! # Invariants
//! - Registries keep creation order and never drop entries except on `reset`.
//! - A rejected create call leaves every registry and the index untouched.
//! - Authors are registered once per name.

use crate::config::{CatalogConfig, ConfigError};
use crate::model::article::{Article, ArticleId};
use crate::model::author::Author;
use crate::model::error::{ImmutabilityError, ValidationError};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::relation_index::{BackReferenceIndex, RelationIndex};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog create, lookup and mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Validation(ValidationError),
    Immutable(ImmutabilityError),
    Config(ConfigError),
    /// Author name is not registered in this catalog.
    UnknownAuthor(String),
    UnknownMagazine(MagazineId),
    UnknownArticle(ArticleId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Immutable(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::UnknownAuthor(name) => write!(f, "author not registered: {name}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not registered: {id}"),
            Self::UnknownArticle(id) => write!(f, "article not registered: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Immutable(err) => Some(err),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImmutabilityError> for CatalogError {
    fn from(value: ImmutabilityError) -> Self {
        Self::Immutable(value)
    }
}

impl From<ConfigError> for CatalogError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Serializable view of every registry, in creation order.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub authors: &'a [Author],
    pub magazines: &'a [Magazine],
    pub articles: &'a [Article],
}

/// Application-owned container for the whole relationship graph.
///
/// `I` selects how per-entity article lookups are answered; results are the
/// same for every strategy.
#[derive(Debug)]
pub struct Catalog<I: RelationIndex = BackReferenceIndex> {
    config: CatalogConfig,
    authors: Vec<Author>,
    author_set: HashSet<Author>,
    magazines: Vec<Magazine>,
    magazine_positions: HashMap<MagazineId, usize>,
    articles: Vec<Article>,
    article_positions: HashMap<ArticleId, usize>,
    index: I,
}

impl Catalog {
    /// Creates an empty catalog with back-reference lookups and default config.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: RelationIndex> Default for Catalog<I> {
    fn default() -> Self {
        Self {
            config: CatalogConfig::default(),
            authors: Vec::new(),
            author_set: HashSet::new(),
            magazines: Vec::new(),
            magazine_positions: HashMap::new(),
            articles: Vec::new(),
            article_positions: HashMap::new(),
            index: I::default(),
        }
    }
}

impl<I: RelationIndex> Catalog<I> {
    /// Creates an empty catalog after validating `config`.
    pub fn with_config(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Registers an author, or returns the already registered one with the
    /// same name.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<Author> {
        let author = Author::new(name).inspect_err(|err| {
            warn!("event=author_create module=catalog status=rejected reason=\"{err}\"");
        })?;
        if self.has_author(&author) {
            debug!("event=author_create module=catalog status=existing");
            return Ok(author);
        }

        self.author_set.insert(author.clone());
        self.authors.push(author.clone());
        debug!(
            "event=author_create module=catalog status=ok authors={}",
            self.authors.len()
        );
        Ok(author)
    }

    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category).inspect_err(|err| {
            warn!("event=magazine_create module=catalog status=rejected reason=\"{err}\"");
        })?;
        let id = magazine.id();
        self.magazine_positions.insert(id, self.magazines.len());
        self.magazines.push(magazine);
        debug!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    /// Creates an article linking a registered author to a registered
    /// magazine.
    ///
    /// # Errors
    /// - `Validation(TitleLength)` when the title is outside 5..=50 characters.
    /// - `UnknownAuthor` / `UnknownMagazine` for unregistered references.
    pub fn create_article(
        &mut self,
        author: &Author,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let article = Article::new(author.clone(), magazine_id, title).inspect_err(|err| {
            warn!("event=article_create module=catalog status=rejected reason=\"{err}\"");
        })?;
        if !self.has_author(author) {
            warn!("event=article_create module=catalog status=rejected reason=unknown_author");
            return Err(CatalogError::UnknownAuthor(author.name().to_string()));
        }
        if !self.magazine_positions.contains_key(&magazine_id) {
            warn!(
                "event=article_create module=catalog status=rejected reason=unknown_magazine magazine_id={magazine_id}"
            );
            return Err(CatalogError::UnknownMagazine(magazine_id));
        }

        let id = article.id();
        let position = self.articles.len();
        self.index.record(position, &article);
        self.article_positions.insert(id, position);
        self.articles.push(article);
        debug!(
            "event=article_create module=catalog status=ok article_id={id} magazine_id={magazine_id} position={position}"
        );
        Ok(id)
    }

    pub fn rename_magazine(
        &mut self,
        magazine_id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        self.require_magazine_mut(magazine_id)?.set_name(name)?;
        debug!("event=magazine_rename module=catalog status=ok magazine_id={magazine_id}");
        Ok(())
    }

    pub fn recategorize_magazine(
        &mut self,
        magazine_id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        self.require_magazine_mut(magazine_id)?
            .set_category(category)?;
        debug!("event=magazine_recategorize module=catalog status=ok magazine_id={magazine_id}");
        Ok(())
    }

    /// Registered authors in registration order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Registered magazines in creation order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// Every article in creation order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn author(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.name() == name)
    }

    pub(crate) fn has_author(&self, author: &Author) -> bool {
        self.author_set.contains(author)
    }

    pub fn magazine(&self, magazine_id: MagazineId) -> Option<&Magazine> {
        let position = *self.magazine_positions.get(&magazine_id)?;
        self.magazines.get(position)
    }

    /// Mutable handle for the validated setters on [`Magazine`].
    pub fn magazine_mut(&mut self, magazine_id: MagazineId) -> Option<&mut Magazine> {
        let position = *self.magazine_positions.get(&magazine_id)?;
        self.magazines.get_mut(position)
    }

    pub fn article(&self, article_id: ArticleId) -> Option<&Article> {
        let position = *self.article_positions.get(&article_id)?;
        self.articles.get(position)
    }

    /// Mutable handle; every mutator on [`Article`] is rejected.
    pub fn article_mut(&mut self, article_id: ArticleId) -> Option<&mut Article> {
        let position = *self.article_positions.get(&article_id)?;
        self.articles.get_mut(position)
    }

    /// Drops every registered entity and relation.
    ///
    /// Config is kept.
    pub fn reset(&mut self) {
        let cleared = self.articles.len();
        self.authors.clear();
        self.author_set.clear();
        self.magazines.clear();
        self.magazine_positions.clear();
        self.articles.clear();
        self.article_positions.clear();
        self.index.clear();
        info!("event=catalog_reset module=catalog status=ok articles_cleared={cleared}");
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            authors: &self.authors,
            magazines: &self.magazines,
            articles: &self.articles,
        }
    }

    pub(crate) fn articles_by_author(&self, author: &Author) -> Vec<&Article> {
        self.resolve(self.index.author_positions(author, &self.articles))
    }

    pub(crate) fn articles_in_magazine(&self, magazine_id: MagazineId) -> Vec<&Article> {
        self.resolve(self.index.magazine_positions(magazine_id, &self.articles))
    }

    pub(crate) fn contributors_of(&self, magazine_id: MagazineId) -> Vec<Author> {
        self.index.contributors(magazine_id, &self.articles)
    }

    fn resolve(&self, positions: Vec<usize>) -> Vec<&Article> {
        positions
            .into_iter()
            .filter_map(|position| self.articles.get(position))
            .collect()
    }

    fn require_magazine_mut(&mut self, magazine_id: MagazineId) -> CatalogResult<&mut Magazine> {
        self.magazine_mut(magazine_id)
            .ok_or(CatalogError::UnknownMagazine(magazine_id))
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::config::{CatalogConfig, ConfigError};
    use crate::model::author::Author;
    use crate::model::error::ValidationError;
    use crate::repo::relation_index::RegistryScan;

    #[test]
    fn create_author_is_idempotent_by_name() {
        let mut catalog = Catalog::new();
        let first = catalog.create_author("Carry Bradshaw").unwrap();
        let second = catalog.create_author("Carry Bradshaw").unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.authors().len(), 1);
        assert!(catalog.has_author(&Author::new("Carry Bradshaw").unwrap()));
        assert!(!catalog.has_author(&Author::new("Nathaniel Hawthorne").unwrap()));
    }

    #[test]
    fn rejected_article_registers_nothing() {
        let mut catalog = Catalog::new();
        let carry = catalog.create_author("Carry Bradshaw").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

        let err = catalog.create_article(&carry, vogue, "Tiny").unwrap_err();
        assert_eq!(
            err,
            CatalogError::Validation(ValidationError::TitleLength { len: 4 })
        );
        assert!(catalog.articles().is_empty());
        assert!(catalog.articles_in_magazine(vogue).is_empty());
        assert!(catalog.contributors_of(vogue).is_empty());
    }

    #[test]
    fn unregistered_references_are_rejected() {
        let mut catalog = Catalog::new();
        let stranger = Author::new("Unregistered Writer").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let err = catalog
            .create_article(&stranger, vogue, "Dating life in NYC")
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownAuthor("Unregistered Writer".to_string())
        );

        let mut other = Catalog::new();
        let carry = other.create_author("Carry Bradshaw").unwrap();
        let err = other
            .create_article(&carry, vogue, "Dating life in NYC")
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownMagazine(vogue));
        assert!(other.articles().is_empty());
    }

    #[test]
    fn with_config_rejects_invalid_threshold() {
        let err = Catalog::<RegistryScan>::with_config(CatalogConfig {
            prolific_threshold: 10_000,
        })
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::Config(ConfigError::ProlificThresholdTooLarge(10_000))
        );
    }

    #[test]
    fn rename_unknown_magazine_fails() {
        let mut catalog = Catalog::new();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
        catalog.reset();
        assert_eq!(
            catalog.rename_magazine(vogue, "Vanity").unwrap_err(),
            CatalogError::UnknownMagazine(vogue)
        );
    }
}
