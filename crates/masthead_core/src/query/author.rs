//! Author-centric queries over a catalog.

use crate::model::article::{Article, ArticleId};
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog::{Catalog, CatalogResult};
use crate::repo::relation_index::RelationIndex;
use std::collections::{BTreeSet, HashSet};

impl Author {
    /// Writes a new article for `magazine_id` with `self` as author.
    ///
    /// Same contract as [`Catalog::create_article`].
    pub fn add_article<I: RelationIndex>(
        &self,
        catalog: &mut Catalog<I>,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        catalog.create_article(self, magazine_id, title)
    }

    /// Articles by this author, in creation order.
    pub fn articles<'c, I: RelationIndex>(&self, catalog: &'c Catalog<I>) -> Vec<&'c Article> {
        catalog.articles_by_author(self)
    }

    /// Magazines this author has written for, each listed once in
    /// first-contribution order.
    pub fn magazines<'c, I: RelationIndex>(&self, catalog: &'c Catalog<I>) -> Vec<&'c Magazine> {
        let mut seen = HashSet::new();
        self.articles(catalog)
            .into_iter()
            .map(Article::magazine_id)
            .filter(|magazine_id| seen.insert(*magazine_id))
            .filter_map(|magazine_id| catalog.magazine(magazine_id))
            .collect()
    }

    /// Categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles at all, never an empty
    /// set.
    pub fn topic_areas<I: RelationIndex>(&self, catalog: &Catalog<I>) -> Option<BTreeSet<String>> {
        let magazines = self.magazines(catalog);
        if magazines.is_empty() {
            return None;
        }
        Some(
            magazines
                .into_iter()
                .map(|magazine| magazine.category().to_string())
                .collect(),
        )
    }
}
