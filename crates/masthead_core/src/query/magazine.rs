//! Magazine-centric queries over a catalog.
//!
//! # Invariants
//! - `article_titles` follows the order of `articles`.
//! - `contributors` and `contributing_authors` list each author once.
//! - `top_publisher` breaks ties in favor of the earliest-registered magazine.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::catalog::Catalog;
use crate::repo::relation_index::RelationIndex;
use std::collections::HashMap;

impl Magazine {
    /// Articles published here, in creation order.
    pub fn articles<'c, I: RelationIndex>(&self, catalog: &'c Catalog<I>) -> Vec<&'c Article> {
        catalog.articles_in_magazine(self.id())
    }

    pub fn article_count<I: RelationIndex>(&self, catalog: &Catalog<I>) -> usize {
        self.articles(catalog).len()
    }

    /// Authors with at least one article here, in first-contribution order.
    pub fn contributors<I: RelationIndex>(&self, catalog: &Catalog<I>) -> Vec<Author> {
        catalog.contributors_of(self.id())
    }

    /// Titles of `articles`, or `None` when nothing has been published here.
    pub fn article_titles<'c, I: RelationIndex>(
        &self,
        catalog: &'c Catalog<I>,
    ) -> Option<Vec<&'c str>> {
        let articles = self.articles(catalog);
        if articles.is_empty() {
            return None;
        }
        Some(articles.into_iter().map(Article::title).collect())
    }

    /// Authors with more than `prolific_threshold` articles in this magazine.
    pub fn contributing_authors<I: RelationIndex>(&self, catalog: &Catalog<I>) -> Vec<Author> {
        let threshold = catalog.config().prolific_threshold;
        let mut counts: HashMap<&Author, usize> = HashMap::new();
        for article in self.articles(catalog) {
            *counts.entry(article.author()).or_default() += 1;
        }

        self.contributors(catalog)
            .into_iter()
            .filter(|author| counts.get(author).copied().unwrap_or_default() > threshold)
            .collect()
    }

    /// The magazine with the most articles across the whole catalog.
    ///
    /// Returns `None` when no magazine is registered.
    pub fn top_publisher<I: RelationIndex>(catalog: &Catalog<I>) -> Option<&Magazine> {
        let mut top: Option<(&Magazine, usize)> = None;
        for magazine in catalog.magazines() {
            let count = magazine.article_count(catalog);
            match top {
                Some((_, best)) if count <= best => {}
                _ => top = Some((magazine, count)),
            }
        }
        top.map(|(magazine, _)| magazine)
    }
}
