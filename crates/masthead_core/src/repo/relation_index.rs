//! Relation lookup strategies over the global article registry.
//!
//! # Responsibility
//! - Answer "which articles belong to this author/magazine" and "who
//!   contributed to this magazine".
//!
//! # Invariants
//! - Positions refer to the catalog's article registry and are returned in
//!   creation order.
//! - Contributor lists hold each author once, in first-contribution order.
//! - Every implementation returns the same answers for the same registry.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::MagazineId;
use std::collections::HashMap;

/// Storage strategy for per-entity relationship queries.
///
/// `articles` is always the catalog's full registry, in creation order.
pub trait RelationIndex: Default {
    /// Records the article just appended at `position`.
    fn record(&mut self, position: usize, article: &Article);
    fn author_positions(&self, author: &Author, articles: &[Article]) -> Vec<usize>;
    fn magazine_positions(&self, magazine_id: MagazineId, articles: &[Article]) -> Vec<usize>;
    fn contributors(&self, magazine_id: MagazineId, articles: &[Article]) -> Vec<Author>;
    fn clear(&mut self);
}

/// Keeps ordered back-reference lists updated as articles are created.
#[derive(Debug, Default)]
pub struct BackReferenceIndex {
    by_author: HashMap<Author, Vec<usize>>,
    by_magazine: HashMap<MagazineId, Vec<usize>>,
    contributors: HashMap<MagazineId, Vec<Author>>,
}

impl RelationIndex for BackReferenceIndex {
    fn record(&mut self, position: usize, article: &Article) {
        self.by_author
            .entry(article.author().clone())
            .or_default()
            .push(position);
        self.by_magazine
            .entry(article.magazine_id())
            .or_default()
            .push(position);

        let contributors = self.contributors.entry(article.magazine_id()).or_default();
        if !contributors.contains(article.author()) {
            contributors.push(article.author().clone());
        }
    }

    fn author_positions(&self, author: &Author, _articles: &[Article]) -> Vec<usize> {
        self.by_author.get(author).cloned().unwrap_or_default()
    }

    fn magazine_positions(&self, magazine_id: MagazineId, _articles: &[Article]) -> Vec<usize> {
        self.by_magazine
            .get(&magazine_id)
            .cloned()
            .unwrap_or_default()
    }

    fn contributors(&self, magazine_id: MagazineId, _articles: &[Article]) -> Vec<Author> {
        self.contributors
            .get(&magazine_id)
            .cloned()
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        self.by_author.clear();
        self.by_magazine.clear();
        self.contributors.clear();
    }
}

/// Stateless strategy that filters the registry on every query.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryScan;

impl RelationIndex for RegistryScan {
    fn record(&mut self, _position: usize, _article: &Article) {}

    fn author_positions(&self, author: &Author, articles: &[Article]) -> Vec<usize> {
        positions_where(articles, |article| article.author() == author)
    }

    fn magazine_positions(&self, magazine_id: MagazineId, articles: &[Article]) -> Vec<usize> {
        positions_where(articles, |article| article.magazine_id() == magazine_id)
    }

    fn contributors(&self, magazine_id: MagazineId, articles: &[Article]) -> Vec<Author> {
        let mut contributors: Vec<Author> = Vec::new();
        for position in self.magazine_positions(magazine_id, articles) {
            let author = articles[position].author();
            if !contributors.contains(author) {
                contributors.push(author.clone());
            }
        }
        contributors
    }

    fn clear(&mut self) {}
}

fn positions_where(articles: &[Article], predicate: impl Fn(&Article) -> bool) -> Vec<usize> {
    articles
        .iter()
        .enumerate()
        .filter(|(_, article)| predicate(article))
        .map(|(position, _)| position)
        .collect()
}
