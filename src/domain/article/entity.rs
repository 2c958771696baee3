use super::value_objects::PubmedId;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub pubmed_id: PubmedId,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub year: i32,
    pub abstract_text: String,
    pub summary: Option<String>,
}

impl Article {
    /// Author list joined the way result cards show it.
    pub fn byline(&self) -> String {
        self.authors.join(", ")
    }
}

/// The article list of one search. Replaced wholesale on every search,
/// never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSet {
    items: Vec<Article>,
}

impl ArticleSet {
    /// Build a set from a response, rejecting duplicate PMIDs.
    pub fn new(items: Vec<Article>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for article in &items {
            if !seen.insert(article.pubmed_id.as_str()) {
                return Err(DomainError::MalformedResponse(format!(
                    "duplicate pubmed id {}",
                    article.pubmed_id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.items.iter()
    }

    pub fn get(&self, id: &PubmedId) -> Option<&Article> {
        self.items.iter().find(|a| &a.pubmed_id == id)
    }

    pub fn ids(&self) -> Vec<&PubmedId> {
        self.items.iter().map(|a| &a.pubmed_id).collect()
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<Article> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ArticleSet {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
