use crate::domain::{
    article::{Article, PubmedId},
    errors::DomainResult,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article as it travels over `/api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub pubmed_id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub year: i32,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            pubmed_id: article.pubmed_id.into_inner(),
            title: article.title,
            authors: article.authors,
            journal: article.journal,
            year: article.year,
            abstract_text: article.abstract_text,
            summary: article.summary,
        }
    }
}

impl ArticleDto {
    pub fn into_domain(self) -> DomainResult<Article> {
        Ok(Article {
            pubmed_id: PubmedId::new(self.pubmed_id)?,
            title: self.title,
            authors: self.authors,
            journal: self.journal,
            year: self.year,
            abstract_text: self.abstract_text,
            summary: self.summary,
        })
    }
}
