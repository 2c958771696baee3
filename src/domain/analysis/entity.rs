use crate::domain::errors::{DomainError, DomainResult};

/// Structured breakdown of a research question.
///
/// `pubmed_queries` is never empty and holds no blank entries: a reply
/// without candidates, or with a blank one, is rejected at construction so
/// the default selection is always the first candidate as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnalysis {
    keywords: Vec<String>,
    mesh_terms: Vec<String>,
    pubmed_queries: Vec<String>,
    search_strategy: String,
}

impl QueryAnalysis {
    pub fn new(
        keywords: Vec<String>,
        mesh_terms: Vec<String>,
        pubmed_queries: Vec<String>,
        search_strategy: impl Into<String>,
    ) -> DomainResult<Self> {
        if pubmed_queries.is_empty() {
            return Err(DomainError::MalformedResponse(
                "analysis returned no PubMed queries".into(),
            ));
        }
        let pubmed_queries = pubmed_queries
            .into_iter()
            .enumerate()
            .map(|(index, query)| match query.trim() {
                "" => Err(DomainError::MalformedResponse(format!(
                    "PubMed query {} is blank",
                    index + 1
                ))),
                trimmed => Ok(trimmed.to_string()),
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self {
            keywords,
            mesh_terms,
            pubmed_queries,
            search_strategy: search_strategy.into(),
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn mesh_terms(&self) -> &[String] {
        &self.mesh_terms
    }

    pub fn pubmed_queries(&self) -> &[String] {
        &self.pubmed_queries
    }

    pub fn search_strategy(&self) -> &str {
        &self.search_strategy
    }

    pub fn default_selection(&self) -> &str {
        &self.pubmed_queries[0]
    }

    pub fn contains_query(&self, candidate: &str) -> bool {
        self.pubmed_queries.iter().any(|q| q == candidate)
    }
}
