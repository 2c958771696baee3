use crate::domain::{analysis::QueryAnalysis, errors::DomainResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/analyze-query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeQueryRequestDto {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueryAnalysisDto {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub mesh_terms: Vec<String>,
    #[serde(default)]
    pub pubmed_queries: Vec<String>,
    #[serde(default)]
    pub search_strategy: String,
}

impl From<QueryAnalysis> for QueryAnalysisDto {
    fn from(analysis: QueryAnalysis) -> Self {
        Self {
            keywords: analysis.keywords().to_vec(),
            mesh_terms: analysis.mesh_terms().to_vec(),
            pubmed_queries: analysis.pubmed_queries().to_vec(),
            search_strategy: analysis.search_strategy().to_string(),
        }
    }
}

impl QueryAnalysisDto {
    pub fn into_domain(self) -> DomainResult<QueryAnalysis> {
        QueryAnalysis::new(
            self.keywords,
            self.mesh_terms,
            self.pubmed_queries,
            self.search_strategy,
        )
    }
}

/// Body of `POST /api/refine-query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RefineQueryRequestDto {
    pub base_query: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RefinedQueryDto {
    pub query: String,
}
