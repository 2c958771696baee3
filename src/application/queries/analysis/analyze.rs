use super::QueryAnalysisService;
use crate::{
    application::{dto::QueryAnalysisDto, error::ApplicationResult},
    domain::search::SearchQuery,
};

pub struct AnalyzeQueryQuery {
    pub query: String,
}

impl QueryAnalysisService {
    pub async fn analyze_query(
        &self,
        query: AnalyzeQueryQuery,
    ) -> ApplicationResult<QueryAnalysisDto> {
        let query = SearchQuery::new(&query.query)?;
        let analysis = self.analyzer.analyze(&query).await?;
        tracing::info!(
            query = %query,
            candidates = analysis.pubmed_queries().len(),
            "query analyzed"
        );
        Ok(analysis.into())
    }
}
