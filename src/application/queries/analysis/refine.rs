use super::QueryAnalysisService;
use crate::{
    application::{
        dto::RefinedQueryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::search::SearchQuery,
};

pub struct RefineQueryQuery {
    pub base_query: String,
    pub feedback: String,
}

impl QueryAnalysisService {
    pub async fn refine_query(
        &self,
        query: RefineQueryQuery,
    ) -> ApplicationResult<RefinedQueryDto> {
        let base_query = SearchQuery::new(&query.base_query)?;
        let feedback = query.feedback.trim();
        if feedback.is_empty() {
            return Err(ApplicationError::validation("feedback cannot be empty"));
        }

        let refined = self.analyzer.refine(&base_query, feedback).await?;
        let refined = refined.trim();
        if refined.is_empty() {
            return Err(ApplicationError::upstream("analyzer returned an empty query"));
        }

        tracing::info!(base = %base_query, refined, "query refined");
        Ok(RefinedQueryDto {
            query: refined.to_string(),
        })
    }
}
