use crate::application::{
    ApplicationResult,
    dto::{
        AnalyzeQueryRequestDto, ArticleDto, QueryAnalysisDto, RefineQueryRequestDto,
        RefinedQueryDto, SearchRequestDto,
    },
};
use async_trait::async_trait;

/// Client-side access to the literature backend.
#[async_trait]
pub trait LiteratureApi: Send + Sync {
    async fn search(&self, request: &SearchRequestDto) -> ApplicationResult<Vec<ArticleDto>>;

    async fn analyze_query(
        &self,
        request: &AnalyzeQueryRequestDto,
    ) -> ApplicationResult<QueryAnalysisDto>;

    async fn refine_query(
        &self,
        request: &RefineQueryRequestDto,
    ) -> ApplicationResult<RefinedQueryDto>;
}
