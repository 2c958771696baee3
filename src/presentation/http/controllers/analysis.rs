// src/presentation/http/controllers/analysis.rs
use crate::application::{
    dto::{AnalyzeQueryRequestDto, QueryAnalysisDto, RefineQueryRequestDto, RefinedQueryDto},
    queries::analysis::{AnalyzeQueryQuery, RefineQueryQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/analyze-query",
    request_body = AnalyzeQueryRequestDto,
    responses(
        (
            status = 200,
            description = "Keywords, MeSH terms and candidate PubMed queries.",
            body = QueryAnalysisDto
        ),
        (status = 400, description = "Blank query.", body = ErrorResponse),
        (
            status = 502,
            description = "The language model failed or replied with an unusable analysis.",
            body = ErrorResponse
        )
    ),
    tag = "Analysis"
)]
pub async fn analyze_query(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AnalyzeQueryRequestDto>,
) -> HttpResult<Json<QueryAnalysisDto>> {
    state
        .services
        .analysis_queries
        .analyze_query(AnalyzeQueryQuery {
            query: payload.query,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/refine-query",
    request_body = RefineQueryRequestDto,
    responses(
        (status = 200, description = "Refined PubMed query.", body = RefinedQueryDto),
        (status = 400, description = "Blank base query or feedback.", body = ErrorResponse),
        (status = 502, description = "The language model failed.", body = ErrorResponse)
    ),
    tag = "Analysis"
)]
pub async fn refine_query(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RefineQueryRequestDto>,
) -> HttpResult<Json<RefinedQueryDto>> {
    state
        .services
        .analysis_queries
        .refine_query(RefineQueryQuery {
            base_query: payload.base_query,
            feedback: payload.feedback,
        })
        .await
        .into_http()
        .map(Json)
}
