// src/presentation/http/controllers/search.rs
use crate::application::{
    dto::{ArticleDto, SearchRequestDto},
    queries::literature::SearchArticlesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Matching articles, possibly empty.", body = [ArticleDto]),
        (
            status = 400,
            description = "Blank query or max_results outside 1..=100.",
            body = ErrorResponse
        ),
        (status = 502, description = "PubMed could not be queried.", body = ErrorResponse)
    ),
    tag = "Literature"
)]
pub async fn search_literature(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SearchRequestDto>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .literature_queries
        .search_articles(SearchArticlesQuery::from(payload))
        .await
        .into_http()
        .map(Json)
}
