use super::error::{map_reqwest, status_message};
use crate::application::{
    ApplicationResult,
    dto::{
        AnalyzeQueryRequestDto, ArticleDto, QueryAnalysisDto, RefineQueryRequestDto,
        RefinedQueryDto, SearchRequestDto,
    },
    error::ApplicationError,
    ports::literature_api::LiteratureApi,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

pub const SEARCH_PATH: &str = "/api/search";
pub const ANALYZE_QUERY_PATH: &str = "/api/analyze-query";
pub const REFINE_QUERY_PATH: &str = "/api/refine-query";

/// [`LiteratureApi`] over HTTP+JSON.
#[derive(Clone)]
pub struct HttpLiteratureApi {
    client: Client,
    base_url: String,
}

impl HttpLiteratureApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> ApplicationResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest)?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "backend returned an error status");
            return Err(ApplicationError::transport(status_message(status, &bytes)));
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            ApplicationError::malformed(format!("unexpected response from {path}: {err}"))
        })
    }
}

#[async_trait]
impl LiteratureApi for HttpLiteratureApi {
    async fn search(&self, request: &SearchRequestDto) -> ApplicationResult<Vec<ArticleDto>> {
        self.post_json(SEARCH_PATH, request).await
    }

    async fn analyze_query(
        &self,
        request: &AnalyzeQueryRequestDto,
    ) -> ApplicationResult<QueryAnalysisDto> {
        self.post_json(ANALYZE_QUERY_PATH, request).await
    }

    async fn refine_query(
        &self,
        request: &RefineQueryRequestDto,
    ) -> ApplicationResult<RefinedQueryDto> {
        self.post_json(REFINE_QUERY_PATH, request).await
    }
}
