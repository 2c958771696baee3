// src/infrastructure/pubmed/eutils.rs
use super::abstracts::extract_abstracts;
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::article_source::ArticleSource,
};
use crate::domain::{
    article::{Article, PubmedId, year_from_pubdate},
    search::{MaxResults, SearchQuery},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{collections::HashMap, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const SEARCH_PAGE_SIZE: u32 = 100;
const DETAIL_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone)]
pub struct EutilsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Pause between consecutive E-utilities calls. NCBI allows three
    /// requests per second without an API key.
    pub request_delay: Duration,
}

impl Default for EutilsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_delay: Duration::from_millis(500),
        }
    }
}

pub struct EutilsArticleSource {
    client: Client,
    config: EutilsConfig,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    esearchresult: SearchResult,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Deserialize)]
struct SummaryEnvelope {
    #[serde(default)]
    result: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize, Default)]
struct SummaryRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    fulljournalname: String,
    #[serde(default)]
    pubdate: String,
    #[serde(default)]
    authors: Vec<SummaryAuthor>,
}

#[derive(Deserialize)]
struct SummaryAuthor {
    #[serde(default)]
    name: Option<String>,
}

impl EutilsArticleSource {
    pub fn new(client: Client, config: EutilsConfig) -> Self {
        let mut config = config;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { client, config }
    }

    fn params<'a>(&'a self, extra: &[(&'a str, String)]) -> Vec<(&'a str, String)> {
        let mut params = vec![("db", "pubmed".to_string())];
        params.extend(extra.iter().cloned());
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    async fn get(
        &self,
        utility: &str,
        params: &[(&str, String)],
    ) -> ApplicationResult<reqwest::Response> {
        let url = format!("{}/{}", self.config.base_url, utility);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::upstream(format!("pubmed {utility} failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::upstream(format!(
                "pubmed {utility} returned status {}",
                status.as_u16()
            )));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        utility: &str,
        params: &[(&str, String)],
    ) -> ApplicationResult<T> {
        self.get(utility, params)
            .await?
            .json()
            .await
            .map_err(|err| {
                ApplicationError::upstream(format!("pubmed {utility} returned invalid json: {err}"))
            })
    }

    async fn get_text(
        &self,
        utility: &str,
        params: &[(&str, String)],
    ) -> ApplicationResult<String> {
        self.get(utility, params)
            .await?
            .text()
            .await
            .map_err(|err| {
                ApplicationError::upstream(format!("pubmed {utility} body unreadable: {err}"))
            })
    }

    async fn pause(&self) {
        if !self.config.request_delay.is_zero() {
            tokio::time::sleep(self.config.request_delay).await;
        }
    }

    async fn fetch_batch(&self, batch: &[PubmedId]) -> ApplicationResult<Vec<Article>> {
        let joined = batch
            .iter()
            .map(PubmedId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let summaries: SummaryEnvelope = self
            .get_json(
                "esummary.fcgi",
                &self.params(&[("id", joined.clone()), ("retmode", "json".into())]),
            )
            .await?;
        let xml = self
            .get_text(
                "efetch.fcgi",
                &self.params(&[
                    ("id", joined),
                    ("retmode", "xml".into()),
                    ("rettype", "abstract".into()),
                ]),
            )
            .await?;
        let mut abstracts = extract_abstracts(&xml);

        Ok(batch
            .iter()
            .map(|id| {
                let record = summaries
                    .result
                    .get(id.as_str())
                    .cloned()
                    .and_then(|value| serde_json::from_value::<SummaryRecord>(value).ok())
                    .unwrap_or_default();
                Article {
                    pubmed_id: id.clone(),
                    title: record.title,
                    authors: record.authors.into_iter().filter_map(|a| a.name).collect(),
                    journal: record.fulljournalname,
                    year: year_from_pubdate(&record.pubdate),
                    abstract_text: abstracts.remove(id.as_str()).unwrap_or_default(),
                    summary: None,
                }
            })
            .collect())
    }
}

#[async_trait]
impl ArticleSource for EutilsArticleSource {
    async fn search_ids(
        &self,
        query: &SearchQuery,
        max_results: MaxResults,
    ) -> ApplicationResult<Vec<PubmedId>> {
        let wanted = max_results.get() as usize;
        let mut ids: Vec<PubmedId> = Vec::with_capacity(wanted);
        let mut retstart = 0u32;

        while ids.len() < wanted {
            if retstart > 0 {
                self.pause().await;
            }
            let page = SEARCH_PAGE_SIZE.min((wanted - ids.len()) as u32);
            let envelope: SearchEnvelope = self
                .get_json(
                    "esearch.fcgi",
                    &self.params(&[
                        ("term", query.as_str().to_string()),
                        ("retstart", retstart.to_string()),
                        ("retmax", page.to_string()),
                        ("retmode", "json".into()),
                    ]),
                )
                .await?;

            let found = envelope.esearchresult.idlist;
            if found.is_empty() {
                break;
            }
            let returned = found.len() as u32;
            for raw in found {
                ids.push(PubmedId::new(raw).map_err(|err| {
                    ApplicationError::upstream(format!("pubmed esearch returned a bad id: {err}"))
                })?);
            }
            if returned < page {
                break;
            }
            retstart += page;
        }

        ids.truncate(wanted);
        tracing::debug!(query = %query, count = ids.len(), "esearch finished");
        Ok(ids)
    }

    async fn fetch_details(&self, ids: &[PubmedId]) -> ApplicationResult<Vec<Article>> {
        let mut articles = Vec::with_capacity(ids.len());
        for (index, batch) in ids.chunks(DETAIL_BATCH_SIZE).enumerate() {
            if index > 0 {
                self.pause().await;
            }
            articles.extend(self.fetch_batch(batch).await?);
            tracing::debug!(batch = index, fetched = articles.len(), "pubmed batch fetched");
        }
        Ok(articles)
    }
}
