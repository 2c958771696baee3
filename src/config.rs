// src/config.rs
use crate::infrastructure::{
    openai::{
        DEFAULT_BASE_URL as DEFAULT_OPENAI_BASE_URL, DEFAULT_MODEL as DEFAULT_OPENAI_MODEL,
        OpenAiConfig,
    },
    pubmed::{DEFAULT_BASE_URL as DEFAULT_NCBI_BASE_URL, EutilsConfig},
};
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    http_timeout: Duration,
    eutils: EutilsConfig,
    openai: OpenAiConfig,
    summarize_results: bool,
}

/// Settings of the command-line client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_url: String,
    http_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".into()
}

fn default_api_url() -> String {
    "http://localhost:8000".into()
}

fn default_http_timeout() -> u64 {
    30
}

fn default_request_delay_ms() -> u64 {
    500
}

fn default_allowed_origins() -> Vec<String> {
    (3000..=3003)
        .map(|port| format!("http://localhost:{port}"))
        .collect()
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer")))
        })
        .transpose()
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    lookup(key)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::Invalid(format!("{key} must be true or false"))),
        })
        .transpose()
}

fn parse_timeout(lookup: &impl Fn(&str) -> Option<String>) -> Result<Duration, ConfigError> {
    let seconds =
        parse_u64(lookup, "HTTP_TIMEOUT_SECONDS")?.unwrap_or_else(default_http_timeout);
    if seconds == 0 {
        return Err(ConfigError::Invalid(
            "HTTP_TIMEOUT_SECONDS must be greater than zero".into(),
        ));
    }
    Ok(Duration::from_secs(seconds))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Build the server configuration from environment variables. Optional
    /// values fall back to defaults; `OPENAI_API_KEY` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = non_empty(lookup("LISTEN_ADDR")).unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| parse_list(&s))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let http_timeout = parse_timeout(&lookup)?;

        let eutils = EutilsConfig {
            base_url: non_empty(lookup("NCBI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_NCBI_BASE_URL.to_string()),
            api_key: non_empty(lookup("NCBI_API_KEY")),
            request_delay: Duration::from_millis(
                parse_u64(&lookup, "NCBI_REQUEST_DELAY_MS")?
                    .unwrap_or_else(default_request_delay_ms),
            ),
        };

        let api_key =
            non_empty(lookup("OPENAI_API_KEY")).ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let mut openai = OpenAiConfig::new(api_key);
        openai.model =
            non_empty(lookup("OPENAI_MODEL")).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
        openai.base_url = non_empty(lookup("OPENAI_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let summarize_results = parse_bool(&lookup, "SUMMARIZE_RESULTS")?.unwrap_or(false);

        Ok(Self {
            listen_addr,
            allowed_origins,
            http_timeout,
            eutils,
            openai,
            summarize_results,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    pub fn eutils(&self) -> &EutilsConfig {
        &self.eutils
    }

    pub fn openai(&self) -> &OpenAiConfig {
        &self.openai
    }

    /// Whether search results are summarized by the language model.
    pub fn summarize_results(&self) -> bool {
        self.summarize_results
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = non_empty(lookup("LITREVIEW_API_URL")).unwrap_or_else(default_api_url);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "LITREVIEW_API_URL must be an http(s) URL".into(),
            ));
        }
        let http_timeout = parse_timeout(&lookup)?;
        Ok(Self {
            api_url,
            http_timeout,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}
