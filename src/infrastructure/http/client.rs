use crate::application::{ApplicationResult, error::ApplicationError};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared reqwest client with the configured request timeout.
pub fn build_client(timeout: Duration) -> ApplicationResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| {
            ApplicationError::infrastructure(format!("failed to build http client: {err}"))
        })
}
