use crate::domain::search::MaxResults;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_max_results() -> i64 {
    i64::from(MaxResults::DEFAULT)
}

fn default_filter_stats() -> bool {
    true
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchRequestDto {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: i64,
    #[serde(default = "default_filter_stats")]
    pub filter_stats: bool,
}
