// src/application/client/mod.rs
//! Client-side orchestration of the literature backend: input validation,
//! request lifecycle, in-memory result state and user notices.

mod analysis;
mod request;
mod search;

pub use analysis::{AnalysisOutcome, QueryAnalysisController, QuerySelectCallback};
pub use search::{SearchController, SearchOutcome};
