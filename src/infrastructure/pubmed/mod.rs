//! PubMed E-utilities adapter.
//!
//! Search runs in three steps: `esearch` for PMIDs, then per batch
//! `esummary` for bibliographic fields and `efetch` for abstracts.

mod abstracts;
mod eutils;

pub use abstracts::extract_abstracts;
pub use eutils::{DEFAULT_BASE_URL, EutilsArticleSource, EutilsConfig};
