pub mod client;
pub mod error;
pub mod literature_api;

pub use client::build_client;
pub use literature_api::HttpLiteratureApi;
