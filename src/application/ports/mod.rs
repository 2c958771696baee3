// src/application/ports/mod.rs
pub mod article_source;
pub mod literature_api;
pub mod notifications;
pub mod query_analyzer;
pub mod summarizer;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ArticleSourcePort = dyn article_source::ArticleSource;
pub type LiteratureApiPort = dyn literature_api::LiteratureApi;
pub type NotificationSinkPort = dyn notifications::NotificationSink;
pub type QueryAnalyzerPort = dyn query_analyzer::QueryAnalyzer;
pub type SummarizerPort = dyn summarizer::Summarizer;
