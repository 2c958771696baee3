mod analyzer;
mod chat;
mod prompts;
mod summarizer;

pub use analyzer::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiConfig, OpenAiQueryAnalyzer, parse_analysis_reply,
};
pub use summarizer::OpenAiSummarizer;
