pub mod http;
pub mod notifications;
pub mod openai;
pub mod pubmed;
