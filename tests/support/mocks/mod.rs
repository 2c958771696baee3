// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod api;
pub mod backend;
pub mod notifier;

pub use api::ScriptedApi;
pub use backend::{StubAnalyzer, StubArticleSource, StubSummarizer};
pub use notifier::CapturingNotifier;
