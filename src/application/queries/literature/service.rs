use std::sync::Arc;

use crate::application::ports::{ArticleSourcePort, SummarizerPort};

pub struct LiteratureQueryService {
    pub(super) source: Arc<ArticleSourcePort>,
    pub(super) summarizer: Option<Arc<SummarizerPort>>,
}

impl LiteratureQueryService {
    pub fn new(source: Arc<ArticleSourcePort>) -> Self {
        Self {
            source,
            summarizer: None,
        }
    }

    /// Attach summaries to returned articles using `summarizer`.
    pub fn with_summarizer(mut self, summarizer: Arc<SummarizerPort>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }
}
