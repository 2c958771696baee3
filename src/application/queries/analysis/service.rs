use std::sync::Arc;

use crate::application::ports::QueryAnalyzerPort;

pub struct QueryAnalysisService {
    pub(super) analyzer: Arc<QueryAnalyzerPort>,
}

impl QueryAnalysisService {
    pub fn new(analyzer: Arc<QueryAnalyzerPort>) -> Self {
        Self { analyzer }
    }
}
