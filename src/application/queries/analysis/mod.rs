mod analyze;
mod refine;
mod service;

pub use analyze::AnalyzeQueryQuery;
pub use refine::RefineQueryQuery;
pub use service::QueryAnalysisService;
