pub mod analysis;
pub mod articles;
pub mod search;

pub use analysis::{
    AnalyzeQueryRequestDto, QueryAnalysisDto, RefineQueryRequestDto, RefinedQueryDto,
};
pub use articles::ArticleDto;
pub use search::SearchRequestDto;
