pub mod entity;
pub mod statistics;
pub mod value_objects;

pub use entity::{Article, ArticleSet};
pub use statistics::mentions_statistics;
pub use value_objects::{PubmedId, year_from_pubdate};
