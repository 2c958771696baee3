pub mod entity;

pub use entity::QueryAnalysis;
