// src/domain/mod.rs
pub mod analysis;
pub mod article;
pub mod errors;
pub mod search;
