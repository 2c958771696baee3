// src/presentation/http/controllers/mod.rs
pub mod analysis;
pub mod search;
