pub mod analysis;
pub mod literature;
