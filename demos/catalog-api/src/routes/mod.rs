pub mod catalog;
pub mod scan;
pub mod score;
