pub mod config;
pub mod feature;
pub mod scoring;
