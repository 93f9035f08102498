pub mod app;
pub mod config;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod ranking;
pub mod render;
pub mod utils;
