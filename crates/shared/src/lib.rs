pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;
pub mod utils;
