pub mod config;
pub mod content;
pub mod seed;
pub mod store;
