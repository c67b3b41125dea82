pub mod api;
pub mod config;
pub mod diocese;
pub mod error;
pub mod models;
pub mod schedule;
