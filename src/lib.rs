pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod engine;
pub mod report;
