pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod fake;
pub mod jobs;
pub mod models;
pub mod roster;
pub mod stats;

pub use error::{AppError, Result};
