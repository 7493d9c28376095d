//! Job matching and recommendation library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod models;
pub mod output;
pub mod recommendation;

pub use config::Config;
pub use error::{JobMatcherError, Result};
