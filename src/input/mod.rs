//! Input processing module
//! Handles file detection, record parsing, and loading of jobs and profiles

pub mod file_detector;
pub mod manager;
pub mod record_parser;

pub use manager::InputManager;
