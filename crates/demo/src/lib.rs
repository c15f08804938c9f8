//! Console walkthrough of the hotel chain registry.

pub mod config;
pub mod walkthrough;

pub use config::DemoConfig;
pub use walkthrough::{Summary, run};
