//! Command-line front end

pub mod context;
pub mod generate;

pub use generate::{GenerateOptions, run_generate};
