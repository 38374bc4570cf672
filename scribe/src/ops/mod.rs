//! Core operations.
//!
//! This module contains the business logic for scribe commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod job;
pub mod profiles;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use job::{Job, JobOptions, prepare};
pub use profiles::profiles;
