//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod profiles;

pub use check::CheckReport;
pub use generate::{GenerateOutcome, GenerateReport};
pub use output::{Report, TerminalOutput};
pub use profiles::ProfilesReport;
