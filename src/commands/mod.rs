//! Command implementations for depremap CLI

pub mod check;
pub mod completions;
pub mod helpers;
pub mod run;
pub mod version;
