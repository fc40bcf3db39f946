//! Shared filesystem helpers for the executor.

pub mod filter;
pub mod fs;
