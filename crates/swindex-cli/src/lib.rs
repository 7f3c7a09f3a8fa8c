//! swindex-cli library
//!
//! This module exposes the internal functionality of swindex-cli for testing purposes.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::Cli;

#[cfg(test)]
mod tests;
