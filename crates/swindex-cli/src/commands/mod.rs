//! CLI commands

pub mod index;
