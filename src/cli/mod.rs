//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod emit;
pub mod init;
pub mod kinds;
pub mod replay;
