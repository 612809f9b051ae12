//! Command handlers for ascend CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod calc;
pub mod configure;
pub mod menu;
