//! The `trustlate` command line tool.

pub mod commands;
pub mod error;
pub mod ui;
