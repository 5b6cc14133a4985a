//! Map routing CLI library.
//!
//! Holds the command handlers behind the `mapgraph-cli` binary together with
//! configuration resolution and terminal styling helpers.

pub mod commands;
pub mod config;
pub mod output;
pub mod terminal;
