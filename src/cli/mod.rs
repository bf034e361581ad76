//! CLI module for bigo
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{parse_args, Cli, Commands};
pub use setup::{configure_thread_pool, default_log_level, init_logging};
