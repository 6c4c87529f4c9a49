//! # Trunkline CLI
//!
//! Line-oriented shell over a [`trunkline_core::NetworkDirectory`].
//!
//! - `args`: clap flags layered over the config file
//! - `config`: TOML configuration
//! - `logging`: tracing subscriber writing to stderr
//! - `command`: decoding input lines into [`Command`]
//! - `shell`: [`Session`] dispatch and the async [`Shell`] loop

pub mod args;
pub mod command;
pub mod config;
pub mod logging;
pub mod shell;

pub use args::Args;
pub use command::{Command, CommandError};
pub use config::{ConfigError, TrunklineConfig};
pub use logging::{setup_logging, LoggingConfig};
pub use shell::{Response, Session, Shell};
