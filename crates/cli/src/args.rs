//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::TrunklineConfig;

/// Interactive shell for a toy telephone switching network
#[derive(Debug, Parser)]
#[command(name = "trunkline", version, about)]
pub struct Args {
    /// Config file (defaults to <config dir>/trunkline/config.toml if present)
    #[arg(short, long, env = "TRUNKLINE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report malformed commands and unknown switchboards or phones
    #[arg(long)]
    pub strict: bool,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Network file to load before the first prompt
    #[arg(short, long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Do not print the prompt, for piping command scripts
    #[arg(short, long)]
    pub quiet_prompt: bool,
}

impl Args {
    /// Apply flags on top of file configuration
    pub fn apply(&self, config: &mut TrunklineConfig) {
        if self.strict {
            config.strict = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }
        if let Some(path) = &self.load {
            config.initial_network = Some(path.clone());
        }
        if self.quiet_prompt {
            config.prompt.clear();
        }
    }
}
