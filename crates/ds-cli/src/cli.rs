use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ds_core::models::DEFAULT_PREFIX;

#[derive(Parser, Debug)]
#[command(name = "ds-devsvc")]
#[command(about = "Inspect Dev Services for Infinispan configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write debug logs to .devservices-debug.log
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved configuration
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compare against the captured server and print the reuse decision
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory holding devservices-state.json
        #[arg(long, default_value = ".devservices")]
        state_dir: PathBuf,

        /// Id recorded for a newly started server
        #[arg(long)]
        instance_id: Option<String>,
    },
    /// List the recognised options
    Schema,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// A .properties, .yaml or .yml file
    pub config: PathBuf,

    /// Key prefix of the options in a .properties file
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}
