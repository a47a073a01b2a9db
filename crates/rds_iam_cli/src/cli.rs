use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an RDS endpoint and print the region embedded in it.
    Check {
        /// Database host name, e.g. mydb.abc123.us-east-1.rds.amazonaws.com
        host: String,

        /// Database port. Defaults to `default_port` from the configuration.
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Logger identifier attached to diagnostic output.
        #[arg(long, default_value = "rds_iam")]
        logger: String,

        /// Reject regions that are well-formed but not known AWS regions.
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Print the result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
