mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use rds_iam_auth::{IamAuthConfig, IamAuthTokenHelper};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Cli, Command};
use crate::report::EndpointReport;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rds_iam=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = IamAuthConfig::from_env()?;

    match cli.command {
        Command::Check { host, port, logger, strict, json } => {
            let config = config.clone().strict_region_check(strict || config.strict_region_check);
            let port = port.unwrap_or(config.default_port);

            let helper = IamAuthTokenHelper::with_config(&host, port, logger, &config)?;
            let report = EndpointReport::from(&helper);
            tracing::info!(host = %report.host, region = %report.region, "Endpoint accepted");

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
    }

    Ok(())
}
