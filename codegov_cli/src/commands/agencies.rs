use anyhow::Result;
use clap::Args;
use codegov_api::Client;

use crate::output::{print_agencies_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AgenciesArgs {
    /// Maximum number of agencies to fetch
    #[arg(long, default_value = "500")]
    pub size: u64,
}

pub async fn run(args: &AgenciesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let agencies = client.get_agencies(args.size).await?;

    match format {
        OutputFormat::Table => print_agencies_table(&agencies),
        OutputFormat::Json => print_json(&agencies)?,
    }

    Ok(())
}
