use anyhow::Result;
use clap::Args;
use codegov_api::Client;

use crate::output::{print_json, print_terms_table, OutputFormat};

#[derive(Args)]
pub struct SuggestArgs {
    /// Term to complete (at least 3 characters to trigger a lookup)
    pub term: String,

    /// Maximum number of suggestions
    #[arg(long, default_value = "10")]
    pub size: u64,
}

pub async fn run(args: &SuggestArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let terms = client.suggest(&args.term, args.size).await?;

    match format {
        OutputFormat::Table => print_terms_table(&terms),
        OutputFormat::Json => print_json(&terms)?,
    }

    Ok(())
}
