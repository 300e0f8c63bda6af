mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use codegov_api::{Client, ClientOptions};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "codegov")]
#[command(about = "Query the code.gov open source catalog")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the API base URL
    #[arg(long, global = true)]
    base: Option<String>,

    /// API key (falls back to the CODE_GOV_API_KEY environment variable)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Log constructed request URLs
    #[arg(long, global = true)]
    debug: bool,

    /// Cache responses for repeated identical requests within this run
    #[arg(long, global = true)]
    remember: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and list repositories
    Repos(commands::repos::ReposArgs),
    /// List agencies
    Agencies(commands::agencies::AgenciesArgs),
    /// Autocomplete search terms
    Suggest(commands::suggest::SuggestArgs),
    /// Browse the help-wanted task feed
    Tasks(commands::tasks::TasksArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.debug { "codegov_api=debug" } else { "codegov_api=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .init();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let mut options = ClientOptions::default()
        .with_debug(cli.debug)
        .with_remember(cli.remember);
    if let Some(base) = &cli.base {
        options = options.with_base(base);
    }
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("CODE_GOV_API_KEY").ok());
    if let Some(key) = &api_key {
        options = options.with_api_key(key);
    }
    let client = Client::new(options);

    match &cli.command {
        Commands::Repos(args) => commands::repos::run(args, &client, &format).await?,
        Commands::Agencies(args) => commands::agencies::run(args, &client, &format).await?,
        Commands::Suggest(args) => commands::suggest::run(args, &client, &format).await?,
        Commands::Tasks(args) => commands::tasks::run(args, &client, &format).await?,
    }

    Ok(())
}
