use anyhow::Result;
use clap::Args;
use codegov_api::{Client, Query, RepoQuery, SortBy};

use crate::output::{print_json, print_repos_table, OutputFormat};

#[derive(Args)]
pub struct ReposArgs {
    /// Get a single repository by its catalog ID
    #[arg(long)]
    pub id: Option<String>,

    /// Free-text search query
    #[arg(long, short)]
    pub query: Option<String>,

    /// Filter by agency acronym (repeatable)
    #[arg(long)]
    pub agency: Vec<String>,

    /// Filter by programming language (repeatable)
    #[arg(long)]
    pub language: Vec<String>,

    /// Filter by license name or URL, matched client-side (repeatable)
    #[arg(long)]
    pub license: Vec<String>,

    /// Filter by usage type (repeatable; defaults to open-source reuse types)
    #[arg(long)]
    pub usage_type: Vec<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub size: u64,

    /// Sort field: name_asc, last_updated, data_quality
    #[arg(long)]
    pub sort: Option<String>,
}

pub async fn run(args: &ReposArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        match client.get_repo_by_id(id).await? {
            Some(repo) => match format {
                OutputFormat::Table => print_repos_table(std::slice::from_ref(&repo)),
                OutputFormat::Json => print_json(&repo)?,
            },
            None => eprintln!("No repository found for id {}", id),
        }
        return Ok(());
    }

    let mut query = RepoQuery::default()
        .with_agencies(&args.agency)
        .with_languages(&args.language)
        .with_licenses(&args.license)
        .with_usage_types(&args.usage_type)
        .with_page(args.page)
        .with_size(args.size);

    if let Some(q) = &args.query {
        query = query.with_query(q);
    }

    // Unrecognized sort values are dropped, matching the API's behavior.
    if let Some(sort) = args.sort.as_deref().and_then(|s| s.parse::<SortBy>().ok()) {
        query = query.with_sort(sort);
    }

    let resp = client.get_repos(&query).await?;

    if let Some(total) = resp.total {
        eprintln!("{} matching repositories ({} shown)", total, resp.repos.len());
    }

    match format {
        OutputFormat::Table => print_repos_table(&resp.repos),
        OutputFormat::Json => print_json(&resp.repos)?,
    }

    Ok(())
}
