use anyhow::Result;
use clap::Args;
use codegov_api::{Client, Query, TaskQuery};

use crate::output::{print_json, print_tasks_table, OutputFormat};

#[derive(Args)]
pub struct TasksArgs {
    /// Filter by agency acronym (repeatable)
    #[arg(long)]
    pub agency: Vec<String>,

    /// Filter by task category (repeatable)
    #[arg(long)]
    pub category: Vec<String>,

    /// Filter by programming language (repeatable)
    #[arg(long)]
    pub language: Vec<String>,

    /// Filter by skill level, e.g. beginner (repeatable)
    #[arg(long)]
    pub skill_level: Vec<String>,

    /// Filter by estimated effort, e.g. small (repeatable)
    #[arg(long)]
    pub time_required: Vec<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub size: u64,
}

pub async fn run(args: &TasksArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = TaskQuery::default()
        .with_agencies(&args.agency)
        .with_categories(&args.category)
        .with_languages(&args.language)
        .with_skill_levels(&args.skill_level)
        .with_page(args.page)
        .with_size(args.size);
    for effort in &args.time_required {
        query = query.with_time_required(effort);
    }

    let page = client.get_tasks(&query).await?;

    eprintln!("{} matching tasks ({} shown)", page.total, page.tasks.len());

    match format {
        OutputFormat::Table => print_tasks_table(&page.tasks),
        OutputFormat::Json => print_json(&page.tasks)?,
    }

    Ok(())
}
