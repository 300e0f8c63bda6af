use anyhow::Result;
use serde::Serialize;
use codegov_api::types::{Agency, Repo, SuggestTerm, Task};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct RepoRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Languages")]
    #[serde(rename = "Languages")]
    languages: String,
    #[tabled(rename = "Usage")]
    #[serde(rename = "Usage")]
    usage_type: String,
    #[tabled(rename = "Licenses")]
    #[serde(rename = "Licenses")]
    licenses: String,
}

#[derive(Tabled, Serialize)]
struct AgencyRow {
    #[tabled(rename = "Acronym")]
    #[serde(rename = "Acronym")]
    acronym: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct TermRow {
    #[tabled(rename = "Term")]
    #[serde(rename = "Term")]
    term: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    term_type: String,
}

#[derive(Tabled, Serialize)]
struct TaskRow {
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Languages")]
    #[serde(rename = "Languages")]
    languages: String,
    #[tabled(rename = "Skill")]
    #[serde(rename = "Skill")]
    skill: String,
    #[tabled(rename = "Effort")]
    #[serde(rename = "Effort")]
    effort: String,
}

// -- Row builders --

fn build_repo_rows(repos: &[Repo]) -> Vec<RepoRow> {
    repos
        .iter()
        .map(|r| RepoRow {
            name: r.name.clone().unwrap_or_default(),
            agency: r
                .agency
                .as_ref()
                .and_then(|a| a.acronym.clone())
                .unwrap_or_default(),
            languages: r.languages.join(", "),
            usage_type: r
                .permissions
                .as_ref()
                .and_then(|p| p.usage_type.clone())
                .unwrap_or_default(),
            licenses: r
                .permissions
                .as_ref()
                .and_then(|p| p.licenses.as_ref())
                .map(|licenses| {
                    licenses
                        .iter()
                        .filter_map(|l| l.name.clone())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
        })
        .collect()
}

fn build_agency_rows(agencies: &[Agency]) -> Vec<AgencyRow> {
    agencies
        .iter()
        .map(|a| AgencyRow {
            acronym: a.acronym.clone().unwrap_or_default(),
            name: a.display_name().unwrap_or_default().to_string(),
        })
        .collect()
}

fn build_term_rows(terms: &[SuggestTerm]) -> Vec<TermRow> {
    terms
        .iter()
        .map(|t| TermRow {
            term: t.term.clone(),
            term_type: t.term_type.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_task_rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|t| TaskRow {
            title: t.title.clone().unwrap_or_default(),
            agency: t
                .agency
                .as_ref()
                .and_then(|a| a.acronym.clone())
                .unwrap_or_default(),
            languages: t.languages.join(", "),
            skill: t.skill_level.clone().unwrap_or_default(),
            effort: t.time_required.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_repos_table(repos: &[Repo]) {
    println!("{}", Table::new(build_repo_rows(repos)));
}

pub fn print_agencies_table(agencies: &[Agency]) {
    println!("{}", Table::new(build_agency_rows(agencies)));
}

pub fn print_terms_table(terms: &[SuggestTerm]) {
    println!("{}", Table::new(build_term_rows(terms)));
}

pub fn print_tasks_table(tasks: &[Task]) {
    println!("{}", Table::new(build_task_rows(tasks)));
}

// -- JSON output --

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
