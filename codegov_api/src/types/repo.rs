//! Repository records returned by the `repos` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a repository
/// (e.g. "nasa_dfrc_dthdata_armstrong_time_history_software_utility").
pub type RepoID = String;

/// A catalogued repository. Remote metadata quality varies wildly, so
/// nearly every field is optional and list fields tolerate junk entries.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    #[serde(rename = "repoID", default)]
    pub repo_id: Option<RepoID>,

    /// Repository display name.
    pub name: Option<String>,

    pub description: Option<String>,

    organization: Option<String>,

    /// Owning agency, when the record carries one.
    pub agency: Option<RepoAgency>,

    #[serde(rename = "repositoryURL", default)]
    pub repository_url: Option<String>,

    /// Declared programming languages. Non-string entries in the remote
    /// data are dropped during deserialization.
    #[serde(default, deserialize_with = "string_entries")]
    pub languages: Vec<String>,

    #[serde(default, deserialize_with = "string_entries")]
    pub tags: Vec<String>,

    /// License and usage-type declarations.
    pub permissions: Option<Permissions>,

    pub date: Option<RepoDates>,

    /// Metadata quality score assigned by the harvester.
    pub score: Option<f64>,
}

/// Agency stub embedded in a repo record.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RepoAgency {
    pub acronym: Option<String>,
    pub name: Option<String>,
}

/// Usage-type and license declarations for a repo.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    /// License classification tag (e.g. "openSource").
    pub usage_type: Option<String>,

    pub licenses: Option<Vec<License>>,

    exemption_text: Option<String>,
}

/// A single declared license.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct License {
    pub name: Option<String>,

    /// Wire name is uppercase `URL`.
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

/// Record timestamps.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RepoDates {
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Envelope of the `repos` search endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReposResponse {
    /// Server-side total match count. Unaffected by client-side license
    /// filtering, which only shrinks the returned page.
    pub total: Option<u64>,

    #[serde(default)]
    pub repos: Vec<Repo>,
}

/// Deserializes a list that may contain non-string junk, keeping only the
/// string entries. A missing or null list becomes empty.
pub(crate) fn string_entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}
