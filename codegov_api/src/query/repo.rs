use std::str::FromStr;

use url::Url;

use crate::config::ClientConfig;

use super::common::{normalized, Paging, Query};

/// Query builder for the `repos` endpoint.
///
/// Filter values are kept exactly as the caller supplied them; trimming and
/// lowercasing happen when the query string is built. The raw `licenses`
/// list is also what the client-side license filter matches against.
#[derive(Clone, Debug, Default)]
pub struct RepoQuery {
    pub paging: Paging,
    /// Free-text search query.
    pub q: Option<String>,
    /// Agency acronyms (e.g. "GSA").
    pub agencies: Vec<String>,
    /// Usage types. Falls back to the configured default set when empty.
    pub usage_types: Vec<String>,
    /// Programming languages.
    pub languages: Vec<String>,
    /// License names or URLs, matched client-side after the fetch.
    pub licenses: Vec<String>,
    pub sort: Option<SortBy>,
}

impl Query for RepoQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }

    fn add_to_url(&self, url: &Url, config: &ClientConfig) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("size", &self.paging.effective_size().to_string());
        url.query_pairs_mut()
            .append_pair("api_key", &config.api_key);
        let from = self.paging.effective_from();
        if from > 0 {
            url.query_pairs_mut()
                .append_pair("from", &from.to_string());
        }
        if let Some(q) = &self.q {
            let q = q.trim();
            if !q.is_empty() {
                url.query_pairs_mut().append_pair("q", q);
            }
        }
        for agency in normalized(&self.agencies) {
            url.query_pairs_mut()
                .append_pair("agency.acronym", &agency);
        }
        let usage_types = if self.usage_types.is_empty() {
            &config.usage_types
        } else {
            &self.usage_types
        };
        for usage_type in normalized(usage_types) {
            url.query_pairs_mut()
                .append_pair("permissions.usageType", &usage_type);
        }
        for language in normalized(&self.languages) {
            url.query_pairs_mut().append_pair("languages", &language);
        }
        for license in normalized(&self.licenses) {
            url.query_pairs_mut()
                .append_pair("permissions.licenses.name", &license);
        }
        if let Some(sort) = self.sort {
            url.query_pairs_mut()
                .append_pair("sort", &sort.to_string());
        }
        url
    }
}

impl RepoQuery {
    pub fn with_query(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_agency(mut self, agency: &str) -> Self {
        self.agencies.push(agency.to_string());
        self
    }
    pub fn with_agencies(mut self, agencies: &[String]) -> Self {
        self.agencies.extend_from_slice(agencies);
        self
    }

    pub fn with_usage_type(mut self, usage_type: &str) -> Self {
        self.usage_types.push(usage_type.to_string());
        self
    }
    pub fn with_usage_types(mut self, usage_types: &[String]) -> Self {
        self.usage_types.extend_from_slice(usage_types);
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.languages.push(language.to_string());
        self
    }
    pub fn with_languages(mut self, languages: &[String]) -> Self {
        self.languages.extend_from_slice(languages);
        self
    }

    pub fn with_license(mut self, license: &str) -> Self {
        self.licenses.push(license.to_string());
        self
    }
    pub fn with_licenses(mut self, licenses: &[String]) -> Self {
        self.licenses.extend_from_slice(licenses);
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Sort orders recognized by the `repos` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    /// Alphabetical by repository name.
    NameAsc,
    /// Most recently updated first.
    LastUpdated,
    /// Highest metadata quality score first.
    DataQuality,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortBy::NameAsc => "name__asc",
                SortBy::LastUpdated => "last_updated",
                SortBy::DataQuality => "data_quality",
            }
        )
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name_asc" => Ok(SortBy::NameAsc),
            "last_updated" => Ok(SortBy::LastUpdated),
            "data_quality" => Ok(SortBy::DataQuality),
            _ => Err(()),
        }
    }
}
