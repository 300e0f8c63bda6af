//! Autocomplete terms returned by the `terms` endpoint.

use serde::{Deserialize, Serialize};

/// A type-ahead completion candidate.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SuggestTerm {
    /// The completion text.
    pub term: String,

    /// What the term names (e.g. "agency.acronym", "repo.name").
    #[serde(alias = "termType")]
    pub term_type: Option<String>,

    pub score: Option<f64>,
}

/// Envelope of the `terms` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TermsResponse {
    pub total: Option<u64>,

    #[serde(default)]
    pub terms: Vec<SuggestTerm>,
}
