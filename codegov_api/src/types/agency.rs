//! Agency records returned by the `agencies` endpoint.

use serde::{Deserialize, Serialize};

/// A federal agency. Some catalog variants return agencies as suggestion
/// terms, so the display name may live in `term` instead of `name`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Agency {
    /// Agency acronym (e.g. "GSA").
    pub acronym: Option<String>,

    pub name: Option<String>,

    term: Option<String>,

    pub website: Option<String>,
}

impl Agency {
    /// Display name used for sorting and rendering: `name`, falling back
    /// to `term`.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.term.as_deref())
    }
}

/// Envelope of the `agencies` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AgenciesResponse {
    pub total: Option<u64>,

    #[serde(default)]
    pub agencies: Vec<Agency>,
}
