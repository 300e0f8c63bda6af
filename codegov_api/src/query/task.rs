use url::Url;

use crate::config::ClientConfig;

use super::common::{Paging, Query};

/// Page size requested from the task feed. The feed is filtered and
/// paginated client-side, so one generous request fetches the whole feed.
pub(crate) const TASK_FEED_SIZE: u64 = 5000;

/// Query for the help-wanted task feed.
///
/// All filters are inclusion filters applied client-side after the fetch;
/// an empty filter dimension matches every task. Pagination slices the
/// filtered list.
#[derive(Clone, Debug, Default)]
pub struct TaskQuery {
    pub paging: Paging,
    /// Agency acronyms.
    pub agencies: Vec<String>,
    /// Task categories.
    pub categories: Vec<String>,
    /// Programming languages.
    pub languages: Vec<String>,
    /// Skill levels (e.g. "beginner").
    pub skill_levels: Vec<String>,
    /// Time-required labels (e.g. "small", "medium").
    pub time_required: Vec<String>,
}

impl Query for TaskQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }

    /// The feed itself takes only the generous page cap and the API key;
    /// every filter dimension is applied after the fetch.
    fn add_to_url(&self, url: &Url, config: &ClientConfig) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("size", &TASK_FEED_SIZE.to_string());
        url.query_pairs_mut()
            .append_pair("api_key", &config.api_key);
        url
    }
}

impl TaskQuery {
    pub fn with_agency(mut self, agency: &str) -> Self {
        self.agencies.push(agency.to_string());
        self
    }
    pub fn with_agencies(mut self, agencies: &[String]) -> Self {
        self.agencies.extend_from_slice(agencies);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.push(category.to_string());
        self
    }
    pub fn with_categories(mut self, categories: &[String]) -> Self {
        self.categories.extend_from_slice(categories);
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

    pub fn with_skill_level(mut self, skill_level: &str) -> Self {
        self.skill_levels.push(skill_level.to_string());
        self
    }
    pub fn with_skill_levels(mut self, skill_levels: &[String]) -> Self {
        self.skill_levels.extend_from_slice(skill_levels);
        self
    }

    pub fn with_time_required(mut self, time_required: &str) -> Self {
        self.time_required.push(time_required.to_string());
        self
    }
}
