//! HTTP client for the code.gov catalog API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::{
    cache::UrlCache,
    config::{ClientConfig, ClientOptions},
    filter,
    query::{Query, RepoQuery, TaskQuery},
    types::{
        AgenciesResponse, Agency, Repo, ReposResponse, SuggestTerm, TaskFeed, TasksPage,
        TermsResponse,
    },
    Error,
};

/// Page size used by [`Client::search`] when the caller sets none.
const SEARCH_PAGE_SIZE: u64 = 100;

/// Client for the code.gov catalog API.
///
/// Each public method issues at most one HTTP GET and returns a future; the
/// caller decides how many calls to run concurrently. A client owns its
/// resolved configuration and (when `remember` is enabled) a per-URL
/// response cache; independent instances share nothing.
pub struct Client {
    config: ClientConfig,
    cache: Option<UrlCache>,
    /// Outbound requests issued so far, for ceiling enforcement.
    requests_sent: Arc<AtomicU64>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

impl Client {
    /// Creates a client from construction options. Resolution of defaults
    /// happens here, once; no network calls are made.
    pub fn new(options: ClientOptions) -> Self {
        let config = ClientConfig::resolve(options);
        let cache = config.remember.then(UrlCache::new);
        Self {
            config,
            cache,
            requests_sent: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ClientOptions::default().with_base(base_url))
    }

    /// The resolved configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}{}", self.config.base, path)).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        Ok(query.add_to_url(&self.endpoint(path)?, &self.config))
    }

    /// Fetches and parses a URL, going through the per-URL cache when one
    /// is enabled. Concurrent calls for the same URL share one request.
    async fn get_json(&self, url: Url) -> Result<Arc<Value>, Error> {
        if self.config.debug {
            tracing::debug!(url = %url, "fetching");
        }
        let requests_sent = Arc::clone(&self.requests_sent);
        let max_requests = self.config.max_requests;
        match &self.cache {
            Some(cache) => {
                let key = url.to_string();
                cache
                    .get_or_insert_with(&key, move || {
                        fetch_json(url, requests_sent, max_requests).boxed()
                    })
                    .await
            }
            None => fetch_json(url, requests_sent, max_requests).await,
        }
    }

    /// Searches the repository catalog.
    ///
    /// The fetched page passes through the client-side license filter (when
    /// the query requests licenses) and the language normalizer before it
    /// is returned.
    pub async fn get_repos(&self, query: &RepoQuery) -> Result<ReposResponse, Error> {
        let url = self.get_url("repos", query)?;
        let payload = self.get_json(url).await?;
        let mut resp: ReposResponse = decode(&payload)?;
        if !query.licenses.is_empty() {
            resp.repos = filter::by_license(resp.repos, &query.licenses);
        }
        for repo in &mut resp.repos {
            filter::normalize_languages(&mut repo.languages);
        }
        Ok(resp)
    }

    /// Fetches the repositories of a single agency.
    pub async fn get_agency_repos(&self, acronym: &str, size: u64) -> Result<ReposResponse, Error> {
        let query = RepoQuery::default().with_agency(acronym).with_size(size);
        self.get_repos(&query).await
    }

    /// Free-text search over the catalog. Empty text resolves to `None`
    /// without a network call.
    pub async fn search(
        &self,
        text: &str,
        filters: &RepoQuery,
    ) -> Result<Option<ReposResponse>, Error> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let mut query = filters.clone().with_query(text);
        if query.paging.size.is_none() {
            query.paging.size = Some(SEARCH_PAGE_SIZE);
        }
        self.get_repos(&query).await.map(Some)
    }

    /// Fetches the agency list, sorted ascending by case-insensitive
    /// display name. The sort is stable, so ties keep the server order.
    pub async fn get_agencies(&self, size: u64) -> Result<Vec<Agency>, Error> {
        let mut url = self.endpoint("agencies")?;
        url.query_pairs_mut()
            .append_pair("size", &size.to_string())
            .append_pair("api_key", &self.config.api_key);
        let payload = self.get_json(url).await?;
        let resp: AgenciesResponse = decode(&payload)?;
        let mut agencies = resp.agencies;
        agencies.sort_by_key(|agency| agency.display_name().unwrap_or_default().to_lowercase());
        Ok(agencies)
    }

    /// Fetches a single repo by identifier. Some API variants return a
    /// one-element array here; it is unwrapped to its first element.
    pub async fn get_repo_by_id(&self, repo_id: &str) -> Result<Option<Repo>, Error> {
        let mut url = self.endpoint(&format!("repos/{}", repo_id))?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.config.api_key);
        let payload = self.get_json(url).await?;
        match payload.as_ref() {
            Value::Array(items) => items.first().map(decode).transpose(),
            value => decode(value).map(Some),
        }
    }

    /// Returns autocomplete candidates for a search box. Terms shorter
    /// than three characters resolve to an empty list without a network
    /// call.
    pub async fn suggest(&self, term: &str, size: u64) -> Result<Vec<SuggestTerm>, Error> {
        if term.chars().count() < 3 {
            return Ok(Vec::new());
        }
        let mut url = self.endpoint("terms")?;
        url.query_pairs_mut()
            .append_pair("term", term)
            .append_pair("size", &size.to_string())
            .append_pair("api_key", &self.config.api_key);
        let payload = self.get_json(url).await?;
        let resp: TermsResponse = decode(&payload)?;
        Ok(resp.terms)
    }

    /// Fetches the help-wanted task feed, applies the query's inclusion
    /// filters, and slices the filtered list by the query's pagination.
    ///
    /// The returned `total` is the pre-pagination filtered count, so a
    /// caller can page through the filtered feed.
    pub async fn get_tasks(&self, query: &TaskQuery) -> Result<TasksPage, Error> {
        let url = Url::parse(&self.config.tasks_url).map_err(|e| {
            tracing::error!("Invalid tasks URL: {}", e);
            Error::RequestFailed
        })?;
        let url = query.add_to_url(&url, &self.config);
        let payload = self.get_json(url).await?;
        let feed: TaskFeed = decode(&payload)?;
        let filtered = filter::by_task_filters(feed.items, query);
        let total = filtered.len() as u64;
        let from = query.paging.effective_from() as usize;
        let size = query.paging.effective_size() as usize;
        let tasks = filtered.into_iter().skip(from).take(size).collect();
        Ok(TasksPage { tasks, total })
    }
}

/// One GET: build the transport, send, check status, parse once.
async fn fetch_json(
    url: Url,
    requests_sent: Arc<AtomicU64>,
    max_requests: Option<u64>,
) -> Result<Arc<Value>, Error> {
    if let Some(limit) = max_requests {
        if requests_sent.fetch_add(1, Ordering::SeqCst) >= limit {
            tracing::warn!("request ceiling of {} reached, refusing to fetch", limit);
            return Err(Error::RequestCeiling(limit));
        }
    } else {
        requests_sent.fetch_add(1, Ordering::SeqCst);
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("codegov_api/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
    let resp = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::RequestFailed
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
        tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
        Error::Json(e.to_string())
    })?;

    Ok(Arc::new(parsed))
}

/// Deserializes a typed response out of the shared parsed payload.
fn decode<T: DeserializeOwned>(payload: &Value) -> Result<T, Error> {
    T::deserialize(payload).map_err(|e| {
        tracing::error!("Failed to parse resource: {}", e);
        Error::Json(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
