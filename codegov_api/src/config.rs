//! Client configuration: construction options and the resolved config.

use std::str::FromStr;

/// Production API endpoint.
pub const PRODUCTION_BASE: &str = "https://api.code.gov/";
/// Staging API endpoint.
pub const STAGING_BASE: &str = "https://api-staging.code.gov/";
/// Local development endpoint.
pub const LOCAL_BASE: &str = "http://localhost:3001/api/0.1/";

/// Shared demo key accepted by the API, heavily rate limited.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Usage types applied to repo queries when the caller supplies none.
pub const DEFAULT_USAGE_TYPES: &[&str] = &["openSource", "governmentWideReuse"];

/// Path under the base URL serving the help-wanted task feed.
const TASKS_PATH: &str = "open-tasks";

/// Known API deployments selectable via [`ClientOptions::with_environment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// A locally running API instance.
    Local,
    /// The staging deployment.
    Staging,
    /// The production deployment. This is the default.
    Production,
}

impl Environment {
    fn base_url(self) -> &'static str {
        match self {
            Environment::Local => LOCAL_BASE,
            Environment::Staging => STAGING_BASE,
            Environment::Production => PRODUCTION_BASE,
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

/// Construction options for [`crate::Client`]. Every field is optional;
/// unset fields fall back to the documented defaults during resolution.
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    /// Explicit base URL. Wins over `environment` when both are set.
    pub base: Option<String>,
    /// Named deployment to target when no explicit base is given.
    pub environment: Option<Environment>,
    /// API key. Falls back to [`DEMO_API_KEY`] when absent.
    pub api_key: Option<String>,
    /// When true, constructed request URLs are logged before each fetch.
    pub debug: bool,
    /// Default usage-type filter set for repo queries.
    pub usage_types: Option<Vec<String>>,
    /// Override for the help-wanted task feed location.
    pub tasks_url: Option<String>,
    /// Enables the per-URL response cache.
    pub remember: bool,
    /// Maximum number of outbound requests this client will issue.
    /// `None` means unlimited.
    pub max_requests: Option<u64>,
}

impl ClientOptions {
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = Some(base.to_string());
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_usage_types(mut self, usage_types: &[String]) -> Self {
        self.usage_types = Some(usage_types.to_vec());
        self
    }

    pub fn with_tasks_url(mut self, tasks_url: &str) -> Self {
        self.tasks_url = Some(tasks_url.to_string());
        self
    }

    pub fn with_remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }

    pub fn with_max_requests(mut self, max_requests: u64) -> Self {
        self.max_requests = Some(max_requests);
        self
    }
}

/// Fully-resolved client configuration. Immutable after construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL. Always ends with `/` so path segments concatenate directly.
    pub base: String,
    /// API key sent as the `api_key` query parameter.
    pub api_key: String,
    /// When true, constructed request URLs are logged before each fetch.
    pub debug: bool,
    /// Usage types applied to repo queries that supply none.
    pub usage_types: Vec<String>,
    /// Full URL of the help-wanted task feed.
    pub tasks_url: String,
    /// Whether the per-URL response cache is enabled.
    pub remember: bool,
    /// Outbound request ceiling, enforced by the fetcher when set.
    pub max_requests: Option<u64>,
}

impl ClientConfig {
    /// Resolves construction options into a complete configuration.
    ///
    /// Base URL precedence: explicit `base`, then `environment`, then
    /// production. No network calls happen here; a missing API key is a
    /// diagnostic, not an error.
    pub fn resolve(options: ClientOptions) -> Self {
        let mut base = options
            .base
            .unwrap_or_else(|| {
                options
                    .environment
                    .unwrap_or(Environment::Production)
                    .base_url()
                    .to_string()
            });
        if !base.ends_with('/') {
            base.push('/');
        }

        let api_key = match options.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::warn!(
                    "no API key supplied; requests will use the shared {} key and may be rate limited",
                    DEMO_API_KEY
                );
                DEMO_API_KEY.to_string()
            }
        };

        let usage_types = options.usage_types.unwrap_or_else(|| {
            DEFAULT_USAGE_TYPES.iter().map(|s| s.to_string()).collect()
        });

        let tasks_url = options
            .tasks_url
            .unwrap_or_else(|| format!("{}{}", base, TASKS_PATH));

        Self {
            base,
            api_key,
            debug: options.debug,
            usage_types,
            tasks_url,
            remember: options.remember,
            max_requests: options.max_requests,
        }
    }
}
