mod cache;
mod client;
mod config;
mod errors;
mod filter;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::{
    ClientConfig, ClientOptions, Environment, DEFAULT_USAGE_TYPES, DEMO_API_KEY, LOCAL_BASE,
    PRODUCTION_BASE, STAGING_BASE,
};
pub use self::errors::Error;
pub use self::query::{Paging, Query, RepoQuery, SortBy, TaskQuery, DEFAULT_PAGE_SIZE};
