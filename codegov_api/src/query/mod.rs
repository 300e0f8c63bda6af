mod common;
pub use self::common::{Paging, Query, DEFAULT_PAGE_SIZE};
pub(crate) use self::common::normalized;

mod repo;
pub use self::repo::{RepoQuery, SortBy};

mod task;
pub use self::task::TaskQuery;
