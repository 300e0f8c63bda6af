//! Shared query infrastructure: the [`Query`] trait, [`Paging`] fields, and
//! value normalization.

use url::Url;

use crate::config::ClientConfig;

/// Page size used when a query does not set one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. Parameter order is fixed so identical queries always
    /// serialize identically.
    fn add_to_url(&self, url: &Url, config: &ClientConfig) -> Url;

    /// Returns a mutable reference to the shared pagination fields.
    fn paging_mut(&mut self) -> &mut Paging;

    /// Sets an explicit result offset. Overrides any page number.
    fn with_from(mut self, from: u64) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().from = Some(from);
        self
    }

    /// Sets the page number (1-indexed). Ignored when an explicit offset is set.
    fn with_page(mut self, page: u64) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_size(mut self, size: u64) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().size = Some(size);
        self
    }
}

/// Pagination fields shared by all query types.
#[derive(Clone, Copy, Debug, Default)]
pub struct Paging {
    /// Explicit result offset. Wins over `page`.
    pub from: Option<u64>,
    /// Page number (1-indexed). Used only when `from` is unset.
    pub page: Option<u64>,
    /// Results per page. `None` means [`DEFAULT_PAGE_SIZE`].
    pub size: Option<u64>,
}

impl Paging {
    /// Effective page size: the explicit size, or the default of 10.
    pub fn effective_size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Effective offset: an explicit `from` wins; else `(page - 1) * size`;
    /// else 0.
    pub fn effective_from(&self) -> u64 {
        match (self.from, self.page) {
            (Some(from), _) => from,
            (None, Some(page)) => page.saturating_sub(1) * self.effective_size(),
            (None, None) => 0,
        }
    }
}

/// Normalizes list-valued filter elements for the query string: trimmed,
/// lowercased, empty values skipped. Queries keep the caller's raw values;
/// this runs at serialization time only.
pub(crate) fn normalized(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values.iter().filter_map(|value| {
        let cleaned = value.trim().to_lowercase();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    })
}
