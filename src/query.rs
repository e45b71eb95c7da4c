//! A builder for turning user-supplied retrieve options into a records query.

use url::Url;

/// Number of records shown per logical page.
pub const PAGE_SIZE: usize = 10;

/// Fetch one row beyond the page size so the transformer can tell whether a
/// next page exists without a separate count query.
pub const DEFAULT_LIMIT: usize = PAGE_SIZE + 1;

/// Options accepted by [`retrieve`](crate::client::RecordsClient::retrieve).
///
/// Every field is optional; missing or degenerate values fall back to defaults
/// rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrieveOptions {
    /// 1-based page number to fetch.
    pub page: Option<usize>,
    /// Overrides the default fetch limit when positive.
    pub limit: Option<usize>,
    /// Server-side color filter, matched case-sensitively by the endpoint.
    pub colors: Option<Vec<String>>,
}

impl RetrieveOptions {
    /// Start from all-default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific 1-based page.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Override how many rows the endpoint is asked for.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restrict the fetch to the given colors.
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Build the concrete wire query for these options.
    pub fn build_query(&self) -> RecordQuery {
        let limit = match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        };
        let offset = match self.page {
            Some(page) if page > 0 => (page - 1) * PAGE_SIZE,
            _ => 0,
        };
        let colors = self.colors.clone().unwrap_or_default();
        tracing::debug!(
            "[query] build_query limit={} offset={} colors={:?}",
            limit,
            offset,
            colors
        );
        RecordQuery {
            limit,
            offset,
            colors,
        }
    }

    /// The page number the transformer should treat as current.
    pub fn current_page(&self) -> usize {
        match self.page {
            Some(page) if page > 0 => page,
            _ => 1,
        }
    }
}

/// Fully resolved wire parameters for one fetch against the records endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub limit: usize,
    pub offset: usize,
    pub colors: Vec<String>,
}

impl RecordQuery {
    /// Render the query onto the endpoint URL.
    ///
    /// Colors are encoded as a repeated `color[]` parameter and omitted
    /// entirely when no filter was requested.
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("limit", &self.limit.to_string());
            pairs.append_pair("offset", &self.offset.to_string());
            for color in &self.colors {
                pairs.append_pair("color[]", color);
            }
        }
        url
    }
}
