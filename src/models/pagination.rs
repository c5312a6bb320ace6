use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{route_parameters::RouteParameters, sort::SortSpec};

/// Everything needed to paginate one result set. Built once through
/// [`PaginationQueryBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationQuery {
    route_id: String,
    route_parameters: RouteParameters,
    per_page: u64, // always >= 1
    total: u64,
    sort: SortSpec,
}

impl PaginationQuery {
    pub fn builder(default_per_page: u64) -> PaginationQueryBuilder {
        PaginationQueryBuilder::new(default_per_page)
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn route_parameters(&self) -> &RouteParameters {
        &self.route_parameters
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// `ceil(total / per_page)`; zero when there are no results.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaginationQueryBuilder {
    route_id: Option<String>,
    route_parameters: RouteParameters,
    per_page: u64,
    total: Option<u64>,
    sort: SortSpec,
}

impl PaginationQueryBuilder {
    pub fn new(default_per_page: u64) -> Self {
        Self {
            per_page: default_per_page,
            ..Self::default()
        }
    }

    /// Named route the links are generated for.
    pub fn route_id(mut self, route_id: impl Into<String>) -> Self {
        self.route_id = Some(route_id.into());
        self
    }

    pub fn route_parameters(mut self, parameters: RouteParameters) -> Self {
        self.route_parameters = parameters;
        self
    }

    /// Overrides the configured page size. Negative sizes are stored as their magnitude.
    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page.unsigned_abs();
        self
    }

    /// Total number of results. Negative totals are stored as their magnitude.
    pub fn total(mut self, total: i64) -> Self {
        self.total = Some(total.unsigned_abs());
        self
    }

    /// `field => direction` pairs; see [`SortSpec::from_pairs`].
    pub fn sort<I, K, V>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.sort = SortSpec::from_pairs(sort);
        self
    }

    pub fn sort_spec(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn build(self) -> Result<PaginationQuery> {
        let mut missing = Vec::new();
        if self.route_id.is_none() {
            missing.push("route_id".to_string());
        }
        if self.total.is_none() {
            missing.push("total".to_string());
        }

        let (Some(route_id), Some(total)) = (self.route_id, self.total) else {
            return Err(Error::NotInitialized { missing });
        };

        if self.per_page == 0 {
            return Err(Error::invalid_argument(
                "per_page",
                "the number of results per page must be at least 1",
            ));
        }

        Ok(PaginationQuery {
            route_id,
            route_parameters: self.route_parameters,
            per_page: self.per_page,
            total,
            sort: self.sort,
        })
    }
}

/// "Showing `first`-`last` of `total`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleEntries {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}
