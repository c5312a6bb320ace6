use std::env;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_PER_PAGE: u64 = 15;
pub const PER_PAGE_ENV: &str = "PAGINATOR_PER_PAGE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginatorConfig {
    /// Page size used when the call site sets none.
    #[serde(rename = "perPage", default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PaginatorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(env::var(PER_PAGE_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let per_page = raw.trim().parse::<u64>().map_err(|_| Error::InvalidConfig {
            reason: format!("{PER_PAGE_ENV} must be a positive integer, got {raw:?}"),
        })?;

        Self { per_page }.validated()
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|err| Error::InvalidConfig {
            reason: err.to_string(),
        })?;

        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.per_page == 0 {
            return Err(Error::InvalidConfig {
                reason: "perPage must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
}
