use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

/// Ordered sort instructions. The order of the fields is the precedence of the sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortSpec {
    fields: Vec<SortField>,
}

impl SortSpec {
    /// Builds a spec from `field => direction` pairs, silently dropping every pair whose
    /// direction is not `asc` or `desc` (any letter case).
    pub fn from_pairs<I, K, V>(input: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = input
            .into_iter()
            .filter_map(|(field, direction)| {
                SortDirection::from_str(direction.as_ref())
                    .ok()
                    .map(|direction| SortField {
                        field: field.into(),
                        direction,
                    })
            })
            .collect();

        Self { fields }
    }

    /// Same as [`SortSpec::from_pairs`] for a JSON object; non-string directions are dropped.
    pub fn from_json(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        Self::from_pairs(
            map.iter()
                .filter_map(|(field, direction)| direction.as_str().map(|dir| (field.as_str(), dir))),
        )
    }

    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical token, e.g. `id:asc,name:desc`. Empty when there is nothing to sort on.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|sort| format!("{}:{}", sort.field, sort.direction))
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub fn encode_sort<I, K, V>(input: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    SortSpec::from_pairs(input).encode()
}
