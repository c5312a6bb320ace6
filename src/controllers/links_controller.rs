use axum::{extract::State, Json};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::{
    error::Result,
    models::{
        link::LinkSet,
        pagination::{PaginationQuery, VisibleEntries},
        route_parameters::RouteParameters,
        sort::SortSpec,
    },
    validators::IntegerValidator,
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct LinksRequest {
    pub route: Option<String>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, deserialize_with = "present")]
    pub total: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub sort: Map<String, Value>,
    #[serde(default, deserialize_with = "present")]
    pub page: Option<Value>,
}

// Keeps an explicit `null` as `Some(Value::Null)` so it is rejected instead of ignored.
fn present<'de, D>(deserializer: D) -> core::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl LinksRequest {
    fn to_query(&self, state: &AppState) -> Result<(PaginationQuery, i64)> {
        let mut builder = state
            .paginator
            .query()
            .route_parameters(RouteParameters::from_json(&self.parameters)?)
            .sort_spec(SortSpec::from_json(&self.sort));

        if let Some(route) = &self.route {
            builder = builder.route_id(route.as_str());
        }
        if let Some(total) = &self.total {
            builder = builder.total(IntegerValidator::strict_integer(total, "total")?);
        }
        if let Some(per_page) = &self.per_page {
            builder = builder.per_page(IntegerValidator::strict_integer(per_page, "per_page")?);
        }

        let page = IntegerValidator::optional_integer(self.page.as_ref(), "page", 1)?;

        Ok((builder.build()?, page))
    }
}

pub struct LinksController;

impl LinksController {
    pub async fn get_links(
        State(state): State<AppState>,
        Json(request): Json<LinksRequest>,
    ) -> Result<Json<LinkSet>> {
        let (query, page) = request.to_query(&state)?;
        let links = state.paginator.get_links(&query, page)?;

        Ok(Json(links))
    }

    pub async fn get_visible_entries(
        State(state): State<AppState>,
        Json(request): Json<LinksRequest>,
    ) -> Result<Json<VisibleEntries>> {
        let (query, page) = request.to_query(&state)?;

        Ok(Json(state.paginator.visible_entries(&query, page)))
    }
}
