//! Pagination links for result sets: which page numbers to show around the current page,
//! and what route parameters each previous / page / next link carries.
//!
//! Destinations come from an injected [`LinkBuilder`]; [`RouteTable`] is a path-template
//! implementation of it.

use std::sync::Arc;

use axum::Router;

pub use self::config::PaginatorConfig;
pub use self::error::{Error, Result};
pub use self::models::{
    link::{Link, LinkRole, LinkSet},
    pagination::{PaginationQuery, PaginationQueryBuilder, VisibleEntries},
    route_parameters::{ParamValue, RouteParameters},
    sort::{SortDirection, SortField, SortSpec},
};
pub use self::services::{
    link_builder::{LinkBuilder, RouteTable},
    paginator_service::Paginator,
};

pub mod config;
pub mod controllers;
pub mod error;
pub mod helpers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[derive(Clone)]
pub struct AppState {
    pub paginator: Arc<Paginator<RouteTable>>,
}

impl AppState {
    pub fn new(paginator: Paginator<RouteTable>) -> Self {
        Self {
            paginator: Arc::new(paginator),
        }
    }

    /// Search routes used by the demo server.
    pub fn demo(config: PaginatorConfig) -> Self {
        let routes = RouteTable::new()
            .with_route("app_search", "/object/search")
            .with_route("app_search_params", "/object/{type}/search");

        Self::new(Paginator::new(routes, config))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/links", routes::links_routes::LinksRoutes::routes())
        .with_state(state)
}
