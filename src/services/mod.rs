pub mod link_builder;
pub mod paginator_service;
