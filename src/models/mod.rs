pub mod link;
pub mod pagination;
pub mod route_parameters;
pub mod sort;
