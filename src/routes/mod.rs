pub mod links_routes;
