pub mod links_controller;
