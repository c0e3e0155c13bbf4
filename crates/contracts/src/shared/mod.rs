pub mod events;
pub mod menu_catalog;
pub mod nav_config;
