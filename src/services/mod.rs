pub mod admin_service;
pub mod content_store;
pub mod object_store;
pub mod site_service;

