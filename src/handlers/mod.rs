pub mod admin_handlers;
pub mod api_handlers;
pub mod health_handlers;
pub mod site_handlers;
pub mod storage_handlers;
