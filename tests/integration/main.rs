mod admin;
mod api;
mod common;
mod site;
