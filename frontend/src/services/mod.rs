pub mod api;
pub mod subdomain;
