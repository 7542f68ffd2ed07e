//! Build-time configuration.

/// Base URL of the auth/shop API. Override at build time by setting
/// `SHOPZONE_API_URL` in the environment.
pub const API_BASE_URL: &str = match option_env!("SHOPZONE_API_URL") {
    Some(url) => url,
    None => "https://shopzone-server.vercel.app",
};
