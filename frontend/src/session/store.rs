//! Storage for the single session credential.
//!
//! The browser implementation lives in the cookie jar under one well-known
//! key; tests inject [`MemoryStore`] instead. Absence of the credential is a
//! valid state everywhere in this module, never an error.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// The well-known cookie key holding the session credential.
pub const TOKEN_COOKIE: &str = "token";

/// Scope attributes applied to every credential write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// `Domain` attribute; `None` writes a host-only cookie.
    pub domain: Option<String>,
    pub path: String,
}

impl CookieOptions {
    /// Scope the credential to `.{hostname}` so every shop subdomain can
    /// read it. Logging in on `example.com` must leave a credential that
    /// `acme.example.com` sees, otherwise the guard on the shop origin
    /// bounces a just-authenticated user back to login.
    pub fn for_host(hostname: &str) -> Self {
        let domain = if hostname.is_empty() {
            None
        } else {
            Some(format!(".{hostname}"))
        };
        Self {
            domain,
            path: "/".to_string(),
        }
    }
}

/// Read/write/delete of the credential slot. Contents are opaque here.
pub trait CredentialStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str, options: &CookieOptions, max_age_seconds: i64);
    fn remove(&self, options: &CookieOptions);
}

/// Serialize the cookie string for a credential write. A removal is a write
/// with an empty value and `Max-Age=0`. `HttpOnly` cannot be set from
/// script, so it never appears here.
pub fn format_set_cookie(
    name: &str,
    value: &str,
    options: &CookieOptions,
    max_age_seconds: i64,
) -> String {
    let mut cookie = format!("{}={}; Path={}", name, value, options.path);
    if let Some(domain) = &options.domain {
        cookie.push_str("; Domain=");
        cookie.push_str(domain);
    }
    cookie.push_str(&format!("; Max-Age={max_age_seconds}; SameSite=Lax"));
    cookie
}

/// Find a cookie value in a `;`-separated jar string.
pub fn read_cookie(jar: &str, name: &str) -> Option<String> {
    for pair in jar.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Production store over `document.cookie`.
pub struct CookieStore;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl CredentialStore for CookieStore {
    fn read(&self) -> Option<String> {
        let jar = html_document()?.cookie().ok()?;
        read_cookie(&jar, TOKEN_COOKIE)
    }

    fn write(&self, value: &str, options: &CookieOptions, max_age_seconds: i64) {
        let Some(document) = html_document() else {
            tracing::warn!("credential write skipped: no document");
            return;
        };
        let cookie = format_set_cookie(TOKEN_COOKIE, value, options, max_age_seconds);
        if let Err(err) = document.set_cookie(&cookie) {
            tracing::warn!(?err, "browser rejected credential write");
        }
    }

    fn remove(&self, options: &CookieOptions) {
        let Some(document) = html_document() else {
            return;
        };
        let cookie = format_set_cookie(TOKEN_COOKIE, "", options, 0);
        if let Err(err) = document.set_cookie(&cookie) {
            tracing::warn!(?err, "browser rejected credential removal");
        }
    }
}

/// In-memory store for tests and non-browser targets.
#[derive(Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, value: &str, _options: &CookieOptions, _max_age_seconds: i64) {
        *self.slot.borrow_mut() = Some(value.to_string());
    }

    fn remove(&self, _options: &CookieOptions) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn cookie_store_round_trip() {
        let store = CookieStore;
        let options = CookieOptions {
            domain: None,
            path: "/".to_string(),
        };

        store.write("wasm-test-token", &options, 60);
        assert_eq!(store.read(), Some("wasm-test-token".to_string()));

        store.remove(&options);
        assert_eq!(store.read(), None);
    }
}
