//! Client session state.
//!
//! One credential slot, scoped so shop subdomains share it, behind an
//! injectable store. [`Session::authorize`] is the single authorization
//! predicate for every protected entry point.

mod claims;
mod store;

pub use claims::{decode_unverified, DecodeError};
pub use store::{
    format_set_cookie, read_cookie, CookieOptions, CookieStore, CredentialStore, MemoryStore,
    TOKEN_COOKIE,
};

use std::rc::Rc;

use shared::models::Claims;
use thiserror::Error;
use yew::prelude::*;

/// Credential lifetime for a remember-me login, seven days.
pub const REMEMBER_ME_MAX_AGE: i64 = 7 * 24 * 60 * 60;
/// Credential lifetime for a plain login, thirty minutes.
pub const SHORT_SESSION_MAX_AGE: i64 = 30 * 60;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no credential present")]
    Missing,
    #[error(transparent)]
    Invalid(#[from] DecodeError),
}

/// The session object handed to components through context. Storage is
/// injected so tests run against an in-memory slot instead of the browser
/// cookie jar.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn CredentialStore>,
    options: CookieOptions,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.options == other.options
    }
}

impl Session {
    pub fn new(store: Rc<dyn CredentialStore>, options: CookieOptions) -> Self {
        Self { store, options }
    }

    /// Session backed by the browser cookie jar, with the credential scoped
    /// to the parent domain of the current host.
    pub fn for_browser() -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        Self::new(Rc::new(CookieStore), CookieOptions::for_host(&hostname))
    }

    /// Raw credential, exactly as stored. This is what goes into the
    /// `Authorization` header.
    pub fn token(&self) -> Option<String> {
        self.store.read()
    }

    /// The authorization predicate: the credential must be present and
    /// structurally decodable. An undecodable credential is removed before
    /// failure is reported, so the next evaluation sees a clean absence.
    pub fn authorize(&self) -> Result<Claims, AuthError> {
        let token = self.token().ok_or(AuthError::Missing)?;
        match decode_unverified(&token) {
            Ok(claims) => Ok(claims),
            Err(err) => {
                tracing::warn!(%err, "removing undecodable credential");
                self.store.remove(&self.options);
                Err(AuthError::Invalid(err))
            }
        }
    }

    pub fn login(&self, token: &str, remember: bool) {
        self.store
            .write(token, &self.options, max_age_for(remember));
    }

    pub fn logout(&self) {
        self.store.remove(&self.options);
    }
}

/// Credential lifetime matching the remember-me choice.
pub fn max_age_for(remember: bool) -> i64 {
    if remember {
        REMEMBER_ME_MAX_AGE
    } else {
        SHORT_SESSION_MAX_AGE
    }
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session context not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    fn memory_session() -> Session {
        Session::new(
            Rc::new(MemoryStore::new()),
            CookieOptions::for_host("example.com"),
        )
    }

    fn well_formed_token(username: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(
            r#"{{"id":"u-1","username":"{username}","iat":1700000000,"exp":1700604800}}"#
        ));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_authorize_without_credential_is_missing() {
        let session = memory_session();
        assert!(matches!(session.authorize(), Err(AuthError::Missing)));
    }

    #[test]
    fn test_login_then_authorize() {
        let session = memory_session();
        session.login(&well_formed_token("mercantile"), true);

        let claims = session.authorize().expect("should authorize");
        assert_eq!(claims.username, "mercantile");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_credential_round_trips_unchanged() {
        let session = memory_session();
        let token = well_formed_token("mercantile");
        session.login(&token, false);
        assert_eq!(session.token(), Some(token));
    }

    #[test]
    fn test_undecodable_credential_fails_closed() {
        let session = memory_session();
        session.login("garbage-that-is-not-a-token", false);

        assert!(matches!(session.authorize(), Err(AuthError::Invalid(_))));
        // The slot was cleared, so the next evaluation is a plain absence.
        assert_eq!(session.token(), None);
        assert!(matches!(session.authorize(), Err(AuthError::Missing)));
    }

    #[test]
    fn test_logout_clears_credential() {
        let session = memory_session();
        session.login(&well_formed_token("mercantile"), true);
        session.logout();

        assert_eq!(session.token(), None);
        assert!(matches!(session.authorize(), Err(AuthError::Missing)));
    }

    #[test]
    fn test_remember_me_picks_long_lifetime() {
        assert_eq!(max_age_for(true), 7 * 24 * 60 * 60);
        assert_eq!(max_age_for(false), 30 * 60);
    }
}
