use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried in the payload segment of the session token.
///
/// These are decoded client-side without signature verification, so they are
/// display data only — the backend independently authorizes every request
/// that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id assigned by the auth service
    pub id: String,
    pub username: String,
    /// Role name; the auth service omits it for plain accounts
    #[serde(default = "default_role")]
    pub role: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

fn default_role() -> String {
    "user".to_string()
}

impl Claims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is past its expiry relative to the supplied clock.
    /// The caller picks the clock; nothing here consults a trusted one.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Claims {
        Claims {
            id: "64f1c0ffee".to_string(),
            username: "mercantile".to_string(),
            role: "user".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_604_800,
        }
    }

    #[test]
    fn test_role_defaults_to_user() {
        let claims: Claims = serde_json::from_str(
            r#"{"id":"1","username":"mercantile","iat":1700000000,"exp":1700604800}"#,
        )
        .expect("should deserialize without role");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_explicit_role_preserved() {
        let claims: Claims = serde_json::from_str(
            r#"{"id":"1","username":"mercantile","role":"admin","iat":1700000000,"exp":1700604800}"#,
        )
        .expect("should deserialize with role");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_timestamp_helpers() {
        let claims = sample();
        let issued = claims.issued_at().expect("should convert iat");
        let expires = claims.expires_at().expect("should convert exp");
        assert_eq!(issued.timestamp(), 1_700_000_000);
        assert_eq!(expires.timestamp(), 1_700_604_800);
        assert!(issued < expires);
    }

    #[test]
    fn test_expiry_relative_to_clock() {
        let claims = sample();
        let before = DateTime::from_timestamp(claims.exp - 1, 0).expect("valid timestamp");
        let at = DateTime::from_timestamp(claims.exp, 0).expect("valid timestamp");
        assert!(!claims.is_expired_at(before));
        assert!(claims.is_expired_at(at));
    }
}
