use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ============================================================================
// Auth API Types
// ============================================================================

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9-]+$").expect("username pattern is valid"));

const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 50, message = "Username must be 3-50 characters"),
        regex(
            path = "USERNAME_RE",
            message = "Username must be lowercase and can only include letters, numbers, and hyphens"
        )
    )]
    pub username: String,

    #[validate(custom = "validate_password")]
    pub password: String,

    #[validate(
        length(min = 3, message = "At least 3 shop names are required"),
        custom = "validate_shop_names"
    )]
    pub shops: Vec<String>,

    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// The auth service answers with either `success` or `ok` depending on
    /// which path handled the request; either counts as acceptance.
    pub fn accepted(&self) -> bool {
        self.success.or(self.ok).unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Shop API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListData {
    pub shops: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ShopListData>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Validation
// ============================================================================

/// Split the comma-separated shops field into trimmed names. Empty segments
/// are kept so validation can reject them instead of silently dropping them.
pub fn parse_shop_names(raw: &str) -> Vec<String> {
    raw.split(',').map(|shop| shop.trim().to_string()).collect()
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 {
        return Err(rule_error(
            "password_length",
            "Password must be at least 8 characters long",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(rule_error(
            "password_digit",
            "Password must contain at least one number",
        ));
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err(rule_error(
            "password_special",
            "Password must contain at least one special character",
        ));
    }
    Ok(())
}

fn validate_shop_names(shops: &[String]) -> Result<(), ValidationError> {
    if shops.iter().any(|shop| shop.trim().len() < 3) {
        return Err(rule_error(
            "shop_name_length",
            "Each shop name must be at least 3 characters long",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "shop-owner-7".to_string(),
            password: "s3cret!pass".to_string(),
            shops: vec![
                "books".to_string(),
                "bikes".to_string(),
                "bread".to_string(),
            ],
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_valid_register_request() {
        register_request().validate().expect("should validate");
    }

    #[test]
    fn test_username_too_short() {
        let mut req = register_request();
        req.username = "ab".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_rejects_uppercase_and_spaces() {
        for bad in ["Shop", "my shop", "shop_1", "shop!"] {
            let mut req = register_request();
            req.username = bad.to_string();
            assert!(req.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_password_rules() {
        for bad in ["short1!", "longenoughbutplain", "n0digitspecial"] {
            let mut req = register_request();
            req.password = bad.to_string();
            assert!(req.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_requires_three_shops() {
        let mut req = register_request();
        req.shops = vec!["books".to_string(), "bikes".to_string()];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_short_shop_name() {
        let mut req = register_request();
        req.shops = vec![
            "books".to_string(),
            "ok".to_string(),
            "bread".to_string(),
        ];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_request_rules() {
        let req = LoginRequest {
            username: "shop-owner-7".to_string(),
            password: "x".to_string(),
        };
        req.validate().expect("should validate");

        let req = LoginRequest {
            username: "ab".to_string(),
            password: "x".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            username: "shop-owner-7".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_parse_shop_names_trims_and_keeps_empties() {
        assert_eq!(
            parse_shop_names(" books , bikes ,, bread"),
            vec!["books", "bikes", "", "bread"]
        );
    }

    #[test]
    fn test_register_response_accepts_either_flag() {
        let by_success: RegisterResponse =
            serde_json::from_str(r#"{"success":true}"#).expect("should parse");
        let by_ok: RegisterResponse = serde_json::from_str(r#"{"ok":true}"#).expect("should parse");
        let neither: RegisterResponse = serde_json::from_str(r#"{}"#).expect("should parse");
        assert!(by_success.accepted());
        assert!(by_ok.accepted());
        assert!(!neither.accepted());
    }
}
