use gloo_net::http::Request;
use shared::api::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ShopListResponse,
};
use thiserror::Error;

use crate::config::API_BASE_URL;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

pub struct ApiService;

impl ApiService {
    /// Create an account. The server's message is surfaced on rejection.
    pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
        let url = format!("{API_BASE_URL}/api/auth/register");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        if !response.ok() {
            let message = response
                .json::<RegisterResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Registration failed".to_string());
            return Err(ApiError::Rejected(message));
        }

        let body: RegisterResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.accepted() {
            return Err(ApiError::Rejected(
                body.message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            ));
        }

        Ok(())
    }

    /// Exchange credentials for a session token.
    pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
        let url = format!("{API_BASE_URL}/api/auth/login");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        if !response.ok() {
            let message = response
                .json::<LoginResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(ApiError::Rejected(message));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        body.token
            .ok_or_else(|| ApiError::Decode("login response did not include a token".to_string()))
    }

    /// Fetch the shops owned by `username`, authenticated with the raw
    /// stored token. No retry and no timeout beyond the transport's own.
    pub async fn my_shops(username: &str, token: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{API_BASE_URL}/api/shop/my-shop/{username}");

        let response = Request::get(&url)
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(ApiError::Rejected(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body: ShopListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !body.success {
            return Err(ApiError::Rejected(
                body.message
                    .unwrap_or_else(|| "Shop list request was rejected".to_string()),
            ));
        }

        Ok(body.data.map(|data| data.shops).unwrap_or_default())
    }
}
