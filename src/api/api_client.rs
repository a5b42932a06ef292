use log::{debug, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json;
use std::sync::Arc;

use super::api_config::ApiConfig;
use super::api_errors::{ApiError, Result};
use super::session::Session;

/// Authenticated HTTP client for the backend API.
///
/// Attaches the session's bearer token to every request, converts non-2xx
/// responses into typed errors and performs the global de-authentication on
/// 401/403 regardless of which endpoint produced it.
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    session: Arc<Session>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    message: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<Session>) -> Self {
        Self {
            client: Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.config.base_url, path)
        } else {
            format!("{}/{}", self.config.base_url, path)
        }
    }

    async fn execute(&self, mut request: RequestBuilder) -> Result<String> {
        if let Some(token) = self.session.token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("Received {} from backend, clearing session", status);
            self.session.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.map_err(ApiError::Network)?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: extract_error_message(&body, status.as_u16()),
            });
        }
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let body = self.execute(self.client.get(self.url(path))).await?;
        self.decode(&body)
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T> {
        debug!("POST {}", path);
        let body = self
            .execute(self.client.post(self.url(path)).json(payload))
            .await?;
        self.decode(&body)
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T> {
        debug!("PUT {}", path);
        let body = self
            .execute(self.client.put(self.url(path)).json(payload))
            .await?;
        self.decode(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!("DELETE {}", path);
        self.execute(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    /// Probes `GET /health`. Any transport error or non-2xx counts as down.
    pub async fn health_check(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }
}

/// Pulls a human-readable message out of a JSON error body, preferring the
/// backend's `detail` then `message` keys, else a generic HTTP status line.
fn extract_error_message(body: &str, status: u16) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            if let Some(text) = detail.as_str() {
                return text.to_string();
            }
            // FastAPI-style validation payloads arrive as arrays
            if detail.is_array() || detail.is_object() {
                return detail.to_string();
            }
        }
        if let Some(message) = parsed.message {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    format!("HTTP {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_string() {
        let body = r#"{"detail": "CPF already registered"}"#;
        assert_eq!(extract_error_message(body, 422), "CPF already registered");
    }

    #[test]
    fn extracts_message_when_detail_absent() {
        let body = r#"{"message": "Asset not found"}"#;
        assert_eq!(extract_error_message(body, 404), "Asset not found");
    }

    #[test]
    fn falls_back_to_status_line() {
        assert_eq!(extract_error_message("not json", 500), "HTTP 500");
        assert_eq!(extract_error_message("{}", 400), "HTTP 400");
    }
}
