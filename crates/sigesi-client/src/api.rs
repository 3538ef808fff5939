//! HTTP client for the SIGESI backend.
//!
//! Mirrors the browser front end's fetch wrapper: JSON in and out, the
//! session credential attached to every request, and error messages lifted
//! from the backend's JSON body (`message` or `error` field) with the HTTP
//! status text as a fallback.

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sigesi_core::{Result, SigesiError};
use sigesi_infrastructure::CredentialStore;

/// Typed client over the backend's REST surface.
///
/// The browser carries the session cookie in its ambient jar; here the
/// credential context is explicit: the persisted cookie is attached to each
/// request, and any `Set-Cookie` the backend returns is captured back into
/// the store.
pub struct ApiClient {
    http: Client,
    base: String,
    credentials: Arc<CredentialStore>,
}

impl ApiClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base: impl Into<String>, credentials: Arc<CredentialStore>) -> Result<Self> {
        // No ambient cookie jar: the credential store below is the only
        // place the session cookie lives.
        let http = Client::builder()
            .build()
            .map_err(|e| SigesiError::http(e.to_string()))?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Returns the backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Joins an absolute backend path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET returning a decoded JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path, None::<&()>).await?;
        decode(&body)
    }

    /// POST with a JSON payload, returning a decoded JSON body.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, payload: &impl Serialize) -> Result<T> {
        let body = self.send(Method::POST, path, Some(payload)).await?;
        decode(&body)
    }

    /// PATCH with a JSON payload, returning a decoded JSON body.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<T> {
        let body = self.send(Method::PATCH, path, Some(payload)).await?;
        decode(&body)
    }

    /// DELETE, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// POST without a payload, ignoring any response body (e.g. `/logout`).
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.send(Method::POST, path, None::<&()>).await?;
        Ok(())
    }

    /// GET discarding the body: the cheap "am I logged in" probe shape.
    pub async fn check(&self, path: &str) -> Result<()> {
        self.send(Method::GET, path, None::<&()>).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&impl Serialize>,
    ) -> Result<String> {
        let mut request = self.http.request(method.clone(), self.url(path));

        match self.credentials.load() {
            Ok(Some(credential)) => {
                request = request.header(reqwest::header::COOKIE, credential.cookie);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!("could not load session credential: {}", err),
        }

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        tracing::debug!(%method, path, "sending backend request");
        let response = request
            .send()
            .await
            .map_err(|e| SigesiError::http(e.to_string()))?;

        self.capture_session_cookie(&response);

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SigesiError::http(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error_message(status, &text);
            tracing::error!(path, status = status.as_u16(), "backend request failed: {}", message);
            return Err(SigesiError::api(status.as_u16(), message));
        }

        Ok(text)
    }

    /// Persists any session cookie the backend hands back, so the next run
    /// of the client starts authenticated.
    fn capture_session_cookie(&self, response: &reqwest::Response) {
        for value in response.headers().get_all(reqwest::header::SET_COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            let Some(pair) = raw.split(';').next() else { continue };
            let pair = pair.trim();
            if pair.is_empty() || !pair.contains('=') {
                continue;
            }
            let already = matches!(
                self.credentials.load(),
                Ok(Some(ref credential)) if credential.cookie == pair
            );
            if already {
                continue;
            }
            if let Err(err) = self.credentials.save(pair) {
                tracing::warn!("could not persist session cookie: {}", err);
            }
        }
    }
}

/// Decodes a response body, treating an empty body as "no content".
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Err(SigesiError::serialization(
            "JSON",
            "expected a response body, got none",
        ));
    }
    serde_json::from_str(body).map_err(Into::into)
}

/// Lifts a human-readable message out of an error response body.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn client_at(base: &str) -> (ApiClient, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(CredentialStore::at(temp_dir.path().join("session.toml")));
        (ApiClient::new(base, store).unwrap(), temp_dir)
    }

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let (client, _guard) = client_at("http://localhost:8080/");
        assert_eq!(
            client.url("/api/demandas/"),
            "http://localhost:8080/api/demandas/"
        );
    }

    #[test]
    fn test_extract_message_field() {
        let body = r#"{"message":"Sessão expirada"}"#;
        assert_eq!(
            extract_error_message(StatusCode::UNAUTHORIZED, body),
            "Sessão expirada"
        );
    }

    #[test]
    fn test_extract_error_field_fallback() {
        let body = r#"{"error":"Internal failure"}"#;
        assert_eq!(
            extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, body),
            "Internal failure"
        );
    }

    #[test]
    fn test_extract_falls_back_to_status_text() {
        assert_eq!(
            extract_error_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "Bad Gateway"
        );
        assert_eq!(extract_error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }

    #[test]
    fn test_decode_rejects_empty_body() {
        let result: Result<serde_json::Value> = decode("");
        assert!(result.is_err());
    }
}
