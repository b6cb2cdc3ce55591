//! Misskey HTTP Client
//!
//! `MisskeyApi` over `reqwest`.
//!
//! # Misskey API
//!
//! Every endpoint lives under `/api/` and takes a JSON `POST` body carrying
//! the access token as `"i"`. The media proxy is the exception: a plain
//! `GET` with the target URL in the query string.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::traits::{ApiError, Emoji, InstanceMeta, MisskeyApi};
use crate::config::Config;
use crate::model::{Note, TimelineKind, User};

/// Client-side deadline for every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Notes requested per timeline or children fetch
pub const TIMELINE_LIMIT: u32 = 30;

#[derive(Deserialize)]
struct EmojiList {
    emojis: Vec<Emoji>,
}

/// Misskey API client
#[derive(Clone)]
pub struct MisskeyClient {
    /// Instance base URL without trailing slash
    base_url: String,
    /// Access token
    token: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl MisskeyClient {
    /// Create a client for the configured instance
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            token: config.access_token.clone(),
            http_client,
        })
    }

    /// Full URL of an API endpoint
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }

    /// Add the access token to a request body
    fn authed(&self, mut body: Value) -> Value {
        if let Some(obj) = body.as_object_mut() {
            obj.insert("i".to_string(), Value::String(self.token.clone()));
        }
        body
    }

    async fn send(&self, endpoint: &str, body: Value) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(endpoint, "POST");

        let response = self
            .http_client
            .post(&url)
            .json(&self.authed(body))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().to_string()));
        }
        Ok(response)
    }

    /// POST and decode a JSON response
    async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T, ApiError> {
        let response = self.send(endpoint, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST and ignore the response body (200 or 204)
    async fn post_unit(&self, endpoint: &str, body: Value) -> Result<(), ApiError> {
        self.send(endpoint, body).await.map(|_| ())
    }
}

#[async_trait]
impl MisskeyApi for MisskeyClient {
    async fn fetch_timeline(&self, kind: TimelineKind) -> Result<Vec<Note>, ApiError> {
        self.post(kind.endpoint(), json!({ "limit": TIMELINE_LIMIT }))
            .await
    }

    async fn fetch_note(&self, note_id: &str) -> Result<Note, ApiError> {
        self.post("notes/show", json!({ "noteId": note_id })).await
    }

    async fn fetch_children(&self, note_id: &str) -> Result<Vec<Note>, ApiError> {
        self.post(
            "notes/children",
            json!({ "noteId": note_id, "limit": TIMELINE_LIMIT }),
        )
        .await
    }

    async fn fetch_conversation(&self, note_id: &str) -> Result<Vec<Note>, ApiError> {
        self.post("notes/conversation", json!({ "noteId": note_id }))
            .await
    }

    async fn create_note(&self, text: &str, reply_id: Option<&str>) -> Result<(), ApiError> {
        let mut body = json!({ "text": text });
        if let Some(reply_id) = reply_id {
            body["replyId"] = json!(reply_id);
        }
        self.post_unit("notes/create", body).await
    }

    async fn create_reaction(&self, note_id: &str, reaction: &str) -> Result<(), ApiError> {
        self.post_unit(
            "notes/reactions/create",
            json!({ "noteId": note_id, "reaction": reaction }),
        )
        .await
    }

    async fn create_reshare(&self, note_id: &str) -> Result<(), ApiError> {
        self.post_unit("notes/create", json!({ "renoteId": note_id }))
            .await
    }

    async fn fetch_account(&self) -> Result<User, ApiError> {
        self.post("i", json!({})).await
    }

    async fn fetch_meta(&self) -> Result<InstanceMeta, ApiError> {
        self.post("meta", json!({ "detail": false })).await
    }

    async fn fetch_emojis(&self) -> Result<Vec<Emoji>, ApiError> {
        let list: EmojiList = self.post("emojis", json!({})).await?;
        Ok(list.emojis)
    }

    async fn fetch_image(&self, proxy_url: &str, image_url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(image_url, "GET via media proxy");

        let response = self
            .http_client
            .get(proxy_url)
            .query(&[("url", image_url), ("type", "emoji")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().to_string()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> MisskeyClient {
        let config = Config {
            instance_url: "https://example.test/".to_string(),
            access_token: "secret".to_string(),
        };
        MisskeyClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            client().endpoint_url(TimelineKind::Local.endpoint()),
            "https://example.test/api/notes/local-timeline"
        );
    }

    #[test]
    fn test_authed_body_carries_token() {
        let body = client().authed(json!({ "noteId": "n1" }));
        assert_eq!(body["i"], "secret");
        assert_eq!(body["noteId"], "n1");
    }
}
