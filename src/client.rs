//! Generic REST client for the `/api/v1` collection endpoints.
//!
//! Each entity type plugs in through the [`Resource`] trait; the client
//! itself only knows how to issue the four collection calls. Every call is
//! attempted exactly once: no retries, no timeouts, no idempotency keys.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;

/// Per-entity wiring for the generic client and page controllers.
pub trait Resource {
    type Entity: DeserializeOwned + Clone + Send + Sync;
    type Draft: Default + Clone + Send + Sync;

    /// Path segment under `/api/v1/`, e.g. `books`.
    const COLLECTION: &'static str;
    /// Singular label used in mutation failure messages, e.g. `book`.
    const LABEL: &'static str;
    /// Plural label used in fetch failure messages, e.g. `books`.
    const PLURAL: &'static str;

    fn entity_id(entity: &Self::Entity) -> i32;

    /// Seed an edit draft from an existing entity. Strings are copied
    /// byte-for-byte; date-valued fields are normalized to `YYYY-MM-DD`.
    fn seed(entity: &Self::Entity) -> Self::Draft;

    /// Run the entity's validation rules, first failing reason wins.
    /// `creating` distinguishes create-only rules (e.g. a borrowing's book
    /// reference, which is immutable after creation).
    fn validate(draft: &Self::Draft, creating: bool) -> Result<(), ApiError>;

    /// Request body for POST. Only called on a draft that passed
    /// [`Resource::validate`], so numeric coercions are known to succeed.
    fn create_body(draft: &Self::Draft) -> Value;

    /// Request body for PUT. Kept separate from `create_body` because the
    /// backend's update contracts are not symmetric with create (a
    /// borrowing update sends only borrower/date fields, no book).
    fn update_body(draft: &Self::Draft) -> Value;
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/api/v1/{}", self.base_url, R::COLLECTION)
    }

    fn entity_url<R: Resource>(&self, id: i32) -> String {
        format!("{}/api/v1/{}/{}", self.base_url, R::COLLECTION, id)
    }

    /// Fetch the full collection.
    ///
    /// A non-array body (or one whose rows fail to decode) is substituted
    /// with the empty collection instead of surfacing a shape error.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Entity>, ApiError> {
        let url = self.collection_url::<R>();
        tracing::debug!(url = %url, "listing {}", R::COLLECTION);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = read_error_message(resp)
                .await
                .unwrap_or_else(|| format!("Server returned status {}", status.as_u16()));
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        // Transport failures while reading the body stay Network errors;
        // an unparseable body is a shape problem and downgrades like any
        // other non-array payload.
        let text = resp.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    "non-JSON payload for {}, substituting empty list",
                    R::COLLECTION
                );
                return Ok(Vec::new());
            }
        };
        if !body.is_array() {
            tracing::debug!(
                "non-array payload for {}, substituting empty list",
                R::COLLECTION
            );
            return Ok(Vec::new());
        }

        match serde_json::from_value(body) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    "undecodable rows for {}, substituting empty list",
                    R::COLLECTION
                );
                Ok(Vec::new())
            }
        }
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let url = self.collection_url::<R>();
        let body = R::create_body(draft);
        let request = self.http.post(&url).json(&body);
        self.send_mutation::<R>(request, save_fallback::<R>()).await
    }

    pub async fn update<R: Resource>(&self, id: i32, draft: &R::Draft) -> Result<(), ApiError> {
        let url = self.entity_url::<R>(id);
        let body = R::update_body(draft);
        let request = self.http.put(&url).json(&body);
        self.send_mutation::<R>(request, save_fallback::<R>()).await
    }

    pub async fn delete<R: Resource>(&self, id: i32) -> Result<(), ApiError> {
        let url = self.entity_url::<R>(id);
        let request = self.http.delete(&url);
        let fallback = format!("Failed to delete {}", R::LABEL);
        match self.send_mutation::<R>(request, fallback).await {
            Ok(()) => Ok(()),
            Err(ApiError::Save(msg)) => Err(ApiError::Delete(msg)),
            Err(e) => Err(e),
        }
    }

    /// Issue a mutation and collapse every failure into a single display
    /// message: the server's `message` field when present, else `fallback`.
    async fn send_mutation<R: Resource>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: String,
    ) -> Result<(), ApiError> {
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(error = %e, "{} request failed", R::COLLECTION);
                return Err(ApiError::Save(fallback));
            }
        };

        if resp.status().is_success() {
            return Ok(());
        }

        tracing::debug!(
            status = resp.status().as_u16(),
            "{} mutation rejected",
            R::COLLECTION
        );
        let message = read_error_message(resp).await.unwrap_or(fallback);
        Err(ApiError::Save(message))
    }
}

fn save_fallback<R: Resource>() -> String {
    format!("Failed to save {}", R::LABEL)
}

/// Pull the optional `message` field out of an error response body.
async fn read_error_message(resp: reqwest::Response) -> Option<String> {
    let body: Value = resp.json().await.ok()?;
    body.get("message")?.as_str().map(str::to_string)
}
