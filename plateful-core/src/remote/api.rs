//! Clients for the hosted recipe catalogue.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

use super::dto::RecipeDto;

/// Trait for catalogue clients, enabling mockability in tests.
///
/// Both operations issue exactly one request; failures are surfaced as-is
/// and left to the caller to classify.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch the full recipe list.
    async fn list_recipes(&self) -> Result<Vec<RecipeDto>, ApiError>;

    /// Fetch a single recipe by its identifier.
    async fn recipe_by_id(&self, id: &str) -> Result<RecipeDto, ApiError>;
}

/// Configuration for [`HttpRecipeApi`].
#[derive(Clone)]
pub struct HttpRecipeApiBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for HttpRecipeApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpRecipeApiBuilder {
    /// Create a new builder pointed at the hosted catalogue.
    pub fn new() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: "plateful/0.1".to_string(),
        }
    }

    /// Set the catalogue base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client. Fails if the base URL does not parse.
    pub fn build(self) -> Result<HttpRecipeApi, ApiError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;

        Ok(HttpRecipeApi { client, base_url })
    }
}

/// Production client speaking to the catalogue over HTTPS.
///
/// One outbound GET per call; no retries, no caching.
pub struct HttpRecipeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeApi {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        HttpRecipeApiBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> HttpRecipeApiBuilder {
        HttpRecipeApiBuilder::new()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(url, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<RecipeDto>, ApiError> {
        let url = format!("{}/recipes.json", self.base_url);
        self.get_json(&url).await
    }

    async fn recipe_by_id(&self, id: &str) -> Result<RecipeDto, ApiError> {
        if id.is_empty() {
            return Err(ApiError::InvalidRequest(
                "recipe id must not be empty".to_string(),
            ));
        }
        let url = format!("{}/recipes/{}", self.base_url, id);
        self.get_json(&url).await
    }
}

/// Error payload shape the catalogue uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pull a human-readable message out of a non-2xx body.
///
/// The catalogue reports errors as `{"error": "..."}`; any other non-empty
/// body is passed through raw.
fn error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Canned reply for the mock catalogue.
#[derive(Clone)]
pub enum MockReply {
    Recipes(Vec<RecipeDto>),
    Status { status: u16, message: Option<String> },
    Transport(String),
}

/// Mock catalogue client for tests.
///
/// Serves one canned reply for both operations; `recipe_by_id` resolves
/// against the canned list and reports 404 when the id is absent. Calls
/// are counted so tests can assert the network was never touched.
pub struct MockRecipeApi {
    reply: MockReply,
    calls: AtomicUsize,
}

impl MockRecipeApi {
    /// A client that serves the given records.
    pub fn with_recipes(recipes: Vec<RecipeDto>) -> Self {
        Self {
            reply: MockReply::Recipes(recipes),
            calls: AtomicUsize::new(0),
        }
    }

    /// A client whose every call fails with an HTTP status.
    pub fn with_status(status: u16, message: Option<&str>) -> Self {
        Self {
            reply: MockReply::Status {
                status,
                message: message.map(|m| m.to_string()),
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// A client whose every call fails before a response arrives.
    pub fn with_transport_error(reason: &str) -> Self {
        Self {
            reply: MockReply::Transport(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made against this client.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn recipes(&self) -> Result<Vec<RecipeDto>, ApiError> {
        match &self.reply {
            MockReply::Recipes(recipes) => Ok(recipes.clone()),
            MockReply::Status { status, message } => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            MockReply::Transport(reason) => Err(ApiError::Transport(reason.clone())),
        }
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<RecipeDto>, ApiError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.recipes()
    }

    async fn recipe_by_id(&self, id: &str) -> Result<RecipeDto, ApiError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if id.is_empty() {
            return Err(ApiError::InvalidRequest(
                "recipe id must not be empty".to_string(),
            ));
        }
        self.recipes()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(ApiError::Status {
                status: 404,
                message: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_bad_base_url() {
        let result = HttpRecipeApi::builder().base_url("not a url").build();
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let api = HttpRecipeApi::builder()
            .base_url("https://example.com/catalogue/")
            .build()
            .unwrap();
        assert_eq!(api.base_url, "https://example.com/catalogue");
    }

    #[test]
    fn error_message_parses_json_error_body() {
        assert_eq!(
            error_message(r#"{"error": "Not found"}"#),
            Some("Not found".to_string())
        );
    }

    #[test]
    fn error_message_passes_raw_body_through() {
        assert_eq!(error_message("  gateway timeout  "), Some("gateway timeout".to_string()));
        assert_eq!(error_message(""), None);
        assert_eq!(error_message("   "), None);
    }

    #[tokio::test]
    async fn mock_serves_single_recipe_by_id() {
        let dto = RecipeDto {
            id: "r1".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            headline: String::new(),
            time: String::new(),
            difficulty: String::new(),
            calories: String::new(),
            carbos: String::new(),
            fats: String::new(),
            proteins: String::new(),
            image: String::new(),
            thumb: String::new(),
        };
        let api = MockRecipeApi::with_recipes(vec![dto]);

        let found = api.recipe_by_id("r1").await.unwrap();
        assert_eq!(found.name, "Test");

        let missing = api.recipe_by_id("r2").await;
        assert!(matches!(
            missing,
            Err(ApiError::Status { status: 404, .. })
        ));
        assert_eq!(api.calls(), 2);
    }
}
