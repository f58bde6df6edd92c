//! Fetch orchestration and failure classification.

use std::sync::Arc;

use crate::connectivity::Connectivity;
use crate::error::ApiError;
use crate::outcome::Outcome;
use crate::remote::RecipeApi;
use crate::types::Recipe;

/// Runs one fetch attempt end to end: connectivity gate, remote call,
/// DTO mapping, and classification of anything that goes wrong.
///
/// An attempt either fully succeeds (every record mapped) or fully fails;
/// no partial list is ever returned.
pub struct RecipeRepository {
    api: Arc<dyn RecipeApi>,
    connectivity: Arc<dyn Connectivity>,
}

impl RecipeRepository {
    pub fn new(api: Arc<dyn RecipeApi>, connectivity: Arc<dyn Connectivity>) -> Self {
        Self { api, connectivity }
    }

    /// Fetch and map the full recipe list.
    pub async fn get_recipes(&self) -> Outcome<Vec<Recipe>> {
        if !self.connectivity.is_online() {
            return Outcome::NetworkUnavailable;
        }
        match self.api.list_recipes().await {
            Ok(dtos) => Outcome::Success(dtos.into_iter().map(Recipe::from).collect()),
            Err(e) => classify(e),
        }
    }

    /// Fetch and map a single recipe.
    pub async fn get_recipe_by_id(&self, id: &str) -> Outcome<Recipe> {
        if !self.connectivity.is_online() {
            return Outcome::NetworkUnavailable;
        }
        match self.api.recipe_by_id(id).await {
            Ok(dto) => Outcome::Success(Recipe::from(dto)),
            Err(e) => classify(e),
        }
    }
}

/// Map an API failure onto the three-way outcome.
///
/// Transport failures carry no status and use the -1 sentinel code, as
/// does anything that is neither a transport nor a protocol failure.
fn classify<T>(err: ApiError) -> Outcome<T> {
    match err {
        ApiError::Transport(reason) => {
            tracing::warn!(%reason, "fetch failed before a response arrived");
            Outcome::Error {
                code: -1,
                message: Some("Network Error".to_string()),
            }
        }
        ApiError::Status { status, message } => {
            tracing::warn!(status, "fetch rejected by server");
            Outcome::Error {
                code: i32::from(status),
                message,
            }
        }
        other => {
            tracing::warn!(error = %other, "fetch failed");
            Outcome::Error {
                code: -1,
                message: Some("Unknown Error".to_string()),
            }
        }
    }
}
