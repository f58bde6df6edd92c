//! Remote catalogue access: wire records and the HTTP client.
//!
//! All outgoing requests go through [`RecipeApi`] so callers can swap the
//! real client for a mock in tests.

mod api;
mod dto;

pub use api::{HttpRecipeApi, HttpRecipeApiBuilder, MockRecipeApi, MockReply, RecipeApi};
pub use dto::RecipeDto;
