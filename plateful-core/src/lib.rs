pub mod connectivity;
pub mod error;
pub mod feed;
pub mod outcome;
pub mod remote;
pub mod repository;
pub mod types;

pub use connectivity::{Connectivity, StaticConnectivity, TcpProbe};
pub use error::ApiError;
pub use feed::{FeedState, RecipeFeed};
pub use outcome::Outcome;
pub use remote::{HttpRecipeApi, HttpRecipeApiBuilder, MockRecipeApi, RecipeApi, RecipeDto};
pub use repository::RecipeRepository;
pub use types::Recipe;

/// Base URL of the hosted recipe catalogue.
pub const DEFAULT_BASE_URL: &str =
    "https://hf-android-app.s3-eu-west-1.amazonaws.com/android-test";
