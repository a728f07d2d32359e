//! Recipe book client: Firebase-style authentication, an action/reducer
//! store, and effects that persist the recipe collection over REST.

use async_trait::async_trait;

pub mod config;
pub mod effects;
pub mod error;
pub mod logging;
pub mod models;
pub mod recipe_edit;
pub mod runtime;
pub mod services;
pub mod session;
pub mod store;

mod http_client;

pub use config::ClientConfig;
pub use error::RecipeClientError;
pub use http_client::FirebaseClient;
pub use models::{AuthResponseData, Ingredient, Recipe, RecipeRecord, User};
pub use runtime::App;

/// Credential exchange against the authentication backend.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponseData, RecipeClientError>;
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponseData, RecipeClientError>;
}

/// Whole-collection persistence of recipes.
#[async_trait(?Send)]
pub trait RecipeApi {
    async fn fetch_recipes(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<RecipeRecord>, RecipeClientError>;
    async fn store_recipes(
        &self,
        token: Option<&str>,
        recipes: &[Recipe],
    ) -> Result<serde_json::Value, RecipeClientError>;
}
