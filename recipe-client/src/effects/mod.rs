//! Handlers that turn dispatched actions into network calls and follow-up actions.

pub mod auth;
pub mod recipes;

pub use auth::{AuthEffects, error_message, handle_authentication};
pub use recipes::RecipeEffects;
