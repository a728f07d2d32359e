pub mod auth;
pub mod recipes;

pub use auth::AuthService;
pub use recipes::RecipeService;
