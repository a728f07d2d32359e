mod auth;
mod recipe;
mod user;

pub use auth::AuthResponseData;
pub use recipe::{Ingredient, Recipe, RecipeRecord, decode_recipe_records, normalize_recipes};
pub use user::User;
