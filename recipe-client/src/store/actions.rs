use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::{Ingredient, Recipe};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Recipes(RecipesAction),
    ShoppingList(ShoppingListAction),
    /// Records the location the UI should move to.
    Navigate(String),
}

#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStart(Credentials),
    SignupStart(Credentials),
    AuthenticationSuccess {
        email: String,
        user_id: String,
        token: String,
        expiration_date: DateTime<Utc>,
        redirect: bool,
    },
    AuthenticateFail(String),
    ClearError,
    AutoLogin,
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecipesAction {
    SetRecipes(Vec<Recipe>),
    FetchRecipes,
    StoreRecipes,
    AddRecipe(Recipe),
    UpdateRecipe { index: usize, recipe: Recipe },
    DeleteRecipe(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingListAction {
    AddIngredient(Ingredient),
    AddIngredients(Vec<Ingredient>),
    /// Replaces the ingredient currently being edited.
    UpdateIngredient(Ingredient),
    /// Removes the ingredient currently being edited.
    DeleteIngredient,
    StartEdit(usize),
    StopEdit,
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<RecipesAction> for Action {
    fn from(action: RecipesAction) -> Self {
        Action::Recipes(action)
    }
}

impl From<ShoppingListAction> for Action {
    fn from(action: ShoppingListAction) -> Self {
        Action::ShoppingList(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_hides_password() {
        let action = Action::from(AuthAction::LoginStart(Credentials::new("a@b.c", "hunter22")));
        let printed = format!("{action:?}");
        assert!(printed.contains("a@b.c"));
        assert!(!printed.contains("hunter22"));
    }
}
