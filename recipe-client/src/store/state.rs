use crate::models::{Ingredient, User};
use crate::services::recipes::RecipeService;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub auth_error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Token of the current user while it is still valid.
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().and_then(User::token)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListState {
    pub ingredients: Vec<Ingredient>,
    pub edited_ingredient_index: Option<usize>,
}

impl ShoppingListState {
    pub fn edited_ingredient(&self) -> Option<&Ingredient> {
        self.edited_ingredient_index
            .and_then(|index| self.ingredients.get(index))
    }
}

impl Default for ShoppingListState {
    fn default() -> Self {
        Self {
            ingredients: vec![Ingredient::new("Apples", 5), Ingredient::new("Tomatoes", 10)],
            edited_ingredient_index: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub recipes: RecipeService,
    pub shopping_list: ShoppingListState,
    pub location: String,
}
