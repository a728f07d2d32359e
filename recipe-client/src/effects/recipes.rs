use tracing::{error, info};

use crate::RecipeApi;
use crate::models::normalize_recipes;
use crate::store::{Action, AppState, RecipesAction};

pub struct RecipeEffects<R> {
    api: R,
}

impl<R: RecipeApi> RecipeEffects<R> {
    pub fn new(api: R) -> Self {
        Self { api }
    }

    pub async fn handle(&self, action: &Action, state: &AppState) -> Vec<Action> {
        match action {
            Action::Recipes(RecipesAction::FetchRecipes) => self.fetch(state).await,
            Action::Recipes(RecipesAction::StoreRecipes) => {
                self.store(state).await;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    async fn fetch(&self, state: &AppState) -> Vec<Action> {
        match self.api.fetch_recipes(state.auth.token()).await {
            Ok(records) => {
                let recipes = normalize_recipes(records);
                info!(count = recipes.len(), "recipes fetched");
                vec![RecipesAction::SetRecipes(recipes).into()]
            }
            Err(e) => {
                error!(error = %e, "failed to fetch recipes");
                Vec::new()
            }
        }
    }

    async fn store(&self, state: &AppState) {
        let recipes = state.recipes.recipes();
        match self.api.store_recipes(state.auth.token(), &recipes).await {
            Ok(response) => info!(count = recipes.len(), %response, "recipes stored"),
            Err(e) => error!(error = %e, "failed to store recipes"),
        }
    }
}
