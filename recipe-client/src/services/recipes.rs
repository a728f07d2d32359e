use tokio::sync::watch;
use tracing::warn;

use crate::models::{Ingredient, Recipe};
use crate::store::{Action, ShoppingListAction};

/// In-memory recipe collection; every change is published to subscribers.
#[derive(Debug)]
pub struct RecipeService {
    recipes: Vec<Recipe>,
    recipes_changed: watch::Sender<Vec<Recipe>>,
}

impl RecipeService {
    pub fn new() -> Self {
        let (recipes_changed, _) = watch::channel(Vec::new());
        Self {
            recipes: Vec::new(),
            recipes_changed,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Recipe>> {
        self.recipes_changed.subscribe()
    }

    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.notify();
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    pub fn recipe(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
        self.notify();
    }

    pub fn update_recipe(&mut self, index: usize, recipe: Recipe) {
        match self.recipes.get_mut(index) {
            Some(slot) => {
                *slot = recipe;
                self.notify();
            }
            None => warn!(index, "update of unknown recipe ignored"),
        }
    }

    pub fn delete_recipe(&mut self, index: usize) {
        if index < self.recipes.len() {
            self.recipes.remove(index);
            self.notify();
        } else {
            warn!(index, "delete of unknown recipe ignored");
        }
    }

    pub fn add_ingredients_to_shopping_list(&self, ingredients: Vec<Ingredient>) -> Action {
        ShoppingListAction::AddIngredients(ingredients).into()
    }

    fn notify(&self) {
        self.recipes_changed.send_replace(self.recipes.clone());
    }
}

impl Default for RecipeService {
    fn default() -> Self {
        Self::new()
    }
}
