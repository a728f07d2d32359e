use tracing::warn;

use super::actions::{Action, AuthAction, RecipesAction, ShoppingListAction};
use super::state::{AppState, AuthState, ShoppingListState};
use crate::models::User;
use crate::services::recipes::RecipeService;

pub fn app_reducer(state: &mut AppState, action: &Action) {
    match action {
        Action::Auth(action) => auth_reducer(&mut state.auth, action),
        Action::Recipes(action) => recipes_reducer(&mut state.recipes, action),
        Action::ShoppingList(action) => shopping_list_reducer(&mut state.shopping_list, action),
        Action::Navigate(location) => state.location = location.clone(),
    }
}

pub fn auth_reducer(state: &mut AuthState, action: &AuthAction) {
    match action {
        AuthAction::LoginStart(_) | AuthAction::SignupStart(_) => {
            state.auth_error = None;
            state.loading = true;
        }
        AuthAction::AuthenticationSuccess {
            email,
            user_id,
            token,
            expiration_date,
            ..
        } => {
            state.user = Some(User::new(
                email.clone(),
                user_id.clone(),
                token.clone(),
                *expiration_date,
            ));
            state.auth_error = None;
            state.loading = false;
        }
        AuthAction::AuthenticateFail(message) => {
            state.user = None;
            state.auth_error = Some(message.clone());
            state.loading = false;
        }
        AuthAction::Logout => state.user = None,
        AuthAction::ClearError => state.auth_error = None,
        AuthAction::AutoLogin => {}
    }
}

pub fn recipes_reducer(service: &mut RecipeService, action: &RecipesAction) {
    match action {
        RecipesAction::SetRecipes(recipes) => service.set_recipes(recipes.clone()),
        RecipesAction::AddRecipe(recipe) => service.add_recipe(recipe.clone()),
        RecipesAction::UpdateRecipe { index, recipe } => {
            service.update_recipe(*index, recipe.clone())
        }
        RecipesAction::DeleteRecipe(index) => service.delete_recipe(*index),
        RecipesAction::FetchRecipes | RecipesAction::StoreRecipes => {}
    }
}

pub fn shopping_list_reducer(state: &mut ShoppingListState, action: &ShoppingListAction) {
    match action {
        ShoppingListAction::AddIngredient(ingredient) => state.ingredients.push(ingredient.clone()),
        ShoppingListAction::AddIngredients(ingredients) => {
            state.ingredients.extend(ingredients.iter().cloned())
        }
        ShoppingListAction::UpdateIngredient(ingredient) => {
            match state.edited_ingredient_index.take() {
                Some(index) if index < state.ingredients.len() => {
                    state.ingredients[index] = ingredient.clone();
                }
                other => warn!(index = ?other, "no ingredient is being edited"),
            }
        }
        ShoppingListAction::DeleteIngredient => match state.edited_ingredient_index.take() {
            Some(index) if index < state.ingredients.len() => {
                state.ingredients.remove(index);
            }
            other => warn!(index = ?other, "no ingredient is being edited"),
        },
        ShoppingListAction::StartEdit(index) => {
            state.edited_ingredient_index = (*index < state.ingredients.len()).then_some(*index);
        }
        ShoppingListAction::StopEdit => state.edited_ingredient_index = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use crate::store::actions::Credentials;
    use chrono::{Duration, Utc};

    fn success() -> AuthAction {
        AuthAction::AuthenticationSuccess {
            email: "cook@example.com".into(),
            user_id: "uid".into(),
            token: "tok".into(),
            expiration_date: Utc::now() + Duration::hours(1),
            redirect: true,
        }
    }

    #[test]
    fn login_start_sets_loading_and_clears_error() {
        let mut state = AuthState {
            auth_error: Some("old".into()),
            ..Default::default()
        };
        auth_reducer(&mut state, &AuthAction::LoginStart(Credentials::new("a", "b")));
        assert!(state.loading);
        assert_eq!(state.auth_error, None);
    }

    #[test]
    fn success_then_logout() {
        let mut state = AuthState::default();
        auth_reducer(&mut state, &success());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("tok"));
        assert!(!state.loading);

        auth_reducer(&mut state, &AuthAction::Logout);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn failure_stores_message() {
        let mut state = AuthState::default();
        auth_reducer(&mut state, &success());
        auth_reducer(&mut state, &AuthAction::AuthenticateFail("nope".into()));
        assert_eq!(state.user, None);
        assert_eq!(state.auth_error.as_deref(), Some("nope"));

        auth_reducer(&mut state, &AuthAction::ClearError);
        assert_eq!(state.auth_error, None);
    }

    #[test]
    fn shopping_list_edit_cycle() {
        let mut state = ShoppingListState::default();
        assert_eq!(state.ingredients.len(), 2);

        shopping_list_reducer(&mut state, &ShoppingListAction::StartEdit(1));
        assert_eq!(state.edited_ingredient(), Some(&Ingredient::new("Tomatoes", 10)));

        shopping_list_reducer(
            &mut state,
            &ShoppingListAction::UpdateIngredient(Ingredient::new("Cherry tomatoes", 3)),
        );
        assert_eq!(state.ingredients[1], Ingredient::new("Cherry tomatoes", 3));
        assert_eq!(state.edited_ingredient_index, None);

        shopping_list_reducer(&mut state, &ShoppingListAction::StartEdit(0));
        shopping_list_reducer(&mut state, &ShoppingListAction::DeleteIngredient);
        assert_eq!(state.ingredients, vec![Ingredient::new("Cherry tomatoes", 3)]);
    }

    #[test]
    fn shopping_list_ignores_out_of_range_edit() {
        let mut state = ShoppingListState::default();
        shopping_list_reducer(&mut state, &ShoppingListAction::StartEdit(7));
        assert_eq!(state.edited_ingredient_index, None);
        shopping_list_reducer(&mut state, &ShoppingListAction::DeleteIngredient);
        assert_eq!(state.ingredients.len(), 2);
    }

    #[test]
    fn add_ingredients_appends_in_order() {
        let mut state = ShoppingListState::default();
        shopping_list_reducer(
            &mut state,
            &ShoppingListAction::AddIngredients(vec![
                Ingredient::new("Flour", 1),
                Ingredient::new("Sugar", 2),
            ]),
        );
        let names: Vec<_> = state.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Apples", "Tomatoes", "Flour", "Sugar"]);
    }

    #[test]
    fn navigate_records_location() {
        let mut state = AppState::default();
        app_reducer(&mut state, &Action::Navigate("/auth".into()));
        assert_eq!(state.location, "/auth");
    }
}
