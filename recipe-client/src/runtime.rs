//! Single-threaded loop that reduces queued actions and runs their effects.

use tokio::sync::watch;
use tracing::debug;

use crate::effects::{AuthEffects, RecipeEffects};
use crate::models::Recipe;
use crate::services::AuthService;
use crate::session::SessionStorage;
use crate::store::{Action, AppState, Dispatcher, RecipesAction, Store};
use crate::{AuthApi, RecipeApi};

pub struct App<A, R, S> {
    store: Store,
    auth_effects: AuthEffects<A, S>,
    recipe_effects: RecipeEffects<R>,
}

impl<A, R, S> App<A, R, S>
where
    A: AuthApi,
    R: RecipeApi,
    S: SessionStorage,
{
    pub fn new(auth_api: A, recipe_api: R, storage: S) -> Self {
        let store = Store::new();
        let auth_service = AuthService::new(store.dispatcher());
        Self {
            auth_effects: AuthEffects::new(auth_api, storage, auth_service),
            recipe_effects: RecipeEffects::new(recipe_api),
            store,
        }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        self.store.dispatch(action);
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.store.dispatcher()
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn storage(&self) -> &S {
        self.auth_effects.storage()
    }

    pub fn auth_service(&self) -> &AuthService {
        self.auth_effects.auth_service()
    }

    pub fn recipes_changed(&self) -> watch::Receiver<Vec<Recipe>> {
        self.store.state().recipes.subscribe()
    }

    async fn process(&mut self, action: Action) {
        debug!(?action, "processing action");
        self.store.reduce(&action);

        let mut follow_ups = self.auth_effects.handle(&action).await;
        follow_ups.extend(
            self.recipe_effects
                .handle(&action, self.store.state())
                .await,
        );
        for next in follow_ups {
            self.store.dispatch(next);
        }
    }

    /// Processes queued actions, including follow-ups, until the queue is empty.
    pub async fn run_until_idle(&mut self) {
        while let Some(action) = self.store.try_next() {
            self.process(action).await;
        }
    }

    /// Waits for the next action, e.g. one dispatched by the logout timer,
    /// and processes it together with its follow-ups.
    pub async fn run_next(&mut self) -> Option<Action> {
        let action = self.store.next().await?;
        self.process(action.clone()).await;
        self.run_until_idle().await;
        Some(action)
    }

    /// Fetches recipes and returns the collection once `SetRecipes` has been applied.
    /// Returns `None` when the fetch failed; the local collection is left as it was
    /// and must not be stored back over the remote one.
    pub async fn resolve_recipes(&mut self) -> Option<Vec<Recipe>> {
        self.dispatch(RecipesAction::FetchRecipes);
        let mut resolved = false;
        while let Some(action) = self.store.try_next() {
            let is_set = matches!(action, Action::Recipes(RecipesAction::SetRecipes(_)));
            self.process(action).await;
            if is_set {
                resolved = true;
                break;
            }
        }
        resolved.then(|| self.state().recipes.recipes())
    }
}
