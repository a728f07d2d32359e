use crate::config::ClientConfig;
use crate::error::RecipeClientError;
use crate::models::{AuthResponseData, Recipe, RecipeRecord, decode_recipe_records};
use crate::{AuthApi, RecipeApi};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct FirebaseClient {
    client: Arc<Client>,
    config: ClientConfig,
}

impl FirebaseClient {
    pub fn connect(config: ClientConfig) -> Result<Self, RecipeClientError> {
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn exchange_credentials(
        &self,
        url: String,
        email: &str,
        password: &str,
    ) -> Result<AuthResponseData, RecipeClientError> {
        let resp = self
            .client
            .post(url)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(RecipeClientError::from_http_response(resp).await)
        }
    }

    fn recipes_request(
        &self,
        method: reqwest::Method,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, &self.config.database_url);
        if let Some(token) = token {
            req = req.query(&[("auth", token)]);
        }
        req
    }
}

#[async_trait(?Send)]
impl AuthApi for FirebaseClient {
    #[instrument(skip(self, password))]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponseData, RecipeClientError> {
        self.exchange_credentials(self.config.signup_endpoint(), email, password)
            .await
    }

    #[instrument(skip(self, password))]
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponseData, RecipeClientError> {
        self.exchange_credentials(self.config.login_endpoint(), email, password)
            .await
    }
}

#[async_trait(?Send)]
impl RecipeApi for FirebaseClient {
    #[instrument(skip_all)]
    async fn fetch_recipes(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<RecipeRecord>, RecipeClientError> {
        let resp = self
            .recipes_request(reqwest::Method::GET, token)
            .send()
            .await?;

        if resp.status().is_success() {
            let body: serde_json::Value = resp.json().await?;
            Ok(decode_recipe_records(body))
        } else {
            Err(RecipeClientError::from_http_response(resp).await)
        }
    }

    #[instrument(skip_all, fields(count = recipes.len()))]
    async fn store_recipes(
        &self,
        token: Option<&str>,
        recipes: &[Recipe],
    ) -> Result<serde_json::Value, RecipeClientError> {
        let resp = self
            .recipes_request(reqwest::Method::PUT, token)
            .json(recipes)
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(RecipeClientError::from_http_response(resp).await)
        }
    }
}
