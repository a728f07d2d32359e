use std::path::PathBuf;

pub const DEFAULT_SIGNUP_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=";
pub const DEFAULT_LOGIN_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=";
pub const DEFAULT_SESSION_FILE: &str = ".recipe_session.json";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub signup_url: String,
    pub login_url: String,
    pub database_url: String,
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("FIREBASE_API_KEY")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("FIREBASE_API_KEY must be set"))?;
        let signup_url =
            lookup("FIREBASE_SIGNUP_URL").unwrap_or_else(|| DEFAULT_SIGNUP_URL.into());
        let login_url = lookup("FIREBASE_LOGIN_URL").unwrap_or_else(|| DEFAULT_LOGIN_URL.into());
        let database_url = lookup("RECIPES_DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("RECIPES_DATABASE_URL must be set"))?;
        let session_file = lookup("SESSION_FILE")
            .unwrap_or_else(|| DEFAULT_SESSION_FILE.into())
            .into();

        Ok(Self {
            api_key,
            signup_url,
            login_url,
            database_url,
            session_file,
        })
    }

    pub fn signup_endpoint(&self) -> String {
        format!("{}{}", self.signup_url, self.api_key)
    }

    pub fn login_endpoint(&self) -> String {
        format!("{}{}", self.login_url, self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_are_applied() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("FIREBASE_API_KEY", "key123"),
            ("RECIPES_DATABASE_URL", "https://db.example/recipes.json"),
        ]))
        .unwrap();

        assert_eq!(config.signup_endpoint(), format!("{DEFAULT_SIGNUP_URL}key123"));
        assert_eq!(config.login_endpoint(), format!("{DEFAULT_LOGIN_URL}key123"));
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
    }

    #[test]
    fn api_key_is_required() {
        let err = ClientConfig::from_lookup(lookup_from(&[(
            "RECIPES_DATABASE_URL",
            "https://db.example/recipes.json",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("FIREBASE_API_KEY"));
    }

    #[test]
    fn database_url_is_required() {
        let err = ClientConfig::from_lookup(lookup_from(&[("FIREBASE_API_KEY", "k")])).unwrap_err();
        assert!(err.to_string().contains("RECIPES_DATABASE_URL"));
    }
}
