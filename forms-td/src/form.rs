use serde::Serialize;
use thiserror::Error;

pub const SUGGESTED_USER_NAME: &str = "Superuser";
pub const DEFAULT_SECRET_QUESTION: &str = "pet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub user_data: UserData,
    pub secret: String,
    pub question_answer: String,
    pub gender: Gender,
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("username is required")]
    MissingUsername,
    #[error("a valid email is required")]
    InvalidEmail,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            user_data: UserData {
                username: String::new(),
                email: String::new(),
            },
            secret: DEFAULT_SECRET_QUESTION.to_string(),
            question_answer: String::new(),
            gender: Gender::Male,
        }
    }
}

impl SignupForm {
    pub fn suggest_user_name(&mut self) {
        self.user_data.username = SUGGESTED_USER_NAME.to_string();
    }

    pub fn validate(&self) -> Result<(), SignupError> {
        if self.user_data.username.trim().is_empty() {
            return Err(SignupError::MissingUsername);
        }
        let email = self.user_data.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(SignupError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates the form and returns the submitted values as JSON.
    pub fn submit(&self) -> Result<serde_json::Value, SignupError> {
        self.validate()?;
        tracing::info!(username = %self.user_data.username, "signup form submitted");
        Ok(serde_json::to_value(self)?)
    }
}
