use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in user as persisted under the `userData` session key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub id: String,
    #[serde(rename = "_TOKEN")]
    token: String,
    #[serde(rename = "_TOKEN_EXPIRATION_DATE")]
    token_expiration_date: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: String,
        id: String,
        token: String,
        token_expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            id,
            token,
            token_expiration_date,
        }
    }

    /// Session token, or `None` once it has expired.
    pub fn token(&self) -> Option<&str> {
        self.token_at(Utc::now())
    }

    pub fn token_at(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.token.is_empty() || now > self.token_expiration_date {
            return None;
        }
        Some(&self.token)
    }

    pub fn is_token_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.token_at(now).is_some()
    }

    pub fn token_expiration_date(&self) -> DateTime<Utc> {
        self.token_expiration_date
    }

    /// Time left until the token expires, zero if it already has.
    pub fn expires_in_at(&self, now: DateTime<Utc>) -> Duration {
        (self.token_expiration_date - now).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_expiring_at(expiration: DateTime<Utc>) -> User {
        User::new(
            "cook@example.com".into(),
            "uid-1".into(),
            "token-1".into(),
            expiration,
        )
    }

    #[test]
    fn token_is_available_before_expiration() {
        let now = Utc::now();
        let user = user_expiring_at(now + Duration::seconds(60));
        assert_eq!(user.token_at(now), Some("token-1"));
        assert_eq!(user.expires_in_at(now), Duration::seconds(60));
    }

    #[test]
    fn token_is_hidden_after_expiration() {
        let now = Utc::now();
        let user = user_expiring_at(now - Duration::seconds(1));
        assert_eq!(user.token_at(now), None);
        assert!(!user.is_token_valid_at(now));
        assert_eq!(user.expires_in_at(now), Duration::zero());
    }

    #[test]
    fn serializes_with_session_field_names() {
        let expiration = "2030-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let json = serde_json::to_value(user_expiring_at(expiration)).unwrap();
        assert_eq!(json["_TOKEN"], "token-1");
        assert_eq!(json["id"], "uid-1");
        assert_eq!(json["_TOKEN_EXPIRATION_DATE"], "2030-01-01T00:00:00Z");
    }

    #[test]
    fn parses_browser_style_timestamp() {
        let raw = r#"{"email":"a@b.c","id":"x","_TOKEN":"t","_TOKEN_EXPIRATION_DATE":"2030-05-01T10:00:00.000Z"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.token_expiration_date().to_rfc3339(), "2030-05-01T10:00:00+00:00");
    }
}
