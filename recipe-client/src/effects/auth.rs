use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use crate::AuthApi;
use crate::error::RecipeClientError;
use crate::models::{AuthResponseData, User};
use crate::services::AuthService;
use crate::session::{SessionStorage, USER_DATA_KEY};
use crate::store::{Action, AuthAction, Credentials};

pub const EMAIL_EXISTS_MESSAGE: &str = "This email exists already!";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect Email or Password!";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred!";

/// User-facing message for a backend error code.
pub fn error_message(code: Option<&str>) -> &'static str {
    match code {
        Some("EMAIL_EXISTS") => EMAIL_EXISTS_MESSAGE,
        Some("EMAIL_NOT_FOUND") | Some("INVALID_PASSWORD") => INVALID_CREDENTIALS_MESSAGE,
        _ => UNKNOWN_ERROR_MESSAGE,
    }
}

/// Builds the session user for a fresh token and the matching success action.
pub fn handle_authentication(
    email: String,
    user_id: String,
    token: String,
    expires_in: Duration,
    now: DateTime<Utc>,
) -> Result<(User, AuthAction), RecipeClientError> {
    let expiration_date = now.checked_add_signed(expires_in).ok_or_else(|| {
        RecipeClientError::InvalidRequest(format!("expiresIn out of range: {expires_in}"))
    })?;
    let user = User::new(email.clone(), user_id.clone(), token.clone(), expiration_date);
    let action = AuthAction::AuthenticationSuccess {
        email,
        user_id,
        token,
        expiration_date,
        redirect: true,
    };
    Ok((user, action))
}

fn parse_expires_in(raw: &str) -> Result<Duration, RecipeClientError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs >= 0)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| RecipeClientError::InvalidRequest(format!("invalid expiresIn: {raw}")))
}

pub struct AuthEffects<A, S> {
    api: A,
    storage: S,
    auth_service: AuthService,
}

impl<A, S> AuthEffects<A, S>
where
    A: AuthApi,
    S: SessionStorage,
{
    pub fn new(api: A, storage: S, auth_service: AuthService) -> Self {
        Self {
            api,
            storage,
            auth_service,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn auth_service(&self) -> &AuthService {
        &self.auth_service
    }

    pub async fn handle(&mut self, action: &Action) -> Vec<Action> {
        let Action::Auth(action) = action else {
            return Vec::new();
        };

        match action {
            AuthAction::SignupStart(Credentials { email, password }) => {
                let result = self.api.sign_up(email, password).await;
                vec![self.authenticate(result).into()]
            }
            AuthAction::LoginStart(Credentials { email, password }) => {
                let result = self.api.sign_in(email, password).await;
                vec![self.authenticate(result).into()]
            }
            AuthAction::AutoLogin => self.auto_login().map(Action::from).into_iter().collect(),
            AuthAction::Logout => {
                self.logout();
                vec![Action::Navigate("/auth".into())]
            }
            AuthAction::AuthenticationSuccess { redirect: true, .. } => {
                vec![Action::Navigate("/".into())]
            }
            _ => Vec::new(),
        }
    }

    fn authenticate(&mut self, result: Result<AuthResponseData, RecipeClientError>) -> AuthAction {
        let outcome = result.and_then(|data| {
            let expires_in = parse_expires_in(&data.expires_in)?;
            handle_authentication(
                data.email,
                data.local_id,
                data.id_token,
                expires_in,
                Utc::now(),
            )
            .map(|authenticated| (authenticated, expires_in))
        });

        match outcome {
            Ok(((user, action), expires_in)) => {
                self.auth_service
                    .set_logout_timer(expires_in.to_std().unwrap_or_default());
                if let Err(e) = self.persist(&user) {
                    warn!(error = %e, "failed to persist session");
                }
                info!(email = %user.email, "authenticated");
                action
            }
            Err(e) => {
                warn!(error = %e, "authentication failed");
                AuthAction::AuthenticateFail(error_message(e.backend_code().as_deref()).into())
            }
        }
    }

    fn persist(&mut self, user: &User) -> Result<(), RecipeClientError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set_item(USER_DATA_KEY, raw)
    }

    fn auto_login(&mut self) -> Option<AuthAction> {
        let raw = match self.storage.get_item(USER_DATA_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "failed to read stored session");
                return None;
            }
        };
        let user: User = match serde_json::from_str(&raw) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "stored session is unreadable");
                return None;
            }
        };

        let now = Utc::now();
        let token = user.token_at(now)?.to_string();
        let expiration_date = user.token_expiration_date();
        self.auth_service
            .set_logout_timer(user.expires_in_at(now).to_std().unwrap_or_default());

        Some(AuthAction::AuthenticationSuccess {
            email: user.email,
            user_id: user.id,
            token,
            expiration_date,
            redirect: false,
        })
    }

    fn logout(&mut self) {
        self.auth_service.clear_logout_timer();
        if let Err(e) = self.storage.remove_item(USER_DATA_KEY) {
            warn!(error = %e, "failed to clear stored session");
        }
    }
}
