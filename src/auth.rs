/// Authentication boundary for the login screen
///
/// Credential verification is delegated to an [`IdentityProvider`]. Every
/// failure, whatever its cause, is shown to the user as [`LOGIN_FAILED_MESSAGE`].
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::config::AuthConfig;

/// The only failure message the login screen shows
pub const LOGIN_FAILED_MESSAGE: &str = "Email or password incorrect";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Wrong password for {0}")]
    WrongPassword(String),

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Message shown to the user; the cause is deliberately not distinguished
    pub fn user_message(&self) -> &'static str {
        LOGIN_FAILED_MESSAGE
    }
}

/// Verifies credentials, implemented by the config-backed provider and test mocks
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Identity provider backed by the `[[auth.accounts]]` entries of the config file
pub struct StaticIdentityProvider {
    accounts: HashMap<String, String>,
}

impl StaticIdentityProvider {
    pub fn new(accounts: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|(email, password)| (normalize_email(&email), password))
                .collect(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config
                .accounts
                .iter()
                .map(|account| (account.email.clone(), account.password.clone())),
        )
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = normalize_email(&credentials.email);
        match self.accounts.get(&email) {
            None => Err(AuthError::UnknownAccount(email)),
            Some(password) if *password != credentials.password => {
                Err(AuthError::WrongPassword(email))
            }
            Some(_) => Ok(Session { email }),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Account;

    fn provider() -> StaticIdentityProvider {
        StaticIdentityProvider::from_config(&AuthConfig {
            accounts: vec![Account {
                email: "Ada@Example.com".to_string(),
                password: "hunter2".to_string(),
            }],
        })
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let session = provider()
            .sign_in(&Credentials::new(" ada@example.com ", "hunter2"))
            .await
            .unwrap();
        assert_eq!(session.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let result = provider()
            .sign_in(&Credentials::new("ada@example.com", "nope"))
            .await;
        assert_eq!(result, Err(AuthError::WrongPassword("ada@example.com".to_string())));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_account() {
        let result = provider()
            .sign_in(&Credentials::new("bob@example.com", "hunter2"))
            .await;
        assert!(matches!(result, Err(AuthError::UnknownAccount(_))));
    }

    #[test]
    fn test_all_errors_share_one_user_message() {
        let errors = [
            AuthError::UnknownAccount("a".to_string()),
            AuthError::WrongPassword("a".to_string()),
            AuthError::Unavailable("timeout".to_string()),
        ];
        for error in errors {
            assert_eq!(error.user_message(), "Email or password incorrect");
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("ada@example.com", "hunter2"));
        assert!(!debug.contains("hunter2"));
    }
}
