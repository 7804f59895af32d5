use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::action::Action;
use super::component::Effect;
use crate::auth::{Credentials, IdentityProvider};

/// Effect handler for sign-in requests and timers
///
/// Each method returns an `Effect::Async` that resolves to the action to
/// dispatch when the work completes.
pub struct AppEffects {
    provider: Arc<dyn IdentityProvider>,
}

impl AppEffects {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Verify credentials with the identity provider
    ///
    /// The error is kept as its display string so it can be logged by the
    /// reducer; the user only ever sees the generic failure message.
    pub fn sign_in(&self, credentials: Credentials) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            debug!("EFFECT: Signing in {}", credentials.email);
            let result = provider.sign_in(&credentials).await;
            Action::LoginFinished(result.map_err(|e| e.to_string()))
        }))
    }

    /// Dispatch `action` after `after` has elapsed
    pub fn delay(&self, after: Duration, action: Action) -> Effect {
        Effect::Async(Box::pin(async move {
            tokio::time::sleep(after).await;
            action
        }))
    }
}
