//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//!
//! # Usage
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let provider = MockIdentityProvider::accepting("ada@example.com", "hunter2");
//!         // Use provider in tests...
//!     }
//! }
//! ```

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::auth::{AuthError, Credentials, IdentityProvider, Session};

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// Identity provider for tests: one account, or always unavailable
pub struct MockIdentityProvider {
    account: Option<(String, String)>,
    latency: Duration,
    calls: AtomicUsize,
}

impl MockIdentityProvider {
    /// Accepts exactly one email/password pair
    pub fn accepting(email: &str, password: &str) -> Self {
        Self {
            account: Some((email.to_string(), password.to_string())),
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every request as if the backend were down
    pub fn unavailable() -> Self {
        Self {
            account: None,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Delay every answer by `latency`
    pub fn with_latency(self, latency: Duration) -> Self {
        Self { latency, ..self }
    }

    /// Number of sign-in requests received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.account {
            None => Err(AuthError::Unavailable("mock backend down".to_string())),
            Some((email, _)) if *email != credentials.email => {
                Err(AuthError::UnknownAccount(credentials.email.clone()))
            }
            Some((email, password)) if *password != credentials.password => {
                Err(AuthError::WrongPassword(email.clone()))
            }
            Some((email, _)) => Ok(Session { email: email.clone() }),
        }
    }
}
