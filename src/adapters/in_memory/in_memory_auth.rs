// In memory implementation of the AuthProvider port.
//
// Purpose
// - Email/password accounts registered up front, with the signed-in user published on a watch channel.

use crate::core::ports::{AuthError, AuthProvider, User};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";

struct Account {
    uid: String,
    password: String,
}

pub struct InMemoryAuthProvider {
    accounts: HashMap<String, Account>,
    state: watch::Sender<Option<User>>,
    is_offline: AtomicBool,
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            accounts: HashMap::new(),
            state,
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        let uid = format!("uid-{}", self.accounts.len() + 1);
        self.accounts.insert(
            email.to_string(),
            Account {
                uid,
                password: password.to_string(),
            },
        );
        self
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().clone()
    }

    fn check_online(&self) -> Result<(), AuthError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(AuthError::new(NETWORK_REQUEST_FAILED));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.check_online()?;
        let account = self
            .accounts
            .get(email)
            .filter(|account| account.password == password)
            .ok_or_else(|| AuthError::new(INVALID_CREDENTIAL))?;
        let user = User {
            uid: account.uid.clone(),
            email: Some(email.to_string()),
        };
        self.state.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.check_online()?;
        self.state.send_replace(None);
        Ok(())
    }

    fn on_auth_state_change(&self) -> watch::Receiver<Option<User>> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod in_memory_auth_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> InMemoryAuthProvider {
        InMemoryAuthProvider::new().with_account("admin@kampus.id", "rahasia")
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_publish_sign_in_and_sign_out(before_each: InMemoryAuthProvider) {
        let auth = before_each;
        let mut state = auth.on_auth_state_change();
        assert_eq!(*state.borrow_and_update(), None);

        let user = auth.sign_in("admin@kampus.id", "rahasia").await.unwrap();
        assert!(state.has_changed().unwrap());
        assert_eq!(state.borrow_and_update().clone(), Some(user));

        auth.sign_out().await.unwrap();
        assert!(state.has_changed().unwrap());
        assert_eq!(*state.borrow_and_update(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_wrong_password(before_each: InMemoryAuthProvider) {
        let auth = before_each;
        let result = auth.sign_in("admin@kampus.id", "salah").await;
        assert_eq!(result, Err(AuthError::new(INVALID_CREDENTIAL)));
        assert_eq!(auth.current_user(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_provider_is_offline(before_each: InMemoryAuthProvider) {
        let auth = before_each;
        auth.toggle_offline();
        let result = auth.sign_in("admin@kampus.id", "rahasia").await;
        assert_eq!(result, Err(AuthError::new(NETWORK_REQUEST_FAILED)));
        assert!(auth.sign_out().await.is_err());
    }
}
