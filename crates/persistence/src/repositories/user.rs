//! User repository for the session account.

use std::sync::Arc;

use domain::models::user::{UpdateProfileRequest, User};

use crate::metrics::QueryTimer;
use crate::store::CatalogStore;

/// Simulated delays of the mock data source, in milliseconds.
const LOGIN_DELAY_MS: u64 = 1000;
const CURRENT_DELAY_MS: u64 = 500;

/// Repository for the singleton session user.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<CatalogStore>,
}

impl UserRepository {
    /// Creates a new UserRepository over the given store.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Mock T-ID login: no credentials, resolves the session user.
    pub async fn authenticate(&self) -> User {
        self.store.latency.pause(LOGIN_DELAY_MS).await;
        let timer = QueryTimer::new("authenticate");
        let user = self.store.user.read().await.clone();
        timer.record();
        user
    }

    /// The current session user.
    pub async fn current(&self) -> User {
        self.store.latency.pause(CURRENT_DELAY_MS).await;
        let timer = QueryTimer::new("current_user");
        let user = self.store.user.read().await.clone();
        timer.record();
        user
    }

    /// Applies a partial profile update to the in-memory user record and
    /// returns the result. Nothing is persisted; edits vanish on restart.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> User {
        let timer = QueryTimer::new("update_profile");
        let mut user = self.store.user.write().await;
        request.apply_to(&mut user);
        let updated = user.clone();
        timer.record();
        updated
    }
}
