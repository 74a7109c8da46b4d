//! In-memory catalog store.
//!
//! All catalog data is seeded from static fixtures at process start and
//! held in memory; nothing survives a restart. Reads over the immutable
//! catalog need no guard. The two mutable pieces (the session user and
//! the notification-test history) sit behind `tokio::sync::RwLock`
//! because concurrent requests race on them.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use tokio::sync::RwLock;

use domain::models::deal::DealDetails;
use domain::models::notification::{NotificationTemplate, NotificationTest};
use domain::models::photo::Photo;
use domain::models::photo_group::PhotoGroup;
use domain::models::user::User;

use crate::fixtures;

/// Switch for the mock client's simulated network latency.
///
/// Enabled in normal operation to mimic remote calls; disabled in tests.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pauses for `ms` milliseconds when latency simulation is on.
    pub async fn pause(&self, ms: u64) {
        if self.enabled && ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

/// The process-wide data source behind all repositories.
pub struct CatalogStore {
    pub(crate) deals: Vec<DealDetails>,
    pub(crate) photos_by_deal: HashMap<String, Vec<Photo>>,
    pub(crate) groups: Vec<PhotoGroup>,
    pub(crate) photos_by_group: HashMap<String, Vec<Photo>>,
    pub(crate) templates: Vec<NotificationTemplate>,
    pub(crate) user: RwLock<User>,
    pub(crate) tests: RwLock<HashMap<String, VecDeque<NotificationTest>>>,
    pub(crate) latency: Latency,
}

impl CatalogStore {
    /// Builds a store populated with the fixture catalog.
    pub fn seed(latency: Latency) -> Self {
        Self {
            deals: fixtures::deals(),
            photos_by_deal: fixtures::deal_photos(),
            groups: fixtures::groups(),
            photos_by_group: fixtures::group_photos(),
            templates: fixtures::templates(),
            user: RwLock::new(fixtures::user()),
            tests: RwLock::new(HashMap::new()),
            latency,
        }
    }

    /// Number of seeded deals, for health reporting.
    pub fn deal_count(&self) -> usize {
        self.deals.len()
    }

    /// Number of seeded photo groups, for health reporting.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }
}
