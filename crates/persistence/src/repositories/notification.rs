//! Notification repositories: the template catalog and the synchronized
//! per-deal test history.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use domain::models::notification::{
    NotificationChannel, NotificationTemplate, NotificationTest, NotificationTestStatus,
};

use crate::metrics::QueryTimer;
use crate::store::CatalogStore;

/// Simulated delays of the mock data source, in milliseconds.
const TEMPLATES_DELAY_MS: u64 = 400;
const HISTORY_DELAY_MS: u64 = 500;

/// Most recent test sends retained per deal.
const HISTORY_LIMIT: usize = 5;

/// Repository for the notification template catalog.
#[derive(Clone)]
pub struct TemplateRepository {
    store: Arc<CatalogStore>,
}

impl TemplateRepository {
    /// Creates a new TemplateRepository over the given store.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// All templates, optionally narrowed to one channel.
    pub async fn list(&self, channel: Option<NotificationChannel>) -> Vec<NotificationTemplate> {
        self.store.latency.pause(TEMPLATES_DELAY_MS).await;
        let timer = QueryTimer::new("list_templates");
        let result = self
            .store
            .templates
            .iter()
            .filter(|t| channel.map_or(true, |c| t.channel == c))
            .cloned()
            .collect();
        timer.record();
        result
    }

    /// The template with the given id, or `None`.
    pub async fn find_by_id(&self, id: &str) -> Option<NotificationTemplate> {
        self.store.latency.pause(TEMPLATES_DELAY_MS).await;
        let timer = QueryTimer::new("find_template_by_id");
        let result = self.store.templates.iter().find(|t| t.id == id).cloned();
        timer.record();
        result
    }
}

/// Repository for per-deal notification test history.
///
/// Appends go through a write lock; each deal keeps only its
/// `HISTORY_LIMIT` most recent records, newest first.
#[derive(Clone)]
pub struct NotificationTestRepository {
    store: Arc<CatalogStore>,
}

impl NotificationTestRepository {
    /// Creates a new NotificationTestRepository over the given store.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Records a test send outcome at the front of the deal's history.
    pub async fn append(
        &self,
        deal_id: &str,
        channel: NotificationChannel,
        phone: &str,
        status: NotificationTestStatus,
    ) -> NotificationTest {
        let timer = QueryTimer::new("append_notification_test");

        let test = NotificationTest {
            id: Uuid::new_v4(),
            deal_id: deal_id.to_string(),
            channel,
            phone: phone.to_string(),
            status,
            created_at: Utc::now(),
        };

        let mut tests = self.store.tests.write().await;
        let history = tests.entry(deal_id.to_string()).or_insert_with(VecDeque::new);
        history.push_front(test.clone());
        history.truncate(HISTORY_LIMIT);

        timer.record();
        test
    }

    /// The deal's most recent test sends, newest first, at most five.
    pub async fn recent_for_deal(&self, deal_id: &str) -> Vec<NotificationTest> {
        self.store.latency.pause(HISTORY_DELAY_MS).await;
        let timer = QueryTimer::new("list_notification_tests");
        let tests = self.store.tests.read().await;
        let result = tests
            .get(deal_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default();
        timer.record();
        result
    }
}
