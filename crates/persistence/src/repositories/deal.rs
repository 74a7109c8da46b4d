//! Deal repository for catalog operations.

use std::sync::Arc;

use domain::models::deal::{Deal, DealDetails, DealWithCover};
use domain::models::photo::Photo;

use crate::metrics::QueryTimer;
use crate::store::CatalogStore;

/// Simulated delays of the mock data source, in milliseconds.
const LIST_DELAY_MS: u64 = 800;
const DETAIL_DELAY_MS: u64 = 600;
const PHOTOS_DELAY_MS: u64 = 1000;

/// Repository for deal catalog reads.
#[derive(Clone)]
pub struct DealRepository {
    store: Arc<CatalogStore>,
}

impl DealRepository {
    /// Creates a new DealRepository over the given store.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// All deals, in source order.
    pub async fn list(&self) -> Vec<Deal> {
        self.store.latency.pause(LIST_DELAY_MS).await;
        let timer = QueryTimer::new("list_deals");
        let result = self.store.deals.iter().map(|d| d.deal.clone()).collect();
        timer.record();
        result
    }

    /// All deals paired with a cover image (the first photo's thumbnail).
    pub async fn list_with_covers(&self) -> Vec<DealWithCover> {
        self.store.latency.pause(LIST_DELAY_MS).await;
        let timer = QueryTimer::new("list_deals_with_covers");
        let result = self
            .store
            .deals
            .iter()
            .map(|d| DealWithCover {
                deal: d.deal.clone(),
                cover_url: self
                    .store
                    .photos_by_deal
                    .get(&d.deal.id)
                    .and_then(|photos| photos.first())
                    .map(|photo| photo.thumbnail_url.clone()),
            })
            .collect();
        timer.record();
        result
    }

    /// A deal with its description, or `None` for an unknown id.
    pub async fn find_by_id(&self, id: &str) -> Option<DealDetails> {
        self.store.latency.pause(DETAIL_DELAY_MS).await;
        let timer = QueryTimer::new("find_deal_by_id");
        let result = self.store.deals.iter().find(|d| d.deal.id == id).cloned();
        timer.record();
        result
    }

    /// The deal's flat photo set; empty for an unknown id.
    pub async fn photos(&self, deal_id: &str) -> Vec<Photo> {
        self.store.latency.pause(PHOTOS_DELAY_MS).await;
        let timer = QueryTimer::new("list_deal_photos");
        let result = self
            .store
            .photos_by_deal
            .get(deal_id)
            .cloned()
            .unwrap_or_default();
        timer.record();
        result
    }
}
