//! Photo group repository: the group tree navigator's query side.
//!
//! Tree traversal is by filtering on the nullable `parent_id`
//! back-reference; top-level and child listings partition a deal's groups.

use std::sync::Arc;

use domain::models::photo::Photo;
use domain::models::photo_group::PhotoGroup;

use crate::metrics::QueryTimer;
use crate::store::CatalogStore;

/// Simulated delays of the mock data source, in milliseconds.
const GROUPS_DELAY_MS: u64 = 600;
const PHOTOS_DELAY_MS: u64 = 1000;

/// Repository for photo group reads.
#[derive(Clone)]
pub struct PhotoGroupRepository {
    store: Arc<CatalogStore>,
}

impl PhotoGroupRepository {
    /// Creates a new PhotoGroupRepository over the given store.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Groups of the deal with no parent, in source order.
    pub async fn list_top_level(&self, deal_id: &str) -> Vec<PhotoGroup> {
        self.store.latency.pause(GROUPS_DELAY_MS).await;
        let timer = QueryTimer::new("list_top_level_groups");
        let result = self
            .store
            .groups
            .iter()
            .filter(|g| g.deal_id == deal_id && g.parent_id.is_none())
            .cloned()
            .collect();
        timer.record();
        result
    }

    /// Direct children of the given group; empty for a leaf.
    pub async fn list_children(&self, parent_id: &str, deal_id: &str) -> Vec<PhotoGroup> {
        self.store.latency.pause(GROUPS_DELAY_MS).await;
        let timer = QueryTimer::new("list_child_groups");
        let result = self
            .store
            .groups
            .iter()
            .filter(|g| g.deal_id == deal_id && g.parent_id.as_deref() == Some(parent_id))
            .cloned()
            .collect();
        timer.record();
        result
    }

    /// The group with the given id within the deal, or `None`.
    pub async fn find(&self, group_id: &str, deal_id: &str) -> Option<PhotoGroup> {
        self.store.latency.pause(GROUPS_DELAY_MS).await;
        let timer = QueryTimer::new("find_group");
        let result = self
            .store
            .groups
            .iter()
            .find(|g| g.id == group_id && g.deal_id == deal_id)
            .cloned();
        timer.record();
        result
    }

    /// The group with the given id regardless of deal, or `None`.
    pub async fn find_by_id(&self, group_id: &str) -> Option<PhotoGroup> {
        self.store.latency.pause(GROUPS_DELAY_MS).await;
        let timer = QueryTimer::new("find_group_by_id");
        let result = self.store.groups.iter().find(|g| g.id == group_id).cloned();
        timer.record();
        result
    }

    /// The group's own photo set; empty for an unknown id.
    pub async fn photos(&self, group_id: &str) -> Vec<Photo> {
        self.store.latency.pause(PHOTOS_DELAY_MS).await;
        let timer = QueryTimer::new("list_group_photos");
        let result = self
            .store
            .photos_by_group
            .get(group_id)
            .cloned()
            .unwrap_or_default();
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Latency;
    use std::collections::HashSet;

    fn repo() -> PhotoGroupRepository {
        PhotoGroupRepository::new(Arc::new(CatalogStore::seed(Latency::disabled())))
    }

    #[tokio::test]
    async fn test_top_level_listing_excludes_children() {
        let top = repo().list_top_level("2").await;
        let ids: Vec<_> = top.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["group-2-1", "group-2-2"]);
        assert!(top.iter().all(|g| g.parent_id.is_none()));
    }

    #[tokio::test]
    async fn test_children_of_parent_group() {
        let children = repo().list_children("group-2-1", "2").await;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, "group-2-3");
        assert_eq!(children[0].parent_id.as_deref(), Some("group-2-1"));
    }

    #[tokio::test]
    async fn test_children_of_leaf_group_are_empty() {
        assert!(repo().list_children("group-1-1", "1").await.is_empty());
        assert!(repo().list_children("group-2-3", "2").await.is_empty());
    }

    #[tokio::test]
    async fn test_top_level_and_children_partition_deal_groups() {
        let repo = repo();
        let top = repo.list_top_level("2").await;

        let mut seen: HashSet<String> = top.iter().map(|g| g.id.clone()).collect();
        for group in &top {
            for child in repo.list_children(&group.id, "2").await {
                // No overlap between the two sets.
                assert!(seen.insert(child.id.clone()));
            }
        }

        let expected: HashSet<String> = ["group-2-1", "group-2-2", "group-2-3"]
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_find_requires_matching_deal() {
        let repo = repo();
        assert!(repo.find("group-2-1", "2").await.is_some());
        assert!(repo.find("group-2-1", "1").await.is_none());
        assert!(repo.find("missing", "2").await.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_ignores_deal() {
        let group = repo().find_by_id("group-3-1").await.unwrap();
        assert_eq!(group.deal_id, "3");
    }

    #[tokio::test]
    async fn test_parent_group_with_children_also_owns_photos() {
        let repo = repo();
        let children = repo.list_children("group-2-1", "2").await;
        let photos = repo.photos("group-2-1").await;
        // Both non-empty is a valid, supported state.
        assert!(!children.is_empty());
        assert!(!photos.is_empty());
    }

    #[tokio::test]
    async fn test_photos_for_unknown_group_are_empty() {
        assert!(repo().photos("missing").await.is_empty());
    }
}
