//! Photo group domain models.
//!
//! Groups are named folders within a deal. A group may reference a parent
//! group through a nullable back-reference; one level of nesting is the
//! supported depth, giving a strict two-level breadcrumb
//! (deal → optional parent group → current group).

use serde::{Deserialize, Serialize};

/// A named subset (folder) of a deal's photos.
///
/// `parent_id` set means the group is a child; top-level listings are the
/// groups with no parent. Traversal is by querying on `parent_id`, not by
/// walking object references, so no ownership cycle can form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PhotoGroup {
    pub id: String,
    pub deal_id: String,
    pub name: String,
    /// Representative thumbnail shown on group tiles.
    pub cover_url: String,
    /// Display hint from the source; not enforced against stored photos.
    pub photos_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl PhotoGroup {
    /// Returns true if the group sits directly under the deal.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Where "back" leads from this group's page.
    pub fn back_target(&self) -> BackTarget {
        match &self.parent_id {
            Some(parent) => BackTarget::ParentGroup(parent.clone()),
            None => BackTarget::DealGroups,
        }
    }
}

/// Navigation target for leaving a group page upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "group_id")]
pub enum BackTarget {
    /// The deal's top-level group listing.
    DealGroups,
    /// The page of the parent group.
    ParentGroup(String),
}

/// Response for group listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListGroupsResponse {
    pub data: Vec<PhotoGroup>,
    pub count: usize,
}

/// Response for the group detail view.
///
/// A group may carry both child groups and its own photos; the detail view
/// presents children as navigable tiles and photos as a flat grid beneath.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GroupDetailResponse {
    #[serde(flatten)]
    pub group: PhotoGroup,
    pub back: BackTarget,
    pub children: Vec<PhotoGroup>,
    pub photos_total: usize,
}
