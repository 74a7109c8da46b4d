//! Photo domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single photo belonging to a deal or a photo group.
///
/// Photos carry no back-reference to their container; membership is
/// established by the query that returned them. Sequence order is the
/// order the source returned and doubles as the lightbox index order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Photo {
    pub id: String,
    /// Full-resolution image URL.
    pub url: String,
    /// Reduced-size URL for grid views.
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooting_date: Option<NaiveDate>,
}

/// Response for photo listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPhotosResponse {
    pub data: Vec<Photo>,
    pub count: usize,
}
