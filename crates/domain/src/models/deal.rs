//! Deal domain models for photo sessions synced from the external CRM.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Processing status of a photo session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Processing,
    Ready,
    Cancelled,
    PendingPayment,
}

impl DealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStatus::Processing => "processing",
            DealStatus::Ready => "ready",
            DealStatus::Cancelled => "cancelled",
            DealStatus::PendingPayment => "pending_payment",
        }
    }

    /// Returns true if the session's photos are available for viewing.
    pub fn is_ready(&self) -> bool {
        matches!(self, DealStatus::Ready)
    }
}

impl FromStr for DealStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "processing" => Ok(DealStatus::Processing),
            "ready" => Ok(DealStatus::Ready),
            "cancelled" => Ok(DealStatus::Cancelled),
            "pending_payment" => Ok(DealStatus::PendingPayment),
            _ => Err(format!("Invalid deal status: {}", s)),
        }
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CRM system a deal originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealSource {
    Bitrix,
}

impl DealSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealSource::Bitrix => "bitrix",
        }
    }
}

impl fmt::Display for DealSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A photo session record. Ids are opaque strings assigned by the CRM.
///
/// `photos_count` is a display hint carried over from the CRM sync; it is
/// not enforced to match the actual number of stored photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub status: DealStatus,
    pub source: DealSource,
    pub photos_count: u32,
}

/// A deal with its long-form description, returned by the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DealDetails {
    #[serde(flatten)]
    pub deal: Deal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A deal paired with a representative cover image for list views.
///
/// The cover is the thumbnail of the deal's first photo; deals without
/// photos have no cover.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DealWithCover {
    #[serde(flatten)]
    pub deal: Deal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Response for deal listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListDealsResponse {
    pub data: Vec<Deal>,
    pub count: usize,
}

/// Response for deal listings with covers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListDealsWithCoverResponse {
    pub data: Vec<DealWithCover>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_status_as_str() {
        assert_eq!(DealStatus::Processing.as_str(), "processing");
        assert_eq!(DealStatus::Ready.as_str(), "ready");
        assert_eq!(DealStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(DealStatus::PendingPayment.as_str(), "pending_payment");
    }

    #[test]
    fn test_deal_status_from_str() {
        assert_eq!(
            DealStatus::from_str("processing").unwrap(),
            DealStatus::Processing
        );
        assert_eq!(DealStatus::from_str("READY").unwrap(), DealStatus::Ready);
        assert_eq!(
            DealStatus::from_str("pending_payment").unwrap(),
            DealStatus::PendingPayment
        );
        assert!(DealStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_deal_status_is_ready() {
        assert!(DealStatus::Ready.is_ready());
        assert!(!DealStatus::Processing.is_ready());
        assert!(!DealStatus::Cancelled.is_ready());
        assert!(!DealStatus::PendingPayment.is_ready());
    }

    #[test]
    fn test_deal_status_serialization() {
        let json = serde_json::to_string(&DealStatus::PendingPayment).unwrap();
        assert_eq!(json, "\"pending_payment\"");

        let status: DealStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, DealStatus::Ready);
    }

    #[test]
    fn test_deal_serialization() {
        let deal = Deal {
            id: "1".to_string(),
            title: "Семейная фотосессия в студии".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
            status: DealStatus::Ready,
            source: DealSource::Bitrix,
            photos_count: 5,
        };

        let json = serde_json::to_string(&deal).unwrap();
        assert!(json.contains("\"date\":\"2024-11-15\""));
        assert!(json.contains("\"source\":\"bitrix\""));
        assert!(json.contains("\"photos_count\":5"));
    }

    #[test]
    fn test_deal_details_flattens_deal() {
        let details = DealDetails {
            deal: Deal {
                id: "2".to_string(),
                title: "Свадебная съемка".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
                status: DealStatus::Processing,
                source: DealSource::Bitrix,
                photos_count: 5,
            },
            description: Some("Профессиональная фотосессия.".to_string()),
        };

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["status"], "processing");
        assert_eq!(value["description"], "Профессиональная фотосессия.");
    }

    #[test]
    fn test_deal_with_cover_omits_missing_cover() {
        let with_cover = DealWithCover {
            deal: Deal {
                id: "3".to_string(),
                title: "Детская фотосессия".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
                status: DealStatus::Ready,
                source: DealSource::Bitrix,
                photos_count: 5,
            },
            cover_url: None,
        };

        let json = serde_json::to_string(&with_cover).unwrap();
        assert!(!json.contains("cover_url"));
    }
}
