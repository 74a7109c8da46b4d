//! Notification domain models: channels, templates, and test sends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_phone;

/// Delivery channel for customer notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Sms,
    Whatsapp,
}

impl NotificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Sms => "sms",
            NotificationChannel::Whatsapp => "whatsapp",
        }
    }
}

impl FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sms" => Ok(NotificationChannel::Sms),
            "whatsapp" => Ok(NotificationChannel::Whatsapp),
            _ => Err(format!("Invalid notification channel: {}", s)),
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message template from the template catalog.
///
/// Template text may contain the literal placeholders `{Имя}` and
/// `{Дата_фотосессии}`, substituted by the preview renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    pub channel: NotificationChannel,
    pub text: String,
}

/// Terminal outcome of a test send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTestStatus {
    Success,
    Error,
}

impl NotificationTestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTestStatus::Success => "success",
            NotificationTestStatus::Error => "error",
        }
    }
}

impl fmt::Display for NotificationTestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of a single test send for a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationTest {
    pub id: Uuid,
    pub deal_id: String,
    pub channel: NotificationChannel,
    pub phone: String,
    pub status: NotificationTestStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for sending a test notification.
///
/// All three fields are required; validation runs before any simulated
/// delay or gateway call is issued.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SendTestRequest {
    #[validate(length(min = 1, message = "Template must be selected"))]
    pub template_id: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub channel: NotificationChannel,
}

/// Query parameters for listing templates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListTemplatesQuery {
    pub channel: Option<NotificationChannel>,
}

/// Response for template listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListTemplatesResponse {
    pub data: Vec<NotificationTemplate>,
    pub count: usize,
}

/// Response for a deal's test history, capped at the five most recent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListTestsResponse {
    pub data: Vec<NotificationTest>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_as_str() {
        assert_eq!(NotificationChannel::Sms.as_str(), "sms");
        assert_eq!(NotificationChannel::Whatsapp.as_str(), "whatsapp");
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!(
            NotificationChannel::from_str("sms").unwrap(),
            NotificationChannel::Sms
        );
        assert_eq!(
            NotificationChannel::from_str("WhatsApp").unwrap(),
            NotificationChannel::Whatsapp
        );
        assert!(NotificationChannel::from_str("telegram").is_err());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&NotificationTestStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationTestStatus::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn test_send_request_validation() {
        let valid = SendTestRequest {
            template_id: "1".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            channel: NotificationChannel::Sms,
        };
        assert!(valid.validate().is_ok());

        let missing_template = SendTestRequest {
            template_id: String::new(),
            phone: "+7 (999) 123-45-67".to_string(),
            channel: NotificationChannel::Sms,
        };
        assert!(missing_template.validate().is_err());

        let empty_phone = SendTestRequest {
            template_id: "1".to_string(),
            phone: String::new(),
            channel: NotificationChannel::Whatsapp,
        };
        assert!(empty_phone.validate().is_err());
    }

    #[test]
    fn test_send_request_deserialization_requires_channel() {
        let result: Result<SendTestRequest, _> = serde_json::from_str(
            r#"{"template_id": "1", "phone": "+79991234567"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_notification_test_serialization() {
        let test = NotificationTest {
            id: Uuid::nil(),
            deal_id: "1".to_string(),
            channel: NotificationChannel::Whatsapp,
            phone: "+7 (999) 123-45-67".to_string(),
            status: NotificationTestStatus::Error,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&test).unwrap();
        assert_eq!(value["deal_id"], "1");
        assert_eq!(value["channel"], "whatsapp");
        assert_eq!(value["status"], "error");
    }
}
