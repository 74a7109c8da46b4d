//! User domain models for the session account.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_phone;

/// Per-channel notification opt-in toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationSettings {
    pub sms_enabled: bool,
    pub whatsapp_enabled: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            sms_enabled: true,
            whatsapp_enabled: true,
        }
    }
}

/// The session user.
///
/// A single account exists per process; profile edits mutate the in-memory
/// record only and are lost on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notification_settings: NotificationSettings,
}

/// Request payload for partial profile updates.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub notification_settings: Option<NotificationSettings>,
}

impl UpdateProfileRequest {
    /// Applies the present fields onto a user record.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(settings) = self.notification_settings {
            user.notification_settings = settings;
        }
    }
}
