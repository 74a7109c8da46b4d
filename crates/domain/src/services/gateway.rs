//! Notification gateway abstraction.
//!
//! The portal never talks to a real SMS/WhatsApp provider; deliveries go
//! through the [`NotificationGateway`] trait so the runtime can use a
//! latency-simulating randomized mock while tests inject deterministic
//! outcomes.

use rand::Rng;

use crate::models::notification::NotificationChannel;

/// Result of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The gateway accepted the message.
    Delivered,
    /// The gateway rejected or dropped the message.
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Gateway client for sending customer notifications.
#[async_trait::async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Delivers a rendered message to a phone number over the channel.
    async fn deliver(
        &self,
        channel: NotificationChannel,
        phone: &str,
        text: &str,
    ) -> DeliveryOutcome;
}

/// Mock gateway with simulated network latency and a pseudo-random
/// delivery outcome.
#[derive(Debug, Clone)]
pub struct RandomizedGateway {
    /// Probability of a delivery succeeding, in `[0, 1]`.
    success_rate: f64,
    /// Simulated round-trip before the outcome resolves.
    delay_ms: u64,
}

impl RandomizedGateway {
    pub fn new(success_rate: f64, delay_ms: u64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
            delay_ms,
        }
    }
}

#[async_trait::async_trait]
impl NotificationGateway for RandomizedGateway {
    async fn deliver(
        &self,
        channel: NotificationChannel,
        phone: &str,
        text: &str,
    ) -> DeliveryOutcome {
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }

        let delivered = rand::thread_rng().gen_bool(self.success_rate);
        if delivered {
            tracing::info!(
                channel = %channel,
                phone = %phone,
                text_len = text.len(),
                "Mock gateway delivered test notification"
            );
            DeliveryOutcome::Delivered
        } else {
            tracing::warn!(
                channel = %channel,
                phone = %phone,
                "Mock gateway simulated delivery failure"
            );
            DeliveryOutcome::Failed("Simulated delivery failure".to_string())
        }
    }
}

/// Gateway with a fixed outcome, for tests and local development.
#[derive(Debug, Clone)]
pub struct StaticGateway {
    failure: Option<String>,
}

impl StaticGateway {
    /// A gateway that delivers every message.
    pub fn delivering() -> Self {
        Self { failure: None }
    }

    /// A gateway that fails every message.
    pub fn failing() -> Self {
        Self {
            failure: Some("Simulated delivery failure".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl NotificationGateway for StaticGateway {
    async fn deliver(
        &self,
        _channel: NotificationChannel,
        _phone: &str,
        _text: &str,
    ) -> DeliveryOutcome {
        match &self.failure {
            None => DeliveryOutcome::Delivered,
            Some(reason) => DeliveryOutcome::Failed(reason.clone()),
        }
    }
}
