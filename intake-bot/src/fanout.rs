//! Admin fanout: summary card plus forwarded original to every configured administrator.

use intake_core::{Bot, Message, OutgoingMessage};
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::notification::{format_notification, Clock, Source};

/// Which step of a delivery failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStage {
    Card,
    Forward,
}

impl fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStage::Card => f.write_str("card"),
            DeliveryStage::Forward => f.write_str("forward"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub stage: DeliveryStage,
    pub reason: String,
}

/// Outcome of delivering one message to one administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDelivery {
    pub admin_id: i64,
    pub outcome: Result<(), DeliveryFailure>,
}

/// Per-recipient outcomes, in configured admin order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanoutReport {
    pub deliveries: Vec<AdminDelivery>,
}

impl FanoutReport {
    pub fn delivered(&self) -> usize {
        self.deliveries.iter().filter(|d| d.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.deliveries.len() - self.delivered()
    }
}

/// Sends notifications to the fixed admin list.
#[derive(Clone)]
pub struct AdminFanout {
    bot: Arc<dyn Bot>,
    admins: Arc<[i64]>,
    clock: Arc<dyn Clock>,
}

impl AdminFanout {
    pub fn new(bot: Arc<dyn Bot>, admins: Vec<i64>, clock: Arc<dyn Clock>) -> Self {
        Self {
            bot,
            admins: admins.into(),
            clock,
        }
    }

    /// Delivers `message` to every admin: card first, then the forwarded original. A failed card
    /// skips that admin's forward. Failures are logged and reported, never returned as errors.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn deliver(&self, message: &Message, source: Source) -> FanoutReport {
        let card = format_notification(message, source, self.clock.now());
        let mut report = FanoutReport::default();

        for &admin_id in self.admins.iter() {
            let outcome = self.deliver_one(admin_id, message, &card).await;
            if let Err(failure) = &outcome {
                warn!(
                    admin_id = admin_id,
                    stage = %failure.stage,
                    reason = %failure.reason,
                    "Admin delivery failed"
                );
            }
            report.deliveries.push(AdminDelivery { admin_id, outcome });
        }

        info!(
            source = source.label(),
            delivered = report.delivered(),
            failed = report.failed(),
            "Fanout finished"
        );
        report
    }

    async fn deliver_one(
        &self,
        admin_id: i64,
        message: &Message,
        card: &str,
    ) -> Result<(), DeliveryFailure> {
        self.bot
            .send(admin_id, OutgoingMessage::html(card))
            .await
            .map_err(|e| DeliveryFailure {
                stage: DeliveryStage::Card,
                reason: e.to_string(),
            })?;
        self.bot
            .forward_message(admin_id, message.chat.id, &message.id)
            .await
            .map_err(|e| DeliveryFailure {
                stage: DeliveryStage::Forward,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = FanoutReport {
            deliveries: vec![
                AdminDelivery {
                    admin_id: 1,
                    outcome: Ok(()),
                },
                AdminDelivery {
                    admin_id: 2,
                    outcome: Err(DeliveryFailure {
                        stage: DeliveryStage::Forward,
                        reason: "blocked".to_string(),
                    }),
                },
            ],
        };
        assert_eq!(report.delivered(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(FanoutReport::default().failed(), 0);
    }
}
