//! Call status dispatcher
//!
//! Turns one status callback into at most one side effect. Dispatching has
//! no error path: a failed fallback message is reported as a
//! [`FallbackOutcome::Failed`] value, logged, and dropped, so the webhook is
//! acknowledged no matter what the notifier does.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::call_status::{CallStatus, CallStatusEvent};
use crate::domain::telephony::{Notifier, TelephonyError};

/// Result of attempting the fallback message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    Sent,
    Failed(TelephonyError),
    /// The callback carried no destination number to notify
    NoDestination,
}

/// Branch taken for one status callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed,
    Unreached(FallbackOutcome),
    Canceled,
    Unrecognized(String),
}

impl DispatchOutcome {
    /// Short label used for metrics
    pub fn label(&self) -> &'static str {
        match self {
            DispatchOutcome::Completed => "completed",
            DispatchOutcome::Unreached(_) => "unreached",
            DispatchOutcome::Canceled => "canceled",
            DispatchOutcome::Unrecognized(_) => "unrecognized",
        }
    }
}

pub struct CallStatusDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl CallStatusDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Handle one status callback
    pub async fn dispatch(&self, event: &CallStatusEvent) -> DispatchOutcome {
        info!(
            "Call status update: {} | number: {} | call id: {}",
            event.status,
            event.destination.as_deref().unwrap_or("<none>"),
            event.call_id
        );

        match &event.status {
            CallStatus::Completed => {
                info!("Call {} completed successfully", event.call_id);
                DispatchOutcome::Completed
            }
            CallStatus::NoAnswer | CallStatus::Busy | CallStatus::Failed => {
                DispatchOutcome::Unreached(self.send_fallback(event).await)
            }
            CallStatus::Canceled => {
                info!(
                    "Call {} to {} was canceled",
                    event.call_id,
                    event.destination.as_deref().unwrap_or("<none>")
                );
                DispatchOutcome::Canceled
            }
            CallStatus::Unrecognized(raw) => {
                warn!("Unknown call status received for {}: {:?}", event.call_id, raw);
                DispatchOutcome::Unrecognized(raw.clone())
            }
        }
    }

    async fn send_fallback(&self, event: &CallStatusEvent) -> FallbackOutcome {
        let destination = match event.destination.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(destination) => destination,
            None => {
                warn!(
                    "Call {} was {} but carried no destination; skipping fallback SMS",
                    event.call_id, event.status
                );
                return FallbackOutcome::NoDestination;
            }
        };

        info!(
            "Call to {} was not successful ({}), sending fallback SMS",
            destination, event.status
        );

        match self.notifier.send_fallback_message(destination).await {
            Ok(()) => {
                info!("Fallback SMS sent to {}", destination);
                FallbackOutcome::Sent
            }
            Err(e) => {
                warn!("Failed to send fallback SMS to {}: {}", destination, e);
                FallbackOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telephony::MockNotifier;
    use mockall::predicate::eq;

    fn event(status: &str) -> CallStatusEvent {
        CallStatusEvent {
            call_id: "CA42".to_string(),
            destination: Some("+15550001111".to_string()),
            status: CallStatus::parse(status),
        }
    }

    fn dispatcher(notifier: MockNotifier) -> CallStatusDispatcher {
        CallStatusDispatcher::new(Arc::new(notifier))
    }

    #[tokio::test]
    async fn test_unreached_statuses_notify_once() {
        for status in ["no-answer", "busy", "failed"] {
            let mut notifier = MockNotifier::new();
            notifier
                .expect_send_fallback_message()
                .with(eq("+15550001111"))
                .times(1)
                .returning(|_| Ok(()));

            let outcome = dispatcher(notifier).dispatch(&event(status)).await;
            assert_eq!(outcome, DispatchOutcome::Unreached(FallbackOutcome::Sent));
        }
    }

    #[tokio::test]
    async fn test_other_statuses_never_notify() {
        for (status, expected) in [
            ("completed", DispatchOutcome::Completed),
            ("canceled", DispatchOutcome::Canceled),
            (
                "in-progress",
                DispatchOutcome::Unrecognized("in-progress".to_string()),
            ),
            ("", DispatchOutcome::Unrecognized(String::new())),
        ] {
            let mut notifier = MockNotifier::new();
            notifier.expect_send_fallback_message().times(0);

            let outcome = dispatcher(notifier).dispatch(&event(status)).await;
            assert_eq!(outcome, expected);
        }
    }

    #[tokio::test]
    async fn test_notifier_failure_is_contained() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_fallback_message()
            .times(1)
            .returning(|_| {
                Err(TelephonyError::Api {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                })
            });

        let outcome = dispatcher(notifier).dispatch(&event("busy")).await;
        assert!(matches!(
            outcome,
            DispatchOutcome::Unreached(FallbackOutcome::Failed(TelephonyError::Api { status: 503, .. }))
        ));
    }

    #[tokio::test]
    async fn test_missing_destination_skips_notifier() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send_fallback_message().times(0);

        let mut event = event("no-answer");
        event.destination = None;

        let outcome = dispatcher(notifier).dispatch(&event).await;
        assert_eq!(
            outcome,
            DispatchOutcome::Unreached(FallbackOutcome::NoDestination)
        );
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(DispatchOutcome::Completed.label(), "completed");
        assert_eq!(
            DispatchOutcome::Unreached(FallbackOutcome::Sent).label(),
            "unreached"
        );
        assert_eq!(
            DispatchOutcome::Unrecognized("x".to_string()).label(),
            "unrecognized"
        );
    }
}
