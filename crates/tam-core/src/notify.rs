//! One-shot notification decisions.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::severity::Severity;
use crate::thresholds::Thresholds;

/// Minutes past the boundary hour during which a one-shot alert may
/// still fire. Compensates for evaluation-cycle jitter: the evaluator
/// runs every few minutes, not exactly on the hour.
pub const GRACE_WINDOW_MINUTES: i64 = 20;

/// Notification tone requested from the delivery transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Incoming,
    Persistent,
}

/// A user-facing alert, handed to the external notification sink.
///
/// Constructed fresh each evaluation cycle when the gate fires and
/// consumed immediately; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub sound: Tone,
    pub severity: Severity,
    /// Stable tag so the delivery layer can collapse repeats.
    pub group: String,
}

/// Delivery transport for notifications. Owned by the host; the core
/// only hands alerts over.
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

/// Decides whether a one-shot notification fires for this evaluation.
///
/// Fires only when alerts are enabled, a tier matched, the age in whole
/// hours sits exactly on the tier's threshold, and the evaluation landed
/// within the grace window after that boundary hour. Outside the window
/// the alert for that boundary is skipped, not deferred; no
/// already-notified state is kept between evaluations.
#[must_use]
pub fn should_notify(
    classification: Classification,
    minute_remainder: i64,
    thresholds: &Thresholds,
) -> bool {
    thresholds.alerts_enabled
        && classification.severity != Severity::None
        && classification.exact_boundary
        && minute_remainder <= GRACE_WINDOW_MINUTES
}
