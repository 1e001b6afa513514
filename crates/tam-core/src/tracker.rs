//! The recency evaluation engine, parametrized per tracked quantity.
//!
//! A [`Tracker`] binds a [`TrackerProfile`] (names, message templates,
//! group tag) to resolved thresholds, so the same engine is
//! instantiated once per tracked quantity instead of being duplicated.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::age::{AgeBreakdown, compute_age};
use crate::classify::{Classification, classify};
use crate::event::RecencyEvent;
use crate::notify::{Notification, NotificationSink, Tone, should_notify};
use crate::pill::{InfoRow, PillPayload, StatusClass};
use crate::select::select_latest;
use crate::severity::Severity;
use crate::text::TextProvider;
use crate::thresholds::Thresholds;

/// Static identity of a tracked quantity: labels, notification group,
/// and message keys. Message keys are handed to the host's
/// [`TextProvider`]; `%1` in the title receives the age in whole hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerProfile {
    /// Short machine identifier, used as the config key.
    pub id: String,
    /// Human-readable tracker name.
    pub label: String,
    /// Short pill caption.
    pub pill_label: String,
    /// Stable notification group tag.
    pub group: String,
    /// Label for the treatment-date info row.
    pub event_label: String,
    /// Notification title template.
    pub title_key: String,
    /// Message for the info tier.
    pub info_key: String,
    /// Message for the warn tier.
    pub warn_key: String,
    /// Message for the urgent tier.
    pub urgent_key: String,
}

impl TrackerProfile {
    /// Long-acting insulin dose age.
    #[must_use]
    pub fn long_acting() -> Self {
        Self {
            id: "long_acting".to_string(),
            label: "Long Acting Insulin Age".to_string(),
            pill_label: "LAGE".to_string(),
            group: "LAGE".to_string(),
            event_label: "Long Acting".to_string(),
            title_key: "Long acting insulin dose %1 hours ago".to_string(),
            info_key: "Give long acting insulin dose soon".to_string(),
            warn_key: "Time for long acting insulin dose".to_string(),
            urgent_key: "Long acting insulin dose overdue!".to_string(),
        }
    }

    /// Medtronic pump reservoir age.
    #[must_use]
    pub fn reservoir() -> Self {
        Self {
            id: "reservoir".to_string(),
            label: "Medtronic Reservoir Age".to_string(),
            pill_label: "MAGE".to_string(),
            group: "MAGE".to_string(),
            event_label: "Dose".to_string(),
            title_key: "Medtronic reservoir change %1 hours ago".to_string(),
            info_key: "Change Medtronic reservoir soon".to_string(),
            warn_key: "Time to change Medtronic reservoir".to_string(),
            urgent_key: "Medtronic reservoir change overdue!".to_string(),
        }
    }
}

/// Result of one recency evaluation.
///
/// Owned exclusively by the evaluation that produced it; recomputed
/// every cycle and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeStatus {
    /// Whether any qualifying event existed at or before the reference
    /// time.
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treated_at: Option<DateTime<Utc>>,
    /// Total whole hours elapsed.
    pub age_hours: i64,
    pub days: i64,
    pub hours: i64,
    pub minute_remainder: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub severity: Severity,
    pub exact_boundary: bool,
    /// Compact age display, empty when nothing was found.
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl AgeStatus {
    /// Routes the pending notification to the sink, if one fired this
    /// cycle.
    pub fn dispatch(&self, sink: &mut dyn NotificationSink) {
        if let Some(notification) = &self.notification {
            sink.notify(notification);
        }
    }

    fn not_found() -> Self {
        Self {
            found: false,
            treated_at: None,
            age_hours: 0,
            days: 0,
            hours: 0,
            minute_remainder: 0,
            dose: None,
            notes: None,
            severity: Severity::None,
            exact_boundary: false,
            display: String::new(),
            notification: None,
        }
    }
}

/// A tracked quantity bound to its resolved thresholds.
#[derive(Debug, Clone)]
pub struct Tracker {
    profile: TrackerProfile,
    thresholds: Thresholds,
}

impl Tracker {
    #[must_use]
    pub const fn new(profile: TrackerProfile, thresholds: Thresholds) -> Self {
        Self {
            profile,
            thresholds,
        }
    }

    #[must_use]
    pub const fn profile(&self) -> &TrackerProfile {
        &self.profile
    }

    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Evaluates the event log at `reference`.
    ///
    /// A pure function of its inputs: no state is carried between
    /// calls, so re-evaluating with identical inputs yields an
    /// identical status, and trackers may evaluate concurrently.
    pub fn evaluate<E, T>(&self, events: &[E], reference: DateTime<Utc>, text: &T) -> AgeStatus
    where
        E: RecencyEvent,
        T: TextProvider,
    {
        let Some(latest) = select_latest(events, reference) else {
            tracing::debug!(tracker = %self.profile.id, "no qualifying treatment");
            return AgeStatus::not_found();
        };

        let age = compute_age(latest.occurred_at(), reference);
        let classification = classify(age.hours_total, &self.thresholds);
        tracing::debug!(
            tracker = %self.profile.id,
            age_hours = age.hours_total,
            severity = %classification.severity,
            "evaluated treatment age"
        );

        AgeStatus {
            found: true,
            treated_at: Some(latest.occurred_at()),
            age_hours: age.hours_total,
            days: age.days,
            hours: age.hours,
            minute_remainder: age.minute_remainder,
            dose: latest.dose(),
            notes: latest.notes().map(str::to_string),
            severity: classification.severity,
            exact_boundary: classification.exact_boundary,
            display: age.display(),
            notification: self.build_notification(classification, &age, text),
        }
    }

    fn build_notification<T: TextProvider>(
        &self,
        classification: Classification,
        age: &AgeBreakdown,
        text: &T,
    ) -> Option<Notification> {
        if !should_notify(classification, age.minute_remainder, &self.thresholds) {
            return None;
        }

        let (message_key, sound) = match classification.severity {
            Severity::Urgent => (&self.profile.urgent_key, Tone::Persistent),
            Severity::Warn => (&self.profile.warn_key, Tone::Incoming),
            Severity::Info => (&self.profile.info_key, Tone::Incoming),
            Severity::None => return None,
        };

        Some(Notification {
            title: text.translate(&self.profile.title_key, &[age.hours_total.to_string()]),
            message: text.text(message_key),
            sound,
            severity: classification.severity,
            group: self.profile.group.clone(),
        })
    }

    /// Builds the presentation payload for a previously computed status.
    pub fn present<T>(&self, status: &AgeStatus, text: &T) -> PillPayload
    where
        T: TextProvider,
    {
        let mut info = Vec::new();
        if let Some(treated_at) = status.treated_at {
            info.push(InfoRow {
                label: text.text(&self.profile.event_label),
                value: treated_at.format("%Y-%m-%d %H:%M").to_string(),
            });
        }
        if let Some(notes) = status.notes.as_deref().filter(|notes| !notes.is_empty()) {
            info.push(InfoRow {
                label: text.text("Notes:"),
                value: notes.to_string(),
            });
        }

        PillPayload {
            value: status.display.clone(),
            label: text.text(&self.profile.pill_label),
            info,
            status_class: StatusClass::from_severity(status.severity),
        }
    }
}
