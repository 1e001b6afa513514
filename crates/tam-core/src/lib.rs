//! Core domain logic for the treatment age monitor.
//!
//! This crate contains the fundamental types and logic for:
//! - Latest-event selection: picking the most recent qualifying treatment
//! - Age computation: whole-day/hour decomposition of the elapsed span
//! - Severity classification: mapping age to configurable alert tiers
//! - Notification gating: one-shot alerts debounced to the boundary hour
//!
//! Evaluation is pure and synchronous: no I/O, no hidden state between
//! calls. The event log, thresholds, and reference time are supplied by
//! the caller each cycle.

mod age;
mod classify;
pub mod event;
pub mod notify;
pub mod pill;
mod select;
pub mod severity;
pub mod text;
pub mod thresholds;
mod tracker;

pub use age::{AgeBreakdown, compute_age};
pub use classify::{Classification, classify};
pub use event::{RecencyEvent, Treatment};
pub use notify::{GRACE_WINDOW_MINUTES, Notification, NotificationSink, Tone, should_notify};
pub use pill::{InfoRow, PillPayload, StatusClass};
pub use select::select_latest;
pub use severity::{Severity, UnknownSeverity};
pub use text::{PlainText, TextProvider};
pub use thresholds::{ThresholdOverrides, Thresholds};
pub use tracker::{AgeStatus, Tracker, TrackerProfile};
