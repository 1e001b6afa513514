//! Latest-event selection.

use chrono::{DateTime, Utc};

use crate::event::RecencyEvent;

/// Returns the most recent event at or before `reference`.
///
/// Events after `reference` are ignored. When two events share a
/// timestamp, the one later in input order wins — a deterministic but
/// order-dependent tie-break. Returns `None` when no event qualifies.
///
/// The selected event carries the minimum nonnegative age among all
/// qualifying events, so downstream age computation never sees a
/// negative span.
pub fn select_latest<E: RecencyEvent>(events: &[E], reference: DateTime<Utc>) -> Option<&E> {
    events.iter().fold(None, |best: Option<&E>, event| {
        if event.occurred_at() > reference {
            return best;
        }
        match best {
            Some(current) if event.occurred_at() < current.occurred_at() => Some(current),
            _ => Some(event),
        }
    })
}
