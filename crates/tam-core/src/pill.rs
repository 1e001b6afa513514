//! Presentation payload for the host dashboard.

use serde::Serialize;

use crate::severity::Severity;

/// A label/value row shown in the pill's detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

/// Styling class the host applies to the pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Warn,
    Urgent,
}

impl StatusClass {
    /// Info and below render unstyled.
    #[must_use]
    pub const fn from_severity(severity: Severity) -> Option<Self> {
        match severity {
            Severity::Urgent => Some(Self::Urgent),
            Severity::Warn => Some(Self::Warn),
            Severity::None | Severity::Info => None,
        }
    }
}

/// Payload handed to the presentation sink. The core builds it; the
/// host renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillPayload {
    /// Compact age display, empty when no event qualified.
    pub value: String,
    /// Short pill caption.
    pub label: String,
    /// Detail rows.
    pub info: Vec<InfoRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_class: Option<StatusClass>,
}
