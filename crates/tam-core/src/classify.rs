//! Severity classification against resolved thresholds.

use crate::severity::Severity;
use crate::thresholds::Thresholds;

/// Outcome of classifying an elapsed age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub severity: Severity,
    /// True when the age in whole hours equals the threshold of the
    /// matched tier. Drives the one-shot notification gate.
    pub exact_boundary: bool,
}

impl Classification {
    const NONE: Self = Self {
        severity: Severity::None,
        exact_boundary: false,
    };
}

/// Maps an elapsed age in whole hours to a severity tier.
///
/// Tiers are checked most severe first, so overlapping or inverted
/// thresholds resolve to the highest matching tier.
#[must_use]
pub fn classify(age_hours: i64, thresholds: &Thresholds) -> Classification {
    if age_hours >= thresholds.urgent_hours {
        Classification {
            severity: Severity::Urgent,
            exact_boundary: age_hours == thresholds.urgent_hours,
        }
    } else if age_hours >= thresholds.warn_hours {
        Classification {
            severity: Severity::Warn,
            exact_boundary: age_hours == thresholds.warn_hours,
        }
    } else if age_hours >= thresholds.info_hours {
        Classification {
            severity: Severity::Info,
            exact_boundary: age_hours == thresholds.info_hours,
        }
    } else {
        Classification::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Thresholds {
        Thresholds {
            info_hours: 22,
            warn_hours: 24,
            urgent_hours: 25,
            alerts_enabled: true,
        }
    }

    #[test]
    fn below_info_is_none() {
        let c = classify(21, &thresholds());
        assert_eq!(c.severity, Severity::None);
        assert!(!c.exact_boundary);
    }

    #[test]
    fn each_tier_matches_at_its_threshold() {
        assert_eq!(classify(22, &thresholds()).severity, Severity::Info);
        assert_eq!(classify(24, &thresholds()).severity, Severity::Warn);
        assert_eq!(classify(25, &thresholds()).severity, Severity::Urgent);
    }

    #[test]
    fn boundary_flag_set_only_at_exact_threshold() {
        assert!(classify(24, &thresholds()).exact_boundary);
        assert!(!classify(23, &thresholds()).exact_boundary);
        // 26 is inside the urgent tier but past its boundary hour.
        assert!(!classify(26, &thresholds()).exact_boundary);
    }

    #[test]
    fn severity_is_monotonic_in_age() {
        let thresholds = thresholds();
        let mut previous = Severity::None;
        for age_hours in 0..40 {
            let severity = classify(age_hours, &thresholds).severity;
            assert!(severity >= previous, "rank dropped at {age_hours}h");
            previous = severity;
        }
    }

    #[test]
    fn inverted_thresholds_fall_through_to_highest_matching_tier() {
        let inverted = Thresholds {
            info_hours: 30,
            warn_hours: 24,
            urgent_hours: 25,
            alerts_enabled: false,
        };
        assert_eq!(classify(30, &inverted).severity, Severity::Urgent);
        assert_eq!(classify(24, &inverted).severity, Severity::Warn);
        assert_eq!(classify(23, &inverted).severity, Severity::None);
    }
}
