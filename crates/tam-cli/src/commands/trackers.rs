//! Trackers command for listing effective thresholds.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use tam_core::Thresholds;

use crate::Config;

#[derive(Debug, Serialize)]
struct TrackerRow<'a> {
    id: &'a str,
    label: &'a str,
    thresholds: &'a Thresholds,
}

pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let trackers = config.build_trackers();

    if json {
        let rows: Vec<TrackerRow> = trackers
            .iter()
            .map(|tracker| TrackerRow {
                id: &tracker.profile().id,
                label: &tracker.profile().label,
                thresholds: tracker.thresholds(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *writer, &rows)?;
        writeln!(writer)?;
        return Ok(());
    }

    for tracker in &trackers {
        let thresholds = tracker.thresholds();
        writeln!(
            writer,
            "{} ({}): info {}h, warn {}h, urgent {}h, alerts {}",
            tracker.profile().id,
            tracker.profile().label,
            thresholds.info_hours,
            thresholds.warn_hours,
            thresholds.urgent_hours,
            if thresholds.alerts_enabled { "on" } else { "off" }
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use tam_core::ThresholdOverrides;

    use super::*;

    #[test]
    fn lists_default_thresholds() {
        let mut output = Vec::new();
        run(&mut output, &Config::default(), false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output.trim_end(), @r"
        long_acting (Long Acting Insulin Age): info 22h, warn 24h, urgent 25h, alerts off
        reservoir (Medtronic Reservoir Age): info 22h, warn 24h, urgent 25h, alerts off
        ");
    }

    #[test]
    fn lists_overridden_thresholds() {
        let mut config = Config::default();
        config.trackers.insert(
            "reservoir".to_string(),
            ThresholdOverrides {
                urgent: Some(70),
                enable_alerts: Some(true),
                ..Default::default()
            },
        );

        let mut output = Vec::new();
        run(&mut output, &config, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(
            "reservoir (Medtronic Reservoir Age): info 22h, warn 24h, urgent 70h, alerts on"
        ));
    }

    #[test]
    fn json_lists_every_tracker() {
        let mut output = Vec::new();
        run(&mut output, &Config::default(), true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], "long_acting");
        assert_eq!(rows[0]["thresholds"]["urgent_hours"], 25);
    }
}
