//! Status command for rendering tracker pills.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

use tam_core::{AgeStatus, PillPayload, PlainText};

use crate::Config;
use crate::commands::util::load_treatments;

/// One tracker's evaluation, as emitted by `--json`.
#[derive(Debug, Serialize)]
struct TrackerReport {
    id: String,
    pill: PillPayload,
    status: AgeStatus,
}

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    treatments_path: Option<&Path>,
    reference: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let path = treatments_path.unwrap_or(&config.treatments_path);
    let treatments = load_treatments(path)?;
    let trackers = config.build_trackers();

    // Evaluations share no state, so trackers run in parallel.
    let reports: Vec<TrackerReport> = trackers
        .par_iter()
        .map(|tracker| {
            let status = tracker.evaluate(&treatments, reference, &PlainText);
            TrackerReport {
                id: tracker.profile().id.clone(),
                pill: tracker.present(&status, &PlainText),
                status,
            }
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *writer, &reports)?;
        writeln!(writer)?;
        return Ok(());
    }

    for report in &reports {
        if report.status.found {
            let class = if report.pill.status_class.is_some() {
                format!(" [{}]", report.status.severity)
            } else {
                String::new()
            };
            writeln!(writer, "{} {}{}", report.pill.label, report.pill.value, class)?;
            for row in &report.pill.info {
                writeln!(writer, "  {} {}", row.label, row.value)?;
            }
        } else {
            writeln!(writer, "{} no qualifying treatment", report.pill.label)?;
        }
    }

    Ok(())
}
