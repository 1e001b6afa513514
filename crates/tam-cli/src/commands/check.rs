//! Check command: evaluate trackers and deliver pending alerts.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;

use tam_core::{AgeStatus, Notification, NotificationSink, PlainText};

use crate::Config;
use crate::commands::util::load_treatments;

/// Sink that writes one alert line per delivered notification.
struct WriterSink<'w, W: Write> {
    writer: &'w mut W,
    delivered: usize,
}

impl<W: Write> NotificationSink for WriterSink<'_, W> {
    fn notify(&mut self, notification: &Notification) {
        self.delivered += 1;
        tracing::info!(
            group = %notification.group,
            severity = %notification.severity,
            "alert fired"
        );
        let _ = writeln!(
            self.writer,
            "[{}] {}: {}",
            notification.severity, notification.title, notification.message
        );
    }
}

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    treatments_path: Option<&Path>,
    reference: DateTime<Utc>,
) -> Result<()> {
    let path = treatments_path.unwrap_or(&config.treatments_path);
    let treatments = load_treatments(path)?;
    let trackers = config.build_trackers();

    let statuses: Vec<AgeStatus> = trackers
        .par_iter()
        .map(|tracker| tracker.evaluate(&treatments, reference, &PlainText))
        .collect();

    let delivered = {
        let mut sink = WriterSink {
            writer: &mut *writer,
            delivered: 0,
        };
        for status in &statuses {
            status.dispatch(&mut sink);
        }
        sink.delivered
    };

    if delivered == 0 {
        writeln!(writer, "No alerts pending.")?;
    }

    Ok(())
}
