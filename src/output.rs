//! Where airline summaries go once computed: the log (debug dump or JSON)
//! and an optional CSV history file.

use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::AirlineSummary;
use crate::table::AirlineRecord;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Dumps every summary field at debug level.
pub fn print_pretty(summary: &AirlineSummary) {
    debug!("{:#?}", summary);
}

/// Emits the summary as one indented JSON document at info level.
pub fn print_json(summary: &AirlineSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Logs one structured event per airline row.
pub fn log_records(records: &[AirlineRecord]) {
    for record in records {
        info!(
            airline = %record.airline,
            iata = %record.iata,
            icao = %record.icao,
            hub = %record.hub,
            airport = %record.airport,
            notes = %record.notes,
            average_delay = record.average_delay,
            "Airline"
        );
    }
}

/// Adds one summary row to the CSV history at `path`. The header row is
/// only written when the file is new, so repeated runs build up a table.
pub fn append_record(path: &str, summary: &AirlineSummary) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}
