use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::groups::{GroupCounts, NotesGroup};
use crate::analysis::utility::mean_skip_missing;
use crate::table::{AirlineRecord, AirlineTable};

pub const HIGHEST_FARE_PHRASE: &str = "highest fare";
pub const TRAVELLER_RATIO_PHRASE: &str = "treveller to flight ratio";

/// Every summary view computed over one airline table.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub groups: GroupCounts,
    pub most_used_type: NotesGroup,
    pub least_used_type: NotesGroup,
    pub most_used_airlines: Vec<AirlineRecord>,
    pub least_used_airlines: Vec<AirlineRecord>,
    pub highest_fare_airlines: Vec<AirlineRecord>,
    pub traveller_flight_ratio_airlines: Vec<AirlineRecord>,
    pub delays: Vec<Option<f64>>,
    pub average_delay: Option<f64>,
}

impl Analysis {
    /// Runs the grouping, selection, filter and delay views over `table`.
    ///
    /// # Errors
    ///
    /// Fails on an empty table, which has no most or least used type.
    #[tracing::instrument(skip(table), fields(rows = table.len()))]
    pub fn run(table: &AirlineTable) -> Result<Self> {
        let groups = GroupCounts::by_notes(table.records());
        debug!(groups = groups.len(), "Grouped airlines by notes");

        let most_used_type = groups
            .most_used()
            .cloned()
            .context("no airline records to group")?;
        let least_used_type = groups
            .least_used()
            .cloned()
            .context("no airline records to group")?;

        let most_used_airlines = table.with_notes(&most_used_type.notes);
        let least_used_airlines = table.with_notes(&least_used_type.notes);

        let highest_fare_airlines = table.notes_containing(HIGHEST_FARE_PHRASE);
        let traveller_flight_ratio_airlines = table.notes_containing(TRAVELLER_RATIO_PHRASE);

        let delays = table.average_delays();
        let average_delay = mean_skip_missing(&delays);

        info!(
            most_used_count = most_used_type.count,
            least_used_count = least_used_type.count,
            highest_fare = highest_fare_airlines.len(),
            traveller_flight_ratio = traveller_flight_ratio_airlines.len(),
            average_delay,
            "Airline analysis complete"
        );

        Ok(Self {
            groups,
            most_used_type,
            least_used_type,
            most_used_airlines,
            least_used_airlines,
            highest_fare_airlines,
            traveller_flight_ratio_airlines,
            delays,
            average_delay,
        })
    }

    pub fn summary(&self) -> AirlineSummary {
        AirlineSummary {
            generated_at: Utc::now(),
            total_airlines: self.delays.len(),
            notes_groups: self.groups.len(),
            most_used_type: self.most_used_type.notes.clone(),
            most_used_count: self.most_used_type.count,
            least_used_type: self.least_used_type.notes.clone(),
            least_used_count: self.least_used_type.count,
            highest_fare_airlines: self.highest_fare_airlines.len(),
            traveller_flight_ratio_airlines: self.traveller_flight_ratio_airlines.len(),
            average_delay: self.average_delay,
        }
    }
}

/// Flat one-row view of an [`Analysis`], suitable for CSV.
#[derive(Debug, Clone, Serialize)]
pub struct AirlineSummary {
    pub generated_at: DateTime<Utc>,
    pub total_airlines: usize,
    pub notes_groups: usize,
    pub most_used_type: String,
    pub most_used_count: usize,
    pub least_used_type: String,
    pub least_used_count: usize,
    pub highest_fare_airlines: usize,
    pub traveller_flight_ratio_airlines: usize,
    pub average_delay: Option<f64>,
}
