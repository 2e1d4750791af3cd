//! In-memory airline table and the row-level operations over it.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;

use crate::dataset::{SAMPLE_DELAYS, builtin_records};

/// A single airline row. Column names match the CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineRecord {
    #[serde(rename = "Airline")]
    pub airline: String,
    #[serde(rename = "IATA")]
    pub iata: String,
    #[serde(rename = "ICAO")]
    pub icao: String,
    #[serde(rename = "Hub")]
    pub hub: String,
    #[serde(rename = "Airport")]
    pub airport: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,

    /// Minutes; `None` is the missing-value marker.
    #[serde(rename = "AverageDelay", default)]
    pub average_delay: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirlineTable {
    records: Vec<AirlineRecord>,
}

impl AirlineTable {
    pub fn builtin() -> Self {
        Self::from_records(builtin_records())
    }

    pub fn from_records(records: Vec<AirlineRecord>) -> Self {
        Self { records }
    }

    /// Reads a table from CSV with `Airline,IATA,ICAO,Hub,Airport,Notes` headers.
    /// An `AverageDelay` column is optional.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for (i, row) in rdr.deserialize().enumerate() {
            let record: AirlineRecord = row?;
            if let Some(delay) = record.average_delay {
                if !delay.is_finite() {
                    bail!("row {}: AverageDelay {} is not a finite number", i + 1, delay);
                }
            }
            records.push(record);
        }

        debug!(rows = records.len(), "Airline CSV loaded");
        Ok(Self::from_records(records))
    }

    pub fn from_csv_path(path: &str) -> Result<Self> {
        let file =
            std::fs::File::open(path).with_context(|| format!("opening dataset {}", path))?;
        Self::from_reader(file).with_context(|| format!("reading dataset {}", path))
    }

    /// Builds the table the CLI works on.
    ///
    /// Without `dataset` the built-in table is used and `delays` defaults to
    /// [`SAMPLE_DELAYS`]. A CSV dataset keeps its own `AverageDelay` column
    /// unless `delays` is given explicitly.
    #[tracing::instrument(skip(delays))]
    pub fn load(dataset: Option<&str>, delays: Option<&[f64]>) -> Result<Self> {
        let (mut table, delays) = match dataset {
            Some(path) => (Self::from_csv_path(path)?, delays),
            None => (Self::builtin(), Some(delays.unwrap_or(&SAMPLE_DELAYS))),
        };

        if let Some(delays) = delays {
            table.assign_average_delay(delays)?;
        }
        debug!(rows = table.len(), "Airline table ready");

        Ok(table)
    }

    pub fn records(&self) -> &[AirlineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fills the `AverageDelay` column positionally: row `i` gets `values[i]`,
    /// rows past the end of `values` get the missing marker.
    ///
    /// # Errors
    ///
    /// Fails if there are more values than rows, or if any value is NaN or
    /// infinite.
    pub fn assign_average_delay(&mut self, values: &[f64]) -> Result<()> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            bail!("delay value {} is not a finite number", bad);
        }
        if values.len() > self.records.len() {
            bail!(
                "{} delay values cannot be assigned to {} rows",
                values.len(),
                self.records.len()
            );
        }

        for (i, record) in self.records.iter_mut().enumerate() {
            record.average_delay = values.get(i).copied();
        }

        Ok(())
    }

    pub fn average_delays(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.average_delay).collect()
    }

    /// Rows whose Notes equal `notes` exactly.
    pub fn with_notes(&self, notes: &str) -> Vec<AirlineRecord> {
        self.records
            .iter()
            .filter(|r| r.notes == notes)
            .cloned()
            .collect()
    }

    /// Rows whose Notes contain `phrase`, ignoring case.
    pub fn notes_containing(&self, phrase: &str) -> Vec<AirlineRecord> {
        let needle = phrase.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.notes.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(airline: &str, notes: &str) -> AirlineRecord {
        AirlineRecord {
            airline: airline.to_string(),
            iata: "-".to_string(),
            icao: "-".to_string(),
            hub: "-".to_string(),
            airport: "Somewhere".to_string(),
            notes: notes.to_string(),
            average_delay: None,
        }
    }

    #[test]
    fn test_assign_fewer_values_leaves_missing() {
        let mut table = AirlineTable::builtin();
        table.assign_average_delay(&[10.0, 5.0, 15.0]).unwrap();

        let delays = table.average_delays();
        assert_eq!(delays.len(), 10);
        assert_eq!(&delays[..3], &[Some(10.0), Some(5.0), Some(15.0)]);
        assert!(delays[3..].iter().all(Option::is_none));
    }

    #[test]
    fn test_assign_too_many_values_fails() {
        let mut table = AirlineTable::from_records(vec![record("A", "x")]);
        assert!(table.assign_average_delay(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_assign_non_finite_values_fails() {
        let mut table = AirlineTable::builtin();
        assert!(table.assign_average_delay(&[f64::NAN]).is_err());
        assert!(table.assign_average_delay(&[f64::INFINITY, 1.0]).is_err());
        assert!(table.assign_average_delay(&[1.0, f64::NEG_INFINITY]).is_err());
        assert!(table.average_delays().iter().all(Option::is_none));
    }

    #[test]
    fn test_notes_containing_ignores_case() {
        let table = AirlineTable::from_records(vec![
            record("A", "Charges the HIGHEST FARE on the route"),
            record("B", "Cheap"),
        ]);

        let hits = table.notes_containing("highest fare");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].airline, "A");
    }

    #[test]
    fn test_builtin_filters_are_empty() {
        let table = AirlineTable::builtin();
        assert!(table.notes_containing("highest fare").is_empty());
        assert!(table.notes_containing("treveller to flight ratio").is_empty());
    }

    #[test]
    fn test_with_notes_exact_match() {
        let table = AirlineTable::builtin();
        let rows = table.with_notes("");
        let names: Vec<_> = rows.iter().map(|r| r.airline.as_str()).collect();
        assert_eq!(names, vec!["Bonza", "Chartair"]);
    }

    #[test]
    fn test_from_reader_without_delay_column() {
        let data = "Airline,IATA,ICAO,Hub,Airport,Notes\n\
                    Bonza,AB,BNZ,BONZA,Sunshine Coast Airport,\n\
                    Fly Tiwi,FT,-,-,Darwin International Airport,\"Owned by Hardy Aviation.\"\n";

        let table = AirlineTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].notes, "");
        assert_eq!(table.records()[1].notes, "Owned by Hardy Aviation.");
        assert!(table.records()[1].average_delay.is_none());
    }

    #[test]
    fn test_from_reader_with_delay_column() {
        let data = "Airline,IATA,ICAO,Hub,Airport,Notes,AverageDelay\n\
                    Bonza,AB,BNZ,BONZA,Sunshine Coast Airport,,12.5\n\
                    Chartair,-,-,-,Darwin International Airport,,\n";

        let table = AirlineTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.average_delays(), vec![Some(12.5), None]);
    }

    #[test]
    fn test_from_reader_rejects_non_finite_delay() {
        let data = "Airline,IATA,ICAO,Hub,Airport,Notes,AverageDelay\n\
                    Bonza,AB,BNZ,BONZA,Sunshine Coast Airport,,NaN\n";
        assert!(AirlineTable::from_reader(data.as_bytes()).is_err());

        let data = "Airline,IATA,ICAO,Hub,Airport,Notes,AverageDelay\n\
                    Bonza,AB,BNZ,BONZA,Sunshine Coast Airport,,inf\n";
        assert!(AirlineTable::from_reader(data.as_bytes()).is_err());
    }

    fn write_temp_csv(name: &str, contents: &str) -> String {
        let path = format!("{}/{}", std::env::temp_dir().display(), name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    const DELAY_CSV: &str = "Airline,IATA,ICAO,Hub,Airport,Notes,AverageDelay\n\
                             Air Link,LZ,-,-,Dubbo City Regional Airport,,20\n\
                             Airnorth,TL,ANO,TOPEND,Darwin International Airport,,40\n\
                             Aviair,GD,-,-,East Kimberley Regional Airport,,60\n\
                             Bonza,AB,BNZ,BONZA,Sunshine Coast Airport,,80\n";

    #[test]
    fn test_load_builtin_uses_sample_delays() {
        let table = AirlineTable::load(None, None).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(&table.average_delays()[..3], &[Some(10.0), Some(5.0), Some(15.0)]);
    }

    #[test]
    fn test_load_builtin_with_explicit_delays() {
        let table = AirlineTable::load(None, Some(&[1.0, 2.0])).unwrap();
        assert_eq!(&table.average_delays()[..3], &[Some(1.0), Some(2.0), None]);
    }

    #[test]
    fn test_load_dataset_keeps_its_delays() {
        let path = write_temp_csv("regional_airlines_test_load_delays.csv", DELAY_CSV);

        let table = AirlineTable::load(Some(&path), None).unwrap();
        assert_eq!(
            table.average_delays(),
            vec![Some(20.0), Some(40.0), Some(60.0), Some(80.0)]
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_dataset_with_explicit_delays() {
        let path = write_temp_csv("regional_airlines_test_load_override.csv", DELAY_CSV);

        let table = AirlineTable::load(Some(&path), Some(&[5.0])).unwrap();
        assert_eq!(table.average_delays(), vec![Some(5.0), None, None, None]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_small_dataset_without_delays() {
        let path = write_temp_csv(
            "regional_airlines_test_load_small.csv",
            "Airline,IATA,ICAO,Hub,Airport,Notes\n\
             Bonza,AB,BNZ,BONZA,Sunshine Coast Airport,\n\
             Chartair,-,-,-,Darwin International Airport,\n",
        );

        let table = AirlineTable::load(Some(&path), None).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.average_delays(), vec![None, None]);

        std::fs::remove_file(&path).unwrap();
    }
}
