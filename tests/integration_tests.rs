use regional_airlines::analysis::Analysis;
use regional_airlines::dataset::SAMPLE_DELAYS;
use regional_airlines::table::AirlineTable;

fn builtin_with_delays() -> AirlineTable {
    let mut table = AirlineTable::builtin();
    table
        .assign_average_delay(&SAMPLE_DELAYS)
        .expect("Failed to assign delays");
    table
}

#[test]
fn test_full_pipeline() {
    let analysis = Analysis::run(&builtin_with_delays()).expect("Failed to analyze table");

    assert_eq!(analysis.groups.count_of(""), Some(2));
    assert_eq!(analysis.most_used_type.notes, "");
    assert_eq!(analysis.average_delay, Some(10.0));
    assert!(analysis.highest_fare_airlines.is_empty());
}

#[test]
fn test_average_delay_ignores_row_count() {
    let mut records = AirlineTable::builtin().records().to_vec();
    records.extend(AirlineTable::builtin().records().iter().cloned());
    let mut table = AirlineTable::from_records(records);
    table.assign_average_delay(&SAMPLE_DELAYS).unwrap();

    let analysis = Analysis::run(&table).unwrap();
    assert_eq!(table.len(), 20);
    assert_eq!(analysis.average_delay, Some(10.0));
}

#[test]
fn test_csv_dataset_matches_builtin() {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in AirlineTable::builtin().records() {
        writer.serialize(record).unwrap();
    }
    let bytes = writer.into_inner().unwrap();

    let mut from_csv = AirlineTable::from_reader(bytes.as_slice()).unwrap();
    from_csv.assign_average_delay(&SAMPLE_DELAYS).unwrap();

    let expected = Analysis::run(&builtin_with_delays()).unwrap();
    let actual = Analysis::run(&from_csv).unwrap();

    assert_eq!(actual.groups, expected.groups);
    assert_eq!(actual.least_used_type, expected.least_used_type);
    assert_eq!(actual.average_delay, expected.average_delay);
}
