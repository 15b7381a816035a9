//! Wardrobe tally and summary persistence through files.

use super::common::{make_day, make_wardrobe};
use halving::wardrobe::summary;
use halving::{Error, Wardrobe, Weekday};
use std::fs;

#[test]
fn classroom_summary_rows() {
    let rows = Wardrobe::classroom().tally().rows();
    let blue = rows.iter().find(|r| r.colour == "BLUE").unwrap();
    assert_eq!(blue.frequency, 31);
    assert_eq!(blue.id, 4);
    assert_eq!(rows.iter().map(|r| r.frequency).sum::<u32>(), 95);
}

#[test]
fn load_table_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.json");
    let wardrobe = make_wardrobe(&[
        (Weekday::Saturday, &["RED", "BLUE", "RED"][..]),
        (Weekday::Sunday, &["BLUE"][..]),
    ]);
    fs::write(&path, serde_json::to_string(&wardrobe).unwrap()).unwrap();

    let loaded = Wardrobe::load(&path).unwrap();
    assert_eq!(loaded, wardrobe);
    assert_eq!(loaded.tally().get("RED"), 2);
    assert_eq!(loaded.tally().get("BLUE"), 2);
}

#[test]
fn table_json_uses_upper_case_days() {
    let wardrobe = make_wardrobe(&[(Weekday::Monday, &["GREEN"][..])]);
    let json = serde_json::to_string(&wardrobe).unwrap();
    assert_eq!(json, r#"{"days":[{"day":"MONDAY","colours":["GREEN"]}]}"#);
}

#[test]
fn duplicate_days_rejected() {
    let err = Wardrobe::new(vec![
        make_day(Weekday::Friday, &["RED"]),
        make_day(Weekday::Friday, &["BLUE"]),
    ])
    .unwrap_err();
    assert_eq!(err.to_string(), "FRIDAY appears more than once in the wardrobe table");
}

#[test]
fn load_missing_table_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Wardrobe::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn persist_summary_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colours_and_frequencies.json");
    let tally = Wardrobe::classroom().tally();

    let written = summary::persist(&path, &tally, false).unwrap();
    assert_eq!(summary::read(&path).unwrap(), written);

    assert!(matches!(
        summary::persist(&path, &tally, false),
        Err(Error::SummaryExists(_))
    ));
}

#[test]
fn overwrite_replaces_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");

    summary::persist(&path, &Wardrobe::classroom().tally(), false).unwrap();
    let small = make_wardrobe(&[(Weekday::Monday, &["RED"][..])]).tally();
    summary::persist(&path, &small, true).unwrap();

    let rows = summary::read(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].colour, "RED");
}
