//! End-to-end batch checks over CSV files on disk.

use std::io::Write;

use immat_cli::batch::{BatchOptions, read_plates};
use immat_cli::render::to_json;
use immat_cli::report::{AcceptPolicy, CheckReport, CheckedPlate};
use immat_core::{PlateCategory, PlateScheme};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn check_file(content: &str, policy: &AcceptPolicy) -> CheckReport {
    let file = create_temp_csv(content);
    let entries = read_plates(file.path(), &BatchOptions::new("immatriculation")).unwrap();
    entries
        .iter()
        .map(|entry| CheckedPlate::check(&entry.raw, Some(entry.line), policy))
        .collect()
}

const FLEET: &str = "\
id,immatriculation,owner
1,ab-123-cd,a
2,W 123 AB,b
3,AB 99 C,c
4,1234 AB 75,d
5,123 A 20,e
6,SS-123-CD,f
7,,g
";

#[test]
fn summarises_a_mixed_fleet() {
    let report = check_file(FLEET, &AcceptPolicy::new());
    insta::assert_snapshot!(report.summary_line(), @"checked 6 plate(s): 4 accepted, 2 rejected");
    assert_eq!(report.count_for(PlateCategory::SivNormal), 1);
    assert_eq!(report.count_for(PlateCategory::SivWGarage), 1);
    assert_eq!(report.count_for(PlateCategory::SivCyclo), 1);
    assert_eq!(report.count_for(PlateCategory::FniNormal), 1);

    let rejected: Vec<_> = report.rejected().filter_map(|plate| plate.line).collect();
    assert_eq!(rejected, vec![6, 7]);
}

#[test]
fn scheme_policy_applies_to_files() {
    let policy = AcceptPolicy::new().with_scheme(Some(PlateScheme::Fni));
    let report = check_file(FLEET, &policy);
    insta::assert_snapshot!(report.summary_line(), @"checked 6 plate(s): 1 accepted, 5 rejected");
}

#[test]
fn json_output_carries_formatted_values() {
    let report = check_file(FLEET, &AcceptPolicy::new());
    let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
    let first = &json["plates"][0];
    assert_eq!(first["line"], 2);
    assert_eq!(first["input"], "ab-123-cd");
    assert_eq!(first["formatted"], "AB-123-CD");
    assert_eq!(first["scheme"], "siv");
    assert_eq!(first["categories"][0], "siv-normal");
    assert_eq!(first["accepted"], true);

    let invalid = &json["plates"][4];
    assert_eq!(invalid["formatted"], "123 A 20");
    assert_eq!(invalid["valid"], false);
    assert_eq!(invalid["scheme"], serde_json::Value::Null);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let error = read_plates(&path, &BatchOptions::new("plate")).unwrap_err();
    assert!(format!("{error:#}").contains(&path.display().to_string()));
}

#[test]
fn missing_column_names_the_file() {
    let file = create_temp_csv("id,owner\n1,x\n");
    let error = read_plates(file.path(), &BatchOptions::new("plate")).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains(&file.path().display().to_string()));
    assert!(message.contains("column 'plate' not found"));
}
