// Result-writer tests: round-trip through results.json and removal of
// the file when a run finds nothing.

use shepard_core::{report, treatment::NegativeTreatment};
use tempfile::TempDir;

fn record(case_name: &str, nature: &str) -> NegativeTreatment {
    NegativeTreatment {
        case_name: case_name.to_string(),
        jurisdiction: "Fla.".to_string(),
        citation: "123 So. 2d 456".to_string(),
        nature: nature.to_string(),
        quoted_text: "We recede from the cited holding.".to_string(),
        explanation: "The opinion expressly disapproves the case.".to_string(),
    }
}

fn results_path(dir: &TempDir) -> String {
    dir.path()
        .join("results.json")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn written_records_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = results_path(&dir);
    let records = vec![
        record("Smith v. Jones", "overruled"),
        record("Roe v. Doe", "distinguished"),
    ];

    report::write_report(&records, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<NegativeTreatment> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn file_carries_exactly_n_objects() {
    let dir = TempDir::new().unwrap();
    let path = results_path(&dir);
    let records = vec![
        record("A v. B", "criticized"),
        record("C v. D", "limited"),
        record("E v. F", "overruled"),
    ];

    report::write_report(&records, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}

#[test]
fn file_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let path = results_path(&dir);

    report::write_report(&[record("Smith v. Jones", "overruled")], &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"caseName\""));
    assert!(contents.contains("\"quotedText\""));
}

#[test]
fn empty_records_remove_prior_file() {
    let dir = TempDir::new().unwrap();
    let path = results_path(&dir);
    std::fs::write(&path, "[{\"stale\": true}]").unwrap();

    report::write_report(&[], &path).unwrap();

    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn empty_records_with_no_prior_file_is_fine() {
    let dir = TempDir::new().unwrap();
    let path = results_path(&dir);

    report::write_report(&[], &path).unwrap();

    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn rerun_overwrites_prior_content() {
    let dir = TempDir::new().unwrap();
    let path = results_path(&dir);

    report::write_report(&[record("A v. B", "overruled")], &path).unwrap();
    report::write_report(&[record("C v. D", "criticized")], &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<NegativeTreatment> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].case_name, "C v. D");
}
