//! End-to-end file tests: position file in, result files out, history back.

use std::fs::{self, File};
use std::time::{Duration, SystemTime};

use bondval_engine::BatchValuator;
use bondval_ext_file::{
    list_recent_outputs, output_file_name, read_results, read_rows, write_results,
    DEFAULT_DELIMITER, DEFAULT_OUTPUT_PREFIX,
};
use rust_decimal_macros::dec;
use tempfile::TempDir;

const POSITIONS: &str = "\
BondID;Issuer;Rate;FaceValue;PaymentFrequency;Rating;Type;YearsToMaturity;DiscountFactor;DeskNotes
NL0011;Dutch State;3.10%;1000;Annual;AAA;Bond;5;0.95;
US0Z35;US Treasury;4.00%;1000;None;AA+;Zero-Coupon;10;1.0;
BAD001;Junk Co;7.5%;1000;Annual;XYZ;Bond;3;1;
";

fn write_output(dir: &TempDir, input_name: &str, modified_secs_ago: u64) -> std::path::PathBuf {
    let rows = read_rows(POSITIONS.as_bytes(), DEFAULT_DELIMITER).unwrap();
    let report = BatchValuator::new().run(&rows);

    let path = dir.path().join(output_file_name(input_name, DEFAULT_OUTPUT_PREFIX));
    let file = File::create(&path).unwrap();
    write_results(&file, &report.results, DEFAULT_DELIMITER).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(modified_secs_ago))
        .unwrap();
    path
}

#[test]
fn test_position_file_to_result_file() {
    let dir = TempDir::new().unwrap();
    let path = write_output(&dir, "desk.csv", 0);

    assert!(path.ends_with("bonds_valued_desk.csv"));

    let results = read_results(File::open(&path).unwrap(), DEFAULT_DELIMITER).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].bond_id, "NL0011");
    assert_eq!(results[1].present_value.round_dp(2), dec!(1480.24));
}

#[test]
fn test_history_newest_first_and_clamped() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, "monday.csv", 300);
    write_output(&dir, "tuesday.csv", 200);
    write_output(&dir, "wednesday.csv", 100);
    fs::write(dir.path().join("unrelated.csv"), "not a result").unwrap();

    let files =
        list_recent_outputs(dir.path(), DEFAULT_OUTPUT_PREFIX, 2, DEFAULT_DELIMITER).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, ["bonds_valued_wednesday.csv", "bonds_valued_tuesday.csv"]);
    assert!(files.iter().all(|f| f.size_bytes > 0));
    assert_eq!(files[0].results.as_ref().map(Vec::len), Some(2));

    let all = list_recent_outputs(dir.path(), DEFAULT_OUTPUT_PREFIX, 0, DEFAULT_DELIMITER).unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn test_history_keeps_unparseable_files() {
    let dir = TempDir::new().unwrap();
    write_output(&dir, "good.csv", 60);
    fs::write(dir.path().join("bonds_valued_broken.csv"), "BondId;Type\nX;Nonsense\n").unwrap();

    let files =
        list_recent_outputs(dir.path(), DEFAULT_OUTPUT_PREFIX, 5, DEFAULT_DELIMITER).unwrap();
    assert_eq!(files.len(), 2);

    let broken = files
        .iter()
        .find(|f| f.file_name == "bonds_valued_broken.csv")
        .unwrap();
    assert!(broken.results.is_none());
}

#[test]
fn test_history_missing_directory_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert!(list_recent_outputs(&missing, DEFAULT_OUTPUT_PREFIX, 5, DEFAULT_DELIMITER).is_err());
}
