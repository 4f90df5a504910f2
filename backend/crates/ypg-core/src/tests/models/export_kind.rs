use crate::{ExportKind, ExportRequest};

use std::str::FromStr;

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_export_kind_from_str() {
    for kind in ExportKind::ALL {
        assert_eq!(ExportKind::from_str(kind.as_str()).unwrap(), kind);
    }
    assert!(ExportKind::from_str("payroll").is_err());
}

#[test]
fn test_export_request_rejects_inverted_range() {
    let request = ExportRequest {
        kind: ExportKind::Students,
        start: date(2023, 6, 1),
        end: date(2023, 5, 1),
    };

    let err = request.validate().unwrap_err();
    assert_eq!(err.field(), Some("end"));
}

#[test]
fn test_export_request_range_is_inclusive() {
    let request = ExportRequest {
        kind: ExportKind::Colleges,
        start: date(2023, 5, 1),
        end: date(2023, 5, 31),
    };

    assert!(request.validate().is_ok());
    assert!(request.contains(date(2023, 5, 1)));
    assert!(request.contains(date(2023, 5, 31)));
    assert!(!request.contains(date(2023, 6, 1)));
    assert_eq!(request.file_name(), "colleges_2023-05-01_2023-05-31.csv");
}
