// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CellValue, DomainError, GridRecord, RecordId};
use serde_json::json;
use time::macros::date;

#[test]
fn test_missing_field_reads_as_null() {
    let record: GridRecord = GridRecord::new().with("name", "Acme");

    assert!(record.value("kva").is_missing());
    assert!(!record.has_field("kva"));
    assert!(record.has_field("name"));
}

#[test]
fn test_display_string_of_numbers() {
    assert_eq!(CellValue::from(50).display_string().as_deref(), Some("50"));
    assert_eq!(CellValue::from(62.5).display_string().as_deref(), Some("62.5"));
    assert_eq!(
        CellValue::Number(f64::INFINITY).display_string().as_deref(),
        Some("Infinity")
    );
    assert_eq!(CellValue::Null.display_string(), None);
    assert_eq!(CellValue::from(true).display_string().as_deref(), Some("true"));
}

#[test]
fn test_as_number_accepts_clean_numeric_text() {
    assert_eq!(CellValue::from(" 42.5 ").as_number(), Some(42.5));
    assert_eq!(CellValue::from("42kva").as_number(), None);
    assert_eq!(CellValue::from("NaN").as_number(), None);
    assert_eq!(CellValue::Bool(true).as_number(), None);
}

#[test]
fn test_as_date_accepts_date_and_datetime_text() {
    assert_eq!(CellValue::from("2026-05-17").as_date(), Some(date!(2026 - 05 - 17)));
    assert_eq!(
        CellValue::from("2026-05-17T09:30:00Z").as_date(),
        Some(date!(2026 - 05 - 17))
    );
    assert_eq!(CellValue::from("17/05/2026").as_date(), None);
    assert_eq!(CellValue::from(20_260_517).as_date(), None);
}

#[test]
fn test_option_converts_to_null() {
    let value: CellValue = Option::<f64>::None.into();
    assert!(value.is_missing());

    let value: CellValue = Some("x").into();
    assert_eq!(value, CellValue::Text(String::from("x")));
}

#[test]
fn test_identity_uses_field_or_position() {
    let keyed: GridRecord = GridRecord::new().with("lead_id", "lead_0001");
    let unkeyed: GridRecord = GridRecord::new().with("name", "Zeta");

    assert_eq!(keyed.identity("lead_id", 7), RecordId::key("lead_0001"));
    assert_eq!(unkeyed.identity("lead_id", 7), RecordId::Position(7));
    assert_eq!(RecordId::Position(7).to_string(), "#7");
}

#[test]
fn test_numeric_identity_uses_display_form() {
    let record: GridRecord = GridRecord::new().with("id", 12);
    assert_eq!(record.identity("id", 0), RecordId::key("12"));
}

#[test]
fn test_from_json_object() {
    let record: GridRecord = GridRecord::from_json(&json!({
        "name": "Acme",
        "kva": 50,
        "kva_note": null,
        "active": true,
        "tags": ["a", "b"]
    }))
    .unwrap();

    assert_eq!(record.value("name"), &CellValue::from("Acme"));
    assert_eq!(record.value("kva"), &CellValue::Number(50.0));
    assert!(record.value("kva_note").is_missing());
    assert!(record.has_field("kva_note"));
    assert_eq!(record.value("active"), &CellValue::Bool(true));
    assert_eq!(record.value("tags"), &CellValue::from("[\"a\",\"b\"]"));
}

#[test]
fn test_from_json_rejects_non_object() {
    let result = GridRecord::from_json(&json!([1, 2, 3]));

    assert!(matches!(
        result,
        Err(DomainError::UnsupportedCellValue { .. })
    ));
}

#[test]
fn test_field_names_are_sorted() {
    let record: GridRecord = [("zone", "N"), ("area", "A"), ("dealer", "D")]
        .into_iter()
        .collect();

    assert_eq!(
        record.field_names().collect::<Vec<_>>(),
        vec!["area", "dealer", "zone"]
    );
}
