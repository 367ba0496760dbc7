use serde::{Deserialize, Serialize};

use crate::{MonthKey, WeekKey};

/// Shape of a charge record as stored by callers.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChargeRecord {
    month_key: MonthKey,
    week_key: Option<WeekKey>,
}

#[test]
fn keys_serialize_as_strings() {
    let record = ChargeRecord {
        month_key: "2024-01".parse().unwrap(),
        week_key: Some("2024-01-29".parse().unwrap()),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"monthKey":"2024-01","weekKey":"2024-01-29"}"#);
    assert_eq!(serde_json::from_str::<ChargeRecord>(&json).unwrap(), record);
}

#[test]
fn monthly_record_without_week() {
    let json = r#"{"monthKey":"2024-02","weekKey":null}"#;
    let record: ChargeRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.week_key, None);
    assert_eq!(record.month_key.to_string(), "2024-02");
}

#[test]
fn reject_persisted_non_monday() {
    let json = r#"{"monthKey":"2024-01","weekKey":"2024-01-30"}"#;
    let err = serde_json::from_str::<ChargeRecord>(json).unwrap_err();
    assert!(err.to_string().contains("2024-01-30"));
}

#[test]
fn last_supported_keys_read_back() {
    let record = ChargeRecord {
        month_key: MonthKey::MAX,
        week_key: Some("9999-12-27".parse().unwrap()),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"monthKey":"9999-12","weekKey":"9999-12-27"}"#);
    assert_eq!(serde_json::from_str::<ChargeRecord>(&json).unwrap(), record);
}
