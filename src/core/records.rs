//! User record filtering and validation
//!
//! Records are free-form JSON objects. The filter expects two well-known
//! fields: `active` (boolean) and `created_at` (Unix seconds, or a string
//! accepted by [`crate::utils::time_format::parse_flexible`]).

use crate::utils::error::{AppError, AppResult};
use crate::utils::time_format;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};

/// A user record as parsed from JSON input
pub type UserRecord = Map<String, Value>;

/// Keep the records with `active == true`, ordered by `created_at`
/// descending. Ties keep their original relative order.
///
/// Strict policy: any record missing `active` or `created_at` fails the
/// whole call with [`AppError::MissingField`], whether or not that
/// record would have survived the filter.
pub fn filter_active_users(records: Vec<UserRecord>) -> AppResult<Vec<UserRecord>> {
    let mut keyed: Vec<(DateTime<Utc>, UserRecord)> = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let active = record
            .get("active")
            .ok_or_else(|| AppError::MissingField {
                field: "active".to_string(),
                index,
            })?
            .as_bool()
            .ok_or_else(|| {
                AppError::InvalidArgument(format!("Record {}: 'active' is not a boolean", index))
            })?;

        let created_at = parse_created_at(
            record.get("created_at").ok_or_else(|| AppError::MissingField {
                field: "created_at".to_string(),
                index,
            })?,
            index,
        )?;

        if active {
            keyed.push((created_at, record));
        }
    }

    // Stable sort; equal timestamps compare Equal and keep input order.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

fn parse_created_at(value: &Value, index: usize) -> AppResult<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let secs = n.as_i64().ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "Record {}: 'created_at' is not a whole number of seconds",
                    index
                ))
            })?;
            DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "Record {}: 'created_at' is out of timestamp range",
                    index
                ))
            })
        }
        Value::String(s) => time_format::parse_flexible(s),
        _ => Err(AppError::InvalidArgument(format!(
            "Record {}: 'created_at' must be a number or a string",
            index
        ))),
    }
}

/// Check that a record carries the required identity fields:
/// `id` (number), `email` (well-formed address), `name` (non-empty string).
pub fn validate_user(record: &UserRecord) -> bool {
    let email_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    let id_ok = record.get("id").is_some_and(|v| v.is_number());
    let email_ok = record
        .get("email")
        .and_then(Value::as_str)
        .is_some_and(|s| email_re.is_match(s));
    let name_ok = record
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());

    id_ok && email_ok && name_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(raw: Value) -> UserRecord {
        raw.as_object().unwrap().clone()
    }

    #[test]
    fn keeps_only_active_records() {
        let records = vec![
            record(json!({"name": "a", "active": true, "created_at": 100})),
            record(json!({"name": "b", "active": false, "created_at": 200})),
            record(json!({"name": "c", "active": true, "created_at": 300})),
        ];

        let filtered = filter_active_users(records).unwrap();
        let names: Vec<_> = filtered
            .iter()
            .map(|r| r.get("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn orders_by_created_at_descending() {
        let records = vec![
            record(json!({"name": "old", "active": true, "created_at": "2020-01-01 00:00:00"})),
            record(json!({"name": "new", "active": true, "created_at": "2024-01-01 00:00:00"})),
            record(json!({"name": "mid", "active": true, "created_at": "2022-06-15T12:00:00Z"})),
        ];

        let filtered = filter_active_users(records).unwrap();
        let names: Vec<_> = filtered
            .iter()
            .map(|r| r.get("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let records = vec![
            record(json!({"name": "first", "active": true, "created_at": 500})),
            record(json!({"name": "second", "active": true, "created_at": 500})),
            record(json!({"name": "third", "active": true, "created_at": 500})),
        ];

        let filtered = filter_active_users(records).unwrap();
        let names: Vec<_> = filtered
            .iter()
            .map(|r| r.get("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_active_fails_with_field_and_index() {
        let records = vec![
            record(json!({"name": "ok", "active": true, "created_at": 1})),
            record(json!({"name": "broken", "created_at": 2})),
        ];

        let err = filter_active_users(records).unwrap_err();
        match err {
            AppError::MissingField { field, index } => {
                assert_eq!(field, "active");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_created_at_fails_even_on_inactive_records() {
        let records = vec![record(json!({"name": "broken", "active": false}))];

        let err = filter_active_users(records).unwrap_err();
        assert!(matches!(err, AppError::MissingField { ref field, .. } if field == "created_at"));
    }

    #[test]
    fn non_boolean_active_is_invalid() {
        let records = vec![record(json!({"active": "yes", "created_at": 1}))];
        let err = filter_active_users(records).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_active_users(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn validate_user_accepts_complete_record() {
        let user = record(json!({"id": 7, "email": "ada@example.com", "name": "Ada"}));
        assert!(validate_user(&user));
    }

    #[test]
    fn validate_user_rejects_bad_email() {
        let user = record(json!({"id": 7, "email": "not-an-email", "name": "Ada"}));
        assert!(!validate_user(&user));
    }

    #[test]
    fn validate_user_rejects_missing_fields() {
        let user = record(json!({"email": "ada@example.com", "name": "Ada"}));
        assert!(!validate_user(&user));

        let user = record(json!({"id": 7, "email": "ada@example.com", "name": ""}));
        assert!(!validate_user(&user));
    }
}
