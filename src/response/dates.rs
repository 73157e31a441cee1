// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Date-field hydration for decoded JSON

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Parse a date string in the formats servers commonly emit
///
/// Tries RFC 3339 first, then naive datetime variants, then a bare
/// date (taken as midnight UTC).
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

/// Rewrite declared date fields of parsed JSON to RFC 3339
///
/// Walks the whole value; a field whose name is in `fields` has its
/// string value (or every string element of its array value) replaced
/// with the RFC 3339 rendering, so typed deserialization with `chrono`
/// fields succeeds downstream. Unparsable strings are left untouched.
pub fn hydrate_date_fields(value: &mut Value, fields: &[String]) {
    if fields.is_empty() {
        return;
    }
    match value {
        Value::Object(map) => {
            for (name, entry) in map.iter_mut() {
                if fields.iter().any(|f| f == name) {
                    hydrate_entry(entry);
                } else {
                    hydrate_date_fields(entry, fields);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                hydrate_date_fields(item, fields);
            }
        }
        _ => {}
    }
}

fn hydrate_entry(value: &mut Value) {
    match value {
        Value::String(text) => {
            if let Some(date) = parse_date(text) {
                *value = Value::String(date.to_rfc3339());
            }
        }
        Value::Array(items) => {
            for item in items {
                hydrate_entry(item);
            }
        }
        _ => {}
    }
}
