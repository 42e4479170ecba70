//! Turns one raw spreadsheet row into a canonical [`CourseRecord`].
//! Everything here recovers locally: unparsable numbers become 0,
//! unmatched shift text becomes `Unspecified`, undated rows get the
//! `N/A` period sentinel. The only rejections are rows with no campus
//! or no subject, which are dropped whole.

use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

use crate::fields::{self, Field};
use crate::models::{
    CourseRecord, Shift, INSTRUCTOR_UNASSIGNED, NOT_AVAILABLE, SCHEDULE_PENDING,
};
use crate::tabular::{RawRow, RawValue};

/// Day offset between the spreadsheet serial epoch (1899-12-30) and
/// the Unix epoch: serial 25569 is 1970-01-01. 1900-based date system
/// only; the 1904-based variant is not handled.
const SERIAL_UNIX_ANCHOR: f64 = 25569.0;

/// Formats tried when deriving year/month from an already-textual
/// start date. Anything else keeps its raw text and gets the sentinel.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

pub fn normalize_row(row: &RawRow) -> Option<CourseRecord> {
    let campus = extract_campus(&fields::resolve_text(row, Field::Campus))?;

    let subject = fields::resolve_text(row, Field::Subject);
    if subject.is_empty() {
        return None;
    }

    let start_date = date_value(fields::resolve(row, Field::StartDate));
    let end_date = date_value(fields::resolve(row, Field::EndDate));
    let (year, month) = year_month(&start_date);
    let period_key = if year == NOT_AVAILABLE || month == NOT_AVAILABLE {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{year}-{month}")
    };

    let instructor = match fields::resolve_text(row, Field::Instructor) {
        text if text.is_empty() => INSTRUCTOR_UNASSIGNED.to_string(),
        text => text,
    };

    Some(CourseRecord {
        id: Uuid::new_v4(),
        subject,
        students_enrolled: parse_count(fields::resolve(row, Field::Enrolled)),
        capacity: parse_count(fields::resolve(row, Field::Capacity)),
        start_date,
        end_date,
        campus,
        shift: classify_shift(&fields::resolve_text(row, Field::Shift)),
        schedule: clean_schedule(&fields::resolve_text(row, Field::Schedule)),
        year,
        month,
        period_key,
        instructor,
    })
}

/// The campus is the text before the first `-` of the raw location
/// field, e.g. `"VES - I_23-26"` -> `"VES"`.
fn extract_campus(raw: &str) -> Option<String> {
    let campus = raw.split('-').next().unwrap_or_default().trim();
    if campus.is_empty() {
        None
    } else {
        Some(campus.to_string())
    }
}

/// Best-effort classifier over free shift text. Closed vocabulary;
/// anything unmatched lands in `Unspecified` rather than guessing.
pub fn classify_shift(raw: &str) -> Shift {
    let lower = raw.to_lowercase();
    if lower.contains("mañana") {
        Shift::Morning
    } else if lower.contains("tarde") {
        Shift::Afternoon
    } else if lower.contains("noche") {
        Shift::Night
    } else {
        Shift::Unspecified
    }
}

/// Numeric cells are spreadsheet date serials; text passes through
/// unmodified for downstream year/month derivation to judge.
fn date_value(value: Option<&RawValue>) -> String {
    match value {
        Some(RawValue::Number(serial)) => serial_to_iso(*serial),
        Some(RawValue::Text(text)) => text.clone(),
        None => String::new(),
    }
}

/// Render a date serial as `YYYY-MM-DD`. Fractional day parts (time of
/// day) round to the nearest second before taking the UTC date.
pub fn serial_to_iso(serial: f64) -> String {
    let secs = ((serial - SERIAL_UNIX_ANCHOR) * 86400.0).round() as i64;
    match DateTime::from_timestamp(secs, 0) {
        Some(moment) => moment.date_naive().format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

fn year_month(start_date: &str) -> (String, String) {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(start_date, format) {
            return (
                date.format("%Y").to_string(),
                date.format("%m").to_string(),
            );
        }
    }
    (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
}

/// Drop the redundant sequence-code prefix, e.g.
/// `"001 - VES A-206 ju, ma 6-9pm"` -> `"VES A-206 ju, ma 6-9pm"`.
fn clean_schedule(raw: &str) -> String {
    if raw.is_empty() {
        return SCHEDULE_PENDING.to_string();
    }
    match raw.split_once(" - ") {
        Some((_, rest)) => rest.to_string(),
        None => raw.to_string(),
    }
}

/// Integer coercion: integer parse, then truncated float (spreadsheet
/// cells arrive as floats), else 0. Negatives clamp to 0.
fn parse_count(value: Option<&RawValue>) -> u32 {
    match value {
        Some(RawValue::Number(n)) if *n > 0.0 => *n as u32,
        Some(RawValue::Number(_)) => 0,
        Some(RawValue::Text(text)) => {
            let text = text.trim();
            if let Ok(n) = text.parse::<i64>() {
                n.max(0) as u32
            } else if let Ok(f) = text.parse::<f64>() {
                f.max(0.0) as u32
            } else {
                0
            }
        }
        None => 0,
    }
}
