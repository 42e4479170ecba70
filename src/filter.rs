//! Period and campus filtering plus the stable groupings and filter
//! options the panel renders from. Options always reflect the full
//! dataset, never the filtered view, so narrowing the selection can
//! never shrink the choices on offer.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{CourseRecord, PeriodOption, NOT_AVAILABLE};

/// Active period filter: the whole history, or one `YYYY-MM` bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSelection {
    All,
    Period(String),
}

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub fn filter_by_period(records: &[CourseRecord], selection: &PeriodSelection) -> Vec<CourseRecord> {
    match selection {
        PeriodSelection::All => records.to_vec(),
        PeriodSelection::Period(key) => records
            .iter()
            .filter(|record| record.period_key == *key)
            .cloned()
            .collect(),
    }
}

/// An empty selection means nothing is visible, which is distinct from
/// "no filter applied" and must stay distinguishable for the host.
pub fn filter_by_campuses(records: &[CourseRecord], selected: &[String]) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|record| selected.iter().any(|campus| *campus == record.campus))
        .cloned()
        .collect()
}

pub fn apply_filters(
    records: &[CourseRecord],
    period: &PeriodSelection,
    campuses: &[String],
) -> Vec<CourseRecord> {
    filter_by_campuses(&filter_by_period(records, period), campuses)
}

/// Group records by campus with keys in ascending order, so repeated
/// recomputation always renders campuses in the same order.
pub fn group_by_campus(records: &[CourseRecord]) -> BTreeMap<String, Vec<CourseRecord>> {
    let mut groups: BTreeMap<String, Vec<CourseRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.campus.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Distinct dated periods across the whole dataset, most recent first,
/// each with its display label. Undated records are not an option.
pub fn available_periods(records: &[CourseRecord]) -> Vec<PeriodOption> {
    let keys: BTreeSet<&str> = records
        .iter()
        .map(|record| record.period_key.as_str())
        .filter(|key| *key != NOT_AVAILABLE)
        .collect();

    keys.into_iter()
        .rev()
        .map(|key| PeriodOption {
            value: key.to_string(),
            label: period_label(key),
        })
        .collect()
}

/// Sorted distinct campuses across the whole dataset.
pub fn available_campuses(records: &[CourseRecord]) -> Vec<String> {
    let campuses: BTreeSet<&str> = records.iter().map(|r| r.campus.as_str()).collect();
    campuses.into_iter().map(str::to_string).collect()
}

/// `"2025-09"` -> `"Septiembre 2025"`.
pub fn period_label(period_key: &str) -> String {
    match period_key.split_once('-') {
        Some((year, month)) => format!("{} {}", month_name(month), year),
        None => period_key.to_string(),
    }
}

pub fn month_name(month: &str) -> &'static str {
    month
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| MONTH_NAMES.get(index).copied())
        .unwrap_or("Mes Desconocido")
}
