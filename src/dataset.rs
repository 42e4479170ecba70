//! Applies the normalizer across a whole load and derives the campus
//! universe. A fresh load wholly replaces any prior dataset; the
//! campus list doubles as the default "everything selected" filter
//! state so a new file never starts partially hidden.

use crate::models::CourseRecord;
use crate::normalize;
use crate::tabular::{self, RawRow};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Accepted records, in source order.
    pub records: Vec<CourseRecord>,
    /// Sorted distinct campuses; seeds the default campus selection.
    pub campuses: Vec<String>,
}

pub fn build_dataset(rows: &[RawRow]) -> Dataset {
    let records: Vec<CourseRecord> = rows.iter().filter_map(normalize::normalize_row).collect();

    let mut campuses: Vec<String> = records.iter().map(|r| r.campus.clone()).collect();
    campuses.sort();
    campuses.dedup();

    Dataset { records, campuses }
}

pub fn from_csv_text(text: &str) -> Dataset {
    build_dataset(&tabular::parse_csv(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn invalid_rows_are_dropped_and_valid_ones_kept_in_order() {
        let csv = "SEDE,Asignatura,Estudiantes\n\
                   VES - I_23-26,MAQUILLAJE,12\n\
                   ,SIN SEDE,5\n\
                   CHORRILLOS - I_25-26,,9\n\
                   VIRTUAL - I_25-27,TALLER,7\n";
        let dataset = from_csv_text(csv);
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.records[0].campus, "VES");
        assert_eq!(dataset.records[1].campus, "VIRTUAL");
        for record in &dataset.records {
            assert!(!record.campus.is_empty());
            assert!(!record.subject.is_empty());
        }
    }

    #[test]
    fn campus_universe_is_sorted_and_distinct() {
        let csv = "SEDE,Asignatura\n\
                   VES - A,MAQUILLAJE\n\
                   CHORRILLOS - B,UÑAS\n\
                   VES - C,PEINADO\n";
        let dataset = from_csv_text(csv);
        assert_eq!(dataset.campuses, vec!["CHORRILLOS", "VES"]);
    }

    #[test]
    fn sample_rows_load_to_known_shape() {
        let dataset = build_dataset(&sample::sample_rows());
        assert_eq!(dataset.records.len(), 6);
        assert_eq!(dataset.campuses, vec!["CHORRILLOS", "VES", "VIRTUAL"]);
    }
}
