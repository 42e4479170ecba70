//! Pure aggregate computations over any record collection. Nothing
//! here owns or mutates the dataset; every view is recomputed in full
//! from whatever slice the caller hands in.

use std::collections::HashMap;

use crate::models::{
    CampusTotals, CourseRecord, Shift, ShiftCourses, ShiftStudents, SubjectSummary,
};

pub fn total_students(records: &[CourseRecord]) -> u32 {
    records.iter().map(|r| r.students_enrolled).sum()
}

pub fn total_capacity(records: &[CourseRecord]) -> u32 {
    records.iter().map(|r| r.capacity).sum()
}

/// Enrolled students as a percentage of capacity; 0 when there is no
/// capacity to fill.
pub fn occupancy_rate(records: &[CourseRecord]) -> f64 {
    let capacity = total_capacity(records);
    if capacity == 0 {
        return 0.0;
    }
    f64::from(total_students(records)) / f64::from(capacity) * 100.0
}

/// Student and seat totals per campus, busiest campus first.
pub fn campus_totals(records: &[CourseRecord]) -> Vec<CampusTotals> {
    let mut map: HashMap<&str, (u32, u32)> = HashMap::new();
    for record in records {
        let entry = map.entry(record.campus.as_str()).or_insert((0, 0));
        entry.0 += record.students_enrolled;
        entry.1 += record.capacity;
    }

    let mut totals: Vec<CampusTotals> = map
        .into_iter()
        .map(|(campus, (students, capacity))| CampusTotals {
            campus: campus.to_string(),
            students,
            capacity,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.students
            .cmp(&a.students)
            .then_with(|| a.campus.cmp(&b.campus))
    });
    totals
}

/// Students per shift in the fixed shift order, zero buckets omitted.
pub fn students_by_shift(records: &[CourseRecord]) -> Vec<ShiftStudents> {
    Shift::ALL
        .into_iter()
        .map(|shift| ShiftStudents {
            shift,
            students: records
                .iter()
                .filter(|r| r.shift == shift)
                .map(|r| r.students_enrolled)
                .sum(),
        })
        .filter(|bucket| bucket.students > 0)
        .collect()
}

/// Course counts per shift, zero buckets omitted.
pub fn courses_by_shift(records: &[CourseRecord]) -> Vec<ShiftCourses> {
    Shift::ALL
        .into_iter()
        .map(|shift| ShiftCourses {
            shift,
            courses: records.iter().filter(|r| r.shift == shift).count(),
        })
        .filter(|bucket| bucket.courses > 0)
        .collect()
}

/// Group by exact subject string, most students first. A subject with
/// more than one group reads as a likely duplicate or over-scheduled
/// offering.
pub fn subject_summaries(records: &[CourseRecord]) -> Vec<SubjectSummary> {
    let mut map: HashMap<&str, SubjectSummary> = HashMap::new();
    for record in records {
        let entry = map
            .entry(record.subject.as_str())
            .or_insert_with(|| SubjectSummary {
                subject: record.subject.clone(),
                group_count: 0,
                students: 0,
                shifts: Default::default(),
            });
        entry.group_count += 1;
        entry.students += record.students_enrolled;
        entry.shifts.insert(record.shift);
    }

    let mut summaries: Vec<SubjectSummary> = map.into_values().collect();
    summaries.sort_by(|a, b| {
        b.students
            .cmp(&a.students)
            .then_with(|| a.subject.cmp(&b.subject))
    });
    summaries
}

pub fn repeated_subject_count(summaries: &[SubjectSummary]) -> usize {
    summaries.iter().filter(|s| s.is_repeated()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    fn records() -> Vec<CourseRecord> {
        let csv = "SEDE,Asignatura,Estudiantes,Cupo máximo,Sede - turno\n\
                   VES - A,MAQUILLAJE,12,12,X - Noche\n\
                   VES - A,MAQUILLAJE,8,12,X - Mañana\n\
                   VES - A,SISTEMA DE UÑAS,9,12,X - Noche\n\
                   CHORRILLOS - B,CIENCIA CAPILAR,4,10,X - Tarde\n";
        dataset::from_csv_text(csv).records
    }

    #[test]
    fn totals_and_occupancy() {
        let records = records();
        assert_eq!(total_students(&records), 33);
        assert_eq!(total_capacity(&records), 46);
        let rate = occupancy_rate(&records);
        assert!((rate - 33.0 / 46.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn occupancy_is_zero_without_capacity() {
        assert_eq!(occupancy_rate(&[]), 0.0);

        let csv = "SEDE,Asignatura,Estudiantes\nVES,MAQUILLAJE,12\n";
        let no_capacity = dataset::from_csv_text(csv).records;
        assert_eq!(occupancy_rate(&no_capacity), 0.0);
    }

    #[test]
    fn campus_totals_sort_by_headcount() {
        let totals = campus_totals(&records());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].campus, "VES");
        assert_eq!(totals[0].students, 29);
        assert_eq!(totals[0].capacity, 36);
        assert_eq!(totals[1].campus, "CHORRILLOS");
        assert_eq!(totals[1].students, 4);
    }

    #[test]
    fn shift_buckets_omit_empty_categories() {
        let records = records();

        let students = students_by_shift(&records);
        let pairs: Vec<(Shift, u32)> = students.iter().map(|b| (b.shift, b.students)).collect();
        assert_eq!(
            pairs,
            vec![
                (Shift::Morning, 8),
                (Shift::Afternoon, 4),
                (Shift::Night, 21),
            ]
        );

        let courses = courses_by_shift(&records);
        assert!(courses.iter().all(|b| b.courses > 0));
        assert!(!courses.iter().any(|b| b.shift == Shift::Unspecified));
    }

    #[test]
    fn duplicate_subjects_collapse_into_one_summary() {
        let summaries = subject_summaries(&records());
        assert_eq!(summaries.len(), 3);

        let maquillaje = &summaries[0];
        assert_eq!(maquillaje.subject, "MAQUILLAJE");
        assert_eq!(maquillaje.group_count, 2);
        assert_eq!(maquillaje.students, 20);
        assert!(maquillaje.is_repeated());
        assert_eq!(maquillaje.shifts.len(), 2);

        assert_eq!(repeated_subject_count(&summaries), 1);
    }

    #[test]
    fn subject_summaries_sort_by_students_descending() {
        let summaries = subject_summaries(&records());
        let students: Vec<u32> = summaries.iter().map(|s| s.students).collect();
        assert_eq!(students, vec![20, 9, 4]);
    }
}
