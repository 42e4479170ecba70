//! Markdown rendering of the occupancy panel: overall totals, shift
//! mix, and one section per campus with its subject summary and
//! course detail. Reads only the filtered records and the aggregate
//! functions; normalization internals stay out of reach.

use std::fmt::Write;

use crate::filter::{self, PeriodSelection};
use crate::models::CourseRecord;
use crate::stats;

pub fn build_report(
    period: &PeriodSelection,
    selected_campuses: &[String],
    records: &[CourseRecord],
) -> String {
    let mut output = String::new();

    let period_label = match period {
        PeriodSelection::All => "all periods".to_string(),
        PeriodSelection::Period(key) => filter::period_label(key),
    };

    let _ = writeln!(output, "# Academic Occupancy Report");
    let _ = writeln!(
        output,
        "Generated for {} across {} selected campuses",
        period_label,
        selected_campuses.len()
    );
    let _ = writeln!(output);

    if selected_campuses.is_empty() {
        let _ = writeln!(output, "No campuses selected.");
        return output;
    }
    if records.is_empty() {
        let _ = writeln!(
            output,
            "No courses match the selected period and campuses."
        );
        return output;
    }

    let _ = writeln!(output, "## Overall");
    let _ = writeln!(output, "- Courses: {}", records.len());
    let _ = writeln!(
        output,
        "- Students: {} of {} seats ({:.1}% occupancy)",
        stats::total_students(records),
        stats::total_capacity(records),
        stats::occupancy_rate(records)
    );
    let _ = writeln!(output);

    let _ = writeln!(output, "## Students by Shift");
    for bucket in stats::students_by_shift(records) {
        let _ = writeln!(output, "- {}: {}", bucket.shift, bucket.students);
    }

    for (campus, courses) in filter::group_by_campus(records) {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {campus}");
        let _ = writeln!(
            output,
            "- {} courses, {} students / {} seats ({:.1}% occupancy)",
            courses.len(),
            stats::total_students(&courses),
            stats::total_capacity(&courses),
            stats::occupancy_rate(&courses)
        );

        let shift_mix: Vec<String> = stats::courses_by_shift(&courses)
            .into_iter()
            .map(|bucket| format!("{} {}", bucket.shift, bucket.courses))
            .collect();
        let _ = writeln!(output, "- Shift mix: {}", shift_mix.join(", "));

        let summaries = stats::subject_summaries(&courses);
        let _ = writeln!(
            output,
            "- Subjects: {} unique, {} repeated",
            summaries.len(),
            stats::repeated_subject_count(&summaries)
        );

        let _ = writeln!(output);
        let _ = writeln!(output, "### Subjects");
        for summary in &summaries {
            let shifts: Vec<&str> = summary.shifts.iter().map(|s| s.label()).collect();
            let marker = if summary.is_repeated() {
                " [repeated]"
            } else {
                ""
            };
            let _ = writeln!(
                output,
                "- {}: {} groups, {} students ({}){}",
                summary.subject,
                summary.group_count,
                summary.students,
                shifts.join(", "),
                marker
            );
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "### Courses");
        for course in &courses {
            let _ = writeln!(
                output,
                "- {} [{}] {} ({} -> {}) {}/{}, {}",
                course.subject,
                course.shift,
                course.schedule,
                course.start_date,
                course.end_date,
                course.students_enrolled,
                course.capacity,
                course.instructor
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::sample;

    fn demo_records() -> Vec<CourseRecord> {
        dataset::build_dataset(&sample::sample_rows()).records
    }

    #[test]
    fn report_carries_overall_and_campus_sections() {
        let records = demo_records();
        let selected = vec![
            "CHORRILLOS".to_string(),
            "VES".to_string(),
            "VIRTUAL".to_string(),
        ];
        let report = build_report(&PeriodSelection::All, &selected, &records);

        assert!(report.contains("# Academic Occupancy Report"));
        assert!(report.contains("Generated for all periods across 3 selected campuses"));
        assert!(report.contains("- Courses: 6"));
        assert!(report.contains("## VES"));
        assert!(report.contains("## CHORRILLOS"));
        assert!(report.contains("- Night: 33"));
    }

    #[test]
    fn rendering_twice_yields_identical_output() {
        let records = demo_records();
        let selected = vec!["VES".to_string()];
        let filtered = filter::filter_by_campuses(&records, &selected);
        let first = build_report(&PeriodSelection::All, &selected, &filtered);
        let second = build_report(&PeriodSelection::All, &selected, &filtered);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_states_tell_no_selection_from_no_match() {
        let records = demo_records();

        let nothing_selected = build_report(&PeriodSelection::All, &[], &records);
        assert!(nothing_selected.contains("No campuses selected."));

        let selected = vec!["VES".to_string()];
        let no_match = build_report(
            &PeriodSelection::Period("2031-01".to_string()),
            &selected,
            &[],
        );
        assert!(no_match.contains("No courses match the selected period and campuses."));
    }
}
