use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Sentinel for year/month/period values that could not be derived.
pub const NOT_AVAILABLE: &str = "N/A";
/// Schedule placeholder when the source row carries none.
pub const SCHEDULE_PENDING: &str = "Por definir";
/// Instructor placeholder when the source row carries none.
pub const INSTRUCTOR_UNASSIGNED: &str = "Sin Docente";

/// Coarse time-of-day category mined from free-text shift fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
    Unspecified,
}

impl Shift {
    pub const ALL: [Shift; 4] = [
        Shift::Morning,
        Shift::Afternoon,
        Shift::Night,
        Shift::Unspecified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
            Shift::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized, validated course offering. Campus and subject are
/// always non-empty; counts are never negative; `period_key` is either
/// `YYYY-MM` or the `N/A` sentinel.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRecord {
    pub id: Uuid,
    pub subject: String,
    pub students_enrolled: u32,
    pub capacity: u32,
    pub start_date: String,
    pub end_date: String,
    pub campus: String,
    pub shift: Shift,
    pub schedule: String,
    pub year: String,
    pub month: String,
    pub period_key: String,
    pub instructor: String,
}

/// A selectable period: the `YYYY-MM` key plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampusTotals {
    pub campus: String,
    pub students: u32,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftStudents {
    pub shift: Shift,
    pub students: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftCourses {
    pub shift: Shift,
    pub courses: usize,
}

/// Aggregate over all offerings sharing one subject string.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub group_count: usize,
    pub students: u32,
    pub shifts: BTreeSet<Shift>,
}

impl SubjectSummary {
    /// More than one group for the same subject is a data-quality
    /// signal surfaced to the viewer, never auto-corrected.
    pub fn is_repeated(&self) -> bool {
        self.group_count > 1
    }
}
