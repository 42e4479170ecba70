//! Canonical field names and the alias table that absorbs schema
//! drift between export revisions. Adding a historical column name is
//! a one-line edit to `candidates`.

use crate::tabular::{RawRow, RawValue};

/// The canonical fields a course row is normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Campus,
    Shift,
    StartDate,
    EndDate,
    Schedule,
    Subject,
    Enrolled,
    Capacity,
    Instructor,
}

impl Field {
    /// Header names tried in order: the current export's column first,
    /// then names seen in earlier revisions of the file.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Field::Campus => &["SEDE", "SedeOriginal", "Período"],
            Field::Shift => &["Sede - turno", "TurnoOriginal"],
            Field::StartDate => &["Fecha inicio", "Inicio"],
            Field::EndDate => &["Fecha fin", "Fin"],
            Field::Schedule => &["Horario semanal", "Horario"],
            Field::Subject => &["Asignatura", "Nombre"],
            Field::Enrolled => &["Estudiantes"],
            Field::Capacity => &["Cupo máximo", "Cupo"],
            Field::Instructor => &["Docente"],
        }
    }
}

/// Return the first non-empty cell found for the field, trying each
/// candidate header exactly and then with whitespace-tolerant key
/// matching. `None` means no revision of the column carries a value.
pub fn resolve<'a>(row: &'a RawRow, field: Field) -> Option<&'a RawValue> {
    field
        .candidates()
        .iter()
        .find_map(|name| lookup(row, name))
}

/// The resolved cell rendered as text; empty string when unresolved.
pub fn resolve_text(row: &RawRow, field: Field) -> String {
    resolve(row, field)
        .map(RawValue::to_display)
        .unwrap_or_default()
}

fn lookup<'a>(row: &'a RawRow, name: &str) -> Option<&'a RawValue> {
    let value = row.get(name).or_else(|| row.get_trimmed(name))?;
    match value {
        RawValue::Text(text) if text.is_empty() => None,
        _ => Some(value),
    }
}
