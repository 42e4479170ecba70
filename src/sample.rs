//! Built-in demo rows so the panel can be exercised without a file.
//! Mirrors one real export's column layout, legacy headers included.

use crate::tabular::{RawRow, RawValue};

pub fn sample_rows() -> Vec<RawRow> {
    let courses = [
        (
            "009",
            "VIRTUAL: DICIEMBRE/NOCHE/L-M/6-9/JAKELIN",
            12.0,
            50.0,
            "2025-12-15",
            "2026-01-07",
            "VIRTUAL - I_25-27",
            "TALLER - GESTIÓN DE NEGOCIOS",
            "YATACO PRINCIPAL - Noche",
            "001 - AULA VIRTUAL lu, mi 6-9pm",
        ),
        (
            "002",
            "VES: SETIEMBRE/ MAQUILLAJE / M y J / NOCHE / AZUCENA",
            12.0,
            12.0,
            "2025-09-16",
            "2026-03-17",
            "VES - I_23-26",
            "MAQUILLAJE",
            "YATACO PRINCIPAL - Noche",
            "001 - VES A-206 ju, ma 6-9pm",
        ),
        (
            "003",
            "VES: SETIEMBRE / UÑAS / M y J / NOCHE / MILAGROS",
            9.0,
            12.0,
            "2025-09-18",
            "2026-03-26",
            "VES - I_23-26",
            "SISTEMA DE UÑAS",
            "YATACO PRINCIPAL - Noche",
            "001 - VES A-205 ju, ma 6-9pm",
        ),
        (
            "02",
            "CHORRILLOS/NOVIEMBRE2025/MAQUILLAJE...",
            11.0,
            13.0,
            "2025-11-13",
            "2026-05-28",
            "CHORRILLOS - I_25-26",
            "MAQUILLAJE",
            "YATACO PRINCIPAL - Mañana",
            "001 - CHORRILLOS A-203 ju, ma 10 am-1pm",
        ),
        (
            "013",
            "CHORRILLOS/NOVIEMBRE2025/DISEÑO DE MIRADA...",
            11.0,
            13.0,
            "2025-11-27",
            "2026-02-24",
            "CHORRILLOS - I_25-26",
            "DISEÑO DE MIRADA",
            "YATACO PRINCIPAL - Tarde",
            "001 - CHORRILLOS A-202 ju, ma 3-6pm",
        ),
        (
            "05",
            "CHORRILLOS/NOVIEMBRE2025/CIENCIA Y QUIMICA...",
            4.0,
            10.0,
            "2025-11-28",
            "2026-03-01",
            "CHORRILLOS - I_25-26",
            "CIENCIA Y QUIMICA CAPILAR",
            "YATACO PRINCIPAL - Tarde",
            "001 - CHORRILLOS A-TALLER vi 9am-6pm",
        ),
    ];

    courses
        .into_iter()
        .map(
            |(code, name, students, seats, start, end, campus, subject, shift, schedule)| {
                let mut row = RawRow::new();
                row.push("Codigo", RawValue::Text(code.to_string()));
                row.push("Nombre", RawValue::Text(name.to_string()));
                row.push("Estudiantes", RawValue::Number(students));
                row.push("Cupo", RawValue::Number(seats));
                row.push("Inicio", RawValue::Text(start.to_string()));
                row.push("Fin", RawValue::Text(end.to_string()));
                row.push("SedeOriginal", RawValue::Text(campus.to_string()));
                row.push("Asignatura", RawValue::Text(subject.to_string()));
                row.push("TurnoOriginal", RawValue::Text(shift.to_string()));
                row.push("Horario", RawValue::Text(schedule.to_string()));
                row
            },
        )
        .collect()
}
