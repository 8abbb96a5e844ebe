//! Institutional timetable import (JSON).
//!
//! Expected layout: an object of blocks, each optionally holding a
//! `materias` array:
//!
//! ```json
//! {
//!   "bloque-1": {
//!     "materias": [
//!       {
//!         "codigo": "MAT101",
//!         "nombre": "Calculo I",
//!         "seccion": "01",
//!         "horarios": [
//!           { "dia": "LUNES", "hora": "08:00 AM / 10:00 AM" },
//!           { "dia": "MIERCOLES", "hora": "08:00 AM / 10:00 AM" }
//!         ]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Each course entry is one section: its `horarios` entries are folded into
//! a single record meeting on every listed day. Entries without a day,
//! without a parsable 12h range, or holding a `------` placeholder are
//! skipped. A section whose days meet at different hours cannot be
//! expressed as one record and is rejected as a whole.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::time::{normalize_day, parse_12h_range};
use crate::error::{Result, TimetableError};
use crate::models::{format_range, SectionRecord};

const PLACEHOLDER: &str = "------";

/// Modality markers stripped from hour strings by default.
pub const DEFAULT_MARKERS: &[&str] = &[
    "[ASINCRÓNICA 100%]",
    "VIRTUAL",
    "[HÍBRIDA SINCRÓNICA/ASINCRÓNO 100%]",
];

#[derive(Debug, Deserialize)]
struct RawCourse {
    #[serde(default)]
    codigo: Option<RawCode>,
    #[serde(default)]
    nombre: Option<String>,
    #[serde(default)]
    seccion: Option<RawCode>,
    #[serde(default)]
    horarios: Vec<RawSlot>,
}

/// A code given either as text or as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCode {
    Text(String),
    Number(serde_json::Number),
}

impl RawCode {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSlot {
    #[serde(default)]
    dia: String,
    #[serde(default)]
    hora: String,
}

/// Records extracted from a timetable document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTimetable {
    /// One record per importable section, in document order.
    pub records: Vec<SectionRecord>,
    /// Sections that could not be expressed as a record, with the reason.
    pub rejected: Vec<String>,
}

/// Configurable JSON timetable importer.
#[derive(Debug, Clone)]
pub struct JsonTimetableImporter {
    markers: Vec<String>,
    default_code: String,
    default_name: String,
}

impl Default for JsonTimetableImporter {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            default_code: "01".to_string(),
            default_name: "Sin Nombre".to_string(),
        }
    }
}

impl JsonTimetableImporter {
    /// Creates an importer with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker stripped from hour strings.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Sets the section code used when a course has none.
    pub fn with_default_code(mut self, code: impl Into<String>) -> Self {
        self.default_code = code.into();
        self
    }

    /// Parses a document into records, in document order.
    ///
    /// Fails only when the document is not JSON or not an object of blocks.
    pub fn parse(&self, content: &str) -> Result<ParsedTimetable> {
        let document: Value = serde_json::from_str(content)?;
        let Value::Object(blocks) = document else {
            return Err(TimetableError::MalformedJson(
                "expected an object of blocks".to_string(),
            ));
        };

        let mut parsed = ParsedTimetable::default();
        for (block_id, block) in blocks {
            let Some(Value::Array(courses)) = block.get("materias").cloned() else {
                debug!(block = %block_id, "Block without course list skipped");
                continue;
            };

            for raw in courses {
                match serde_json::from_value::<RawCourse>(raw) {
                    Ok(course) => self.push_course(course, &mut parsed),
                    Err(err) => debug!(block = %block_id, "Course entry skipped: {err}"),
                }
            }
        }
        Ok(parsed)
    }

    fn push_course(&self, raw: RawCourse, parsed: &mut ParsedTimetable) {
        let name = raw.nombre.unwrap_or_else(|| self.default_name.clone());
        let course = match raw.codigo.map(RawCode::into_string).filter(|c| !c.is_empty()) {
            Some(code) => format!("{code} - {name}"),
            None => name,
        };
        let code = raw
            .seccion
            .map_or_else(|| self.default_code.clone(), RawCode::into_string);

        // (start, end) → days, in first-seen order
        let mut ranges: Vec<((f64, f64), Vec<String>)> = Vec::new();
        for slot in raw.horarios {
            if slot.dia.trim().is_empty()
                || slot.hora.trim().is_empty()
                || slot.hora.contains(PLACEHOLDER)
            {
                continue;
            }

            let hours = self
                .markers
                .iter()
                .fold(slot.hora, |h, m| h.replace(m.as_str(), ""));
            let Some(range) = parse_12h_range(hours.trim()) else {
                debug!(course = %course, hours = %hours, "Unparsable hour range skipped");
                continue;
            };

            let day = normalize_day(&slot.dia);
            match ranges.iter_mut().find(|(r, _)| *r == range) {
                Some((_, days)) => days.push(day),
                None => ranges.push((range, vec![day])),
            }
        }

        match ranges.as_slice() {
            [] => {}
            [((start, end), days)] => parsed.records.push(
                SectionRecord::new(course, code, *start, *end).with_days(days.iter().cloned()),
            ),
            _ => {
                let detail: Vec<String> = ranges
                    .iter()
                    .map(|((start, end), days)| {
                        format!("{} {}", days.join(","), format_range(*start, *end))
                    })
                    .collect();
                let reason = format!(
                    "{course}: section {code} meets at different hours on different days ({})",
                    detail.join("; ")
                );
                warn!(course = %course, code = %code, "Section with mixed hours rejected");
                parsed.rejected.push(reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bloque-1": {
            "materias": [
                {
                    "codigo": "MAT101",
                    "nombre": "Calculo I",
                    "seccion": "01",
                    "horarios": [
                        { "dia": "LUNES", "hora": "08:00 AM / 10:00 AM" },
                        { "dia": "MIÉRCOLES", "hora": "VIRTUAL 08:00 AM / 10:00 AM" },
                        { "dia": "VIERNES", "hora": "------" },
                        { "dia": "", "hora": "08:00 AM / 10:00 AM" }
                    ]
                },
                {
                    "nombre": "Etica",
                    "seccion": 3,
                    "horarios": [{ "dia": "SABADO", "hora": "05:00 PM / 08:00 PM" }]
                }
            ]
        },
        "notas": { "autor": "registro" },
        "bloque-2": {
            "materias": [
                { "horarios": [{ "dia": "MARTES", "hora": "sin hora" }] },
                { "codigo": "FIS100", "horarios": [{ "dia": "JUEVES", "hora": "12:00 PM / 1:30 PM" }] }
            ]
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let parsed = JsonTimetableImporter::new().parse(SAMPLE).unwrap();
        let records = &parsed.records;
        assert_eq!(records.len(), 3);
        assert!(parsed.rejected.is_empty());

        assert_eq!(records[0].course, "MAT101 - Calculo I");
        assert_eq!(records[0].code, "01");
        assert_eq!(records[0].days, vec!["Lunes", "Miercoles"]);
        assert_eq!((records[0].start_hour, records[0].end_hour), (8.0, 10.0));

        assert_eq!(records[1].course, "Etica");
        assert_eq!(records[1].code, "3");
        assert_eq!((records[1].start_hour, records[1].end_hour), (17.0, 20.0));

        assert_eq!(records[2].course, "FIS100 - Sin Nombre");
        assert_eq!(records[2].code, "01");
        assert_eq!((records[2].start_hour, records[2].end_hour), (12.0, 13.5));
    }

    #[test]
    fn test_mixed_hours_section_is_rejected() {
        let doc = r#"{"b": {"materias": [
            {"nombre": "Lab", "seccion": "01", "horarios": [
                {"dia": "LUNES", "hora": "08:00 AM / 10:00 AM"},
                {"dia": "JUEVES", "hora": "02:00 PM / 04:00 PM"}
            ]},
            {"nombre": "Arte", "horarios": [{"dia": "MARTES", "hora": "9:00 AM / 11:00 AM"}]}
        ]}}"#;
        let parsed = JsonTimetableImporter::new().parse(doc).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].course, "Arte");
        assert_eq!(parsed.rejected.len(), 1);
        assert!(parsed.rejected[0].starts_with("Lab: section 01 meets at different hours"));
        assert!(parsed.rejected[0].contains("Lunes 8am/10am"));
        assert!(parsed.rejected[0].contains("Jueves 2pm/4pm"));
    }

    #[test]
    fn test_numeric_course_code() {
        let doc = r#"{"b": {"materias": [{"codigo": 101, "nombre": "Arte", "horarios": [{"dia": "LUNES", "hora": "9:00 AM / 11:00 AM"}]}]}}"#;
        let parsed = JsonTimetableImporter::new().parse(doc).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].course, "101 - Arte");
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonTimetableImporter::new().parse("{ not json").unwrap_err();
        assert!(matches!(err, TimetableError::MalformedJson(_)));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = JsonTimetableImporter::new().parse("[1, 2]").unwrap_err();
        assert!(matches!(err, TimetableError::MalformedJson(_)));
    }

    #[test]
    fn test_custom_default_code() {
        let doc = r#"{"b": {"materias": [{"nombre": "Arte", "horarios": [{"dia": "lunes", "hora": "9:00 AM / 11:00 AM"}]}]}}"#;
        let parsed = JsonTimetableImporter::new()
            .with_default_code("A")
            .parse(doc)
            .unwrap();
        assert_eq!(parsed.records[0].code, "A");
        assert_eq!(parsed.records[0].days, vec!["Lunes"]);
    }

    #[test]
    fn test_bad_entry_is_skipped() {
        let doc = r#"{"b": {"materias": [{"nombre": 5}, {"nombre": "Arte", "horarios": [{"dia": "lunes", "hora": "9:00 AM / 11:00 AM"}]}]}}"#;
        let parsed = JsonTimetableImporter::new().parse(doc).unwrap();
        assert_eq!(parsed.records.len(), 1);
    }
}
