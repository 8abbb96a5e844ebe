//! Section record model.
//!
//! A record is the normalized output of every ingestion path (manual entry,
//! chat text, timetable files). Records are validated before they become
//! sections in a catalog.

use serde::{Deserialize, Serialize};

use super::Section;

/// A flat description of one section of one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Course name.
    pub course: String,
    /// Section code.
    pub code: String,
    /// Meeting days.
    pub days: Vec<String>,
    /// Start hour (24h, real-valued).
    pub start_hour: f64,
    /// End hour (24h, real-valued).
    pub end_hour: f64,
}

impl SectionRecord {
    /// Creates a record with no days.
    pub fn new(
        course: impl Into<String>,
        code: impl Into<String>,
        start_hour: f64,
        end_hour: f64,
    ) -> Self {
        Self {
            course: course.into(),
            code: code.into(),
            days: Vec::new(),
            start_hour,
            end_hour,
        }
    }

    /// Adds a meeting day (duplicates are ignored).
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        let day = day.into();
        if !self.days.contains(&day) {
            self.days.push(day);
        }
        self
    }

    /// Adds several meeting days.
    pub fn with_days<I, S>(self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        days.into_iter().fold(self, |r, d| r.with_day(d))
    }

    /// Builds a fresh, enabled section from this record.
    pub fn to_section(&self) -> Section {
        Section::new(self.code.clone(), self.start_hour, self.end_hour)
            .with_days(self.days.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder_dedups_days() {
        let record = SectionRecord::new("Math", "01", 8.0, 10.0)
            .with_days(["Lunes", "Miercoles", "Lunes"]);
        assert_eq!(record.days, vec!["Lunes", "Miercoles"]);
    }

    #[test]
    fn test_to_section() {
        let record = SectionRecord::new("Math", "01", 8.0, 10.0).with_day("Lunes");
        let section = record.to_section();

        assert_eq!(section.code, "01");
        assert!(section.enabled);
        assert!(section.days.contains("Lunes"));
        assert_ne!(section.token, record.to_section().token);
    }

    #[test]
    fn test_record_deserializes() {
        let json = r#"{"course":"Math","code":"01","days":["Lunes"],"start_hour":8.0,"end_hour":10.5}"#;
        let record: SectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.end_hour, 10.5);
    }
}
