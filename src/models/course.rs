//! Course model.
//!
//! A course groups the alternative sections a student can choose from.

use serde::{Deserialize, Serialize};

use super::{Section, SectionToken};
use crate::error::{Result, TimetableError};

/// A named course with its candidate sections.
///
/// Section codes are unique within a course. Sections keep insertion
/// order, which fixes the order in which schedules are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (unique key within a catalog).
    pub name: String,
    /// Candidate sections in insertion order.
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a section, rejecting a duplicate code without touching `self`.
    pub fn add_section(&mut self, section: Section) -> Result<()> {
        if self.sections.iter().any(|s| s.code == section.code) {
            return Err(TimetableError::DuplicateSection {
                course: self.name.clone(),
                code: section.code,
            });
        }
        self.sections.push(section);
        Ok(())
    }

    /// Builder form of [`Course::add_section`].
    pub fn with_section(mut self, section: Section) -> Result<Self> {
        self.add_section(section)?;
        Ok(self)
    }

    /// Finds a section by its token.
    pub fn section(&self, token: SectionToken) -> Option<&Section> {
        self.sections.iter().find(|s| s.token == token)
    }

    /// Finds a section by its token, mutably.
    pub fn section_mut(&mut self, token: SectionToken) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.token == token)
    }

    /// Finds a section by its human-facing code.
    pub fn section_by_code(&self, code: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.code == code)
    }

    /// Removes a section by token, returning it.
    pub fn remove_section(&mut self, token: SectionToken) -> Option<Section> {
        let idx = self.sections.iter().position(|s| s.token == token)?;
        Some(self.sections.remove(idx))
    }

    /// Sections that take part in schedule generation.
    pub fn enabled_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.enabled)
    }

    /// Number of enabled sections.
    pub fn enabled_count(&self) -> usize {
        self.enabled_sections().count()
    }

    /// Number of sections (enabled or not).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether the course has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_preserves_order() {
        let mut course = Course::new("Math");
        course.add_section(Section::new("B", 8.0, 10.0)).unwrap();
        course.add_section(Section::new("A", 10.0, 12.0)).unwrap();

        let codes: Vec<&str> = course.sections.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
    }

    #[test]
    fn test_duplicate_code_rejected_without_mutation() {
        let mut course = Course::new("Math");
        course
            .add_section(Section::new("01", 8.0, 10.0).with_day("Mon"))
            .unwrap();
        let before = course.clone();

        let err = course
            .add_section(Section::new("01", 14.0, 16.0).with_day("Tue"))
            .unwrap_err();

        assert_eq!(
            err,
            TimetableError::DuplicateSection {
                course: "Math".into(),
                code: "01".into(),
            }
        );
        assert_eq!(course, before);
        assert_eq!(course.section_count(), 1);
    }

    #[test]
    fn test_same_code_allowed_in_other_course() {
        let math = Course::new("Math").with_section(Section::new("01", 8.0, 10.0));
        let physics = Course::new("Physics").with_section(Section::new("01", 8.0, 10.0));
        assert!(math.is_ok());
        assert!(physics.is_ok());
    }

    #[test]
    fn test_enabled_count() {
        let course = Course::new("Math")
            .with_section(Section::new("01", 8.0, 10.0))
            .and_then(|c| c.with_section(Section::new("02", 8.0, 10.0).with_enabled(false)))
            .and_then(|c| c.with_section(Section::new("03", 8.0, 10.0)))
            .unwrap();

        assert_eq!(course.section_count(), 3);
        assert_eq!(course.enabled_count(), 2);
    }

    #[test]
    fn test_lookup_and_remove_by_token() {
        let section = Section::new("01", 8.0, 10.0);
        let token = section.token;
        let mut course = Course::new("Math").with_section(section).unwrap();

        assert_eq!(course.section(token).map(|s| s.code.as_str()), Some("01"));
        assert!(course.section_by_code("01").is_some());

        let removed = course.remove_section(token).unwrap();
        assert_eq!(removed.code, "01");
        assert!(course.is_empty());
        assert!(course.remove_section(token).is_none());
    }
}
