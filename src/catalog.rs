//! Course catalogs.
//!
//! A catalog is an owned, insertion-ordered collection of courses, e.g. the
//! institutional offer or one student's personal projection. Catalogs are
//! independent values: nothing is shared between them, and several can
//! coexist without global state.
//!
//! Courses are created lazily on the first section inserted under their
//! name. The generator borrows a catalog's courses as an immutable snapshot.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TimetableError};
use crate::generator::ScheduleGenerator;
use crate::models::{Course, Section, SectionRecord, SectionToken};
use crate::validation::validate_record;

/// A named collection of courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog label (for logs and display).
    pub name: String,
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Finds a course by name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    fn course_mut(&mut self, name: &str) -> Result<&mut Course> {
        self.courses
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| TimetableError::CourseNotFound(name.to_string()))
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total number of sections across all courses.
    pub fn section_count(&self) -> usize {
        self.courses.iter().map(Course::section_count).sum()
    }

    /// Validates a record and inserts it as a new section.
    ///
    /// The course is created if it does not exist yet. On any error the
    /// catalog is left unchanged.
    pub fn add_record(&mut self, record: &SectionRecord) -> Result<SectionToken> {
        validate_record(record).map_err(TimetableError::InvalidRecord)?;
        self.add_section(&record.course, record.to_section())
    }

    /// Inserts an already built section under `course`.
    pub fn add_section(&mut self, course: &str, section: Section) -> Result<SectionToken> {
        let token = section.token;
        let code = section.code.clone();

        let result = match self.courses.iter_mut().find(|c| c.name == course) {
            Some(existing) => existing.add_section(section),
            None => {
                let mut created = Course::new(course);
                let added = created.add_section(section);
                if added.is_ok() {
                    self.courses.push(created);
                }
                added
            }
        };

        match result {
            Ok(()) => {
                debug!(catalog = %self.name, course, code = %code, %token, "Section added");
                Ok(token)
            }
            Err(err) => {
                warn!(catalog = %self.name, course, code = %code, "Section rejected: {err}");
                Err(err)
            }
        }
    }

    /// Removes a whole course. Returns `true` if it existed.
    pub fn remove_course(&mut self, name: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.name != name);
        let removed = self.courses.len() != before;
        if removed {
            debug!(catalog = %self.name, course = name, "Course removed");
        }
        removed
    }

    /// Removes one section by token, returning it.
    ///
    /// The course stays in the catalog even if it becomes empty.
    pub fn remove_section(&mut self, course: &str, token: SectionToken) -> Result<Section> {
        let target = self.course_mut(course)?;
        let section =
            target
                .remove_section(token)
                .ok_or_else(|| TimetableError::SectionNotFound {
                    course: course.to_string(),
                    token,
                })?;
        debug!(catalog = %self.name, course, %token, "Section removed");
        Ok(section)
    }

    /// Enables or disables a section.
    pub fn set_section_enabled(
        &mut self,
        course: &str,
        token: SectionToken,
        enabled: bool,
    ) -> Result<()> {
        let section = self
            .course_mut(course)?
            .section_mut(token)
            .ok_or_else(|| TimetableError::SectionNotFound {
                course: course.to_string(),
                token,
            })?;
        section.enabled = enabled;
        debug!(catalog = %self.name, course, %token, enabled, "Section toggled");
        Ok(())
    }

    /// Removes every course.
    pub fn clear(&mut self) {
        self.courses.clear();
        debug!(catalog = %self.name, "Catalog cleared");
    }

    /// Builds a new catalog holding copies of only the selected sections.
    ///
    /// Courses appear in first-selection order, sections in selection order.
    /// Unknown courses or tokens and repeated entries are skipped.
    pub fn select(&self, name: impl Into<String>, selection: &[(&str, SectionToken)]) -> Catalog {
        let mut selected = Catalog::new(name);
        for &(course, token) in selection {
            let Some(section) = self.course(course).and_then(|c| c.section(token)) else {
                debug!(catalog = %self.name, course, %token, "Selection entry not found");
                continue;
            };
            if selected.course(course).is_some_and(|c| c.section(token).is_some()) {
                debug!(catalog = %self.name, course, %token, "Repeated selection entry skipped");
                continue;
            }
            if let Err(err) = selected.add_section(course, section.clone()) {
                debug!(catalog = %self.name, course, %token, "Selection entry skipped: {err}");
            }
        }
        selected
    }

    /// A generator over this catalog's courses.
    pub fn generator(&self) -> ScheduleGenerator<'_> {
        ScheduleGenerator::new(&self.courses)
    }
}
