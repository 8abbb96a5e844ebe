//! Schedule (solution) model.
//!
//! A schedule is one complete, conflict-free choice of exactly one enabled
//! section per course. Entries borrow the sections of the snapshot the
//! generator ran over; section content is never copied.

use serde::Serialize;

use super::Section;

/// A complete schedule (one solution of the search).
///
/// Entries follow the order in which courses were supplied to the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule<'a> {
    /// Chosen section per course.
    pub entries: Vec<ScheduleEntry<'a>>,
}

/// A (course, chosen section) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleEntry<'a> {
    /// Course name.
    pub course: &'a str,
    /// Chosen section.
    pub section: &'a Section,
}

impl<'a> ScheduleEntry<'a> {
    /// Creates a new entry.
    pub fn new(course: &'a str, section: &'a Section) -> Self {
        Self { course, section }
    }
}

impl<'a> Schedule<'a> {
    /// Creates a schedule from its entries.
    pub fn new(entries: Vec<ScheduleEntry<'a>>) -> Self {
        Self { entries }
    }

    /// Number of courses covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule covers no courses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Section chosen for a given course.
    pub fn section_for(&self, course: &str) -> Option<&'a Section> {
        self.entries
            .iter()
            .find(|e| e.course == course)
            .map(|e| e.section)
    }

    /// `(course, section code)` pairs, in entry order.
    pub fn codes(&self) -> Vec<(&'a str, &'a str)> {
        self.entries
            .iter()
            .map(|e| (e.course, e.section.code.as_str()))
            .collect()
    }

    /// Whether any two chosen sections conflict.
    ///
    /// Always `false` for schedules produced by the generator.
    pub fn has_conflict(&self) -> bool {
        self.entries.iter().enumerate().any(|(i, a)| {
            self.entries[i + 1..]
                .iter()
                .any(|b| a.section.conflicts_with(b.section))
        })
    }

    /// Total weekly contact hours (duration × meeting days).
    pub fn weekly_hours(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.section.duration_hours() * e.section.days.len() as f64)
            .sum()
    }
}
