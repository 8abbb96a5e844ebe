//! Generation report.
//!
//! Summarizes one search run in a presentation-ready, serializable shape.
//!
//! | Field | Definition |
//! |-------|-----------|
//! | theoretical | Product of enabled-section counts (conflicts ignored), serialized as a decimal string |
//! | valid | Number of conflict-free schedules found |
//! | schedules | Each schedule as course / section / days / hours rows |

use serde::{Serialize, Serializer};

use super::ScheduleGenerator;
use crate::models::{Course, Schedule};

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Upper bound on schedules, ignoring conflicts.
    ///
    /// Serialized as a decimal string: JSON numbers cannot hold every `u128`.
    #[serde(serialize_with = "serialize_decimal")]
    pub theoretical: u128,
    /// Number of conflict-free schedules.
    pub valid: usize,
    /// Rendered schedules, in generation order.
    pub schedules: Vec<Vec<ScheduleRow>>,
}

/// One course of one rendered schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// Course name.
    pub course: String,
    /// Section code.
    pub section: String,
    /// Meeting days.
    pub days: Vec<String>,
    /// Meeting time, e.g. `"2:30pm/4pm"`.
    pub hours: String,
}

impl GenerationReport {
    /// Runs the generator over `courses` and renders the result.
    pub fn build(courses: &[Course]) -> Self {
        let generator = ScheduleGenerator::new(courses);
        let theoretical = generator.theoretical_count();
        let schedules = generator.generate();
        Self::from_schedules(theoretical, &schedules)
    }

    /// Renders already generated schedules.
    pub fn from_schedules(theoretical: u128, schedules: &[Schedule<'_>]) -> Self {
        let rows = schedules
            .iter()
            .map(|s| {
                s.entries
                    .iter()
                    .map(|e| ScheduleRow {
                        course: e.course.to_string(),
                        section: e.section.code.clone(),
                        days: e.section.days.iter().cloned().collect(),
                        hours: e.section.hours_label(),
                    })
                    .collect()
            })
            .collect();

        Self {
            theoretical,
            valid: schedules.len(),
            schedules: rows,
        }
    }

    /// Fraction of the theoretical space that is conflict-free.
    ///
    /// Returns `None` when the theoretical count is zero.
    pub fn feasibility_ratio(&self) -> Option<f64> {
        if self.theoretical == 0 {
            return None;
        }
        Some(self.valid as f64 / self.theoretical as f64)
    }
}

fn serialize_decimal<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
