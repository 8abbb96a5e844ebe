//! Schedule generation.
//!
//! Enumerates every conflict-free way of picking one enabled section per
//! course, and reports the theoretical size of the search space.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` runs a depth-first chronological backtracking search,
//! one level per course. It is exhaustive: there is no objective and no
//! ranking, every feasible schedule is returned.
//!
//! # Report
//!
//! `GenerationReport` bundles the theoretical count, the valid count, and a
//! rendered view of each schedule.
//!
//! # References
//!
//! - Knuth (2019), "The Art of Computer Programming", Vol. 4, Fasc. 5
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6

mod backtrack;
mod report;

pub use backtrack::{ScheduleGenerator, SearchStats};
pub use report::{GenerationReport, ScheduleRow};

use crate::models::{Course, Schedule};

/// Product of enabled-section counts per course (0 if any course has none).
pub fn theoretical_count(courses: &[Course]) -> u128 {
    ScheduleGenerator::new(courses).theoretical_count()
}

/// Every conflict-free schedule over `courses`, in deterministic order.
pub fn generate(courses: &[Course]) -> Vec<Schedule<'_>> {
    ScheduleGenerator::new(courses).generate()
}
