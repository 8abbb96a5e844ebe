//! Exhaustive backtracking schedule generator.
//!
//! # Algorithm
//!
//! 1. One decision level per course, in the order courses were supplied.
//! 2. At each level, try the course's enabled sections in insertion order.
//! 3. Skip a candidate that conflicts with any section already chosen.
//! 4. Otherwise push it, recurse into the remaining courses, then pop.
//! 5. When no courses remain, snapshot the assignment as a solution.
//!
//! The partial assignment is a single buffer shared by the whole search;
//! only recorded solutions are copied.
//!
//! # Complexity
//! O(T * n) conflict checks in the worst case, where T is the theoretical
//! count and n the number of courses. Pruning cuts most branches early
//! when conflicts are common.
//!
//! # Reference
//! Knuth (2019), "The Art of Computer Programming", Vol. 4, Fasc. 5: Backtrack Programming

use tracing::{debug, info, warn};

use crate::models::{Course, Schedule, ScheduleEntry};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate sections examined (enabled sections reached by the search).
    pub nodes_visited: u64,
    /// Candidates skipped because they conflicted with the partial assignment.
    pub conflicts_pruned: u64,
    /// Complete schedules recorded.
    pub solutions: u64,
}

/// Enumerates every conflict-free combination of sections.
///
/// Borrows an immutable snapshot of courses; schedules borrow the same
/// snapshot, so the catalog cannot change while results are alive.
///
/// # Example
///
/// ```
/// use u_timetable::generator::ScheduleGenerator;
/// use u_timetable::models::{Course, Section};
///
/// let courses = vec![
///     Course::new("Math")
///         .with_section(Section::new("A", 8.0, 10.0).with_day("Mon"))
///         .unwrap()
///         .with_section(Section::new("B", 9.0, 11.0).with_day("Mon"))
///         .unwrap(),
///     Course::new("Physics")
///         .with_section(Section::new("C", 10.0, 12.0).with_day("Mon"))
///         .unwrap(),
/// ];
///
/// let generator = ScheduleGenerator::new(&courses);
/// assert_eq!(generator.theoretical_count(), 2);
///
/// let schedules = generator.generate();
/// assert_eq!(schedules.len(), 1);
/// assert_eq!(schedules[0].codes(), vec![("Math", "A"), ("Physics", "C")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleGenerator<'a> {
    courses: &'a [Course],
}

impl<'a> ScheduleGenerator<'a> {
    /// Creates a generator over a snapshot of courses.
    pub fn new(courses: &'a [Course]) -> Self {
        Self { courses }
    }

    /// The courses this generator searches over.
    pub fn courses(&self) -> &'a [Course] {
        self.courses
    }

    /// Exact number of section combinations, ignoring conflicts.
    ///
    /// Product of the enabled-section counts. Zero as soon as any course
    /// has no enabled section. `None` when the product does not fit in a
    /// `u128`.
    pub fn checked_theoretical_count(&self) -> Option<u128> {
        let mut total: u128 = 1;
        let mut overflowed = false;
        for course in self.courses {
            let active = course.enabled_count() as u128;
            if active == 0 {
                return Some(0);
            }
            if !overflowed {
                match total.checked_mul(active) {
                    Some(t) => total = t,
                    None => overflowed = true,
                }
            }
        }
        (!overflowed).then_some(total)
    }

    /// Upper bound on the number of schedules, ignoring conflicts.
    ///
    /// Same as [`ScheduleGenerator::checked_theoretical_count`], but
    /// saturates at `u128::MAX` on overflow. A saturated value is still an
    /// upper bound, not the exact product; use the checked variant to tell
    /// the two apart.
    pub fn theoretical_count(&self) -> u128 {
        self.checked_theoretical_count().unwrap_or_else(|| {
            warn!(
                courses = self.courses.len(),
                "Theoretical schedule count exceeds u128, saturating"
            );
            u128::MAX
        })
    }

    /// Generates every conflict-free schedule.
    ///
    /// Solutions come out in lexicographic order of (course order, section
    /// insertion order). Zero courses yield a single empty schedule.
    pub fn generate(&self) -> Vec<Schedule<'a>> {
        self.generate_with_stats().0
    }

    /// Like [`ScheduleGenerator::generate`], also returning search counters.
    pub fn generate_with_stats(&self) -> (Vec<Schedule<'a>>, SearchStats) {
        debug!(
            courses = self.courses.len(),
            theoretical = %self.theoretical_count(),
            "Starting schedule search"
        );

        let mut solutions = Vec::new();
        let mut current = Vec::with_capacity(self.courses.len());
        let mut stats = SearchStats::default();

        backtrack(self.courses, &mut current, &mut solutions, &mut stats);

        info!(
            valid = solutions.len(),
            visited = stats.nodes_visited,
            pruned = stats.conflicts_pruned,
            "Schedule search finished"
        );
        (solutions, stats)
    }
}

fn backtrack<'a>(
    remaining: &'a [Course],
    current: &mut Vec<ScheduleEntry<'a>>,
    solutions: &mut Vec<Schedule<'a>>,
    stats: &mut SearchStats,
) {
    let Some((course, rest)) = remaining.split_first() else {
        solutions.push(Schedule::new(current.clone()));
        stats.solutions += 1;
        return;
    };

    for section in course.enabled_sections() {
        stats.nodes_visited += 1;
        if current.iter().any(|e| section.conflicts_with(e.section)) {
            stats.conflicts_pruned += 1;
            continue;
        }

        current.push(ScheduleEntry::new(&course.name, section));
        backtrack(rest, current, solutions, stats);
        current.pop();
    }
}
