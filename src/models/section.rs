//! Section (offered time slot) model.
//!
//! A section is one alternative way of taking a course: a set of days and a
//! daily time interval. Exactly one section per course appears in any
//! generated schedule.
//!
//! # Time Model
//! Hours are real numbers on a 24h clock (`14.5` = 2:30pm). Intervals are
//! half-open `[start_hour, end_hour)`, so back-to-back sections never clash.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Opaque per-instance section identity.
///
/// Generated when the section is created and used only for lookup and
/// removal. It is not the human-facing section code and carries no order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionToken(Uuid);

impl SectionToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One offered time slot of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Internal identity.
    pub token: SectionToken,
    /// Human-facing section code (unique within its course).
    pub code: String,
    /// Day labels on which the section meets.
    pub days: BTreeSet<String>,
    /// Start hour (inclusive).
    pub start_hour: f64,
    /// End hour (exclusive).
    pub end_hour: f64,
    /// Whether the section takes part in schedule generation.
    pub enabled: bool,
}

impl Section {
    /// Creates an enabled section with a fresh token and no days.
    ///
    /// The caller guarantees `start_hour < end_hour`.
    pub fn new(code: impl Into<String>, start_hour: f64, end_hour: f64) -> Self {
        Self {
            token: SectionToken::generate(),
            code: code.into(),
            days: BTreeSet::new(),
            start_hour,
            end_hour,
            enabled: true,
        }
    }

    /// Adds a meeting day.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.days.insert(day.into());
        self
    }

    /// Adds several meeting days.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days.extend(days.into_iter().map(Into::into));
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Length of one meeting in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Whether the two sections share at least one day.
    pub fn shares_day_with(&self, other: &Self) -> bool {
        !self.days.is_disjoint(&other.days)
    }

    /// Whether the two sections overlap in time on a shared day.
    ///
    /// Symmetric. Touching boundaries (`self.end_hour == other.start_hour`)
    /// do not count as a conflict.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        if !self.shares_day_with(other) {
            return false;
        }
        self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }

    /// Display label for the meeting time, e.g. `"2:30pm/4pm"`.
    pub fn hours_label(&self) -> String {
        format_range(self.start_hour, self.end_hour)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self.days.iter().map(String::as_str).collect();
        write!(
            f,
            "Sec {} ({} {})",
            self.code,
            days.join(","),
            self.hours_label()
        )
    }
}

/// Formats a half-open interval as `"start/end"`, e.g. `"2:30pm/4pm"`.
pub fn format_range(start_hour: f64, end_hour: f64) -> String {
    format!("{}/{}", format_hour(start_hour), format_hour(end_hour))
}

/// Formats a real-valued 24h hour on a 12h clock: `14.5` → `"2:30pm"`.
///
/// Whole hours omit the minutes (`8.0` → `"8am"`). Minutes are rounded to
/// the nearest whole minute; `24.0` (end of day) reads as `"12am"`.
pub fn format_hour(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let mut hours = total_minutes.div_euclid(60).rem_euclid(24);
    let minutes = total_minutes.rem_euclid(60);

    let period = if hours < 12 { "am" } else { "pm" };
    if hours > 12 {
        hours -= 12;
    } else if hours == 0 {
        hours = 12;
    }

    if minutes == 0 {
        format!("{hours}{period}")
    } else {
        format!("{hours}:{minutes:02}{period}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mon(code: &str, start: f64, end: f64) -> Section {
        Section::new(code, start, end).with_day("Mon")
    }

    #[test]
    fn test_section_builder() {
        let s = Section::new("01", 8.0, 10.0)
            .with_days(["Mon", "Wed"])
            .with_day("Mon")
            .with_enabled(false);

        assert_eq!(s.code, "01");
        assert_eq!(s.days.len(), 2);
        assert!(!s.enabled);
        assert!((s.duration_hours() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = Section::new("01", 8.0, 10.0);
        let b = Section::new("01", 8.0, 10.0);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_overlap_on_shared_day() {
        assert!(mon("A", 8.0, 10.0).conflicts_with(&mon("B", 9.0, 11.0)));
    }

    #[test]
    fn test_touching_boundary_is_not_conflict() {
        let a = mon("A", 8.0, 10.0);
        let b = mon("B", 10.0, 12.0);
        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn test_disjoint_days_never_conflict() {
        let a = Section::new("A", 8.0, 10.0).with_day("Mon");
        let b = Section::new("B", 8.0, 10.0).with_days(["Tue", "Thu"]);
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_one_shared_day_is_enough() {
        let a = Section::new("A", 8.0, 10.0).with_days(["Mon", "Wed"]);
        let b = Section::new("B", 9.5, 11.0).with_days(["Wed", "Fri"]);
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_containment_conflicts() {
        assert!(mon("A", 8.0, 12.0).conflicts_with(&mon("B", 9.0, 10.0)));
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(8.0), "8am");
        assert_eq!(format_hour(14.5), "2:30pm");
        assert_eq!(format_hour(0.0), "12am");
        assert_eq!(format_hour(12.0), "12pm");
        assert_eq!(format_hour(9.25), "9:15am");
        assert_eq!(format_hour(8.0 + 1.0 / 3.0), "8:20am");
        assert_eq!(format_hour(24.0), "12am");
        assert_eq!(format_hour(23.9999), "12am");
        assert_eq!(format_hour(23.5), "11:30pm");
        assert_eq!(format_range(22.0, 24.0), "10pm/12am");
    }

    #[test]
    fn test_display() {
        let s = Section::new("02", 14.5, 16.0).with_days(["Lunes", "Miercoles"]);
        assert_eq!(s.to_string(), "Sec 02 (Lunes,Miercoles 2:30pm/4pm)");
    }

    prop_compose! {
        fn arb_section()(
            days in proptest::collection::btree_set(0u8..7, 1..4),
            start in 0u32..44,
            len in 1u32..8,
        ) -> Section {
            let start = f64::from(start) * 0.5;
            Section::new("S", start, start + f64::from(len) * 0.5)
                .with_days(days.into_iter().map(|d| format!("D{d}")))
        }
    }

    proptest! {
        #[test]
        fn test_conflict_is_symmetric(a in arb_section(), b in arb_section()) {
            prop_assert_eq!(a.conflicts_with(&b), b.conflicts_with(&a));
        }

        #[test]
        fn test_section_conflicts_with_itself(a in arb_section()) {
            prop_assert!(a.conflicts_with(&a));
        }
    }
}
