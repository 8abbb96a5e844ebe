//! Timetable domain models.
//!
//! Provides the data types the generator works over: sections, courses,
//! the flat records that ingestion produces, and the schedules the search
//! returns.
//!
//! # Ownership
//!
//! | Type | Owns | Borrows |
//! |------|------|---------|
//! | Course | its Sections | nothing |
//! | SectionRecord | plain data | nothing |
//! | Schedule | entry list | course names and Sections of a snapshot |

mod course;
mod record;
mod schedule;
mod section;

pub use course::Course;
pub use record::SectionRecord;
pub use schedule::{Schedule, ScheduleEntry};
pub use section::{format_hour, format_range, Section, SectionToken};
