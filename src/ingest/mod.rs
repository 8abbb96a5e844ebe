//! Record producers.
//!
//! Everything that turns outside input into [`SectionRecord`]s lives here:
//! free-text chat messages and institutional JSON timetables. Records are
//! validated when they enter a [`Catalog`], never by the generator.

mod chat;
mod json;
pub mod time;

pub use chat::{ChatParser, DEFAULT_COURSE_NAME, DEFAULT_SECTION_CODE};
pub use json::{JsonTimetableImporter, ParsedTimetable, DEFAULT_MARKERS};

use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::models::SectionRecord;

/// Maximum number of error messages kept in an [`ImportSummary`].
pub const MAX_REPORTED_ERRORS: usize = 5;

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    /// Records offered.
    pub total: usize,
    /// Records inserted.
    pub added: usize,
    /// Records rejected.
    pub failed: usize,
    /// First few rejection messages.
    pub errors: Vec<String>,
}

/// Inserts records one by one, collecting failures instead of stopping.
pub fn import_records<I>(catalog: &mut Catalog, records: I) -> ImportSummary
where
    I: IntoIterator<Item = SectionRecord>,
{
    let mut summary = ImportSummary::default();
    for record in records {
        summary.total += 1;
        match catalog.add_record(&record) {
            Ok(_) => summary.added += 1,
            Err(err) => {
                summary.failed += 1;
                if summary.errors.len() < MAX_REPORTED_ERRORS {
                    summary.errors.push(format!("{}: {err}", record.course));
                }
            }
        }
    }
    info!(
        catalog = %catalog.name,
        total = summary.total,
        added = summary.added,
        failed = summary.failed,
        "Import finished"
    );
    summary
}
