//! Course timetable planning for the U-Engine ecosystem.
//!
//! Given courses that each offer several alternative sections, enumerates
//! every way of taking one section per course without two sections
//! overlapping on a shared day.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Section`, `Course`, `SectionRecord`,
//!   `Schedule`
//! - **`generator`**: Theoretical combination count and exhaustive
//!   backtracking search (`ScheduleGenerator`, `GenerationReport`)
//! - **`catalog`**: Owned, independent course collections with
//!   insert/remove/toggle/select operations
//! - **`ingest`**: Record producers: free-text chat parser, JSON timetable
//!   importer, bulk import
//! - **`validation`**: Input integrity checks (blank keys, empty day sets,
//!   bad intervals, duplicate codes)
//!
//! # Architecture
//!
//! The generator is a pure, synchronous computation over a borrowed
//! snapshot of courses. Catalogs own their data and are passed explicitly;
//! there is no global state. Ingestion and validation sit in front of the
//! catalog so that the generator only ever sees well-formed sections.
//!
//! Logging goes through `tracing`; installing a subscriber is left to the
//! application.
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::models::SectionRecord;
//!
//! let mut catalog = Catalog::new("projection");
//! catalog.add_record(&SectionRecord::new("Math", "A", 8.0, 10.0).with_day("Mon"))?;
//! catalog.add_record(&SectionRecord::new("Math", "B", 9.0, 11.0).with_day("Mon"))?;
//! catalog.add_record(&SectionRecord::new("Physics", "C", 10.0, 12.0).with_day("Mon"))?;
//!
//! let generator = catalog.generator();
//! assert_eq!(generator.theoretical_count(), 2);
//! assert_eq!(generator.generate().len(), 1);
//! # Ok::<(), u_timetable::TimetableError>(())
//! ```
//!
//! # References
//!
//! - Knuth (2019), "The Art of Computer Programming", Vol. 4, Fasc. 5
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod catalog;
pub mod error;
pub mod generator;
pub mod ingest;
pub mod models;
pub mod validation;

pub use error::{Result, TimetableError};
