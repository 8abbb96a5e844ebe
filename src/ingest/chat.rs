//! Free-text section parser.
//!
//! Turns short messages such as
//! `"agrega calculo seccion 2 lunes y miercoles 2:30pm a 4pm"` into a
//! [`SectionRecord`]. Extraction order:
//!
//! 1. **Days**: every known alias appearing as a whole word.
//! 2. **Hours**: the first `H[:MM][am|pm] (a|-|hasta) H[:MM][am|pm]` range.
//! 3. **Section**: the first bare number left once the range is removed.
//! 4. **Course**: every remaining word that is not a filler word, a day,
//!    a number or a meridiem marker.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::time::{capitalize, to_24h, Meridiem};
use crate::error::{Result, TimetableError};
use crate::models::SectionRecord;

static HOUR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*(?:a|-|hasta)\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?",
    )
    .expect("hour range pattern is valid")
});

const DEFAULT_DAY_ALIASES: &[(&str, &str)] = &[
    ("lunes", "Lunes"),
    ("lun", "Lunes"),
    ("martes", "Martes"),
    ("mar", "Martes"),
    ("miercoles", "Miercoles"),
    ("miércoles", "Miercoles"),
    ("mie", "Miercoles"),
    ("jueves", "Jueves"),
    ("jue", "Jueves"),
    ("viernes", "Viernes"),
    ("vie", "Viernes"),
    ("sabado", "Sabado"),
    ("sábado", "Sabado"),
    ("sab", "Sabado"),
];

const DEFAULT_IGNORED_WORDS: &[&str] = &[
    "agrega", "crea", "pon", "el", "la", "los", "las", "de", "a", "y", "materia", "clase",
    "curso", "por", "favor", "tengo", "que", "seccion", "del", "al",
];

/// Section code used when the message names none.
pub const DEFAULT_SECTION_CODE: &str = "Unica";

/// Course name used when no word survives filtering.
pub const DEFAULT_COURSE_NAME: &str = "Materia Desconocida";

/// Configurable free-text parser.
///
/// Defaults to Spanish day names and filler words.
#[derive(Debug, Clone)]
pub struct ChatParser {
    /// `(alias, canonical day)` pairs, matched in order.
    day_aliases: Vec<(String, String)>,
    /// Words never taken as part of the course name.
    ignored_words: Vec<String>,
}

impl Default for ChatParser {
    fn default() -> Self {
        Self {
            day_aliases: DEFAULT_DAY_ALIASES
                .iter()
                .map(|&(alias, day)| (alias.to_string(), day.to_string()))
                .collect(),
            ignored_words: DEFAULT_IGNORED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ChatParser {
    /// Creates a parser with the default tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with no day aliases and no filler words.
    pub fn empty() -> Self {
        Self {
            day_aliases: Vec::new(),
            ignored_words: Vec::new(),
        }
    }

    /// Adds a day alias (matched case-insensitively).
    pub fn with_day_alias(mut self, alias: impl Into<String>, day: impl Into<String>) -> Self {
        self.day_aliases
            .push((alias.into().to_lowercase(), day.into()));
        self
    }

    /// Adds a filler word.
    pub fn with_ignored_word(mut self, word: impl Into<String>) -> Self {
        self.ignored_words.push(word.into().to_lowercase());
        self
    }

    /// Parses a message into a record.
    ///
    /// The record is not validated; hand it to
    /// [`Catalog::add_record`](crate::catalog::Catalog::add_record).
    pub fn parse(&self, text: &str) -> Result<SectionRecord> {
        let lower = text.to_lowercase();

        let days = self.detect_days(&lower);
        if days.is_empty() {
            return Err(TimetableError::MissingDays);
        }

        let caps = HOUR_RANGE
            .captures(&lower)
            .ok_or(TimetableError::MissingHours)?;
        let number = |i: usize| -> Option<u32> {
            caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
        };
        let meridiem = |i: usize| caps.get(i).and_then(|m| Meridiem::parse(m.as_str()));

        let (Some(h1), Some(m1), Some(h2), Some(m2)) = (number(1), number(2), number(4), number(5))
        else {
            return Err(TimetableError::MissingHours);
        };
        let start = to_24h(h1, m1, meridiem(3));
        let mut end = to_24h(h2, m2, meridiem(6));
        if start >= end && meridiem(6).is_none() {
            end += 12.0;
        }

        let range = caps.get(0).map_or("", |m| m.as_str());
        let rest = lower.replace(range, "");
        let words: Vec<&str> = rest.split_whitespace().collect();

        let code = words
            .iter()
            .find(|w| is_number(w))
            .map_or_else(|| DEFAULT_SECTION_CODE.to_string(), |w| w.to_string());

        let name_parts: Vec<String> = words
            .iter()
            .map(|w| w.trim_matches(|c: char| matches!(c, '.' | ',' | '-')))
            .filter(|w| !w.is_empty() && self.is_name_word(w))
            .map(capitalize)
            .collect();
        let course = if name_parts.is_empty() {
            DEFAULT_COURSE_NAME.to_string()
        } else {
            name_parts.join(" ")
        };

        let record = SectionRecord::new(course, code, start, end).with_days(days);
        debug!(
            course = %record.course,
            code = %record.code,
            start = record.start_hour,
            end = record.end_hour,
            "Parsed chat message"
        );
        Ok(record)
    }

    fn detect_days(&self, lower: &str) -> Vec<String> {
        let words: Vec<&str> = lower
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .collect();

        let mut found: Vec<String> = Vec::new();
        for (alias, day) in &self.day_aliases {
            if words.contains(&alias.as_str()) && !found.contains(day) {
                found.push(day.clone());
            }
        }
        found
    }

    fn is_name_word(&self, word: &str) -> bool {
        !self.ignored_words.iter().any(|w| w == word)
            && !self.day_aliases.iter().any(|(alias, _)| alias == word)
            && !is_number(word)
            && word != "am"
            && word != "pm"
    }
}

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message() {
        let record = ChatParser::new()
            .parse("Agrega calculo seccion 2 lunes y miercoles 2:30pm a 4pm")
            .unwrap();

        assert_eq!(record.course, "Calculo");
        assert_eq!(record.code, "2");
        assert_eq!(record.days, vec!["Lunes", "Miercoles"]);
        assert_eq!(record.start_hour, 14.5);
        assert_eq!(record.end_hour, 16.0);
    }

    #[test]
    fn test_days_follow_table_order() {
        let record = ChatParser::new()
            .parse("fisica vie y lun 8 a 10")
            .unwrap();
        assert_eq!(record.days, vec!["Lunes", "Viernes"]);
        assert_eq!(record.course, "Fisica");
        assert_eq!(record.code, DEFAULT_SECTION_CODE);
    }

    #[test]
    fn test_end_before_start_rolls_to_afternoon() {
        let record = ChatParser::new().parse("quimica martes 11 a 1").unwrap();
        assert_eq!(record.start_hour, 11.0);
        assert_eq!(record.end_hour, 13.0);
    }

    #[test]
    fn test_explicit_meridiem_is_kept() {
        let record = ChatParser::new().parse("historia jueves 10am - 9am").unwrap();
        assert_eq!(record.start_hour, 10.0);
        assert_eq!(record.end_hour, 9.0);
    }

    #[test]
    fn test_hasta_separator_and_minutes() {
        let record = ChatParser::new()
            .parse("Programacion Web sab 7:15 hasta 9:45")
            .unwrap();
        assert_eq!(record.course, "Programacion Web");
        assert_eq!(record.days, vec!["Sabado"]);
        assert_eq!(record.start_hour, 7.25);
        assert_eq!(record.end_hour, 9.75);
    }

    #[test]
    fn test_missing_days() {
        let err = ChatParser::new().parse("calculo 8 a 10").unwrap_err();
        assert_eq!(err, TimetableError::MissingDays);
    }

    #[test]
    fn test_missing_hours() {
        let err = ChatParser::new().parse("calculo lunes por la tarde").unwrap_err();
        assert_eq!(err, TimetableError::MissingHours);
    }

    #[test]
    fn test_unknown_course_name() {
        let record = ChatParser::new().parse("agrega la clase del lunes 8 a 10").unwrap();
        assert_eq!(record.course, DEFAULT_COURSE_NAME);
    }

    #[test]
    fn test_custom_tables() {
        let parser = ChatParser::empty()
            .with_day_alias("Monday", "Mon")
            .with_ignored_word("add");
        let record = parser.parse("add Algebra 3 monday 9 - 11").unwrap();

        assert_eq!(record.course, "Algebra");
        assert_eq!(record.code, "3");
        assert_eq!(record.days, vec!["Mon"]);
    }
}
