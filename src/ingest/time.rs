//! Clock and day-label helpers shared by the ingestion parsers.

use regex::Regex;
use std::sync::LazyLock;

static TWELVE_HOUR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)\s*/\s*(\d{1,2}):(\d{2})\s*(AM|PM)")
        .expect("12h range pattern is valid")
});

/// Meridiem marker of a 12h clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parses `am`/`pm` in any case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }
}

/// Converts a clock reading to a real-valued 24h hour.
///
/// `12am` is midnight, `12pm` is noon. Without a marker the hour is taken
/// as-is.
pub fn to_24h(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> f64 {
    let hour = match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    f64::from(hour) + f64::from(minute) / 60.0
}

/// Parses a `"05:00 PM / 08:00 PM"` range into 24h hours.
///
/// The pattern may appear anywhere in the string. Returns `None` when no
/// range is found.
pub fn parse_12h_range(text: &str) -> Option<(f64, f64)> {
    let caps = TWELVE_HOUR_RANGE.captures(text)?;
    let num = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    let mer = |i: usize| Meridiem::parse(caps.get(i)?.as_str());

    let start = to_24h(num(1)?, num(2)?, mer(3));
    let end = to_24h(num(4)?, num(5)?, mer(6));
    Some((start, end))
}

/// Normalizes a day name to its canonical label.
///
/// Known Spanish day names map to their unaccented capitalized form
/// (`MIÉRCOLES` → `Miercoles`); anything else is capitalized.
pub fn normalize_day(day: &str) -> String {
    let upper = day.trim().to_uppercase();
    let known = match upper.as_str() {
        "LUNES" => "Lunes",
        "MARTES" => "Martes",
        "MIERCOLES" | "MIÉRCOLES" => "Miercoles",
        "JUEVES" => "Jueves",
        "VIERNES" => "Viernes",
        "SABADO" | "SÁBADO" => "Sabado",
        "DOMINGO" => "Domingo",
        _ => return capitalize(&upper),
    };
    known.to_string()
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_24h() {
        assert_eq!(to_24h(2, 30, Some(Meridiem::Pm)), 14.5);
        assert_eq!(to_24h(12, 0, Some(Meridiem::Pm)), 12.0);
        assert_eq!(to_24h(12, 0, Some(Meridiem::Am)), 0.0);
        assert_eq!(to_24h(8, 15, None), 8.25);
    }

    #[test]
    fn test_parse_12h_range() {
        assert_eq!(parse_12h_range("05:00 PM / 08:00 PM"), Some((17.0, 20.0)));
        assert_eq!(parse_12h_range("7:30 am/9:00 AM"), Some((7.5, 9.0)));
        assert_eq!(parse_12h_range("12:00 PM / 1:30 PM"), Some((12.0, 13.5)));
        assert_eq!(parse_12h_range("------"), None);
    }

    #[test]
    fn test_normalize_day() {
        assert_eq!(normalize_day("LUNES"), "Lunes");
        assert_eq!(normalize_day(" miércoles "), "Miercoles");
        assert_eq!(normalize_day("SÁBADO"), "Sabado");
        assert_eq!(normalize_day("monday"), "Monday");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cálculo"), "Cálculo");
        assert_eq!(capitalize("FISICA"), "Fisica");
        assert_eq!(capitalize(""), "");
    }
}
