// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Dates as the pt-BR audience reads them. `chrono` has no locale tables without the
//! `unstable-locales` feature, so month and weekday names are spelled out here.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

pub const MISSING_DATE: &str = "--";

#[rustfmt::skip]
const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// `dd/mm/yyyy HH:MM`, or `--`.
#[must_use]
pub fn format_date_time(value: Option<&NaiveDateTime>) -> String {
    value.map_or_else(
        /* none */ || MISSING_DATE.to_owned(),
        /* some */ |it| it.format("%d/%m/%Y %H:%M").to_string(),
    )
}

/// `sábado, 15 de março de 2025`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!(
        "{weekday}, {day} de {month} de {year}",
        weekday = weekday_name(date.weekday()),
        day = date.day(),
        year = date.year()
    )
}

#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// The backend sends `HH:MM:SS`, only `HH:MM` is shown. Anything that doesn't look like a
/// time is passed through.
#[must_use]
pub fn format_time(value: &str) -> &str {
    let value = value.trim();
    match value.get(..5) {
        Some(it) if it.as_bytes().get(2) == Some(&b':') => it,
        _ => value,
    }
}

/// `08:00 as 12:00`. `None` unless both ends are known.
#[must_use]
pub fn format_time_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => {
            Some(format!("{} as {}", format_time(start), format_time(end)))
        }
        _ => None,
    }
}

/// Default export file name, `inscricoes_2025-03-15.xlsx`.
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("inscricoes_{}.xlsx", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

    #[test]
    fn test_format_date_time() {
        let it = date(2025, 3, 7).and_hms_opt(9, 5, 59).unwrap();
        assert_eq!(format_date_time(Some(&it)), "07/03/2025 09:05");
        assert_eq!(format_date_time(None), "--");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2025, 3, 15)), "sábado, 15 de março de 2025");
        assert_eq!(
            format_long_date(date(2024, 12, 2)),
            "segunda-feira, 2 de dezembro de 2024"
        );
    }

    #[test_case("08:00:00", "08:00")]
    #[test_case("14:30", "14:30")]
    #[test_case(" 9h ", "9h")]
    fn test_format_time(input: &str, expected: &str) {
        assert_eq!(format_time(input), expected);
    }

    #[test]
    fn test_format_time_range() {
        assert_eq!(
            format_time_range(Some("08:00:00"), Some("12:00:00")).as_deref(),
            Some("08:00 as 12:00")
        );
        assert_eq!(format_time_range(Some("08:00:00"), None), None);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(date(2025, 1, 9)), "inscricoes_2025-01-09.xlsx");
    }
}
