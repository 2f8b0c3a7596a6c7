use chrono::{Datelike, NaiveDate};

/// Compact count: `1.5M`, `12.0K`, or the plain integer below a thousand.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    DayMonthYear,
    MonthDayYear,
    Iso,
}

impl std::str::FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dd/mm/yyyy" => Ok(DateFormat::DayMonthYear),
            "mm/dd/yyyy" => Ok(DateFormat::MonthDayYear),
            "yyyy-mm-dd" => Ok(DateFormat::Iso),
            other => Err(format!("Unknown date format: {}", other)),
        }
    }
}

pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let (day, month, year) = (date.day(), date.month(), date.year());
    match format {
        DateFormat::DayMonthYear => format!("{:02}/{:02}/{}", day, month, year),
        DateFormat::MonthDayYear => format!("{:02}/{:02}/{}", month, day, year),
        DateFormat::Iso => format!("{}-{:02}-{:02}", year, month, day),
    }
}

/// Formats a calendar date given as parts; `None` for an impossible date.
pub fn format_calendar_date(year: i32, month: u32, day: u32, format: DateFormat) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| format_date(date, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(12_345), "12.3K");
        assert_eq!(format_number(1_260_000), "1.3M");
        assert_eq!(format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
        assert_eq!(format_date(date, DateFormat::DayMonthYear), "26/01/2024");
        assert_eq!(format_date(date, DateFormat::MonthDayYear), "01/26/2024");
        assert_eq!(format_date(date, DateFormat::Iso), "2024-01-26");
        assert_eq!("yyyy-mm-dd".parse::<DateFormat>(), Ok(DateFormat::Iso));
        assert_eq!(
            format_calendar_date(2024, 8, 15, DateFormat::default()).as_deref(),
            Some("15/08/2024")
        );
        assert_eq!(format_calendar_date(2024, 2, 30, DateFormat::Iso), None);
    }
}
