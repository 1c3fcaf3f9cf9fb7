use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, used to slice the dataset by the month of each
/// record's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// Error returned when a string does not name a calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthError(pub String);

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown month: {}", self.0)
    }
}

impl std::error::Error for ParseMonthError {}

impl Month {
    /// All twelve months in calendar order, as the dropdown lists them.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The calendar month a date falls in.
    pub fn of(date: NaiveDate) -> Month {
        Month::ALL[date.month0() as usize]
    }

    /// One-based month number, 1 through 12.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .find(|month| month.name() == s)
            .copied()
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::Month;
    use chrono::NaiveDate;

    #[test]
    fn test_month_of_date() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        assert_eq!(Month::of(date), Month::November);
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(Month::of(date), Month::January);
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(Month::of(date), Month::December);
    }

    #[test]
    fn test_numbers_are_one_based_calendar_order() {
        let numbers: Vec<u32> = Month::ALL.iter().map(|m| m.number()).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_round_trip_all_months() {
        for month in Month::ALL {
            assert_eq!(month.name().parse::<Month>(), Ok(month));
        }
    }

    #[test]
    fn test_unknown_month_rejected() {
        assert!("Nov".parse::<Month>().is_err());
        assert!("november".parse::<Month>().is_err());
    }
}
