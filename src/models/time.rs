use serde::*;
use std::fmt;
use std::str::FromStr;

/// Time of day on the timetable's wall clock.
///
/// Parsed from `"H"`, `"H:MM"` or `"HH:MM"` (24-hour, no timezone). Busy
/// checks compare at hour granularity only, so minutes are carried but
/// deliberately ignored by [`TimeRange::contains_hour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }
}

impl FromStr for ClockTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (hour_str, minute_str) = match s.split_once(':') {
            Some((h, m)) => (h, m),
            None => (s, "0"),
        };
        let hour: u8 = hour_str
            .parse()
            .map_err(|_| ParseTimeError::new(s))?;
        let minute: u8 = minute_str
            .parse()
            .map_err(|_| ParseTimeError::new(s))?;
        ClockTime::new(hour, minute).ok_or_else(|| ParseTimeError::new(s))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// A session's time window within one day, start strictly before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    /// Hour-granularity containment: true iff `hour` falls in
    /// `[start.hour, end.hour)`. Minutes on both sides are discarded, so a
    /// query at 10:45 matches a session spanning 10:30-12:30.
    pub fn contains_hour(&self, hour: u8) -> bool {
        self.start.hour <= hour && hour < self.end.hour
    }
}

impl FromStr for TimeRange {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_str, end_str) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ParseTimeError::new(s))?;
        let start: ClockTime = start_str.parse()?;
        let end: ClockTime = end_str.parse()?;
        if start >= end {
            return Err(ParseTimeError::new(s));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Error for unparseable clock times and time ranges.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid time string: {input:?}")]
pub struct ParseTimeError {
    pub input: String,
}

impl ParseTimeError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Day of week as named in the timetable document.
///
/// The document only ever populates Monday through Friday; the weekend
/// variants exist so calendar dates always map to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Teaching days in weekday order, used to enumerate free-slot candidates.
pub const TEACHING_DAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Monday = 0 .. Sunday = 6, for presentation ordering.
    pub fn index(&self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }
}

impl FromStr for Weekday {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            other => Err(ParseTimeError::new(other)),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_parse_hour_minute() {
        let t: ClockTime = "9:30".parse().unwrap();
        assert_eq!((t.hour, t.minute), (9, 30));

        let t: ClockTime = "16:15".parse().unwrap();
        assert_eq!((t.hour, t.minute), (16, 15));
    }

    #[test]
    fn test_clock_time_parse_hour_only() {
        let t: ClockTime = "14".parse().unwrap();
        assert_eq!((t.hour, t.minute), (14, 0));
    }

    #[test]
    fn test_clock_time_rejects_out_of_range() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_time_range_parse() {
        let r: TimeRange = "9:00-10:00".parse().unwrap();
        assert_eq!(r.start.hour, 9);
        assert_eq!(r.end.hour, 10);

        let r: TimeRange = "10:30-12:30".parse().unwrap();
        assert_eq!((r.start.hour, r.start.minute), (10, 30));
    }

    #[test]
    fn test_time_range_rejects_inverted() {
        assert!("12:00-10:00".parse::<TimeRange>().is_err());
        assert!("10:00-10:00".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_time_range_rejects_missing_separator() {
        assert!("9:00".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_contains_hour_truncates_minutes() {
        let r: TimeRange = "10:30-12:30".parse().unwrap();
        // 10:45 is "inside" at hour granularity even though 10:45 > 10:30
        assert!(r.contains_hour(10));
        assert!(r.contains_hour(11));
        // end hour is exclusive
        assert!(!r.contains_hour(12));
        assert!(!r.contains_hour(9));
    }

    #[test]
    fn test_contains_hour_over_full_span() {
        // Every integer hour in [start, end) is busy, everything else free
        let r: TimeRange = "8:00-10:00".parse().unwrap();
        for hour in 0..24u8 {
            assert_eq!(r.contains_hour(hour), (8..10).contains(&hour));
        }
    }

    #[test]
    fn test_weekday_parse_and_order() {
        let day: Weekday = "Tuesday".parse().unwrap();
        assert_eq!(day, Weekday::Tuesday);
        assert_eq!(day.as_str(), "Tuesday");
        assert!("Someday".parse::<Weekday>().is_err());

        let indices: Vec<u8> = TEACHING_DAYS.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_weekday_from_chrono() {
        use chrono::Datelike;
        // 2025-10-28 is a Tuesday
        let date = chrono::NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();
        let day: Weekday = date.weekday().into();
        assert_eq!(day, Weekday::Tuesday);
    }

    #[test]
    fn test_display_roundtrip() {
        let r: TimeRange = "8:00-10:00".parse().unwrap();
        assert_eq!(r.to_string(), "8:00-10:00");
    }
}
