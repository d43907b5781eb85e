use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

/// Meeting descriptor, i.e.: `MWF 11:00-11:50` or `TuTh 12:30 13:50`
///
/// d    => day codes
/// h1   => start hour | m1 => start minute
/// h2   => end hour   | m2 => end minute
static MEETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<d>(?:M|Tu|W|Th|F)+)\s+(?P<h1>\d{1,2}):(?P<m1>\d{2})(?:\s*-\s*|\s+)(?P<h2>\d{1,2}):(?P<m2>\d{2})\s*$",
    )
    .unwrap()
});

/// Weekday a course can meet
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    M,
    Tu,
    W,
    Th,
    F,
}

impl Day {
    /// Every day a course can meet, in week order
    pub const ALL: [Day; 5] = [Day::M, Day::Tu, Day::W, Day::Th, Day::F];

    /// Code used in meeting descriptors
    pub fn code(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::Tu => "Tu",
            Self::W => "W",
            Self::Th => "Th",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Days of a meeting, kept in the order they were written
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Days(Vec<Day>);

impl Days {
    pub fn new(days: Vec<Day>) -> Self {
        Self(days)
    }

    pub fn contains(&self, day: Day) -> bool {
        self.0.contains(&day)
    }

    /// Split a run of day codes such as `TuTh`.
    /// Returns `None` if anything else than a day code is found
    fn tokenize(mut codes: &str) -> Option<Self> {
        let mut days = vec![];
        while !codes.is_empty() {
            // Two letters codes first, `T` alone isn't a day
            let day = Day::ALL
                .iter()
                .rev()
                .copied()
                .find(|day| codes.starts_with(day.code()))?;
            days.push(day);
            codes = &codes[day.code().len()..];
        }

        Some(Self(days))
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|day| write!(f, "{day}"))
    }
}

/// Half-open interval `[start, end)` in minutes since midnight
///
/// Bounds aren't checked, `start` may be greater than `end`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Structured meeting time of a course
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meeting {
    pub days: Days,
    pub hours: Interval,
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.days, self.hours)
    }
}

/// The text isn't a meeting descriptor
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unparsable meeting time: {text:?}")]
pub struct MeetingParseError {
    pub text: String,
}

/// Parse a meeting descriptor into days and hours
pub fn parse_meeting_time(text: &str) -> Result<Meeting, MeetingParseError> {
    let fail = || MeetingParseError {
        text: text.to_owned(),
    };

    let captures = MEETING_RE.captures(text).ok_or_else(fail)?;

    // Every group is mandatory in the expression and only holds digits
    let number = |name: &str| -> Result<u32, MeetingParseError> {
        captures
            .name(name)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(fail)
    };

    let days = captures
        .name("d")
        .and_then(|m| Days::tokenize(m.as_str()))
        .ok_or_else(fail)?;

    Ok(Meeting {
        days,
        hours: Interval::new(
            number("h1")? * 60 + number("m1")?,
            number("h2")? * 60 + number("m2")?,
        ),
    })
}
