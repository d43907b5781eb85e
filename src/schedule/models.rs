use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{error::Error, meeting::Meeting};

/// Academic term, given by the first letter of a course identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Fall,
    Winter,
    Spring,
}

impl Term {
    /// Terms in the order they are shown
    pub const ALL: [Term; 3] = [Term::Fall, Term::Winter, Term::Spring];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'F' => Some(Self::Fall),
            'W' => Some(Self::Winter),
            'S' => Some(Self::Spring),
            _ => None,
        }
    }

    /// Term of a course identifier, i.e.: `F101` => Fall
    pub fn from_id(id: &str) -> Option<Self> {
        id.chars().next().and_then(Self::from_code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Term {
    type Err = Error;

    /// Accept either the letter or the full name, whatever the case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|term| {
                term.name().eq_ignore_ascii_case(wanted)
                    || term.name()[..1].eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownTerm(s.to_owned()))
    }
}

/// Course as found in the schedule document
#[derive(Clone, Debug, Deserialize)]
pub struct RawCourse {
    pub id: String,
    pub title: String,
    pub meets: String,
}

/// Schedule document, i.e.: `{ "title": ..., "courses": [...] }`
#[derive(Clone, Debug, Deserialize)]
pub struct RawSchedule {
    pub title: String,
    pub courses: Vec<RawCourse>,
}

#[derive(Clone, Debug)]
pub struct Course {
    /// Term letter followed by the course number, i.e.: `F101`
    pub id: String,

    /// Course's name
    pub title: String,

    /// Meeting time as written in the document
    pub meets: String,

    /// Parsed meeting time, `None` when `meets` isn't understood.
    /// Such a course never conflicts with anything
    pub meeting: Option<Meeting>,
}

impl Course {
    pub fn term(&self) -> Option<Term> {
        Term::from_id(&self.id)
    }

    /// Number part of the identifier, i.e.: `F101` => `101`
    pub fn number(&self) -> &str {
        let mut chars = self.id.char_indices().skip(1);
        let start = chars.next().map_or(self.id.len(), |(i, _)| i);
        let end = chars.nth(2).map_or(self.id.len(), |(i, _)| i);

        &self.id[start..end]
    }

    /// Name showed to the users, i.e.: `Fall CS 101: Computer Science`
    pub fn label(&self) -> String {
        let term = self.term().map_or(String::new(), |term| term.to_string());
        format!("{term} CS {}: {}", self.number(), self.title)
    }
}

/// Key of a course inside its schedule
pub type CourseKey = usize;

#[derive(Clone, Debug)]
pub struct Schedule {
    pub title: String,
    /// Ordered like in the document
    pub courses: Vec<Course>,
}
