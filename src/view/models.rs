use crate::schedule::models::{CourseKey, Term};

/// What the user sees
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Schedule not received yet
    Loading,
    Page(Page),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Title of the schedule
    pub banner: String,
    /// One button per known term
    pub terms: Vec<TermButton>,
    /// Courses of the active term
    pub courses: Vec<CourseButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermButton {
    pub term: Term,
    /// Currently shown term
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseButton {
    pub key: CourseKey,
    /// i.e.: `Fall CS 101: Computer Science`
    pub label: String,
    /// Meeting time as written in the schedule
    pub meets: String,
    pub selected: bool,
    /// Overlaps with the selection, can't be picked
    pub disabled: bool,
}

/// Collection of char for the table
pub enum TabChar {
    /// Vertical bar
    Bv,
    /// Horizontal bar
    Bh,
    /// Joint left
    Jl,
    /// Joint right
    Jr,
    /// Joint bottom left
    Jbl,
    /// Joint bottom right
    Jbr,
    /// Joint top left
    Jtl,
    /// Joint top right
    Jtr,
    /// Joint to top
    Jtt,
    /// Joint to bottom
    Jtb,
    /// Joint of the middle
    Jm,
}

impl TabChar {
    /// Value of the element
    pub fn val(&self) -> char {
        match *self {
            Self::Bv => '│',
            Self::Bh => '─',
            Self::Jl => '├',
            Self::Jr => '┤',
            Self::Jbl => '└',
            Self::Jbr => '┘',
            Self::Jtl => '┌',
            Self::Jtr => '┐',
            Self::Jtt => '┴',
            Self::Jtb => '┬',
            Self::Jm => '┼',
        }
    }
}

/// Position of a border line inside the table
pub enum Position {
    Top,
    Middle,
    Bottom,
}
