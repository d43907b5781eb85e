//! Course schedule picker.
//!
//! Fetches a schedule document, shows the courses of a term and lets the user
//! select courses. Courses overlapping with the selection can't be picked.
//!
//! - [`meeting`] parses meeting times such as `MWF 11:00-11:50`
//! - [`conflict`] tells whether two courses overlap
//! - [`selection`] keeps the picked courses
//! - [`app`] owns the schedule, the shown term and the selection
//! - [`view`] turns the state into what is shown

pub mod app;
pub mod conflict;
pub mod error;
pub mod meeting;
pub mod picker;
pub mod schedule;
pub mod selection;
pub mod utils;
pub mod view;

pub use conflict::{days_overlap, hours_overlap, is_conflicting, time_conflict};
pub use error::{Error, Result};
pub use meeting::parse_meeting_time;
