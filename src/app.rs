use tracing::{debug, info};

use crate::{
    conflict::conflicts_with,
    error::{Error, Result},
    schedule::models::{CourseKey, Schedule, Term},
    selection::Selection,
    view::{self, models::View},
};

/// Outcome of a toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    Selected,
    Unselected,
}

/// State of the picker, owned by the UI loop
#[derive(Debug)]
pub struct App {
    /// `None` while the schedule is being fetched
    schedule: Option<Schedule>,
    term: Term,
    selection: Selection,
}

impl App {
    pub fn new(term: Term) -> Self {
        Self {
            schedule: None,
            term,
            selection: Selection::new(),
        }
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the whole schedule.
    /// The selection is dropped since its keys refer to the old courses
    pub fn set_schedule(&mut self, schedule: Schedule) {
        info!(
            title = %schedule.title,
            courses = schedule.courses.len(),
            "New schedule"
        );
        self.selection.clear();
        self.schedule = Some(schedule);
    }

    pub fn select_term(&mut self, term: Term) {
        debug!(%term, "Term selected");
        self.term = term;
    }

    /// Toggle a course, refusing to select it if it overlaps with the selection.
    /// Unselecting is always allowed
    pub fn toggle(&mut self, key: CourseKey) -> Result<Toggled> {
        let schedule = self.schedule.as_ref().ok_or(Error::NotLoaded)?;
        let course = schedule.get(key).ok_or(Error::UnknownCourse(key))?;

        if self.selection.contains(key) {
            self.selection.toggle(key);
            debug!(id = %course.id, "Course unselected");
            return Ok(Toggled::Unselected);
        }

        let blocking = conflicts_with(course, self.selection.courses(schedule));
        if !blocking.is_empty() {
            return Err(Error::Conflict {
                id: course.id.clone(),
                with: blocking.iter().map(|c| c.id.clone()).collect(),
            });
        }

        self.selection.toggle(key);
        debug!(id = %course.id, "Course selected");

        Ok(Toggled::Selected)
    }

    /// Toggle a course by its identifier, i.e.: `F101`
    pub fn toggle_id(&mut self, id: &str) -> Result<Toggled> {
        let key = self
            .schedule
            .as_ref()
            .ok_or(Error::NotLoaded)?
            .find(id)
            .ok_or_else(|| Error::UnknownCourseId(id.to_owned()))?;

        self.toggle(key)
    }

    pub fn view(&self) -> View {
        match &self.schedule {
            None => View::Loading,
            Some(schedule) => View::Page(view::page(schedule, self.term, &self.selection)),
        }
    }
}
