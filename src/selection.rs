use crate::schedule::models::{Course, CourseKey, Schedule};

/// Courses picked by the user, most recently toggled first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<CourseKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the course if selected, else put it in front.
    /// Doesn't check for conflicts
    pub fn toggle(&mut self, key: CourseKey) {
        if let Some(i) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(i);
        } else {
            self.keys.insert(0, key);
        }
    }

    pub fn contains(&self, key: CourseKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn keys(&self) -> &[CourseKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Selected courses of the schedule, keys out of the schedule are skipped
    pub fn courses<'a>(&'a self, schedule: &'a Schedule) -> impl Iterator<Item = &'a Course> {
        self.keys.iter().filter_map(move |key| schedule.get(*key))
    }
}
