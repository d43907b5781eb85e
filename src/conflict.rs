//! Meeting time conflicts between courses.
//!
//! Two courses conflict when they belong to the same term, share at least one
//! day and their hours overlap. Hours are half-open: a course ending at 11:50
//! doesn't conflict with one starting at 11:50.

use crate::{
    meeting::{Day, Days, Interval},
    schedule::models::Course,
};

/// True if both sets share a day
pub fn days_overlap(a: &Days, b: &Days) -> bool {
    // Compare day tokens, a character check would match `T` in both `Tu` and `Th`
    Day::ALL
        .iter()
        .any(|day| a.contains(*day) && b.contains(*day))
}

/// True if both intervals share at least one minute
pub fn hours_overlap(a: Interval, b: Interval) -> bool {
    a.start.max(b.start) < a.end.min(b.end)
}

/// True if both courses meet at the same time on a same day.
/// A course without a parsed meeting time never conflicts
pub fn time_conflict(a: &Course, b: &Course) -> bool {
    match (&a.meeting, &b.meeting) {
        (Some(a), Some(b)) => days_overlap(&a.days, &b.days) && hours_overlap(a.hours, b.hours),
        _ => false,
    }
}

/// Selected courses preventing `candidate` from being selected
///
/// Courses are compared by identity, the candidate itself is never reported
/// even when it is part of the selection
pub fn conflicts_with<'a>(
    candidate: &Course,
    selected: impl IntoIterator<Item = &'a Course>,
) -> Vec<&'a Course> {
    let Some(term) = candidate.term() else {
        return vec![];
    };

    selected
        .into_iter()
        .filter(|course| {
            !std::ptr::eq(*course, candidate)
                && course.term() == Some(term)
                && time_conflict(course, candidate)
        })
        .collect()
}

/// True if `candidate` overlaps with another course of the selection
pub fn is_conflicting<'a>(
    candidate: &Course,
    selected: impl IntoIterator<Item = &'a Course>,
) -> bool {
    !conflicts_with(candidate, selected).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::parse_meeting_time;

    fn course(id: &str, meets: &str) -> Course {
        Course {
            id: id.to_owned(),
            title: format!("Course {id}"),
            meets: meets.to_owned(),
            meeting: parse_meeting_time(meets).ok(),
        }
    }

    fn days(codes: &[Day]) -> Days {
        Days::new(codes.to_vec())
    }

    #[test]
    fn days_overlap_by_token() {
        let mwf = days(&[Day::M, Day::W, Day::F]);
        assert!(!days_overlap(&mwf, &days(&[Day::Tu, Day::Th])));
        assert!(days_overlap(&mwf, &days(&[Day::W])));
        assert!(!days_overlap(&days(&[Day::Tu]), &days(&[Day::Th])));
        assert!(!days_overlap(&Days::default(), &mwf));
    }

    #[test]
    fn back_to_back_hours_dont_overlap() {
        assert!(!hours_overlap(Interval::new(600, 650), Interval::new(650, 700)));
        assert!(!hours_overlap(Interval::new(650, 700), Interval::new(600, 650)));
        assert!(hours_overlap(Interval::new(600, 650), Interval::new(630, 700)));
        assert!(hours_overlap(Interval::new(600, 700), Interval::new(620, 640)));
    }

    #[test]
    fn reversed_or_empty_hours_dont_overlap() {
        assert!(!hours_overlap(Interval::new(650, 600), Interval::new(600, 700)));
        assert!(!hours_overlap(Interval::new(620, 620), Interval::new(600, 700)));
    }

    #[test]
    fn time_conflict_needs_days_and_hours() {
        let f101 = course("F101", "MWF 11:00-11:50");
        assert!(time_conflict(&f101, &course("F102", "MWF 11:30-12:20")));
        assert!(!time_conflict(&f101, &course("F111", "MWF 13:00-13:50")));
        assert!(!time_conflict(&f101, &course("F211", "TuTh 11:00-11:50")));
    }

    #[test]
    fn never_conflicts_with_itself() {
        let f101 = course("F101", "MWF 11:00-11:50");
        assert!(!is_conflicting(&f101, [&f101]));
    }

    #[test]
    fn identical_records_still_conflict() {
        let a = course("F101", "MWF 11:00-11:50");
        let b = a.clone();
        assert!(is_conflicting(&a, [&b]));
    }

    #[test]
    fn other_terms_never_conflict() {
        let fall = course("F111", "MWF 11:00-11:50");
        let winter = course("W111", "MWF 11:00-11:50");
        assert!(time_conflict(&fall, &winter));
        assert!(!is_conflicting(&fall, [&winter]));
    }

    #[test]
    fn unknown_terms_never_conflict() {
        let a = course("X101", "MWF 11:00-11:50");
        let b = course("X102", "MWF 11:00-11:50");
        assert!(!is_conflicting(&a, [&b]));
    }

    #[test]
    fn malformed_meeting_fails_open() {
        let broken = course("F213", "Fri 11-12");
        let f101 = course("F101", "MWF 11:00-11:50");
        assert!(broken.meeting.is_none());
        assert!(!is_conflicting(&broken, [&f101]));
        assert!(!is_conflicting(&f101, [&broken]));
    }

    #[test]
    fn reports_blocking_courses() {
        let f101 = course("F101", "MWF 11:00-11:50");
        let f111 = course("F111", "MWF 13:00-13:50");
        let f102 = course("F102", "MWF 11:30-13:20");
        let blocking: Vec<&str> = conflicts_with(&f102, [&f111, &f101])
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(blocking, ["F111", "F101"]);
    }
}
