use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{error::Result, meeting::parse_meeting_time, utils};

pub mod models;

use models::{Course, CourseKey, RawCourse, RawSchedule, Schedule, Term};

impl From<RawCourse> for Course {
    fn from(raw: RawCourse) -> Self {
        let meeting = match parse_meeting_time(&raw.meets) {
            Ok(meeting) => {
                debug!(id = %raw.id, %meeting, "Meeting parsed");
                Some(meeting)
            }
            Err(err) => {
                // Keep the course, it just won't take part in conflicts
                warn!(id = %raw.id, "{err}");
                None
            }
        };

        Self {
            id: raw.id,
            title: raw.title,
            meets: raw.meets,
            meeting,
        }
    }
}

impl From<RawSchedule> for Schedule {
    fn from(raw: RawSchedule) -> Self {
        let courses: Vec<Course> = raw.courses.into_iter().map(Course::from).collect();

        for course in courses.iter().filter(|course| course.term().is_none()) {
            warn!(id = %course.id, "Unknown term, course will be hidden");
        }

        Self {
            title: raw.title,
            courses,
        }
    }
}

impl Schedule {
    /// Decode a schedule document and parse every meeting time
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSchedule = serde_json::from_str(json)?;

        Ok(raw.into())
    }

    pub fn get(&self, key: CourseKey) -> Option<&Course> {
        self.courses.get(key)
    }

    /// Courses of a term, in schedule order
    pub fn term_courses(&self, term: Term) -> impl Iterator<Item = (CourseKey, &Course)> + '_ {
        self.courses
            .iter()
            .enumerate()
            .filter(move |(_, course)| course.term() == Some(term))
    }

    /// Key of the first course with this identifier
    pub fn find(&self, id: &str) -> Option<CourseKey> {
        self.courses.iter().position(|course| course.id == id)
    }
}

/// Fetch the schedule document
pub async fn fetch(url: &str, user_agent: &str, timeout: Duration) -> Result<Schedule> {
    info!(url, "Fetching schedule");
    let raw: RawSchedule = utils::get_json(url, user_agent, timeout).await?;

    let schedule = Schedule::from(raw);
    debug!(
        title = %schedule.title,
        courses = schedule.courses.len(),
        "Schedule loaded"
    );

    Ok(schedule)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;
    use crate::meeting::{Day, Interval};

    pub const SAMPLE: &str = r#"{
      "title": "CS Courses for 2018-2019",
      "courses": [
        { "id": "F101", "title": "Computer Science: Concepts, Philosophy, and Connections", "meets": "MWF 11:00-11:50" },
        { "id": "F110", "title": "Intro Programming for non-majors", "meets": "MWF 10:00-10:50" },
        { "id": "F111", "title": "Fundamentals of Computer Programming I", "meets": "MWF 13:00-13:50" },
        { "id": "F211", "title": "Fundamentals of Computer Programming II", "meets": "TuTh 12:30-13:50" },
        { "id": "W111", "title": "Fundamentals of Computer Programming I", "meets": "MWF 11:00-11:50" },
        { "id": "S213", "title": "Introduction to Computer Systems", "meets": "Fri 11-12" },
        { "id": "X999", "title": "Mystery", "meets": "MWF 11:00-11:50" }
      ]
    }"#;

    pub fn sample() -> Schedule {
        Schedule::from_json(SAMPLE).unwrap()
    }

    #[test]
    fn annotates_meetings_on_load() {
        let schedule = sample();
        assert_eq!(schedule.title, "CS Courses for 2018-2019");
        assert_eq!(schedule.courses.len(), 7);

        let f211 = &schedule.courses[schedule.find("F211").unwrap()];
        let meeting = f211.meeting.as_ref().unwrap();
        assert!(meeting.days.contains(Day::Tu));
        assert!(meeting.days.contains(Day::Th));
        assert_eq!(meeting.hours, Interval::new(750, 830));
    }

    #[test]
    fn keeps_malformed_course() {
        let schedule = sample();
        let s213 = &schedule.courses[schedule.find("S213").unwrap()];
        assert_eq!(s213.meets, "Fri 11-12");
        assert!(s213.meeting.is_none());
    }

    #[test]
    fn filters_by_term() {
        let schedule = sample();
        let fall: Vec<&str> = schedule
            .term_courses(Term::Fall)
            .map(|(_, course)| course.id.as_str())
            .collect();
        assert_eq!(fall, ["F101", "F110", "F111", "F211"]);

        let spring: Vec<CourseKey> = schedule.term_courses(Term::Spring).map(|(k, _)| k).collect();
        assert_eq!(spring, [5]);
    }

    #[test]
    fn unknown_term_is_hidden() {
        let schedule = sample();
        assert!(Term::ALL.iter().all(|term| schedule
            .term_courses(*term)
            .all(|(_, course)| course.id != "X999")));
    }

    #[test]
    fn rejects_wrong_document() {
        assert!(matches!(
            Schedule::from_json(r#"{ "title": "no courses" }"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn labels_course() {
        let schedule = sample();
        assert_eq!(
            schedule.courses[0].label(),
            "Fall CS 101: Computer Science: Concepts, Philosophy, and Connections"
        );
        assert_eq!(schedule.courses[0].number(), "101");
    }

    #[test]
    fn term_from_str() {
        assert_eq!("w".parse::<Term>().unwrap(), Term::Winter);
        assert_eq!("Spring".parse::<Term>().unwrap(), Term::Spring);
        assert_eq!(" fall ".parse::<Term>().unwrap(), Term::Fall);
        assert!(matches!("Summer".parse::<Term>(), Err(Error::UnknownTerm(_))));
        assert_eq!(Term::from_id("X101"), None);
        assert_eq!(Term::from_id(""), None);
    }

    async fn serve_once(response: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/cs-courses.json")
    }

    #[tokio::test]
    async fn fetches_schedule() {
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{SAMPLE}",
            SAMPLE.len()
        ))
        .await;

        let schedule = fetch(&url, "coursepick/test", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(schedule.courses.len(), 7);
        assert!(schedule.courses[0].meeting.is_some());
    }

    #[tokio::test]
    async fn fails_on_error_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n".to_owned(),
        )
        .await;

        let err = fetch(&url, "coursepick/test", Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND)
        );
    }
}
