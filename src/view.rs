use crate::{
    conflict::is_conflicting,
    schedule::models::{Schedule, Term},
    selection::Selection,
    utils::etc_str,
};

pub mod models;

use models::{CourseButton, Page, Position, TabChar, TermButton, View};

/// Width of the columns: state, course, meeting time
const CELLS: [usize; 3] = [5, 64, 18];

pub fn banner(title: &str) -> String {
    title.to_owned()
}

/// Buttons of the term filter, the active one highlighted
pub fn term_selector(active: Term) -> Vec<TermButton> {
    Term::ALL
        .into_iter()
        .map(|term| TermButton {
            term,
            active: term == active,
        })
        .collect()
}

/// Buttons of the courses of a term
pub fn course_list(schedule: &Schedule, term: Term, selection: &Selection) -> Vec<CourseButton> {
    schedule
        .term_courses(term)
        .map(|(key, course)| {
            let selected = selection.contains(key);
            CourseButton {
                key,
                label: course.label(),
                meets: course.meets.clone(),
                selected,
                // A selected course can always be dropped
                disabled: !selected && is_conflicting(course, selection.courses(schedule)),
            }
        })
        .collect()
}

pub fn page(schedule: &Schedule, term: Term, selection: &Selection) -> Page {
    Page {
        banner: banner(&schedule.title),
        terms: term_selector(term),
        courses: course_list(schedule, term, selection),
    }
}

/// Border line of the table, `cells` are the width of each column
pub fn line_table(cells: &[usize], pos: &Position) -> String {
    let (left, joint, right) = match pos {
        Position::Top => (TabChar::Jtl, TabChar::Jtb, TabChar::Jtr),
        Position::Middle => (TabChar::Jl, TabChar::Jm, TabChar::Jr),
        Position::Bottom => (TabChar::Jbl, TabChar::Jtt, TabChar::Jbr),
    };

    let mut line = String::from(left.val());
    for (i, width) in cells.iter().enumerate() {
        line.extend(std::iter::repeat(TabChar::Bh.val()).take(*width));
        line.push(if i + 1 == cells.len() {
            right.val()
        } else {
            joint.val()
        });
    }

    line
}

/// State of a course button
pub fn mark(button: &CourseButton) -> &'static str {
    match (button.selected, button.disabled) {
        (true, _) => "[x]",
        (false, true) => " - ",
        (false, false) => "[ ]",
    }
}

/// Caption of a term button
pub fn term_caption(button: &TermButton) -> String {
    if button.active {
        format!("[{}]", button.term)
    } else {
        format!(" {} ", button.term)
    }
}

/// Text of the view
pub fn render(view: &View) -> String {
    let page = match view {
        View::Loading => return String::from("Loading the schedule..."),
        View::Page(page) => page,
    };

    let sep = TabChar::Bv.val();
    let [cl_mark, cl_label, cl_meets] = CELLS;

    let mut lines = vec![
        page.banner.clone(),
        page.terms.iter().map(term_caption).collect::<Vec<_>>().join(" "),
        line_table(&CELLS, &Position::Top),
    ];

    if page.courses.is_empty() {
        lines.push(format!(
            "{sep}{:^width$}{sep}",
            "No course this term",
            width = CELLS.iter().sum::<usize>() + CELLS.len() - 1
        ));
    }

    for (i, button) in page.courses.iter().enumerate() {
        if i > 0 {
            lines.push(line_table(&CELLS, &Position::Middle));
        }
        lines.push(format!(
            "{sep}{:^cl_mark$}{sep} {:<w_label$}{sep} {:<w_meets$}{sep}",
            mark(button),
            etc_str(&button.label, cl_label - 1),
            etc_str(&button.meets, cl_meets - 1),
            w_label = cl_label - 1,
            w_meets = cl_meets - 1,
        ));
    }
    lines.push(line_table(&CELLS, &Position::Bottom));

    lines.join("\n")
}

/// Show the view
pub fn display(view: &View) {
    println!("{}", render(view));
}
