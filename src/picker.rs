use dialoguer::Select;
use tracing::{info, warn};

use crate::{
    app::{App, Toggled},
    error::Result,
    schedule::models::{CourseKey, Term},
    view::{
        self,
        models::{Page, View},
    },
};

const DISCLAIMER: &str = "(arrows to move, ENTER to validate, ESC to quit)";

/// What a menu entry does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ShowTerm(Term),
    Toggle(CourseKey),
    Quit,
}

/// Menu entries of a page: terms, then courses, then quit
pub fn actions(page: &Page) -> Vec<(String, Action)> {
    let terms = page
        .terms
        .iter()
        .filter(|button| !button.active)
        .map(|button| (format!("Show {}", button.term), Action::ShowTerm(button.term)));

    let courses = page.courses.iter().map(|button| {
        let mut item = format!("{} {}", view::mark(button), button.label);
        if button.disabled {
            item.push_str(" (conflict)");
        }
        (item, Action::Toggle(button.key))
    });

    terms
        .chain(courses)
        .chain(std::iter::once((String::from("Done"), Action::Quit)))
        .collect()
}

/// Apply an action, refusals are reported but don't stop the picker
pub fn apply(app: &mut App, action: Action) -> Result<bool> {
    match action {
        Action::ShowTerm(term) => app.select_term(term),
        Action::Toggle(key) => match app.toggle(key) {
            Ok(Toggled::Selected) => info!(key, "Selected"),
            Ok(Toggled::Unselected) => info!(key, "Unselected"),
            Err(err) if err.is_refusal() => {
                warn!("{err}");
                eprintln!("{err}");
            }
            Err(err) => return Err(err),
        },
        Action::Quit => return Ok(false),
    }

    Ok(true)
}

/// Let the user pick courses until they are done
pub fn interact(app: &mut App) -> Result<()> {
    let mut cursor = 0;
    loop {
        let view = app.view();
        view::display(&view);

        let View::Page(page) = view else {
            return Ok(());
        };

        let entries = actions(&page);
        let items: Vec<&str> = entries.iter().map(|(item, _)| item.as_str()).collect();
        let choice = Select::new()
            .with_prompt(format!("Pick an action {DISCLAIMER}"))
            .items(&items)
            .default(cursor.min(items.len() - 1))
            .interact_opt()?;

        let Some(i) = choice else {
            return Ok(());
        };
        cursor = i;

        if !apply(app, entries[i].1)? {
            return Ok(());
        }
    }
}
