use std::time::Duration;

use chrono::{Datelike, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{Error, Result},
    schedule::models::Term,
};

/// Get a JSON document, any non-2xx answer is an error
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    user_agent: &str,
    timeout: Duration,
) -> Result<T> {
    // Use custom User-Agent
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    let response = client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    debug!(url, %status, "Response received");
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await?;

    Ok(serde_json::from_str(&body)?)
}

/// Get the current term depending on the current date
pub fn get_term(term: Option<Term>) -> Term {
    match term {
        // Force the asked term
        Some(t) => t,
        // Find the potential term
        None => term_of_month(Utc::now().month()),
    }
}

fn term_of_month(month: u32) -> Term {
    match month {
        // From september to december
        9..=12 => Term::Fall,
        // From january to march
        1..=3 => Term::Winter,
        // From april to august
        _ => Term::Spring,
    }
}

/// Shorten a string to fit in `width` columns, ending it with `…`
pub fn etc_str(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }

    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');

    short
}
