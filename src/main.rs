use std::{process::ExitCode, time::Duration};

use clap::{ArgAction, Parser};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use coursepick::{app::App, picker, schedule, schedule::models::Term, utils, view};

/// Where the schedule document lives
const SCHEDULE_URL: &str = "https://courses.cs.northwestern.edu/394/data/cs-courses.php";

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// URL of the schedule document
    #[clap(short, long, value_name = "URL", default_value = SCHEDULE_URL)]
    url: String,

    /// The term to show (Fall, Winter or Spring), default to current term
    #[clap(short, long, value_parser, value_name = "TERM")]
    term: Option<Term>,

    /// Toggle these courses then print the schedule, without prompting, i.e.: F101
    #[clap(short, long, value_name = "COURSE ID", num_args = 1..)]
    select: Vec<String>,

    /// Seconds to wait for the schedule
    #[clap(long, value_name = "SECONDS", default_value_t = 5)]
    timeout: u64,

    /// More logs, repeat for even more
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> coursepick::Result<()> {
    let user_agent = format!("coursepick/{}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(utils::get_term(args.term));
    view::display(&app.view());

    let schedule = schedule::fetch(
        &args.url,
        &user_agent,
        Duration::from_secs(args.timeout),
    )
    .await?;
    app.set_schedule(schedule);

    if args.select.is_empty() {
        return picker::interact(&mut app);
    }

    for id in &args.select {
        match app.toggle_id(id) {
            Ok(toggled) => info!(%id, ?toggled, "Toggled"),
            Err(err) if err.is_refusal() => warn!("{err}"),
            Err(err) => return Err(err),
        }
    }
    info!(selected = app.selection().len(), "Selection done");
    view::display(&app.view());

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
