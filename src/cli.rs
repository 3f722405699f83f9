use clap::{arg, command, ArgAction, Command};
use std::io::{self, BufWriter};
use tracing::level_filters::LevelFilter;

use crate::{grab, Config, GrabError};

pub fn build_command() -> Command {
    command!()
        .about("Print every C++ source under a fixed directory as fenced Markdown blocks")
        .arg(arg!(-v --verbose "Report skipped files on stderr").action(ArgAction::SetTrue))
}

pub fn run() -> Result<(), GrabError> {
    let matches = build_command().get_matches();

    // Logs go to stderr so stdout stays clean for the concatenated output
    let level = if matches.get_flag("verbose") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = Config::default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    grab(&config, &mut out)?;

    Ok(())
}
