// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{io, process::ExitCode};

use clap::Parser;
use crossterm::tty::IsTty;
use edit_gap::INITIAL_CAPACITY;
use edit_gap_cli_lib::{
    display::Display, error::ScriptError, script_source::ScriptSource, session::EditSession,
};
use tracing::{info, Level};

/// Replays an edit script against a gap buffer and prints what it asks for.
///
/// Each script line is one command: `insert <index> <text>`, `insert_at <index> <unit>`,
/// `del_at <index>`, `del <begin> <count>`, `at <index>`, `clear`, `len`, `print` or `repr`.
#[derive(Parser, Debug)]
#[command(name = "edit-gap", version)]
struct Args {
    /// Edit script to replay, or `-` for stdin. Runs a built-in demo when omitted.
    script: Option<String>,

    /// Print the gap-marked storage after every edit.
    #[arg(long)]
    show_gap: bool,

    /// Never style gap slots, even on a terminal.
    #[arg(long)]
    no_color: bool,

    /// Initial capacity of the buffer, in bytes.
    #[arg(long, default_value_t = INITIAL_CAPACITY)]
    capacity: usize,

    /// Most verbose level of diagnostics written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .without_time()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("edit-gap: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ScriptError> {
    let source = ScriptSource::from_arg(args.script.as_deref())?;
    let script = source.read_to_string()?;

    let stdout = io::stdout();
    let styled = !args.no_color && stdout.is_tty();
    let mut display = Display::new(stdout.lock(), styled);

    info!(source = %source.name(), capacity = args.capacity, "starting session");
    EditSession::new(args.capacity, args.show_gap).replay(&script, &mut display)
}
