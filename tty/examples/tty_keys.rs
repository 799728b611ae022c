// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints every key you press, while a clock and a tick counter keep updating in the top
//! right corner of the terminal.
//!
//! ```text
//! cargo run -p r3bl_tty --example tty_keys -- --debug --log-file /tmp/tty_keys.log
//! ```
//!
//! Press `` ` `` to quit. `Ctrl+D` and `Ctrl+C` also quit, since raw mode turns them
//! into plain bytes instead of EOF and SIGINT.

use chrono::Local;
use clap::Parser;
use miette::IntoDiagnostic as _;
use r3bl_tty::{BackgroundTask, CRLF, DEL, EOT, ETX, LogicalKey, SP, TracingConfig,
               TtySession, TtySessionConfig, fmt_hex, try_initialize_logging_global};
use std::{cell::RefCell,
          fmt::{Display, Formatter, Result as FmtResult},
          io::{Write, stdout},
          rc::Rc};

/// Column where the background tasks draw.
const TASK_COLUMN: u16 = 50;

const QUIT_KEY: u8 = b'`';

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(long = "debug", short = 'd', help = "Show terminal attributes and key names")]
    debug: bool,
    #[arg(
        long = "log-file",
        short = 'l',
        help = "Write tracing output to this file (default: r3bl_tty.log)"
    )]
    log_file: Option<String>,
}

/// Why the key loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoExit {
    QuitKey,
    EndOfTransmission,
    EndOfText,
}

impl DemoExit {
    fn from_key(key: LogicalKey) -> Option<Self> {
        match key {
            LogicalKey::Char(QUIT_KEY) => Some(Self::QuitKey),
            LogicalKey::Char(EOT) => Some(Self::EndOfTransmission),
            LogicalKey::Char(ETX) => Some(Self::EndOfText),
            _ => None,
        }
    }
}

impl Display for DemoExit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::QuitKey => write!(f, "got quit key `"),
            Self::EndOfTransmission => write!(f, "got EOT ^D"),
            Self::EndOfText => write!(f, "got ETX ^C"),
        }
    }
}

/// Writes `text` at `row`, `col` (1 based) and puts the cursor back where it was.
fn draw_at(row: u16, col: u16, text: &str) -> miette::Result<()> {
    let mut stdout = stdout().lock();
    // ESC 7 saves the cursor, ESC 8 restores it, CSI 0K clears to the end of the line.
    write!(stdout, "\x1b7\x1b[{row};{col}H{text}\x1b[0K\x1b8").into_diagnostic()?;
    stdout.flush().into_diagnostic()
}

/// Shows the local time on row 1.
#[derive(Debug)]
struct ClockTask {
    col: u16,
}

impl BackgroundTask for ClockTask {
    fn run_tick(&mut self) -> miette::Result<()> {
        let now = Local::now().format("%a %b %e %H:%M:%S %Y").to_string();
        draw_at(1, self.col, &now)
    }
}

/// Shows the number of ticks so far on row 2.
#[derive(Debug, Default)]
struct TickCounterTask {
    count: u64,
}

impl BackgroundTask for TickCounterTask {
    fn run_tick(&mut self) -> miette::Result<()> {
        self.count += 1;
        draw_at(2, TASK_COLUMN, &self.count.to_string())
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Raw mode and the task output own the display, so tracing goes to a file.
    try_initialize_logging_global(TracingConfig::new_file(cli.log_file.clone()))?;
    tracing::debug!(message = "Starting tty_keys", cli = ?cli);

    let mut session = TtySession::try_new(TtySessionConfig { debug: cli.debug })?;
    session.add_background_task(Rc::new(RefCell::new(ClockTask { col: TASK_COLUMN })));
    session.add_background_task(Rc::new(RefCell::new(TickCounterTask::default())));

    let exit = run_key_loop(&mut session)?;
    session.finish()?;

    tracing::debug!(message = "Exiting tty_keys", exit = %exit);
    println!();
    println!("Bye! ({exit})");
    Ok(())
}

fn run_key_loop(session: &mut TtySession) -> miette::Result<DemoExit> {
    loop {
        let key = session.get_next_key()?;
        if let Some(exit) = DemoExit::from_key(key) {
            return Ok(exit);
        }

        let byte = key.as_byte();
        let shown = if byte <= SP || byte >= DEL {
            '.'
        } else {
            char::from(byte)
        };

        let mut stdout = stdout().lock();
        write!(stdout, " char: {shown} {}{CRLF}", fmt_hex(byte.into(), 2)).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;
    }
}
