// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Demo REPL: reads a few lines with history and echoes them back.
//!
//! ```bash
//! cargo run --bin rawline -- --count 0 --enable-logging
//! tail -f log.txt
//! ```

use clap::Parser;
use rawline::{CancelReason, EditorOptions, LineEditor, ReadlineEvent, ok,
              try_initialize_logging_global};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rawline")]
#[command(about = "Read lines from the terminal with in-place editing and history")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    #[arg(
        long,
        short = 'p',
        default_value = "> ",
        help = "Prompt shown in front of every line."
    )]
    pub prompt: String,

    #[arg(
        long,
        short = 'c',
        default_value_t = 3,
        help = "Number of lines to read. 0 keeps reading until Ctrl+C or Ctrl+D."
    )]
    pub count: usize,

    #[arg(
        long,
        short = 'd',
        help = "Print the raw bytes of every key as hex before applying it."
    )]
    pub debug_keys: bool,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let mut editor = LineEditor::new_stdio(EditorOptions {
        debug_keys: cli_arg.debug_keys,
    });

    let mut lines_read = 0;
    while cli_arg.count == 0 || lines_read < cli_arg.count {
        match editor.get_line(&cli_arg.prompt)? {
            ReadlineEvent::Line(line) => {
                lines_read += 1;
                println!("[{lines_read}] {line}");
            }
            ReadlineEvent::Cancelled(CancelReason::EndOfInput) => break,
            ReadlineEvent::Cancelled(reason) => {
                eprintln!("{:?}", miette::Report::new(reason));
                break;
            }
        }
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...", lines_read);
    });

    ok!()
}
