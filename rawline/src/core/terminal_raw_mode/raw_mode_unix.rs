// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RawModeControl;
use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, Termios}};
use std::{fs::File,
          io::{self, Read},
          path::Path};

const DEV_TTY: &str = "/dev/tty";

/// The device keystrokes come from, and the one whose line discipline
/// [`TermiosRawMode`] switches. Stdin when it is a tty. When stdin is piped the user's
/// terminal is opened through `/dev/tty` and read directly, so raw mode and key input
/// always refer to the same terminal, and `Ctrl+C` still arrives as `0x03`.
///
/// [`crate::LineEditor::new_stdio`] reads from this.
#[derive(Debug)]
pub enum TerminalInput {
    Stdin(io::Stdin),
    DevTty(File),
}

impl TerminalInput {
    /// # Errors
    ///
    /// Returns an error if stdin is not a tty and there is no controlling terminal.
    pub fn open() -> miette::Result<Self> {
        Self::open_with(termios::isatty(io::stdin()), Path::new(DEV_TTY))
    }

    fn open_with(stdin_is_tty: bool, tty_path: &Path) -> miette::Result<Self> {
        if stdin_is_tty {
            return Ok(Self::Stdin(io::stdin()));
        }
        File::options()
            .read(true)
            .write(true)
            .open(tty_path)
            .map(Self::DevTty)
            .map_err(|err| {
                miette!("no controlling terminal, {}: {err}", tty_path.display())
            })
    }

    fn get_attrs(&self) -> miette::Result<Termios> {
        termios::tcgetattr(self).map_err(|err| miette!("tcgetattr failed: {err}"))
    }

    fn set_attrs(&self, when: OptionalActions, attrs: &Termios) -> miette::Result<()> {
        termios::tcsetattr(self, when, attrs)
            .map_err(|err| miette!("tcsetattr failed: {err}"))
    }
}

impl Read for TerminalInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read(buf),
            Self::DevTty(file) => file.read(buf),
        }
    }
}

impl AsFd for TerminalInput {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            Self::Stdin(stdin) => stdin.as_fd(),
            Self::DevTty(file) => file.as_fd(),
        }
    }
}

/// [`RawModeControl`] backed by termios, applied to the device [`TerminalInput::open`]
/// picks.
///
/// The attributes seen by the first [`enable_raw_mode`](RawModeControl::enable_raw_mode)
/// are saved in the struct itself, not in a process global, so two editors never
/// restore each other's settings.
#[derive(Debug, Default)]
pub struct TermiosRawMode {
    saved: Option<Termios>,
}

impl RawModeControl for TermiosRawMode {
    /// `make_raw` is `cfmakeraw`: no line buffering, no echo, no `ISIG`, no `OPOST`,
    /// and reads return after one byte.
    fn enable_raw_mode(&mut self) -> miette::Result<()> {
        let terminal = TerminalInput::open()?;
        let cooked = terminal.get_attrs()?;

        let mut raw = cooked.clone();
        raw.make_raw();
        terminal.set_attrs(OptionalActions::Now, &raw)?;

        self.saved.get_or_insert(cooked);
        tracing::trace!(message = "raw mode -> on");
        Ok(())
    }

    /// Does nothing unless raw mode was enabled. Pending output is drained before the
    /// saved attributes come back, so the final CRLF is not mangled.
    fn disable_raw_mode(&mut self) -> miette::Result<()> {
        let Some(saved) = self.saved.take() else {
            return Ok(());
        };
        let terminal = TerminalInput::open()?;
        terminal.set_attrs(OptionalActions::Drain, &saved)?;
        tracing::trace!(message = "raw mode -> off");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditorOptions, LineEditor, RawModeMock, ReadlineEvent, StdoutMock};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_stdin_tty_is_read_directly() {
        let input = TerminalInput::open_with(true, Path::new("/nonexistent/tty")).unwrap();
        assert!(matches!(input, TerminalInput::Stdin(_)));
    }

    #[test]
    fn test_piped_stdin_reads_keys_from_the_terminal_device() {
        let dir = tempdir().unwrap();
        let tty_path = dir.path().join("tty");
        std::fs::write(&tty_path, b"hi\r").unwrap();

        let input = TerminalInput::open_with(false, &tty_path).unwrap();
        assert!(matches!(input, TerminalInput::DevTty(_)));

        let mut editor = LineEditor::new_with_devices(
            input,
            StdoutMock::new(),
            RawModeMock::default(),
            EditorOptions::default(),
        );
        assert_eq!(
            editor.get_line("> ").unwrap(),
            ReadlineEvent::Line("hi".to_string())
        );
    }

    #[test]
    fn test_piped_stdin_without_terminal_fails() {
        let dir = tempdir().unwrap();
        let report =
            TerminalInput::open_with(false, &dir.path().join("missing")).unwrap_err();
        assert!(report.to_string().contains("no controlling terminal"), "{report}");
    }

    #[test]
    fn test_disable_without_enable_is_noop() {
        let mut raw_mode = TermiosRawMode::default();
        assert!(raw_mode.disable_raw_mode().is_ok());
        assert!(raw_mode.saved.is_none());
    }
}
