// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RawModeControl;
use miette::miette;
use std::io::{self, Read};

/// Stdin. There is no separate terminal device to open on these platforms.
#[derive(Debug)]
pub struct TerminalInput(io::Stdin);

impl TerminalInput {
    /// # Errors
    ///
    /// Never fails here. The signature matches the unix version.
    pub fn open() -> miette::Result<Self> { Ok(Self(io::stdin())) }
}

impl Read for TerminalInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.0.read(buf) }
}

/// Placeholder for platforms without termios. Enabling raw mode always fails.
#[derive(Debug, Default)]
pub struct TermiosRawMode;

impl RawModeControl for TermiosRawMode {
    fn enable_raw_mode(&mut self) -> miette::Result<()> {
        Err(miette!("Platform not supported"))
    }

    fn disable_raw_mode(&mut self) -> miette::Result<()> { Ok(()) }
}
