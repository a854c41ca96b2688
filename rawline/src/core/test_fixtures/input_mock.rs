// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{self, ErrorKind, Read}};

/// One scripted outcome of [`InputMock::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputStep {
    /// Bytes handed out across as many reads as it takes to drain them.
    Bytes(Vec<u8>),
    /// A single read that fails with this kind.
    Fail(ErrorKind),
}

/// Input device that plays back [`InputStep`]s, so tests can interleave keystrokes with
/// read errors. Once the script runs out every read returns `Ok(0)`, like a closed
/// stream.
#[derive(Debug, Clone, Default)]
pub struct InputMock {
    steps: VecDeque<InputStep>,
}

impl InputMock {
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = InputStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

impl Read for InputMock {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.steps.pop_front() {
            None => Ok(0),
            Some(InputStep::Fail(kind)) => Err(io::Error::new(kind, "scripted read failure")),
            Some(InputStep::Bytes(mut bytes)) => {
                let count = bytes.len().min(buf.len());
                buf[..count].copy_from_slice(&bytes[..count]);
                if count < bytes.len() {
                    self.steps.push_front(InputStep::Bytes(bytes.split_off(count)));
                }
                Ok(count)
            }
        }
    }
}
