// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RawModeControl, StdMutex};
use miette::miette;
use std::sync::{Arc, PoisonError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RawModeTransition {
    Enabled,
    Disabled,
}

/// Stand-in for [`crate::TermiosRawMode`] that records every transition instead of
/// touching a terminal. Clones share the same record, so a test can hand one clone to
/// the editor and inspect the other afterwards.
#[derive(Clone, Debug, Default)]
pub struct RawModeMock {
    pub transitions: Arc<StdMutex<Vec<RawModeTransition>>>,
    pub fail_on_enable: bool,
}

impl RawModeMock {
    /// A mock whose [`enable_raw_mode`](RawModeControl::enable_raw_mode) always fails.
    #[must_use]
    pub fn new_failing() -> Self {
        Self {
            fail_on_enable: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn get_copy_of_transitions(&self) -> Vec<RawModeTransition> {
        self.transitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `true` if the last recorded transition left the terminal in raw mode.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(
            self.get_copy_of_transitions().last(),
            Some(RawModeTransition::Enabled)
        )
    }

    fn record(&self, transition: RawModeTransition) {
        self.transitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(transition);
    }
}

impl RawModeControl for RawModeMock {
    fn enable_raw_mode(&mut self) -> miette::Result<()> {
        if self.fail_on_enable {
            return Err(miette!("mock terminal refused raw mode"));
        }
        self.record(RawModeTransition::Enabled);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> miette::Result<()> {
        if self.is_raw() {
            self.record(RawModeTransition::Disabled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disable_without_enable_records_nothing() {
        let mut raw_mode = RawModeMock::default();
        raw_mode.disable_raw_mode().unwrap();
        assert!(raw_mode.get_copy_of_transitions().is_empty());
    }

    #[test]
    fn test_clones_share_transitions() {
        let raw_mode = RawModeMock::default();
        let mut clone = raw_mode.clone();
        clone.enable_raw_mode().unwrap();
        assert!(raw_mode.is_raw());
        clone.disable_raw_mode().unwrap();
        assert_eq!(
            raw_mode.get_copy_of_transitions(),
            vec![RawModeTransition::Enabled, RawModeTransition::Disabled]
        );
    }
}
