// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform-agnostic raw mode trait and the RAII guard built on top of it.

/// Switches a terminal between raw mode and the mode it was in before.
///
/// Implementations must make [`disable_raw_mode`](Self::disable_raw_mode) a no-op when
/// raw mode was never enabled.
pub trait RawModeControl {
    /// Save the current terminal settings and switch to raw mode.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if the terminal attributes cannot be read or
    /// written, or the platform is not supported.
    fn enable_raw_mode(&mut self) -> miette::Result<()>;

    /// Restore the settings saved by [`enable_raw_mode`](Self::enable_raw_mode).
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if the terminal attributes cannot be written.
    fn disable_raw_mode(&mut self) -> miette::Result<()>;
}

/// RAII guard that automatically disables raw mode when dropped.
///
/// Recommended way to use raw mode as it ensures terminal restoration on every exit
/// path, including early returns via `?` and panics.
#[derive(Debug)]
pub struct RawModeGuard<'a, C: RawModeControl + ?Sized> {
    control: &'a mut C,
}

impl<'a, C: RawModeControl + ?Sized> RawModeGuard<'a, C> {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if raw mode cannot be enabled. Nothing needs to
    /// be restored in that case, and no guard is returned.
    pub fn try_new(control: &'a mut C) -> miette::Result<Self> {
        control.enable_raw_mode()?;
        Ok(RawModeGuard { control })
    }
}

impl<C: RawModeControl + ?Sized> Drop for RawModeGuard<'_, C> {
    fn drop(&mut self) {
        if let Err(report) = self.control.disable_raw_mode() {
            tracing::error!(message = "Failed to restore terminal mode", error = %report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawModeMock, RawModeTransition};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut raw_mode = RawModeMock::default();
        {
            let _guard = RawModeGuard::try_new(&mut raw_mode).unwrap();
        }
        assert!(!raw_mode.is_raw());
        assert_eq!(
            raw_mode.get_copy_of_transitions(),
            vec![RawModeTransition::Enabled, RawModeTransition::Disabled]
        );
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let raw_mode = RawModeMock::default();
        let raw_mode_clone = raw_mode.clone();

        let result = std::panic::catch_unwind(move || {
            let mut raw_mode = raw_mode_clone;
            let _guard = RawModeGuard::try_new(&mut raw_mode).unwrap();
            panic!("boom");
        });

        assert!(result.is_err());
        assert!(!raw_mode.is_raw());
    }

    #[test]
    fn test_failed_enable_returns_no_guard() {
        let mut raw_mode = RawModeMock::new_failing();
        let result = RawModeGuard::try_new(&mut raw_mode);
        assert!(result.is_err());
        drop(result);
        assert!(raw_mode.get_copy_of_transitions().is_empty());
    }

    #[test]
    fn test_guard_works_through_trait_object() {
        let mut raw_mode = RawModeMock::default();
        let control: &mut dyn RawModeControl = &mut raw_mode;
        {
            let _guard = RawModeGuard::try_new(control).unwrap();
        }
        assert!(!raw_mode.is_raw());
    }
}
