// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incremental recognizer for the escape sequence grammar accepted by the key decoder.
//!
//! ```text
//! ESC ( Fe | '[' P* I* F )
//!
//! Fe = 0x40..=0x5A | 0x5C..=0x5F     two byte escape ('[' is excluded)
//! P  = 0x30..=0x3F                   parameter bytes   (0-9 : ; < = > ?)
//! I  = 0x20..=0x2F                   intermediate bytes (space ! " # ... /)
//! F  = 0x40..=0x7E                   final byte        (@ A-Z [ \ ] ^ _ ` a-z { | } ~)
//! ```
//!
//! The recognizer is fed one byte at a time, after the introducing `ESC` has already
//! been seen. It answers whether the sequence is still pending, just completed, or was
//! rejected by the byte that was pushed.

use super::ANSI_CSI_BRACKET;
use std::ops::RangeInclusive;

const TWO_BYTE_FINAL_LOW: RangeInclusive<u8> = 0x40..=0x5A;
const TWO_BYTE_FINAL_HIGH: RangeInclusive<u8> = 0x5C..=0x5F;
const CSI_PARAMETER: RangeInclusive<u8> = 0x30..=0x3F;
const CSI_INTERMEDIATE: RangeInclusive<u8> = 0x20..=0x2F;
const CSI_FINAL: RangeInclusive<u8> = 0x40..=0x7E;

/// Where the recognizer is inside a sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EscapeScanState {
    /// Only `ESC` has been seen.
    #[default]
    AfterEsc,
    /// `ESC [` followed by zero or more parameter bytes.
    CsiParameters,
    /// At least one intermediate byte has been seen; parameters are no longer legal.
    CsiIntermediates,
}

/// Result of pushing one byte into an [`EscapeScanner`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeScan {
    /// The byte was accepted and more bytes are needed.
    Pending,
    /// The byte was accepted and terminated a well formed sequence.
    Complete,
    /// The byte can't appear at this position. It was not accepted.
    Rejected,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct EscapeScanner {
    pub state: EscapeScanState,
}

impl EscapeScanner {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Feed the next byte after `ESC`. On [`EscapeScan::Rejected`] the state is left
    /// unchanged.
    pub fn push(&mut self, byte: u8) -> EscapeScan {
        match self.state {
            EscapeScanState::AfterEsc => {
                if byte == ANSI_CSI_BRACKET {
                    self.state = EscapeScanState::CsiParameters;
                    EscapeScan::Pending
                } else if TWO_BYTE_FINAL_LOW.contains(&byte)
                    || TWO_BYTE_FINAL_HIGH.contains(&byte)
                {
                    EscapeScan::Complete
                } else {
                    EscapeScan::Rejected
                }
            }
            EscapeScanState::CsiParameters => {
                if CSI_PARAMETER.contains(&byte) {
                    EscapeScan::Pending
                } else if CSI_INTERMEDIATE.contains(&byte) {
                    self.state = EscapeScanState::CsiIntermediates;
                    EscapeScan::Pending
                } else if CSI_FINAL.contains(&byte) {
                    EscapeScan::Complete
                } else {
                    EscapeScan::Rejected
                }
            }
            EscapeScanState::CsiIntermediates => {
                if CSI_INTERMEDIATE.contains(&byte) {
                    EscapeScan::Pending
                } else if CSI_FINAL.contains(&byte) {
                    EscapeScan::Complete
                } else {
                    EscapeScan::Rejected
                }
            }
        }
    }
}
