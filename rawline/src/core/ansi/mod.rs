// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 constants shared by the key decoder (input side) and the terminal
//! renderer (output side).

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
mod control_bytes;
mod csi_grammar;
mod input_sequences;
mod output_sequences;

// Re-export.
pub use control_bytes::*;
pub use csi_grammar::*;
pub use input_sequences::*;
pub use output_sequences::*;
