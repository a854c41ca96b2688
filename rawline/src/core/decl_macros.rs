// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// `ok!()` is `Ok(())` and `ok!(value)` is `Ok(value)`. Used at the tail of fallible
/// functions that return `miette::Result`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
