// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The generator: turn color tables into enum groups, and enum groups into the text
//! of a Python module.
//!
//! Each step is a pure function over explicitly ordered tables. Only
//! [`processor::write_output()`] touches the file system, and only
//! [`module_assembler::Provenance::now()`] reads the clock.

pub mod cli_arg;
pub mod convert;
pub mod error;
pub mod grey_gray;
pub mod group_assembler;
pub mod module_assembler;
pub mod processor;
pub mod sanitiser;
pub mod sorter;
pub mod types;
pub mod ui_str;

#[cfg(test)]
pub mod validation_tests;

// Re-export public API for flat module interface.
pub use cli_arg::*;
pub use convert::*;
pub use error::*;
pub use grey_gray::*;
pub use group_assembler::*;
pub use module_assembler::*;
pub use processor::*;
pub use sanitiser::*;
pub use sorter::*;
pub use types::*;
pub use ui_str::*;
