// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! matplotlib's named color tables.

pub mod builtin_tables;
pub mod tables;
pub mod xkcd_rgb_txt;

pub use builtin_tables::*;
pub use tables::*;
pub use xkcd_rgb_txt::*;
