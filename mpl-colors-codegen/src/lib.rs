// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # mpl-colors-codegen
//!
//! Generates a Python module of enums for matplotlib's named colors: the base colors,
//! the Tableau palette, the XKCD color survey, the CSS4 colors and the combined
//! "named colors" mapping.
//!
//! ## Usage
//!
//! **Regenerate `mpl_colors/generated.py`**:
//! ```bash
//! cargo run -p mpl-colors-codegen
//! ```
//!
//! **Dry run, print the module instead of writing it**:
//! ```bash
//! cargo run -p mpl-colors-codegen -- --stdout
//! ```
//!
//! **Verbose logging** (written to stderr, so `--stdout` output stays clean):
//! ```bash
//! RUST_LOG=debug cargo run -p mpl-colors-codegen -- -d
//! ```
//!
//! ## Upstream data
//!
//! The base, Tableau and CSS4 tables are compiled in as a snapshot of matplotlib's
//! `_color_data`. The XKCD table is the survey's published `rgb.txt`
//! (<https://xkcd.com/color/rgb.txt>), shipped in `data/xkcd_rgb.txt` and compiled
//! in as well. Point `MPL_COLORS_XKCD_RGB` at another copy to override it.
//!
//! ## What It Does
//!
//! Each color table goes through the same pipeline:
//!
//! ```text
//! table ─▶ grey/gray duplication ─▶ to RGB ─▶ sort by (HSV, name) ─▶ sanitise ─▶ enum
//! ```
//!
//! | Input name        | Identifier          |
//! | :---------------- | :------------------ |
//! | `tab:blue`        | `BLUE` (prefix cut) |
//! | `xkcd:baby blue`  | `BABY_BLUE`         |
//! | `black/white`     | `BLACK_SLASH_WHITE` |
//! | `0blue`           | `_0BLUE`            |
//!
//! The member order follows hue, then saturation, then value, so similar colors sit
//! next to each other. Ties fall back to the raw name, which makes the output
//! byte-for-byte reproducible apart from the timestamp in the header.
//!
//! ## Module structure
//!
//! - `src/bin/mpl-colors-codegen.rs` - Binary entry point
//! - `src/make_colors/` - The generator
//!   - `cli_arg.rs` - CLI argument parsing
//!   - `sanitiser.rs` - Color name to identifier
//!   - `grey_gray.rs` - Grey/gray spelling duplication
//!   - `sorter.rs` - RGB to HSV and the canonical sort
//!   - `convert.rs` - Color spec to RGB
//!   - `group_assembler.rs` - One table to one enum group
//!   - `module_assembler.rs` - Render the Python module text
//!   - `processor.rs` - Build all groups and write the output
//! - `src/upstream/` - matplotlib's color tables
//! - `src/common/` - Configuration and logging

// Attach all modules.
pub mod common;
pub mod make_colors;
pub mod upstream;

// Re-export commonly used items.
pub use common::*;
pub use make_colors::*;
pub use upstream::*;
