// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end validation tests for `mpl-colors-codegen`.
//!
//! # Testing Philosophy
//!
//! ```text
//!           /\
//!          /  \    end_to_end_tests.rs:
//!         /    \   • Whole run against fixture data
//!        / E2E  \  • rgb.txt → tables → groups → module text → file
//!       /  Tests \ • Golden output, determinism
//!      /          \
//!     /------------\     sanitiser.rs, sorter.rs, convert.rs, ...:
//!    /              \    • Fast, isolated edge cases
//!   / Unit           \   • Blank names, ties in HSV, bad hex
//!  /  Tests           \
//! /────────────────────\
//! ```
//!
//! ## Tier 1: Unit Tests (in module files)
//! - **Location**: Embedded in [`sanitiser`], [`sorter`], [`convert`], etc.
//! - **Input**: Minimal hardcoded tables
//!
//! ## Tier 2: End-to-End Tests
//! - **Location**: [`end_to_end_tests`]
//! - **Input**: A sample of the XKCD `rgb.txt` plus the compiled in tables, and the
//!   full bundled `rgb.txt` for the group sizes
//! - **Expected output**: `test_data/expected_generated.py`, the complete module for
//!   that sample with the timestamp pinned to `2024-05-01T12:34:56`
//!
//! [`convert`]: crate::make_colors::convert
//! [`end_to_end_tests`]: end_to_end_tests
//! [`sanitiser`]: crate::make_colors::sanitiser
//! [`sorter`]: crate::make_colors::sorter
