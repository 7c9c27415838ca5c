// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

use crate::make_colors::types::ColorGroup;
use std::path::Path;

pub const WROTE_OUTPUT: &str = "Wrote";
pub const ERROR_PREFIX: &str = "Error";

/// Format a "module written" message.
#[must_use]
pub fn format_wrote_output(path: &Path, groups: &[ColorGroup]) -> String {
    let members: usize = groups.iter().map(ColorGroup::len).sum();
    format!(
        "{WROTE_OUTPUT} {} ({} enums, {members} members)",
        path.display(),
        groups.len()
    )
}

/// Format a fatal error for stderr.
#[must_use]
pub fn format_error(error: &impl std::fmt::Debug) -> String {
    format!("{ERROR_PREFIX}: {error:?}")
}
