// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read the XKCD color survey's `rgb.txt`.
//!
//! The file has a `#` comment line with the license, then one color per line: the name,
//! a tab and the hex code.
//!
//! ```text
//! # License: http://creativecommons.org/publicdomain/zero/1.0/
//! cloudy blue	#acc2d9
//! dark pastel green	#56ae57
//! ```

use crate::make_colors::{error::{MakeColorsError, MakeColorsResult},
                         types::{ColorSpec, NamedColorTable}};

/// Namespace matplotlib puts in front of every XKCD color name.
pub const XKCD_PREFIX: &str = "xkcd:";

/// The survey's `rgb.txt`, compiled in. Used unless [`EnvKeys::XkcdRgb`] names
/// another file.
///
/// [`EnvKeys::XkcdRgb`]: crate::common::EnvKeys::XkcdRgb
pub const BUNDLED_XKCD_RGB_TXT: &str = include_str!("../../data/xkcd_rgb.txt");

const COMMENT_PREFIX: char = '#';

/// Parse `rgb.txt` into a table of `xkcd:`-prefixed names.
///
/// The table keeps the file's order. A name that appears twice keeps the position of
/// its first line and the value of its last.
///
/// # Errors
///
/// Returns [`MakeColorsError::XkcdTableParse`] for a line that is not a name followed
/// by whitespace and a `#` hex code.
pub fn parse_xkcd_rgb_txt(text: &str) -> MakeColorsResult<NamedColorTable> {
    let mut table = NamedColorTable::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let Some((name, hex)) = trimmed
            .rsplit_once(char::is_whitespace)
            .map(|(name, hex)| (name.trim(), hex))
            .filter(|(name, hex)| !name.is_empty() && hex.starts_with(COMMENT_PREFIX))
        else {
            return Err(MakeColorsError::XkcdTableParse {
                line_number: index + 1,
                line: line.to_string(),
            });
        };

        table.insert(format!("{XKCD_PREFIX}{name}"), ColorSpec::text(hex));
    }

    Ok(table)
}
