// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors that abort a generation run. There is no partial output: the first error
//! stops the run.

use std::path::PathBuf;

/// Everything that can go wrong while generating the module.
///
/// | Variant               | Raised by                         |
/// | :-------------------- | :-------------------------------- |
/// | [`InvalidName`]       | [`sanitise_name()`]               |
/// | [`ColorConversion`]   | [`ColorConverter::to_rgb()`]      |
/// | [`DuplicateIdentifier`] | [`make_color_group()`]          |
/// | [`XkcdTableRead`]     | [`UpstreamTables::load()`]        |
/// | [`XkcdTableParse`]    | [`parse_xkcd_rgb_txt()`]          |
/// | [`WriteOutput`]       | [`write_output()`]                |
///
/// [`ColorConversion`]: Self::ColorConversion
/// [`ColorConverter::to_rgb()`]: crate::ColorConverter::to_rgb
/// [`DuplicateIdentifier`]: Self::DuplicateIdentifier
/// [`InvalidName`]: Self::InvalidName
/// [`UpstreamTables::load()`]: crate::UpstreamTables::load
/// [`WriteOutput`]: Self::WriteOutput
/// [`XkcdTableParse`]: Self::XkcdTableParse
/// [`XkcdTableRead`]: Self::XkcdTableRead
/// [`make_color_group()`]: crate::make_color_group
/// [`parse_xkcd_rgb_txt()`]: crate::parse_xkcd_rgb_txt
/// [`sanitise_name()`]: crate::sanitise_name
/// [`write_output()`]: crate::write_output
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MakeColorsError {
    #[error("Color name {name:?} is empty after trimming whitespace")]
    #[diagnostic(
        code(mpl_colors_codegen::invalid_name),
        help("An identifier needs at least one character.")
    )]
    InvalidName { name: String },

    #[error("Could not convert {spec} to RGB: {reason}")]
    #[diagnostic(code(mpl_colors_codegen::color_conversion))]
    ColorConversion { spec: String, reason: String },

    #[error(
        "Identifier `{identifier}` in `{group}` comes from both {first:?} and {second:?}"
    )]
    #[diagnostic(
        code(mpl_colors_codegen::duplicate_identifier),
        help(
            "Two color names sanitise to the same enum member. \
             Rename one of them upstream or give the group a name transform."
        )
    )]
    DuplicateIdentifier {
        group: String,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Could not read the XKCD color table at '{}'", path.display())]
    #[diagnostic(
        code(mpl_colors_codegen::xkcd_table_read),
        help(
            "Check the path in MPL_COLORS_XKCD_RGB, \
             or unset it to use the bundled table."
        )
    )]
    XkcdTableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XKCD color table, line {line_number}: {line:?}")]
    #[diagnostic(
        code(mpl_colors_codegen::xkcd_table_parse),
        help("Each line should be a color name and a hex code separated by a tab.")
    )]
    XkcdTableParse { line_number: usize, line: String },

    #[error("Could not write the generated module to '{}'", path.display())]
    #[diagnostic(code(mpl_colors_codegen::write_output))]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MakeColorsError {
    pub fn color_conversion(spec: impl ToString, reason: impl Into<String>) -> Self {
        Self::ColorConversion {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

pub type MakeColorsResult<T> = Result<T, MakeColorsError>;
