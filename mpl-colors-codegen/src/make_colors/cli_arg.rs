// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for mpl-colors-codegen.

use crate::{common::GeneratorConfig, make_colors::types::OutputTarget};
use clap::Parser;

/// Generate Python enums for matplotlib's named colors.
#[derive(Debug, Parser)]
#[command(
    name = "mpl-colors-codegen",
    about = "Generate Python enums for matplotlib's named colors",
    long_about = "Builds one enum per matplotlib color table (base, Tableau, XKCD, CSS4 \
                  and the combined named colors), sorted by hue, saturation and value.\n\n\
                  By default (no args), overwrites mpl_colors/generated.py in the \
                  workspace root.\n\n\
                  Set MPL_COLORS_XKCD_RGB to read the XKCD survey data from another file.",
    version
)]
pub struct CLIArg {
    /// Print output instead of writing to file (e.g. for dry runs)
    #[arg(long, short = 'd')]
    pub stdout: bool,
}

impl CLIArg {
    /// Where the generated module goes, given the configured output path.
    #[must_use]
    pub fn to_output_target(&self, config: &GeneratorConfig) -> OutputTarget {
        if self.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(config.output_path.clone())
        }
    }
}
