// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Orchestrate a generation run: tables to groups, groups to text, text to output.

use crate::{make_colors::{convert::ColorConverter,
                          error::{MakeColorsError, MakeColorsResult},
                          group_assembler::make_color_group,
                          module_assembler::{Provenance, make_module_code},
                          types::{ColorGroup, GroupOptions, NameTransform,
                                  NamedColorTable, OutputTarget}},
            upstream::UpstreamTables};
use std::{io::Write,
          path::{Path, PathBuf}};

/// Which upstream table a group is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    Base,
    Tableau,
    Xkcd,
    Css4,
    /// [`UpstreamTables::named_colors_mapping()`].
    NamedColors,
}

impl GroupSource {
    fn table<'a>(
        self,
        tables: &'a UpstreamTables,
        named_colors: &'a NamedColorTable,
    ) -> &'a NamedColorTable {
        match self {
            Self::Base => &tables.base,
            Self::Tableau => &tables.tableau,
            Self::Xkcd => &tables.xkcd,
            Self::Css4 => &tables.css4,
            Self::NamedColors => named_colors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: &'static str,
    pub source: GroupSource,
    pub options: GroupOptions,
}

/// The enums in the generated module, in output order.
pub const GROUP_SPECS: [GroupSpec; 5] = [
    GroupSpec {
        name: "BaseColor",
        source: GroupSource::Base,
        options: GroupOptions {
            grey_duplicates: false,
            name_transform: NameTransform::Identity,
        },
    },
    GroupSpec {
        name: "TableauColor",
        source: GroupSource::Tableau,
        options: GroupOptions {
            grey_duplicates: true,
            name_transform: NameTransform::TABLEAU,
        },
    },
    GroupSpec {
        name: "XkcdColor",
        source: GroupSource::Xkcd,
        options: GroupOptions {
            grey_duplicates: true,
            name_transform: NameTransform::XKCD,
        },
    },
    GroupSpec {
        name: "Css4Color",
        source: GroupSource::Css4,
        options: GroupOptions {
            grey_duplicates: false,
            name_transform: NameTransform::Identity,
        },
    },
    GroupSpec {
        name: "Color",
        source: GroupSource::NamedColors,
        options: GroupOptions {
            grey_duplicates: false,
            name_transform: NameTransform::Identity,
        },
    },
];

/// Build every group in [`GROUP_SPECS`]. Names in any table resolve against the
/// combined named color table.
///
/// # Errors
///
/// The first error from [`make_color_group()`], if any.
pub fn make_groups(tables: &UpstreamTables) -> MakeColorsResult<Vec<ColorGroup>> {
    let named_colors = tables.named_colors_mapping();
    let converter = ColorConverter::new(&named_colors);

    GROUP_SPECS
        .iter()
        .map(|spec| {
            make_color_group(
                spec.name,
                spec.source.table(tables, &named_colors),
                spec.options,
                &converter,
            )
        })
        .collect()
}

/// The full text of the generated module.
///
/// # Errors
///
/// See [`make_groups()`].
pub fn generate_module_text(
    tables: &UpstreamTables,
    provenance: &Provenance,
) -> MakeColorsResult<String> {
    let groups = make_groups(tables)?;
    Ok(make_module_code(&groups, provenance))
}

const STDOUT_PATH: &str = "<stdout>";

/// Write `text` to `target`. Missing parent directories of a file target are created,
/// and an existing file is overwritten.
///
/// # Errors
///
/// Returns [`MakeColorsError::WriteOutput`] on any I/O failure.
pub fn write_output(text: &str, target: &OutputTarget) -> MakeColorsResult<()> {
    match target {
        OutputTarget::Stdout => write_to(&mut std::io::stdout().lock(), text),
        OutputTarget::File(path) => write_file(path, text),
    }
}

/// Write `text` to `writer` exactly as is, then flush. Errors are reported against
/// `<stdout>`.
///
/// # Errors
///
/// Returns [`MakeColorsError::WriteOutput`] if writing or flushing fails.
pub fn write_to(writer: &mut impl Write, text: &str) -> MakeColorsResult<()> {
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| MakeColorsError::WriteOutput {
            path: PathBuf::from(STDOUT_PATH),
            source,
        })
}

fn write_file(path: &Path, text: &str) -> MakeColorsResult<()> {
    let to_error = |source| MakeColorsError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|it| !it.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, text).map_err(to_error)?;

    // % is Display, ? is Debug.
    tracing::info!(
        message = "wrote generated module",
        path = %path.display(),
        bytes = text.len(),
    );

    Ok(())
}
