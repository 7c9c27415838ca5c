// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where the generator reads its XKCD data from and writes its module to.
//!
//! The XKCD table is compiled in unless [`EnvKeys::XkcdRgb`] names a file. The output
//! path is inside the workspace root, which is found at build time from the generator
//! crate's own manifest directory. So the generator behaves the same regardless of the
//! directory it is run from.

use std::{ffi::OsString,
          path::{Path, PathBuf}};
use strum_macros::{Display, EnumString};

/// The generated Python module, relative to the workspace root.
pub const OUTPUT_RELATIVE_PATH: &str = "mpl_colors/generated.py";

/// Environment variables the generator reads.
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq)]
pub enum EnvKeys {
    /// Path to an XKCD `rgb.txt` read instead of the compiled in one.
    #[strum(serialize = "MPL_COLORS_XKCD_RGB")]
    XkcdRgb,
    /// Log filter directives, e.g. `debug` or `mpl_colors_codegen=trace`.
    #[strum(serialize = "RUST_LOG")]
    RustLog,
}

/// The workspace root: the parent of this crate's directory.
#[must_use]
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// `None` means the compiled in table.
    pub xkcd_rgb_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    /// The compiled in XKCD table, and the default output path under `workspace_root`.
    #[must_use]
    pub fn new(workspace_root: impl AsRef<Path>) -> Self {
        Self {
            xkcd_rgb_path: None,
            output_path: workspace_root.as_ref().join(OUTPUT_RELATIVE_PATH),
        }
    }

    /// Defaults under [`workspace_root()`], with [`EnvKeys::XkcdRgb`] applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(workspace_root(), |key| std::env::var_os(key.to_string()))
    }

    /// Like [`Self::from_env`], reading variables through `lookup`. Unset and empty
    /// variables are ignored.
    #[must_use]
    pub fn from_lookup(
        workspace_root: impl AsRef<Path>,
        lookup: impl Fn(EnvKeys) -> Option<OsString>,
    ) -> Self {
        let mut it = Self::new(workspace_root);

        if let Some(path) = lookup(EnvKeys::XkcdRgb).filter(|value| !value.is_empty()) {
            it.xkcd_rgb_path = Some(PathBuf::from(path));
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "GeneratorConfig",
            xkcd_rgb_path = ?it.xkcd_rgb_path,
            output_path = %it.output_path.display(),
        );

        it
    }
}
