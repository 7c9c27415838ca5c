// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The four upstream tables, as explicitly ordered name to spec tables.

use crate::{common::GeneratorConfig,
            make_colors::{error::{MakeColorsError, MakeColorsResult},
                          grey_gray::{GRAY, GREY, respelled},
                          types::{ColorSpec, NamedColorTable}},
            upstream::{builtin_tables::{BASE_COLORS, CSS4_COLORS, MATPLOTLIB_VERSION,
                                        TABLEAU_COLORS},
                       xkcd_rgb_txt::{BUNDLED_XKCD_RGB_TXT, parse_xkcd_rgb_txt}}};
use std::path::Path;

/// matplotlib's named color tables, plus the version they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamTables {
    pub version: String,
    pub base: NamedColorTable,
    pub tableau: NamedColorTable,
    pub xkcd: NamedColorTable,
    pub css4: NamedColorTable,
}

impl UpstreamTables {
    /// The compiled in tables, with `xkcd` supplied by the caller.
    #[must_use]
    pub fn with_xkcd(xkcd: NamedColorTable) -> Self {
        Self {
            version: MATPLOTLIB_VERSION.to_string(),
            base: BASE_COLORS
                .iter()
                .map(|(name, rgb)| ((*name).to_string(), ColorSpec::from(*rgb)))
                .collect(),
            tableau: hex_table(&TABLEAU_COLORS),
            xkcd,
            css4: hex_table(&CSS4_COLORS),
        }
    }

    /// Every table compiled in, XKCD included.
    ///
    /// # Errors
    ///
    /// [`MakeColorsError::XkcdTableParse`] if the bundled `rgb.txt` is malformed.
    pub fn bundled() -> MakeColorsResult<Self> {
        parse_xkcd_rgb_txt(BUNDLED_XKCD_RGB_TXT).map(Self::with_xkcd)
    }

    /// The compiled in tables. The XKCD table is read from `config.xkcd_rgb_path` when
    /// it is set.
    ///
    /// # Errors
    ///
    /// - [`MakeColorsError::XkcdTableRead`] if the file can't be read.
    /// - [`MakeColorsError::XkcdTableParse`] if it is malformed.
    pub fn load(config: &GeneratorConfig) -> MakeColorsResult<Self> {
        let it = match &config.xkcd_rgb_path {
            Some(path) => Self::with_xkcd(read_xkcd_table(path)?),
            None => Self::bundled()?,
        };

        // % is Display, ? is Debug.
        tracing::info!(
            message = "loaded upstream tables",
            version = %it.version,
            xkcd_path = ?config.xkcd_rgb_path,
            base = it.base.len(),
            tableau = it.tableau.len(),
            xkcd = it.xkcd.len(),
            css4 = it.css4.len(),
        );

        Ok(it)
    }

    /// Every name matplotlib accepts, built up in matplotlib's order. Later tables
    /// overwrite earlier ones on a shared name.
    ///
    /// 1. XKCD.
    /// 2. XKCD names containing `grey`, respelled with `gray`.
    /// 3. CSS4.
    /// 4. Tableau.
    /// 5. Tableau names containing `gray`, respelled with `grey`.
    /// 6. Base.
    #[must_use]
    pub fn named_colors_mapping(&self) -> NamedColorTable {
        let mut acc = NamedColorTable::with_capacity(
            self.xkcd.len() * 2 + self.css4.len() + self.tableau.len() * 2 + self.base.len(),
        );

        acc.extend(self.xkcd.clone());
        acc.extend(respelled(&self.xkcd, GREY, GRAY));
        acc.extend(self.css4.clone());
        acc.extend(self.tableau.clone());
        acc.extend(respelled(&self.tableau, GRAY, GREY));
        acc.extend(self.base.clone());

        acc
    }
}

fn hex_table(pairs: &[(&str, &str)]) -> NamedColorTable {
    pairs
        .iter()
        .map(|(name, hex)| ((*name).to_string(), ColorSpec::text(*hex)))
        .collect()
}

fn read_xkcd_table(path: &Path) -> MakeColorsResult<NamedColorTable> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        MakeColorsError::XkcdTableRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    parse_xkcd_rgb_txt(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn xkcd() -> NamedColorTable {
        parse_xkcd_rgb_txt("purple\t#7e1e9c\ncool grey\t#95a3a6\nred\t#e50000\n").unwrap()
    }

    #[test]
    fn test_builtin_table_sizes() {
        let tables = UpstreamTables::with_xkcd(NamedColorTable::new());
        assert_eq!(tables.base.len(), 8);
        assert_eq!(tables.tableau.len(), 10);
        assert_eq!(tables.css4.len(), 148);
        assert_eq!(tables.version, MATPLOTLIB_VERSION);
    }

    #[test]
    fn test_named_colors_mapping_order_and_precedence() {
        let tables = UpstreamTables::with_xkcd(xkcd());
        let named = tables.named_colors_mapping();

        let keys: Vec<_> = named.keys().map(String::as_str).collect();
        assert_eq!(&keys[..4], &[
            "xkcd:purple",
            "xkcd:cool grey",
            "xkcd:red",
            "xkcd:cool gray"
        ]);
        assert_eq!(keys[4], "aliceblue");
        assert_eq!(&keys[keys.len() - 8..], &["b", "g", "r", "c", "m", "y", "k", "w"]);

        assert_eq!(named["xkcd:cool gray"], named["xkcd:cool grey"]);
        assert_eq!(named["tab:grey"], named["tab:gray"]);
        assert_eq!(named["red"], ColorSpec::text("#FF0000"));
        assert_eq!(named["r"], ColorSpec::from((1.0, 0.0, 0.0)));

        let expected_len = 4 + 148 + 11 + 8;
        assert_eq!(named.len(), expected_len);
    }

    #[test]
    fn test_load_reads_xkcd_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.txt");
        std::fs::write(&path, "# License\npurple\t#7e1e9c\t\n").unwrap();
        let config = GeneratorConfig {
            xkcd_rgb_path: Some(path),
            output_path: dir.path().join("generated.py"),
        };

        let tables = UpstreamTables::load(&config).unwrap();
        assert_eq!(tables.xkcd.len(), 1);
        assert_eq!(tables.xkcd["xkcd:purple"], ColorSpec::text("#7e1e9c"));
    }

    #[test]
    fn test_load_missing_xkcd_file() {
        let config = GeneratorConfig {
            xkcd_rgb_path: Some(PathBuf::from("/nonexistent/rgb.txt")),
            output_path: PathBuf::from("/nonexistent/generated.py"),
        };

        let result = UpstreamTables::load(&config);
        assert!(matches!(result, Err(MakeColorsError::XkcdTableRead { .. })));
    }

    #[test]
    fn test_load_without_a_path_uses_the_bundled_table() {
        let config = GeneratorConfig::new("/nonexistent");

        let tables = UpstreamTables::load(&config).unwrap();
        assert_eq!(tables, UpstreamTables::bundled().unwrap());
        assert_eq!(tables.xkcd.len(), 949);
    }
}
