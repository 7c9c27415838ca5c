// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render color groups as the text of a Python module. Pure formatting, no color
//! logic lives here.

use crate::make_colors::types::{ColorEntry, ColorGroup};
use chrono::{NaiveDateTime, Timelike, Utc};
use std::fmt::Write as _;

const INDENT: &str = "    ";
const GROUP_SEPARATOR: &str = "\n\n\n";

/// Where the generated text came from. Kept apart from the groups so the only
/// nondeterministic input, the timestamp, can be pinned in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// UTC, without an offset.
    pub timestamp: NaiveDateTime,
    /// Version of the upstream color tables.
    pub version: String,
}

impl Provenance {
    pub fn now(version: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().naive_utc(),
            version: version.into(),
        }
    }

    /// ISO 8601 without an offset. Microseconds are only shown when non-zero.
    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        let micros = self.timestamp.nanosecond() / 1_000 % 1_000_000;
        let seconds = self.timestamp.format("%Y-%m-%dT%H:%M:%S");
        if micros == 0 {
            seconds.to_string()
        } else {
            format!("{seconds}.{micros:06}")
        }
    }
}

/// The docstring and imports at the top of the module.
#[must_use]
pub fn render_header(provenance: &Provenance) -> String {
    format!(
        "\"\"\"Matplotlib's colors as enums. Generated automatically at {} with using \
         Matplotlib v{}\"\"\"\n\
         from enum import Enum\n\
         from .mixin import RgbTuple",
        provenance.timestamp_iso(),
        provenance.version
    )
}

/// One `class Name(RgbTuple, Enum):` block, one member per line.
#[must_use]
pub fn render_enum(group: &ColorGroup) -> String {
    let mut acc = format!("class {}(RgbTuple, Enum):", group.name);
    for ColorEntry { identifier, rgb, .. } in &group.entries {
        // Writing to a String can't fail.
        let _ = write!(acc, "\n{INDENT}{identifier} = {rgb}");
    }
    acc
}

/// The whole module: header, then one enum per group, separated by two blank lines
/// and ending with a newline.
#[must_use]
pub fn make_module_code(groups: &[ColorGroup], provenance: &Provenance) -> String {
    let mut elements = Vec::with_capacity(groups.len() + 1);
    elements.push(render_header(provenance));
    elements.extend(groups.iter().map(render_enum));

    let mut acc = elements.join(GROUP_SEPARATOR);
    acc.push('\n');
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_colors::types::RgbTriple;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn provenance(micros: u32) -> Provenance {
        let timestamp = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(12, 34, 56, micros)
            .unwrap();
        Provenance {
            timestamp,
            version: "3.9.2".into(),
        }
    }

    fn entry(identifier: &str, rgb: RgbTriple) -> ColorEntry {
        ColorEntry {
            identifier: identifier.into(),
            rgb,
            raw_name: identifier.to_lowercase(),
        }
    }

    #[test_case(0, "2024-05-01T12:34:56")]
    #[test_case(1, "2024-05-01T12:34:56.000001")]
    #[test_case(123_456, "2024-05-01T12:34:56.123456")]
    fn test_timestamp_iso(micros: u32, expected: &str) {
        assert_eq!(provenance(micros).timestamp_iso(), expected);
    }

    #[test]
    fn test_render_header() {
        let expected = "\"\"\"Matplotlib's colors as enums. Generated automatically at \
                        2024-05-01T12:34:56.000042 with using Matplotlib v3.9.2\"\"\"\n\
                        from enum import Enum\n\
                        from .mixin import RgbTuple";
        assert_eq!(render_header(&provenance(42)), expected);
    }

    #[test]
    fn test_render_enum() {
        let group = ColorGroup {
            name: "TestColor".into(),
            entries: vec![
                entry("RED", RgbTriple::new(1.0, 0.0, 0.0)),
                entry("BLUE", RgbTriple::new(0.0, 0.0, 1.0)),
            ],
        };
        let expected = "class TestColor(RgbTuple, Enum):\n    \
                        RED = (1.0, 0.0, 0.0)\n    \
                        BLUE = (0.0, 0.0, 1.0)";
        assert_eq!(render_enum(&group), expected);
    }

    #[test]
    fn test_make_module_code_layout() {
        let groups = [
            ColorGroup {
                name: "A".into(),
                entries: vec![entry("K", RgbTriple::gray(0.0))],
            },
            ColorGroup {
                name: "B".into(),
                entries: vec![entry("W", RgbTriple::gray(1.0))],
            },
        ];
        let text = make_module_code(&groups, &provenance(0));
        let body: Vec<&str> = text.lines().skip(3).collect();

        assert_eq!(body, vec![
            "",
            "",
            "class A(RgbTuple, Enum):",
            "    K = (0.0, 0.0, 0.0)",
            "",
            "",
            "class B(RgbTuple, Enum):",
            "    W = (1.0, 1.0, 1.0)",
        ]);
        assert!(text.ends_with(")\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_only_the_header_depends_on_time() {
        let groups = [ColorGroup {
            name: "A".into(),
            entries: vec![entry("K", RgbTriple::gray(0.0))],
        }];
        let first = make_module_code(&groups, &provenance(1));
        let second = make_module_code(&groups, &provenance(2));

        assert_ne!(first, second);
        assert_eq!(
            first.lines().skip(1).collect::<Vec<_>>(),
            second.lines().skip(1).collect::<Vec<_>>()
        );
    }
}
