// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn a human readable color name into an enum member name.

use crate::make_colors::error::{MakeColorsError, MakeColorsResult};

const SLASH_REPLACEMENT: &str = " SLASH ";

/// Sanitise a color name into an identifier matching `^_?[A-Z0-9_]+$`.
///
/// The steps run in this order:
/// 1. Trim surrounding whitespace and uppercase.
/// 2. Prepend `_` if the name starts with an ASCII digit.
/// 3. Spell out `/` as `" SLASH "`.
/// 4. Replace every char outside `A-Z`, `0-9` and `_` with `_`.
///
/// ```
/// use mpl_colors_codegen::sanitise_name;
///
/// assert_eq!(sanitise_name("black/white").unwrap(), "BLACK_SLASH_WHITE");
/// assert_eq!(sanitise_name("0blue").unwrap(), "_0BLUE");
/// ```
///
/// # Errors
///
/// Returns [`MakeColorsError::InvalidName`] if the name is empty or only whitespace.
pub fn sanitise_name(name: &str) -> MakeColorsResult<String> {
    let upper = name.trim().to_uppercase();

    let Some(first) = upper.chars().next() else {
        return Err(MakeColorsError::InvalidName {
            name: name.to_string(),
        });
    };

    let guarded = if first.is_ascii_digit() {
        format!("_{upper}")
    } else {
        upper
    };

    let spelled_out = guarded.replace('/', SLASH_REPLACEMENT);

    Ok(spelled_out
        .chars()
        .map(|ch| if is_identifier_char(ch) { ch } else { '_' })
        .collect())
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use test_case::test_case;

    #[test_case("0blue", "_0BLUE")]
    #[test_case("black/white", "BLACK_SLASH_WHITE")]
    #[test_case("Tab:Blue", "TAB_BLUE")]
    #[test_case("  baby blue  ", "BABY_BLUE")]
    #[test_case("robin's egg", "ROBIN_S_EGG")]
    #[test_case("0.5", "_0_5")]
    #[test_case("blue/green/grey", "BLUE_SLASH_GREEN_SLASH_GREY")]
    #[test_case("/", "_SLASH_")]
    #[test_case("café", "CAF_")]
    fn test_sanitise_name(input: &str, expected: &str) {
        assert_eq!(sanitise_name(input).unwrap(), expected);
    }

    #[test_case("")]
    #[test_case("   ")]
    #[test_case("\t\n")]
    fn test_sanitise_empty_name_fails(input: &str) {
        let result = sanitise_name(input);
        assert!(matches!(result, Err(MakeColorsError::InvalidName { .. })));
    }

    /// The digit guard looks at the name before slashes are spelled out.
    #[test]
    fn test_digit_guard_runs_before_slash() {
        assert_eq!(sanitise_name("1/2").unwrap(), "_1_SLASH_2");
    }

    #[test]
    fn test_output_shape_for_awkward_names() {
        let pattern = Regex::new(r"^_?[A-Z0-9_]+$").unwrap();
        let names = [
            "tab:blue",
            "xkcd:baby poop green",
            "xkcd:robin's egg blue",
            "dark grey",
            "42",
            "a-b+c",
            "ÅNGSTRÖM",
            "emoji 🎨 color",
            "blue/green",
            " tab ",
        ];

        for name in names {
            let id = sanitise_name(name).unwrap();
            assert!(pattern.is_match(&id), "{name:?} -> {id:?}");
            assert!(!id.chars().any(|ch| ch.is_lowercase() || ch == ' ' || ch == '/'));
        }
    }
}
