// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Assemble one color table into one enum group.

use crate::make_colors::{convert::ColorConverter,
                         error::{MakeColorsError, MakeColorsResult},
                         grey_gray::grey_duplicates,
                         sanitiser::sanitise_name,
                         sorter::sort_color_mapping,
                         types::{ColorEntry, ColorGroup, GroupOptions, NamedColorTable,
                                 RgbTable}};
use std::{borrow::Cow, collections::HashMap};

/// Build the [`ColorGroup`] called `group_name` from `table`.
///
/// 1. Add grey/gray duplicates, if `options.grey_duplicates` is set.
/// 2. Convert every spec to RGB with `converter`.
/// 3. Sort by `(hsv, raw name)`.
/// 4. Apply `options.name_transform` to each raw name, then sanitise it.
/// 5. Check that no two raw names produced the same identifier.
///
/// # Errors
///
/// - [`MakeColorsError::ColorConversion`] if a spec cannot be converted.
/// - [`MakeColorsError::InvalidName`] if a transformed name is blank.
/// - [`MakeColorsError::DuplicateIdentifier`] on an identifier collision.
pub fn make_color_group(
    group_name: &str,
    table: &NamedColorTable,
    options: GroupOptions,
    converter: &ColorConverter<'_>,
) -> MakeColorsResult<ColorGroup> {
    let table = if options.grey_duplicates {
        Cow::Owned(grey_duplicates(table))
    } else {
        Cow::Borrowed(table)
    };

    let rgb_table = table
        .iter()
        .map(|(name, spec)| converter.to_rgb(spec).map(|rgb| (name.clone(), rgb)))
        .collect::<MakeColorsResult<RgbTable>>()?;

    let mut seen: HashMap<String, &str> = HashMap::with_capacity(rgb_table.len());
    let mut entries = Vec::with_capacity(rgb_table.len());

    for (raw_name, rgb) in sort_color_mapping(&rgb_table) {
        let identifier = sanitise_name(options.name_transform.apply(raw_name))?;

        if let Some(first) = seen.insert(identifier.clone(), raw_name) {
            return Err(MakeColorsError::DuplicateIdentifier {
                group: group_name.to_string(),
                identifier,
                first: first.to_string(),
                second: raw_name.to_string(),
            });
        }

        entries.push(ColorEntry {
            identifier,
            rgb,
            raw_name: raw_name.to_string(),
        });
    }

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "make_color_group",
        group = %group_name,
        input_names = table.len(),
        members = entries.len(),
        grey_duplicates = options.grey_duplicates,
        name_transform = ?options.name_transform,
    );

    Ok(ColorGroup {
        name: group_name.to_string(),
        entries,
    })
}
