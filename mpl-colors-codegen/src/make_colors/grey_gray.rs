// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grey and gray are both common spellings, so tables that use them get both.

use ordermap::OrderMap;

pub const GREY: &str = "grey";
pub const GRAY: &str = "gray";

/// Return a copy of `table` where every name containing `"grey"` also appears with
/// `"gray"` (and the other way around), carrying the same value.
///
/// - Both replacements are made from the original name. Generated names are never
///   fed back in, so `"grey gray"` yields `"gray gray"` and `"grey grey"` only.
/// - Inserting a name that is already present overwrites its value in place. When
///   both spellings exist upstream with different values, the one later in the
///   table wins.
#[must_use]
pub fn grey_duplicates<V: Clone>(table: &OrderMap<String, V>) -> OrderMap<String, V> {
    let mut acc = OrderMap::with_capacity(table.len());

    for (name, value) in table {
        acc.insert(name.clone(), value.clone());
        if name.contains(GREY) {
            acc.insert(name.replace(GREY, GRAY), value.clone());
        }
        if name.contains(GRAY) {
            acc.insert(name.replace(GRAY, GREY), value.clone());
        }
    }

    acc
}

/// Only the names containing `from`, respelled with `to`. Used to build the combined
/// named color table, which adds one direction at a time.
pub fn respelled<'a, V: Clone + 'a>(
    table: &'a OrderMap<String, V>,
    from: &'a str,
    to: &'a str,
) -> impl Iterator<Item = (String, V)> + 'a {
    table
        .iter()
        .filter(move |(name, _)| name.contains(from))
        .map(move |(name, value)| (name.replace(from, to), value.clone()))
}
