// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Canonical member order: hue, saturation, value, then name.
//!
//! Sorting in HSV space puts colors that look alike next to each other, which reads
//! better in the generated enums than alphabetical or raw channel order.

use crate::make_colors::types::{Hsv, RgbTable, RgbTriple};
use std::cmp::Ordering;

/// Convert RGB to HSV with all three components in `[0, 1]`.
///
/// Matches matplotlib's `rgb_to_hsv`. When several channels share the maximum, blue
/// takes precedence over green, and green over red, when choosing the hue sector.
/// Achromatic colors get hue and saturation `0`.
#[must_use]
#[allow(clippy::float_cmp)] // `max` is one of the channels, so `==` is exact.
pub fn rgb_to_hsv(rgb: RgbTriple) -> Hsv {
    let RgbTriple { red, green, blue } = rgb;
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    if delta <= 0.0 {
        return Hsv {
            hue: 0.0,
            saturation: 0.0,
            value: max,
        };
    }

    let sector = if blue == max {
        4.0 + (red - green) / delta
    } else if green == max {
        2.0 + (blue - red) / delta
    } else {
        (green - blue) / delta
    };

    Hsv {
        // Adding 0.0 turns a -0.0 into 0.0 so it ties with +0.0 under total_cmp.
        hue: (sector / 6.0).rem_euclid(1.0) + 0.0,
        saturation: delta / max,
        value: max,
    }
}

/// The sort key of one entry: `(hsv, name)`.
#[derive(Debug, Clone, Copy)]
pub struct SortKey<'a> {
    pub hsv: Hsv,
    pub name: &'a str,
}

impl<'a> SortKey<'a> {
    #[must_use]
    pub fn new(name: &'a str, rgb: RgbTriple) -> Self {
        Self {
            hsv: rgb_to_hsv(rgb),
            name,
        }
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool { self.cmp(other).is_eq() }
}

impl Eq for SortKey<'_> {}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Lexicographic over `(hue, saturation, value, name)`. Uses [`f64::total_cmp`] so
/// the order stays total even if a NaN slips through.
impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hsv
            .hue
            .total_cmp(&other.hsv.hue)
            .then_with(|| self.hsv.saturation.total_cmp(&other.hsv.saturation))
            .then_with(|| self.hsv.value.total_cmp(&other.hsv.value))
            .then_with(|| self.name.cmp(other.name))
    }
}

/// Sort a name to RGB table into canonical order.
#[must_use]
pub fn sort_color_mapping(table: &RgbTable) -> Vec<(&str, RgbTriple)> {
    let mut acc: Vec<(&str, RgbTriple)> = table
        .iter()
        .map(|(name, rgb)| (name.as_str(), *rgb))
        .collect();
    acc.sort_by_cached_key(|(name, rgb)| SortKey::new(*name, *rgb));
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn approx_eq(lhs: Hsv, rhs: (f64, f64, f64)) -> bool {
        const EPSILON: f64 = 1e-12;
        (lhs.hue - rhs.0).abs() < EPSILON
            && (lhs.saturation - rhs.1).abs() < EPSILON
            && (lhs.value - rhs.2).abs() < EPSILON
    }

    #[test_case((1.0, 0.0, 0.0), (0.0, 1.0, 1.0); "red")]
    #[test_case((1.0, 1.0, 0.0), (1.0 / 6.0, 1.0, 1.0); "yellow")]
    #[test_case((0.0, 1.0, 0.0), (2.0 / 6.0, 1.0, 1.0); "green")]
    #[test_case((0.0, 1.0, 1.0), (3.0 / 6.0, 1.0, 1.0); "cyan")]
    #[test_case((0.0, 0.0, 1.0), (4.0 / 6.0, 1.0, 1.0); "blue")]
    #[test_case((1.0, 0.0, 1.0), (5.0 / 6.0, 1.0, 1.0); "magenta")]
    #[test_case((1.0, 0.0, 0.5), (11.0 / 12.0, 1.0, 1.0); "rose")]
    #[test_case((0.5, 0.5, 0.5), (0.0, 0.0, 0.5); "gray")]
    #[test_case((0.0, 0.0, 0.0), (0.0, 0.0, 0.0); "black")]
    #[test_case((0.0, 0.5, 0.0), (2.0 / 6.0, 1.0, 0.5); "base green")]
    fn test_rgb_to_hsv(rgb: (f64, f64, f64), expected: (f64, f64, f64)) {
        let hsv = rgb_to_hsv(RgbTriple::new(rgb.0, rgb.1, rgb.2));
        assert!(approx_eq(hsv, expected), "{hsv:?} != {expected:?}");
    }

    #[test]
    fn test_red_hue_is_positive_zero() {
        let hsv = rgb_to_hsv(RgbTriple::new(1.0, 0.0, 0.0));
        assert!(hsv.hue.is_sign_positive());
    }

    #[test]
    fn test_sort_by_hue_then_name() {
        let table: RgbTable = [
            ("blue", RgbTriple::new(0.0, 0.0, 1.0)),
            ("red", RgbTriple::new(1.0, 0.0, 0.0)),
            ("green", RgbTriple::new(0.0, 1.0, 0.0)),
            ("scarlet", RgbTriple::new(1.0, 0.0, 0.0)),
        ]
        .into_iter()
        .map(|(name, rgb)| (name.to_string(), rgb))
        .collect();

        let names: Vec<_> = sort_color_mapping(&table)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["red", "scarlet", "green", "blue"]);
    }

    #[test]
    fn test_grays_sort_by_value() {
        let table: RgbTable = [("white", 1.0), ("black", 0.0), ("gray", 0.5)]
            .into_iter()
            .map(|(name, level)| (name.to_string(), RgbTriple::gray(level)))
            .collect();

        let names: Vec<_> = sort_color_mapping(&table)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["black", "gray", "white"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let table: RgbTable = [
            ("a", RgbTriple::new(0.2, 0.4, 0.6)),
            ("b", RgbTriple::new(0.9, 0.1, 0.1)),
            ("c", RgbTriple::new(0.2, 0.4, 0.6)),
            ("d", RgbTriple::gray(0.3)),
        ]
        .into_iter()
        .map(|(name, rgb)| (name.to_string(), rgb))
        .collect();

        let once = sort_color_mapping(&table);
        let resorted: RgbTable = once
            .iter()
            .map(|(name, rgb)| ((*name).to_string(), *rgb))
            .collect();
        let twice = sort_color_mapping(&resorted);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_key_is_total() {
        let rgbs = [
            RgbTriple::new(0.2, 0.4, 0.6),
            RgbTriple::new(0.9, 0.1, 0.1),
            RgbTriple::gray(0.3),
            RgbTriple::new(f64::NAN, 0.0, 0.0),
        ];
        let names = ["x", "y"];
        let keys: Vec<_> = rgbs
            .iter()
            .flat_map(|rgb| names.iter().map(move |name| SortKey::new(name, *rgb)))
            .collect();

        for a in &keys {
            assert_eq!(a.cmp(a), Ordering::Equal);
            for b in &keys {
                assert_eq!(a.cmp(b).reverse(), b.cmp(a));
                for c in &keys {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }
}
