// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Normalize a [`ColorSpec`] to an [`RgbTriple`], the way matplotlib's `to_rgb` does.

use crate::make_colors::{error::{MakeColorsError, MakeColorsResult},
                         types::{ColorSpec, NamedColorTable, RgbTriple}};

const NONE_COLOR: &str = "none";

/// Converts color specs to RGB. Holds the table that names resolve against, usually
/// the combined named color table.
#[derive(Debug, Clone, Copy)]
pub struct ColorConverter<'a> {
    named_colors: &'a NamedColorTable,
}

impl<'a> ColorConverter<'a> {
    #[must_use]
    pub fn new(named_colors: &'a NamedColorTable) -> Self { Self { named_colors } }

    /// Convert `spec` to RGB. Any alpha channel is dropped.
    ///
    /// Text specs are tried as, in order:
    /// 1. `"none"` (any case), which is black.
    /// 2. A name in the named color table. Names longer than one char also match
    ///    case-insensitively, so `"Red"` finds `"red"` but `"B"` does not find `"b"`.
    /// 3. A hex string with a leading `#`: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    /// 4. A grayscale level, a number in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`MakeColorsError::ColorConversion`] if none of the above match, or if
    /// numeric channels are out of range or have the wrong arity.
    pub fn to_rgb(&self, spec: &ColorSpec) -> MakeColorsResult<RgbTriple> {
        match spec {
            ColorSpec::Channels(channels) => channels_to_rgb(spec, channels),
            ColorSpec::Text(text) => {
                if text.eq_ignore_ascii_case(NONE_COLOR) {
                    return Ok(RgbTriple::gray(0.0));
                }
                match self.lookup(text) {
                    Some(ColorSpec::Channels(channels)) => channels_to_rgb(spec, channels),
                    Some(ColorSpec::Text(resolved)) => text_to_rgb(spec, resolved),
                    None => text_to_rgb(spec, text),
                }
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<&'a ColorSpec> {
        self.named_colors.get(name).or_else(|| {
            if name.chars().count() == 1 {
                None
            } else {
                self.named_colors.get(&name.to_lowercase())
            }
        })
    }
}

/// Hex or grayscale level. Names were already resolved by the caller.
fn text_to_rgb(spec: &ColorSpec, text: &str) -> MakeColorsResult<RgbTriple> {
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            MakeColorsError::color_conversion(spec, "not a valid hex color")
        });
    }

    let Ok(level) = text.trim().parse::<f64>() else {
        return Err(MakeColorsError::color_conversion(
            spec,
            "not a known color name, a hex string or a grayscale level",
        ));
    };

    if (0.0..=1.0).contains(&level) {
        Ok(RgbTriple::gray(level))
    } else {
        Err(MakeColorsError::color_conversion(
            spec,
            "a grayscale level must be within 0-1",
        ))
    }
}

fn channels_to_rgb(spec: &ColorSpec, channels: &[f64]) -> MakeColorsResult<RgbTriple> {
    let &[red, green, blue, ..] = channels else {
        return Err(MakeColorsError::color_conversion(
            spec,
            "expected 3 (RGB) or 4 (RGBA) channels",
        ));
    };

    if channels.len() > 4 {
        return Err(MakeColorsError::color_conversion(
            spec,
            "expected 3 (RGB) or 4 (RGBA) channels",
        ));
    }

    if !channels.iter().all(|it| (0.0..=1.0).contains(it)) {
        return Err(MakeColorsError::color_conversion(
            spec,
            "channel values must be within 0-1",
        ));
    }

    Ok(RgbTriple::new(red, green, blue))
}

/// Parse the digits after `#`. Short forms repeat each digit, so `f80` is `ff8800`.
fn parse_hex(digits: &str) -> Option<RgbTriple> {
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let channel_width = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return None,
    };

    let channel = |index: usize| -> Option<f64> {
        let start = index * channel_width;
        let item = &digits[start..start + channel_width];
        let value = u8::from_str_radix(item, 16).ok()?;
        let value = if channel_width == 1 { value * 17 } else { value };
        Some(f64::from(value) / 255.0)
    };

    Some(RgbTriple::new(channel(0)?, channel(1)?, channel(2)?))
}
