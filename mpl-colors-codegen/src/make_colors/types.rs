// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type definitions shared by the generator stages.

use ordermap::OrderMap;
use std::fmt;

/// Red, green and blue channels, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbTriple {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbTriple {
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self { Self { red, green, blue } }

    #[must_use]
    pub const fn gray(level: f64) -> Self { Self::new(level, level, level) }

    #[must_use]
    pub const fn channels(&self) -> [f64; 3] { [self.red, self.green, self.blue] }
}

/// Renders as a Python tuple literal, eg: `(1.0, 0.5, 0.0)`. `{:?}` on `f64` is the
/// shortest representation that round-trips, with a `.0` for whole numbers.
impl fmt::Display for RgbTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.red, self.green, self.blue)
    }
}

/// Hue, saturation and value, each in `[0, 1]`. Only ever used as a sort key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// The value a color table stores against a name.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// A hex string (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), the name of another
    /// color, or a grayscale level such as `"0.5"`.
    Text(String),
    /// Numeric channels, 3 (RGB) or 4 (RGBA) of them.
    Channels(Vec<f64>),
}

impl ColorSpec {
    pub fn text(it: impl Into<String>) -> Self { Self::Text(it.into()) }
}

impl From<&str> for ColorSpec {
    fn from(it: &str) -> Self { Self::Text(it.to_string()) }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((red, green, blue): (f64, f64, f64)) -> Self {
        Self::Channels(vec![red, green, blue])
    }
}

impl From<RgbTriple> for ColorSpec {
    fn from(it: RgbTriple) -> Self { Self::Channels(it.channels().to_vec()) }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Text(text) => write!(f, "{text:?}"),
            ColorSpec::Channels(channels) => write!(f, "{channels:?}"),
        }
    }
}

/// Color name to spec, in insertion order. Inserting an existing name replaces its
/// value and keeps its position.
pub type NamedColorTable = OrderMap<String, ColorSpec>;

/// Color name to RGB, in insertion order.
pub type RgbTable = OrderMap<String, RgbTriple>;

/// One enum member.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub identifier: String,
    pub rgb: RgbTriple,
    /// The upstream name this member was derived from.
    pub raw_name: String,
}

/// One enum: a name and its members in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup {
    pub name: String,
    pub entries: Vec<ColorEntry>,
}

impl ColorGroup {
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&ColorEntry> {
        self.entries.iter().find(|it| it.identifier == identifier)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|it| it.identifier.as_str())
    }
}

/// Maps a raw upstream name to the name that gets sanitised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameTransform {
    #[default]
    Identity,
    /// Drop a fixed number of leading characters, eg: 4 for `"tab:"`.
    StripPrefix(usize),
}

impl NameTransform {
    /// Length of the `"tab:"` namespace prefix.
    pub const TABLEAU: Self = Self::StripPrefix(4);
    /// Length of the `"xkcd:"` namespace prefix.
    pub const XKCD: Self = Self::StripPrefix(5);

    /// Counts characters, not bytes, so a short or non-ASCII name never splits a
    /// code point.
    #[must_use]
    pub fn apply<'a>(&self, name: &'a str) -> &'a str {
        match self {
            NameTransform::Identity => name,
            NameTransform::StripPrefix(count) => match name.char_indices().nth(*count) {
                Some((byte_index, _)) => &name[byte_index..],
                None => "",
            },
        }
    }
}

/// How a group is assembled from its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupOptions {
    pub grey_duplicates: bool,
    pub name_transform: NameTransform,
}

/// Where the generated module goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(std::path::PathBuf),
}
