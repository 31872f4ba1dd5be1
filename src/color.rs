//! Field color assignment.
//!
//! Each field key gets a color from a bounded palette the first time it is
//! seen and keeps it until the registry is reset. Once every palette entry
//! has been handed out, allocation wraps around and reuses colors.
//!
//! The registry is an explicit object. Hosts construct one, wrap it in a
//! [`SharedColorRegistry`] and hand it to every viewer that should agree on
//! colors.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::DEFAULT_PALETTE_HEX;
use crate::error::{LabelError, LabelResult};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> LabelResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(LabelError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| LabelError::InvalidColor(hex.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Built-in palette, parsed once.
pub static DEFAULT_PALETTE: Lazy<Vec<Color>> = Lazy::new(|| {
    DEFAULT_PALETTE_HEX
        .iter()
        .filter_map(|hex| Color::from_hex(hex).ok())
        .collect()
});

/// Parse a list of hex strings into a palette.
pub fn parse_palette<S: AsRef<str>>(entries: &[S]) -> LabelResult<Vec<Color>> {
    if entries.is_empty() {
        return Err(LabelError::EmptyPalette);
    }
    entries.iter().map(|s| Color::from_hex(s.as_ref())).collect()
}

/// Field key to color allocator.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    palette: Vec<Color>,
    assignments: HashMap<String, Color>,
    next: usize,
}

impl ColorRegistry {
    /// Create a registry over `palette`. An empty palette falls back to the
    /// built-in one.
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.clone()
        } else {
            palette
        };
        Self {
            palette,
            assignments: HashMap::new(),
            next: 0,
        }
    }

    /// Color for a field key, allocating on first use.
    pub fn get(&mut self, field_key: &str) -> Color {
        if let Some(color) = self.assignments.get(field_key) {
            return *color;
        }
        let color = self.palette[self.next % self.palette.len()];
        self.next += 1;
        self.assignments.insert(field_key.to_string(), color);
        tracing::trace!(field_key, color = %color, "assigned field color");
        color
    }

    /// Peek without allocating
    pub fn assigned(&self, field_key: &str) -> Option<Color> {
        self.assignments.get(field_key).copied()
    }

    /// Forget every assignment and restart at the first palette entry.
    pub fn reset(&mut self) {
        self.assignments.clear();
        self.next = 0;
    }

    /// Replace the palette. Assignments are dropped only when the palette
    /// actually changes. Returns whether it did.
    pub fn set_palette(&mut self, palette: Vec<Color>) -> bool {
        let next = Self::new(palette);
        if next.palette == self.palette {
            return false;
        }
        *self = next;
        true
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.clone())
    }
}

/// Cloneable handle to a registry shared between viewers.
#[derive(Debug, Clone, Default)]
pub struct SharedColorRegistry(Arc<Mutex<ColorRegistry>>);

impl SharedColorRegistry {
    pub fn new(registry: ColorRegistry) -> Self {
        Self(Arc::new(Mutex::new(registry)))
    }

    pub fn get(&self, field_key: &str) -> Color {
        self.0.lock().get(field_key)
    }

    pub fn reset(&self) {
        self.0.lock().reset();
    }

    pub fn set_palette(&self, palette: Vec<Color>) -> bool {
        self.0.lock().set_palette(palette)
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}
