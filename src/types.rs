//! Core types for document labels.
//!
//! Labels live in percentage-of-image space: `x`/`y` are the top-left corner
//! and `width`/`height` the extent, all relative to the rendered image.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{PERCENT_MAX, PERCENT_MIN};

// ============================================================================
// Geometry
// ============================================================================

/// A point in screen pixels, as delivered by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in percentage-of-image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f32,
    pub y: f32,
}

impl PercentPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in percentage-of-image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box spanned by two corners, in any order.
    pub fn from_corners(a: PercentPoint, b: PercentPoint) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Zero-size box at a point
    pub fn at(point: PercentPoint) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// True when both sides reach `min_size`
    pub fn meets_min_size(&self, min_size: f32) -> bool {
        self.width >= min_size && self.height >= min_size
    }

    /// True when both sides are strictly positive
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn contains(&self, point: PercentPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Which list a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Document,
    LineItem,
}

impl LabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Document => "document",
            LabelKind::LineItem => "line_item",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounding box for a whole-document (non-tabular) extracted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLabel {
    pub id: String,
    pub text: String,
    pub field_key: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DocumentLabel {
    pub fn new(id: impl Into<String>, field_key: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            field_key: field_key.into(),
            x: bbox.x,
            y: bbox.y,
            width: bbox.width,
            height: bbox.height,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Bounding box for a field inside one row of an extracted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemLabel {
    pub id: String,
    pub text: String,
    pub field_key: String,
    /// Table row this field belongs to
    #[serde(default)]
    pub item_index: Option<usize>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LineItemLabel {
    pub fn new(
        id: impl Into<String>,
        field_key: impl Into<String>,
        item_index: usize,
        bbox: BoundingBox,
    ) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            field_key: field_key.into(),
            item_index: Some(item_index),
            x: bbox.x,
            y: bbox.y,
            width: bbox.width,
            height: bbox.height,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// A label of either kind. Update callbacks are chosen by matching on the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Label {
    Document(DocumentLabel),
    LineItem(LineItemLabel),
}

impl Label {
    pub fn id(&self) -> &str {
        match self {
            Label::Document(l) => &l.id,
            Label::LineItem(l) => &l.id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Label::Document(l) => &l.text,
            Label::LineItem(l) => &l.text,
        }
    }

    pub fn field_key(&self) -> &str {
        match self {
            Label::Document(l) => &l.field_key,
            Label::LineItem(l) => &l.field_key,
        }
    }

    pub fn kind(&self) -> LabelKind {
        match self {
            Label::Document(_) => LabelKind::Document,
            Label::LineItem(_) => LabelKind::LineItem,
        }
    }

    pub fn item_index(&self) -> Option<usize> {
        match self {
            Label::Document(_) => None,
            Label::LineItem(l) => l.item_index,
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        match self {
            Label::Document(l) => BoundingBox::new(l.x, l.y, l.width, l.height),
            Label::LineItem(l) => BoundingBox::new(l.x, l.y, l.width, l.height),
        }
    }

    pub fn set_bbox(&mut self, bbox: BoundingBox) {
        let (x, y, width, height) = match self {
            Label::Document(l) => (&mut l.x, &mut l.y, &mut l.width, &mut l.height),
            Label::LineItem(l) => (&mut l.x, &mut l.y, &mut l.width, &mut l.height),
        };
        *x = bbox.x;
        *y = bbox.y;
        *width = bbox.width;
        *height = bbox.height;
    }

    /// Check the coordinate invariants. Returns a reason on failure.
    ///
    /// `x + width` and `y + height` are allowed past 100.
    pub fn validate(&self) -> Result<(), String> {
        let b = self.bbox();
        let in_range = |v: f32| (PERCENT_MIN..=PERCENT_MAX).contains(&v);
        if !in_range(b.x) || !in_range(b.y) {
            return Err(format!("position ({}, {}) outside 0..=100", b.x, b.y));
        }
        if !(b.width >= 0.0) || !(b.height >= 0.0) {
            return Err(format!("negative size ({}, {})", b.width, b.height));
        }
        Ok(())
    }
}

impl From<DocumentLabel> for Label {
    fn from(label: DocumentLabel) -> Self {
        Label::Document(label)
    }
}

impl From<LineItemLabel> for Label {
    fn from(label: LineItemLabel) -> Self {
        Label::LineItem(label)
    }
}
