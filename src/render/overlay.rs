//! Overlay display list - one rectangle per label plus the live draw box.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;

use crate::color::Color;
use crate::profile_scope;
use crate::types::{BoundingBox, LabelKind};
use crate::viewer::LabelViewer;

/// Border thickness in CSS pixels
const OUTLINE_WIDTH_PX: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineStyle {
    Solid,
    Dashed,
}

impl OutlineStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            OutlineStyle::Solid => "solid",
            OutlineStyle::Dashed => "dashed",
        }
    }
}

/// An existing label drawn over the image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayBox {
    pub label_id: String,
    pub kind: LabelKind,
    pub field_key: String,
    pub text: String,
    pub bbox: BoundingBox,
    pub color: Color,
    pub outline: OutlineStyle,
    /// Armed for redrawing but not yet dragged
    pub highlighted: bool,
}

/// The rectangle following the pointer during a drag. Never captures
/// pointer events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawBoxOverlay {
    pub bbox: BoundingBox,
    pub color: Color,
    pub outline: OutlineStyle,
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub image_url: String,
    pub boxes: Vec<OverlayBox>,
    pub draw_box: Option<DrawBoxOverlay>,
}

impl LabelViewer {
    /// Build the overlay for the current state.
    ///
    /// The label being dragged is left out so it does not render twice
    /// under the live draw box.
    pub fn render(&self) -> OverlayFrame {
        profile_scope!("render_overlay");

        let dragging = self.state.drawing_target();
        let armed = if self.state.is_selecting() {
            self.state.edit_target()
        } else {
            None
        };

        let boxes = self
            .labels
            .iter()
            .filter(|label| Some(label.id()) != dragging)
            .map(|label| {
                let highlighted = Some(label.id()) == armed;
                let field_color = self.colors.get(label.field_key());
                OverlayBox {
                    label_id: label.id().to_string(),
                    kind: label.kind(),
                    field_key: label.field_key().to_string(),
                    text: label.text().to_string(),
                    bbox: label.bbox(),
                    color: if highlighted { self.highlight } else { field_color },
                    outline: if highlighted {
                        OutlineStyle::Dashed
                    } else {
                        OutlineStyle::Solid
                    },
                    highlighted,
                }
            })
            .collect();

        let draw_box = self
            .state
            .draw_box()
            .filter(BoundingBox::has_area)
            .map(|bbox| DrawBoxOverlay {
                bbox,
                color: self.highlight,
                outline: OutlineStyle::Dashed,
            });

        OverlayFrame {
            image_url: self.image_url.clone(),
            boxes,
            draw_box,
        }
    }
}

impl OverlayFrame {
    /// Find a box by label id
    pub fn box_for(&self, label_id: &str) -> Option<&OverlayBox> {
        self.boxes.iter().find(|b| b.label_id == label_id)
    }

    /// HTML-ish markup, one element per line. Overlays are absolutely
    /// positioned with percentage offsets inside the image wrapper.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<img src=\"{}\">", escape_attr(&self.image_url));
        for b in &self.boxes {
            let _ = writeln!(
                out,
                "<div data-label=\"{}\" data-kind=\"{}\" data-field=\"{}\" style=\"{}; border: {}px {} {}\"></div>",
                escape_attr(&b.label_id),
                b.kind,
                escape_attr(&b.field_key),
                css_position(&b.bbox),
                OUTLINE_WIDTH_PX,
                b.outline.as_css(),
                b.color,
            );
        }
        if let Some(d) = &self.draw_box {
            let _ = writeln!(
                out,
                "<div data-draw-box style=\"{}; border: {}px {} {}; pointer-events: none\"></div>",
                css_position(&d.bbox),
                OUTLINE_WIDTH_PX,
                d.outline.as_css(),
                d.color,
            );
        }
        out
    }
}

/// `left/top/width/height` as CSS percentages
pub fn css_position(bbox: &BoundingBox) -> String {
    format!(
        "left: {}%; top: {}%; width: {}%; height: {}%",
        bbox.x, bbox.y, bbox.width, bbox.height
    )
}

/// Escape text for a double-quoted attribute value
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
