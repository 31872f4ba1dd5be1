//! Render pass for the label overlay.
//!
//! Produces a display list (`OverlayFrame`) the host paints over the image.
//! Positions are CSS percentages relative to the rendered image box.

mod overlay;

pub use overlay::{DrawBoxOverlay, OutlineStyle, OverlayBox, OverlayFrame};
