//! Coordinate conversion between screen pixels and label space.
//!
//! Labels are stored as percentages of the rendered image, so overlays stay
//! aligned under responsive resizing. Pointer events arrive in screen
//! pixels and are mapped here.

use serde::{Deserialize, Serialize};

use crate::constants::{PERCENT_MAX, PERCENT_MIN};
use crate::types::{PercentPoint, ScreenPoint};

/// On-screen bounding rectangle of the rendered image element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ImageRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect with no area cannot anchor percentages
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Where an image of `natural` size lands inside `container` when drawn
    /// at its native aspect ratio, centered and letterboxed.
    pub fn fit_contain(natural: (u32, u32), container: ImageRect) -> Self {
        let (nw, nh) = (natural.0 as f32, natural.1 as f32);
        if nw <= 0.0 || nh <= 0.0 || !container.is_measurable() {
            return Self::new(container.x, container.y, 0.0, 0.0);
        }
        let scale = (container.width / nw).min(container.height / nh);
        let width = nw * scale;
        let height = nh * scale;
        Self::new(
            container.x + (container.width - width) / 2.0,
            container.y + (container.height - height) / 2.0,
            width,
            height,
        )
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to percentages of the image rect, clamped
    /// to `[0, 100]` on both axes.
    ///
    /// Returns the origin when the image has not been measured yet.
    #[inline]
    pub fn screen_to_percent(pos: ScreenPoint, rect: Option<&ImageRect>) -> PercentPoint {
        let Some(rect) = rect.filter(|r| r.is_measurable()) else {
            return PercentPoint::default();
        };
        PercentPoint::new(
            clamp_percent((pos.x - rect.x) * PERCENT_MAX / rect.width),
            clamp_percent((pos.y - rect.y) * PERCENT_MAX / rect.height),
        )
    }

    /// Convert a percentage position back to screen pixels
    #[inline]
    pub fn percent_to_screen(pos: PercentPoint, rect: &ImageRect) -> ScreenPoint {
        ScreenPoint::new(
            rect.x + pos.x * rect.width / PERCENT_MAX,
            rect.y + pos.y * rect.height / PERCENT_MAX,
        )
    }
}

#[inline]
fn clamp_percent(value: f32) -> f32 {
    value.clamp(PERCENT_MIN, PERCENT_MAX)
}
