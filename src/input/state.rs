//! Drawing state machine for redrawing a label's bounding box.
//!
//! ## State Transitions
//!
//! ```text
//! Idle      -> Selecting   (SetEditTarget / EditClick)
//! Selecting -> Drawing     (pointer down on the image)
//! Drawing   -> Drawing     (pointer move)
//! Drawing   -> Idle        (pointer up: commit or discard, pointer leave: discard)
//! Any       -> Selecting   (SetEditTarget / EditClick, drops any draw box)
//! Any       -> Idle        (Cancel)
//! ```

use crate::types::{BoundingBox, PercentPoint};

/// Where the viewer is in a redraw gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawState {
    /// No label armed
    #[default]
    Idle,

    /// A label is armed for redrawing, no drag yet
    Selecting {
        /// Label to redraw
        target: String,
    },

    /// Pointer is down and dragging
    Drawing {
        /// Label being redrawn
        target: String,
        /// Mapped pointer position at pointer-down
        anchor: PercentPoint,
        /// Latest mapped pointer position
        current: PercentPoint,
    },
}

impl DrawState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting { .. })
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The armed label, whether or not a drag is in progress
    pub fn edit_target(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Selecting { target } | Self::Drawing { target, .. } => Some(target),
        }
    }

    /// The label currently being dragged
    pub fn drawing_target(&self) -> Option<&str> {
        match self {
            Self::Drawing { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Live draw box: `x = min`, `y = min`, `width`/`height` = absolute deltas
    pub fn draw_box(&self) -> Option<BoundingBox> {
        match self {
            Self::Drawing { anchor, current, .. } => Some(BoundingBox::from_corners(*anchor, *current)),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<PercentPoint> {
        match self {
            Self::Drawing { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    /// Arm a label, discarding any in-progress draw
    pub fn select(&mut self, target: impl Into<String>) {
        *self = Self::Selecting {
            target: target.into(),
        };
    }

    /// Begin a drag at `anchor`. Only valid once a target is armed.
    pub fn start_drawing(&mut self, anchor: PercentPoint) -> bool {
        let Some(target) = self.edit_target().map(str::to_string) else {
            return false;
        };
        *self = Self::Drawing {
            target,
            anchor,
            current: anchor,
        };
        true
    }

    /// Move the live corner while drawing
    pub fn set_current(&mut self, pos: PercentPoint) -> bool {
        if let Self::Drawing { current, .. } = self {
            *current = pos;
            true
        } else {
            false
        }
    }

    /// End the gesture, returning the target and final box if one was being drawn
    pub fn finish(&mut self) -> Option<(String, BoundingBox)> {
        match std::mem::take(self) {
            Self::Drawing {
                target,
                anchor,
                current,
            } => Some((target, BoundingBox::from_corners(anchor, current))),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
