//! Input events fed into the viewer and the outcome of handling each one.

use serde::{Deserialize, Serialize};

use crate::types::{BoundingBox, LabelKind, ScreenPoint};

/// Everything that can drive the drawing state machine.
///
/// External "edit this label now" commands and clicks on a label's edit
/// affordance arrive as distinct events but share one transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerEvent {
    /// Host asks for a label to be armed
    SetEditTarget { label_id: String },
    /// User clicked a label's edit affordance
    EditClick { label_id: String },
    PointerDown { position: ScreenPoint },
    PointerMove { position: ScreenPoint },
    PointerUp { position: ScreenPoint },
    /// Pointer left the image element
    PointerLeave,
    /// Abandon whatever is in progress
    Cancel,
}

impl ViewerEvent {
    pub fn set_edit_target(label_id: impl Into<String>) -> Self {
        Self::SetEditTarget {
            label_id: label_id.into(),
        }
    }

    pub fn edit_click(label_id: impl Into<String>) -> Self {
        Self::EditClick {
            label_id: label_id.into(),
        }
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown {
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove {
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp {
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetEditTarget { .. } => "set_edit_target",
            Self::EditClick { .. } => "edit_click",
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp { .. } => "pointer_up",
            Self::PointerLeave => "pointer_leave",
            Self::Cancel => "cancel",
        }
    }
}

/// Why a draw ended without a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// Released with a side under the minimum size
    TooSmall,
    /// Pointer left the image mid-drag
    PointerLeft,
    /// Commit targeted an id missing from both label lists
    UnknownLabel,
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Event does not apply in the current state
    Ignored,
    /// A label was armed (any in-progress draw was dropped)
    Selected { label_id: String },
    /// Drag began at a zero-size box
    DrawStarted { bbox: BoundingBox },
    /// Live box changed
    DrawUpdated { bbox: BoundingBox },
    /// New box was reported through the matching callback
    Committed {
        label_id: String,
        kind: LabelKind,
        bbox: BoundingBox,
    },
    /// Gesture ended with no callback
    Discarded { reason: DiscardReason },
    /// Cancel returned the viewer to Idle
    Cancelled,
}

impl EventOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}
