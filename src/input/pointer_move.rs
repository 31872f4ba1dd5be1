//! Pointer move handling - keeps the live draw box in sync with the pointer.
//!
//! Called for every move event while the pointer is over the image, so the
//! non-drawing path returns before mapping coordinates.

use crate::input::EventOutcome;
use crate::profile_scope;
use crate::types::ScreenPoint;
use crate::viewer::LabelViewer;

impl LabelViewer {
    pub(crate) fn handle_pointer_move(&mut self, position: ScreenPoint) -> EventOutcome {
        if !self.state.is_drawing() {
            return EventOutcome::Ignored;
        }
        profile_scope!("pointer_move_drawing");

        let current = self.map_pointer(position);
        self.state.set_current(current);

        match self.state.draw_box() {
            Some(bbox) => EventOutcome::DrawUpdated { bbox },
            None => EventOutcome::Ignored,
        }
    }

    /// Leaving the image mid-drag abandons the draw and disarms the label.
    pub(crate) fn handle_pointer_leave(&mut self) -> EventOutcome {
        if !self.state.is_drawing() {
            return EventOutcome::Ignored;
        }
        self.state.reset();
        EventOutcome::Discarded {
            reason: crate::input::DiscardReason::PointerLeft,
        }
    }
}
