//! Pointer down handling - anchors a new draw box on the armed label.

use tracing::trace;

use crate::input::EventOutcome;
use crate::types::{BoundingBox, ScreenPoint};
use crate::viewer::LabelViewer;

impl LabelViewer {
    pub(crate) fn handle_pointer_down(&mut self, position: ScreenPoint) -> EventOutcome {
        // Nothing armed: clicks on the image do not start a draw
        if self.state.edit_target().is_none() {
            return EventOutcome::Ignored;
        }

        let anchor = self.map_pointer(position);
        self.state.start_drawing(anchor);
        trace!(x = anchor.x, y = anchor.y, "draw anchored");

        EventOutcome::DrawStarted {
            bbox: BoundingBox::at(anchor),
        }
    }
}
