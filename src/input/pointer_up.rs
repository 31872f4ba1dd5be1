//! Pointer up handling - commit the redrawn box or discard it.

use tracing::{debug, info};

use crate::input::{DiscardReason, EventOutcome};
use crate::types::{Label, ScreenPoint};
use crate::viewer::{LabelCallbacks, LabelViewer};

impl LabelViewer {
    pub(crate) fn handle_pointer_up<C: LabelCallbacks + ?Sized>(
        &mut self,
        position: ScreenPoint,
        callbacks: &mut C,
    ) -> EventOutcome {
        if !self.state.is_drawing() {
            return EventOutcome::Ignored;
        }

        // The release point is the final corner
        let current = self.map_pointer(position);
        self.state.set_current(current);

        // Gesture is over either way: target and draw box are cleared here
        let Some((label_id, bbox)) = self.state.finish() else {
            return EventOutcome::Ignored;
        };

        if !bbox.meets_min_size(self.min_draw_size) {
            debug!(
                label_id = %label_id,
                width = bbox.width,
                height = bbox.height,
                min = self.min_draw_size,
                "Draw too small, discarding"
            );
            return EventOutcome::Discarded {
                reason: DiscardReason::TooSmall,
            };
        }

        let Some(label) = self.find_label(&label_id) else {
            debug!(label_id = %label_id, "Commit for unknown label ignored");
            return EventOutcome::Discarded {
                reason: DiscardReason::UnknownLabel,
            };
        };

        let kind = label.kind();
        match label {
            Label::Document(_) => callbacks.on_document_label_update(&label_id, bbox),
            Label::LineItem(_) => callbacks.on_line_item_label_update(&label_id, bbox),
        }
        info!(
            label_id = %label_id,
            %kind,
            x = bbox.x,
            y = bbox.y,
            width = bbox.width,
            height = bbox.height,
            "Label redrawn"
        );

        EventOutcome::Committed {
            label_id,
            kind,
            bbox,
        }
    }
}
