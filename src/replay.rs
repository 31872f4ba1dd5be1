//! Scripted gesture replay against a viewer wired to a label store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LabelResult;
use crate::input::{EventOutcome, ImageRect, ViewerEvent};
use crate::store::LabelStore;
use crate::viewer::LabelViewer;

/// A recorded interaction: where the image sat and what happened to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// On-screen image box. `None` replays as if the image never mounted.
    #[serde(default)]
    pub image_rect: Option<ImageRect>,
    pub events: Vec<ViewerEvent>,
}

impl GestureScript {
    pub fn load(path: &Path) -> LabelResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Feed every event through `viewer`, committing into `store` and
/// refreshing the viewer's props after each commit.
pub fn replay(viewer: &mut LabelViewer, store: &mut LabelStore, script: &GestureScript) -> Vec<EventOutcome> {
    viewer.set_image_rect(script.image_rect);

    let mut outcomes = Vec::with_capacity(script.events.len());
    for event in &script.events {
        let outcome = viewer.handle_event(event.clone(), store);
        if outcome.is_commit() {
            viewer.set_props(store.props(None));
        }
        outcomes.push(outcome);
    }
    outcomes
}
