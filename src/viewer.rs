//! The label viewer: props in, events in, callbacks and overlay out.
//!
//! The viewer never mutates labels. A committed redraw is reported through
//! [`LabelCallbacks`] and the owner is expected to hand back fresh props.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::color::{Color, SharedColorRegistry, parse_palette};
use crate::constants::{DEFAULT_HIGHLIGHT_COLOR, MIN_DRAW_SIZE};
use crate::input::coords::{CoordinateConverter, ImageRect};
use crate::input::{DrawState, EventOutcome, ViewerEvent};
use crate::profile_scope;
use crate::settings::ViewerSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::spatial_index::SpatialIndex;
use crate::types::{
    BoundingBox, DocumentLabel, Label, LabelKind, LineItemLabel, PercentPoint, ScreenPoint,
};

/// Receivers for committed redraws and edit notifications.
pub trait LabelCallbacks {
    /// A document-level label was redrawn
    fn on_document_label_update(&mut self, label_id: &str, bbox: BoundingBox);

    /// A line-item label was redrawn
    fn on_line_item_label_update(&mut self, label_id: &str, bbox: BoundingBox);

    /// The user clicked a label's edit affordance
    fn on_edit_label(&mut self, _label_id: &str, _field_key: &str, _kind: LabelKind) {}
}

/// Callbacks that drop everything, for hosts that only render.
pub struct NoCallbacks;

impl LabelCallbacks for NoCallbacks {
    fn on_document_label_update(&mut self, _label_id: &str, _bbox: BoundingBox) {}
    fn on_line_item_label_update(&mut self, _label_id: &str, _bbox: BoundingBox) {}
}

/// Inputs supplied by the owning view on every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerProps {
    pub image_url: String,
    #[serde(default)]
    pub document_labels: Vec<DocumentLabel>,
    #[serde(default)]
    pub line_item_labels: Vec<LineItemLabel>,
    /// Externally driven "edit this label now" request
    #[serde(default)]
    pub edit_target: Option<String>,
}

impl ViewerProps {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Default::default()
        }
    }

    pub fn with_document_labels(mut self, labels: Vec<DocumentLabel>) -> Self {
        self.document_labels = labels;
        self
    }

    pub fn with_line_item_labels(mut self, labels: Vec<LineItemLabel>) -> Self {
        self.line_item_labels = labels;
        self
    }

    pub fn with_edit_target(mut self, label_id: Option<String>) -> Self {
        self.edit_target = label_id;
        self
    }

    /// Both lists as tagged labels, documents first
    pub fn tagged_labels(&self) -> Vec<Label> {
        self.document_labels
            .iter()
            .cloned()
            .map(Label::Document)
            .chain(self.line_item_labels.iter().cloned().map(Label::LineItem))
            .collect()
    }
}

/// Interactive bounding-box editor over a document image.
pub struct LabelViewer {
    pub(crate) image_url: String,
    /// Render order: document labels, then line items
    pub(crate) labels: Vec<Label>,
    pub(crate) index: SpatialIndex,
    pub(crate) edit_target_prop: Option<String>,
    pub(crate) image_rect: Option<ImageRect>,
    pub(crate) state: DrawState,
    pub(crate) colors: SharedColorRegistry,
    pub(crate) highlight: Color,
    pub(crate) min_draw_size: f32,
}

impl LabelViewer {
    pub fn new(props: ViewerProps, colors: SharedColorRegistry) -> Self {
        let mut viewer = Self {
            image_url: String::new(),
            labels: Vec::new(),
            index: SpatialIndex::new(),
            edit_target_prop: None,
            image_rect: None,
            state: DrawState::Idle,
            colors,
            highlight: Color::from_hex(DEFAULT_HIGHLIGHT_COLOR).unwrap_or(Color::rgb(250, 204, 21)),
            min_draw_size: MIN_DRAW_SIZE,
        };
        viewer.set_props(props);
        viewer
    }

    /// Construct and apply settings in one step
    pub fn with_settings(props: ViewerProps, colors: SharedColorRegistry, settings: &ViewerSettings) -> Self {
        let mut viewer = Self::new(props, colors);
        viewer.apply_settings(settings);
        viewer
    }

    /// Replace props. A changed, non-empty `edit_target` arms that label
    /// exactly as a `SetEditTarget` event would.
    pub fn set_props(&mut self, props: ViewerProps) -> Option<EventOutcome> {
        self.labels = props.tagged_labels();
        self.index = SpatialIndex::from_labels(&self.labels);
        self.image_url = props.image_url;

        if props.edit_target == self.edit_target_prop {
            return None;
        }
        self.edit_target_prop = props.edit_target;
        let label_id = self.edit_target_prop.clone()?;
        Some(self.select_target(&label_id))
    }

    /// Record where the image element currently sits on screen.
    /// `None` means it is not mounted.
    pub fn set_image_rect(&mut self, rect: Option<ImageRect>) {
        self.image_rect = rect;
    }

    pub fn apply_settings(&mut self, settings: &ViewerSettings) {
        if settings.min_draw_size.is_finite() && settings.min_draw_size >= 0.0 {
            self.min_draw_size = settings.min_draw_size;
        } else {
            warn!(value = settings.min_draw_size, "Ignoring invalid min_draw_size");
        }

        match Color::from_hex(&settings.highlight_color) {
            Ok(color) => self.highlight = color,
            Err(e) => warn!("Ignoring highlight color: {}", e),
        }

        match parse_palette(&settings.palette) {
            Ok(palette) => {
                if self.colors.set_palette(palette) {
                    debug!("Palette changed, field colors reassigned");
                }
            }
            Err(e) => warn!("Ignoring palette: {}", e),
        }
    }

    /// Check the settings watcher and reapply settings if the file changed.
    /// Returns true when settings were reloaded.
    pub fn check_settings_reload(&mut self, watcher: &mut SettingsWatcher) -> bool {
        match watcher.poll() {
            Some(event) => self.handle_settings_event(&event, watcher.path()),
            None => false,
        }
    }

    /// React to one change of the settings file at `path`.
    pub fn handle_settings_event(&mut self, event: &SettingsEvent, path: &Path) -> bool {
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                info!("Settings file changed, reloading {}", path.display());
                let settings = ViewerSettings::load_or_default(path);
                self.apply_settings(&settings);
                true
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted, keeping current settings");
                false
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
                false
            }
        }
    }

    /// Feed one event through the state machine.
    pub fn handle_event<C: LabelCallbacks + ?Sized>(
        &mut self,
        event: ViewerEvent,
        callbacks: &mut C,
    ) -> EventOutcome {
        profile_scope!("handle_event");

        let name = event.name();
        let outcome = match event {
            ViewerEvent::SetEditTarget { label_id } => self.select_target(&label_id),
            ViewerEvent::EditClick { label_id } => {
                let outcome = self.select_target(&label_id);
                if let Some(label) = self.find_label(&label_id) {
                    callbacks.on_edit_label(label.id(), label.field_key(), label.kind());
                }
                outcome
            }
            ViewerEvent::PointerDown { position } => self.handle_pointer_down(position),
            ViewerEvent::PointerMove { position } => self.handle_pointer_move(position),
            ViewerEvent::PointerUp { position } => self.handle_pointer_up(position, callbacks),
            ViewerEvent::PointerLeave => self.handle_pointer_leave(),
            ViewerEvent::Cancel => self.cancel(),
        };

        if !matches!(outcome, EventOutcome::Ignored | EventOutcome::DrawUpdated { .. }) {
            debug!(event = name, ?outcome, "viewer transition");
        }
        outcome
    }

    /// Arm a label for redrawing, dropping any in-progress draw.
    pub(crate) fn select_target(&mut self, label_id: &str) -> EventOutcome {
        if self.state.is_drawing() {
            debug!(
                previous = self.state.edit_target().unwrap_or_default(),
                next = label_id,
                "Discarding in-progress draw for new edit target"
            );
        }
        self.state.select(label_id);
        EventOutcome::Selected {
            label_id: label_id.to_string(),
        }
    }

    pub(crate) fn cancel(&mut self) -> EventOutcome {
        if self.state.is_idle() {
            return EventOutcome::Ignored;
        }
        self.state.reset();
        EventOutcome::Cancelled
    }

    /// Map a screen position into label space using the current image rect
    pub fn map_pointer(&self, position: ScreenPoint) -> PercentPoint {
        CoordinateConverter::screen_to_percent(position, self.image_rect.as_ref())
    }

    /// Topmost label under a screen position
    pub fn label_at(&self, position: ScreenPoint) -> Option<&Label> {
        self.image_rect.filter(|r| r.is_measurable())?;
        let point = self.map_pointer(position);
        self.index
            .topmost_at(point)
            .and_then(|order| self.labels.get(order))
    }

    /// Look a label up by id, document list first
    pub fn find_label(&self, label_id: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.id() == label_id)
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn image_rect(&self) -> Option<ImageRect> {
        self.image_rect
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.state.edit_target()
    }

    pub fn draw_box(&self) -> Option<BoundingBox> {
        self.state.draw_box()
    }

    pub fn min_draw_size(&self) -> f32 {
        self.min_draw_size
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight
    }

    pub fn colors(&self) -> &SharedColorRegistry {
        &self.colors
    }
}
