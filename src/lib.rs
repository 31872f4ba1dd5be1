//! Headless bounding-box label viewer and editor.
//!
//! A document image is overlaid with rectangular labels for extracted
//! fields. A user arms one label, drags a new rectangle over the image and
//! the new box is reported to the owner of the labels.
//!
//! - [`LabelViewer`] runs the drawing state machine and builds the overlay
//! - [`LabelStore`] is a ready-made owner that applies updates with undo
//! - [`ColorRegistry`] assigns field colors from a bounded palette

pub mod color;
pub mod constants;
pub mod error;
pub mod image_source;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod replay;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod viewer;

pub use color::{Color, ColorRegistry, SharedColorRegistry};
pub use error::{LabelError, LabelResult};
pub use input::{DiscardReason, DrawState, EventOutcome, ImageRect, ViewerEvent};
pub use render::{OutlineStyle, OverlayFrame};
pub use settings::ViewerSettings;
pub use store::{LabelFile, LabelStore};
pub use types::{BoundingBox, DocumentLabel, Label, LabelKind, LineItemLabel, PercentPoint, ScreenPoint};
pub use viewer::{LabelCallbacks, LabelViewer, NoCallbacks, ViewerProps};
