//! Pointer input handling for the label viewer.
//!
//! ## Architecture
//!
//! The viewer uses an explicit state machine (`DrawState`) to track where a
//! redraw gesture is. Events (`ViewerEvent`) are the only way in, whether
//! they come from the host or from the pointer.
//!
//! ## Modules
//!
//! - `coords` - Screen to percentage conversion and image fitting
//! - `state` - Drawing state machine enum and helper methods
//! - `events` - Input events and per-event outcomes
//! - `pointer_down` - Anchoring a new draw box
//! - `pointer_move` - Live draw box updates and pointer leave
//! - `pointer_up` - Commit or discard

pub mod coords;
mod events;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use coords::{CoordinateConverter, ImageRect};
pub use events::{DiscardReason, EventOutcome, ViewerEvent};
pub use state::DrawState;
