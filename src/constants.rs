//! Application-wide constants.
//!
//! Centralizes magic numbers for the label viewer so thresholds and
//! defaults live in one place.

// ============================================================================
// Coordinate Space
// ============================================================================

/// Lower bound of the percentage coordinate space
pub const PERCENT_MIN: f32 = 0.0;

/// Upper bound of the percentage coordinate space
pub const PERCENT_MAX: f32 = 100.0;

// ============================================================================
// Drawing
// ============================================================================

/// Minimum width and height (percentage units) for a redraw to commit.
/// Anything smaller is treated as an accidental click.
pub const MIN_DRAW_SIZE: f32 = 1.0;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history entries kept by the label store
pub const MAX_HISTORY_STATES: usize = 50;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Default field palette, allocated first-come-first-served
pub const DEFAULT_PALETTE_HEX: &[&str] = &[
    "#ef4444", // red
    "#3b82f6", // blue
    "#22c55e", // green
    "#f59e0b", // amber
    "#a855f7", // purple
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f97316", // orange
    "#6366f1", // indigo
    "#84cc16", // lime
    "#06b6d4", // cyan
    "#e11d48", // rose
];

/// Outline color for the armed edit target and the live draw box
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#facc15";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "labelview";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default tracing filter when neither RUST_LOG nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "labelview=info";
