//! Shared constants for the fridge crate.

// ── Layout ──────────────────────────────────────────────────────

/// Inset applied to each side of the container so a tile's edge never
/// overlaps the container border.
pub const BORDER_INSET_PX: f64 = 2.0;

/// DOM id of the element hosting the tiles.
pub const CANVAS_ELEMENT_ID: &str = "fridge";

/// DOM id of the optional participant counter.
pub const COUNTER_ELEMENT_ID: &str = "odo";

// ── Tiles ───────────────────────────────────────────────────────

/// Prefix prepended to a tile id to form its DOM id (`7` → `w-7`).
pub const TILE_ID_PREFIX: &str = "w-";

/// Classes applied to every tile element.
pub const TILE_CLASSES: [&str; 5] = ["draggable", "ui-widget-content", "ui-draggable", "ui-draggable-handle", "word"];

// ── Remote moves ────────────────────────────────────────────────

/// Duration of the transition played for a remote move.
pub const REMOTE_MOVE_DURATION_MS: u32 = 1500;

/// Horizontal curve: ease-in-out quad.
pub const EASE_IN_OUT_QUAD: &str = "cubic-bezier(0.45, 0, 0.55, 1)";

/// Horizontal curve: ease-out circ.
pub const EASE_OUT_CIRC: &str = "cubic-bezier(0.0, 0.55, 0.45, 1)";

/// Vertical curve: ease-in-out expo.
pub const EASE_IN_OUT_EXPO: &str = "cubic-bezier(0.87, 0, 0.13, 1)";

/// Vertical curve: ease-out back (overshoots).
pub const EASE_OUT_BACK: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
