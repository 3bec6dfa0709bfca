//! Shared numeric constants for the placement crate.
//!
//! These are the defaults behind [`crate::config::EngineConfig`]; the engine
//! itself always reads the configured value, never these directly.

// ── Footprints ──────────────────────────────────────────────────

/// Footprint width used for variants missing from the catalog.
pub const FALLBACK_WIDTH: f64 = 1.5;

/// Footprint depth used for variants missing from the catalog.
pub const FALLBACK_DEPTH: f64 = 0.5;

/// Height used for variants missing from the catalog.
pub const FALLBACK_HEIGHT: f64 = 0.45;

// ── Collision ───────────────────────────────────────────────────

/// Amount shaved off each half-extent so touching edges don't count as overlap.
pub const FOOTPRINT_TOLERANCE: f64 = 0.02;

/// Smallest half-extent a shrunk footprint may have.
pub const MIN_HALF_EXTENT: f64 = 0.001;

/// Center-to-center distance beyond which pairs skip the SAT test.
pub const BROAD_PHASE_RADIUS: f64 = 2.5;

// ── Snapping ────────────────────────────────────────────────────

/// Distance from a snap anchor within which a candidate is pulled onto it.
pub const SNAP_THRESHOLD: f64 = 0.5;

/// Gap left between edge-adjacent neighbors after snapping.
pub const SNAP_GAP: f64 = 0.01;

/// Center distance under which a rotating object counts as attached to a neighbor.
pub const ROTATE_PROXIMITY: f64 = 1.6;

/// Angular window (degrees) in which a rotation locks onto a neighbor's yaw.
pub const ROTATE_SNAP_TOLERANCE_DEG: f64 = 5.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of snapshots retained on each history stack.
pub const HISTORY_LIMIT: usize = 30;

// ── Attributes ──────────────────────────────────────────────────

/// Color given to freshly dropped seating objects.
pub const DEFAULT_COLOR: &str = "Grijs";

/// Surface finish given to freshly dropped seating objects.
pub const DEFAULT_FINISH: &str = "glad";
