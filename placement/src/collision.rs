//! Footprint overlap tests on the ground plane.
//!
//! Each object's footprint is its catalog rectangle, shrunk by a small
//! tolerance, rotated by yaw and translated to its position. Overlap between
//! two footprints is decided with the Separating Axis Theorem.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::catalog::{Dimensions, dimensions_of};
use crate::config::EngineConfig;
use crate::doc::{ObjectId, PlacedObject};
use crate::geom::Pose;

/// Ground-plane corners `(x, z)` of a footprint, in winding order.
pub type Corners = [(f64, f64); 4];

const SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)];

/// Shrunk half-extents of `dims`, never below `cfg.min_half_extent`.
#[must_use]
pub fn half_extents(dims: Dimensions, cfg: &EngineConfig) -> (f64, f64) {
    let hw = (dims.half_width() - cfg.footprint_tolerance).max(cfg.min_half_extent);
    let hd = (dims.half_depth() - cfg.footprint_tolerance).max(cfg.min_half_extent);
    (hw, hd)
}

/// World-space corners of a `half_w` × `half_d` rectangle at `pose`.
///
/// Uses the same yaw convention as [`crate::geom::local_x_offset`], so a
/// footprint's local X axis is the axis snapping chains along.
#[must_use]
pub fn footprint_corners(pose: &Pose, half_w: f64, half_d: f64) -> Corners {
    let (sin, cos) = pose.yaw().sin_cos();
    let (cx, cz) = (pose.position.x, pose.position.z);
    let mut corners = [(0.0, 0.0); 4];
    for (i, &(sx, sz)) in SIGNS.iter().enumerate() {
        let lx = sx * half_w;
        let lz = sz * half_d;
        corners[i] = (cx + lx * cos + lz * sin, cz - lx * sin + lz * cos);
    }
    corners
}

fn project(corners: &Corners, ax: f64, az: f64) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &(x, z) in corners {
        let dot = x * ax + z * az;
        lo = lo.min(dot);
        hi = hi.max(dot);
    }
    (lo, hi)
}

/// True if two convex quads overlap. Shared edges count as overlap; callers
/// shrink footprints beforehand so that touching neighbors stay apart.
#[must_use]
pub fn quads_overlap(a: &Corners, b: &Corners) -> bool {
    for quad in [a, b] {
        for i in 0..4 {
            let (x1, z1) = quad[i];
            let (x2, z2) = quad[(i + 1) % 4];
            let (ax, az) = (z2 - z1, x1 - x2);
            let (min_a, max_a) = project(a, ax, az);
            let (min_b, max_b) = project(b, ax, az);
            if max_a < min_b || max_b < min_a {
                return false;
            }
        }
    }
    true
}

fn is_degenerate(dims: Dimensions) -> bool {
    dims.width <= 0.0 || dims.depth <= 0.0
}

/// Do footprints of `variant_a` at `a` and `variant_b` at `b` overlap?
#[must_use]
pub fn collides(a: &Pose, variant_a: &str, b: &Pose, variant_b: &str, cfg: &EngineConfig) -> bool {
    footprints_collide(a, dimensions_of(variant_a), b, dimensions_of(variant_b), cfg)
}

/// [`collides`] with explicit dimensions instead of catalog lookups.
#[must_use]
pub fn footprints_collide(a: &Pose, dims_a: Dimensions, b: &Pose, dims_b: Dimensions, cfg: &EngineConfig) -> bool {
    if is_degenerate(dims_a) || is_degenerate(dims_b) {
        return false;
    }
    let (hw_a, hd_a) = half_extents(dims_a, cfg);
    let (hw_b, hd_b) = half_extents(dims_b, cfg);

    // Broad phase. Widened to the circumradii so it can only ever skip pairs
    // that SAT would also reject.
    let reach = cfg.broad_phase_radius.max(hw_a.hypot(hd_a) + hw_b.hypot(hd_b));
    if a.position.ground_distance_to(b.position) > reach {
        return false;
    }

    let ca = footprint_corners(a, hw_a, hd_a);
    let cb = footprint_corners(b, hw_b, hd_b);
    quads_overlap(&ca, &cb)
}

/// Does `variant` at `pose` overlap any object in `objects` other than `exclude`?
///
/// Stops at the first overlap found.
#[must_use]
pub fn any_collision(
    pose: &Pose,
    variant: &str,
    exclude: Option<ObjectId>,
    objects: &[PlacedObject],
    cfg: &EngineConfig,
) -> bool {
    let dims = dimensions_of(variant);
    objects
        .iter()
        .filter(|o| Some(o.id) != exclude)
        .any(|o| footprints_collide(pose, dims, &o.pose(), dimensions_of(&o.variant), cfg))
}
