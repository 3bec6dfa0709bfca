//! Magnetic end-to-end snapping between neighbors.
//!
//! A candidate snaps onto a neighbor when it comes within the snap threshold
//! of one of the neighbor's two end anchors: the neighbor's center pushed out
//! along its local X axis by both half-widths plus a fixed gap. Only linear
//! chaining is supported; there are no corner joins.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::catalog::dimensions_of;
use crate::config::EngineConfig;
use crate::doc::{ObjectId, PlacedObject};
use crate::geom::{Pose, Vec3, local_x_offset};

/// Which end of a neighbor an anchor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Along the neighbor's local +X axis.
    Right,
    /// Along the neighbor's local -X axis.
    Left,
}

/// A snap proposal: where to put the candidate and which neighbor it joins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnchor {
    /// Anchor position and the neighbor's full rotation.
    pub pose: Pose,
    pub neighbor: ObjectId,
    pub side: Side,
}

/// The two end anchors of `neighbor` for a candidate of width `candidate_width`.
#[must_use]
pub fn anchors_for(neighbor: &PlacedObject, candidate_width: f64, cfg: &EngineConfig) -> [(Side, Vec3); 2] {
    let neighbor_dims = dimensions_of(&neighbor.variant);
    let reach = neighbor_dims.half_width() + candidate_width / 2.0 + cfg.snap_gap;
    let offset = local_x_offset(reach, neighbor.rotation.y);
    [(Side::Right, neighbor.position.add(offset)), (Side::Left, neighbor.position.sub(offset))]
}

/// Propose a snapped pose for `variant` near `candidate`.
///
/// Neighbors are visited in list order and the first anchor within the
/// threshold wins, right side before left. The returned rotation is the
/// neighbor's, replacing whatever the candidate had.
#[must_use]
pub fn propose_snap(
    candidate: Vec3,
    objects: &[PlacedObject],
    variant: &str,
    exclude: Option<ObjectId>,
    cfg: &EngineConfig,
) -> Option<SnapAnchor> {
    let width = dimensions_of(variant).width;
    for neighbor in objects.iter().filter(|o| Some(o.id) != exclude) {
        for (side, anchor) in anchors_for(neighbor, width, cfg) {
            if candidate.ground_distance_to(anchor) < cfg.snap_threshold {
                return Some(SnapAnchor { pose: Pose::new(anchor, neighbor.rotation), neighbor: neighbor.id, side });
            }
        }
    }
    None
}
