//! Per-frame pose resolution for drag and rotate interactions.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of the current object list, the object
//! being manipulated and the pointer input. The engine calls these once per
//! pointer-move frame and publishes the result; tests can call them directly.
//!
//! Drags never simply stop at an obstacle. A colliding proposal is retried as
//! an X-only slide, then a Z-only slide, then as "stay put", and only if all of
//! those collide is the pose committed with the collision flag raised.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use crate::collision::any_collision;
use crate::config::EngineConfig;
use crate::doc::PlacedObject;
use crate::geom::{Euler, Pose, Vec3, angle_delta};
use crate::snap::{SnapAnchor, propose_snap};

/// How a drag frame was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The proposed pose was clear.
    Free,
    /// Kept the proposed X and the previous Z.
    SlideX,
    /// Kept the previous X and the proposed Z.
    SlideZ,
    /// Neither slide was clear; the object stayed where it was.
    Blocked,
}

/// Result of resolving one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub pose: Pose,
    /// True when even the fallback pose overlaps another object.
    pub colliding: bool,
    pub outcome: DragOutcome,
}

/// Pose the pointer asks for before collision handling: a snap anchor if one
/// is in range, otherwise the pointer's ground point with the mover's rotation.
#[must_use]
pub fn propose_drag_pose(
    pointer: Vec3,
    mover: &PlacedObject,
    objects: &[PlacedObject],
    cfg: &EngineConfig,
) -> (Pose, Option<SnapAnchor>) {
    let target = Vec3::ground(pointer.x, pointer.z);
    match propose_snap(target, objects, &mover.variant, Some(mover.id), cfg) {
        Some(anchor) => (anchor.pose, Some(anchor)),
        None => (Pose::new(target, mover.rotation), None),
    }
}

/// Settle `proposed` for `mover` against every other object.
///
/// `mover`'s stored pose is the pre-frame pose used by the slide and
/// fallback candidates.
#[must_use]
pub fn resolve_drag(proposed: Pose, mover: &PlacedObject, objects: &[PlacedObject], cfg: &EngineConfig) -> Resolution {
    let hits = |pose: &Pose| any_collision(pose, &mover.variant, Some(mover.id), objects, cfg);

    if !hits(&proposed) {
        return Resolution { pose: proposed, colliding: false, outcome: DragOutcome::Free };
    }

    let prev = mover.position;
    let slide_x = Pose::new(Vec3::new(proposed.position.x, proposed.position.y, prev.z), proposed.rotation);
    if !hits(&slide_x) {
        return Resolution { pose: slide_x, colliding: false, outcome: DragOutcome::SlideX };
    }

    let slide_z = Pose::new(Vec3::new(prev.x, proposed.position.y, proposed.position.z), proposed.rotation);
    if !hits(&slide_z) {
        return Resolution { pose: slide_z, colliding: false, outcome: DragOutcome::SlideZ };
    }

    let mut fallback = Pose::new(prev, proposed.rotation);
    if hits(&fallback) {
        // The new rotation alone is enough to overlap.
        fallback.rotation = mover.rotation;
    }
    Resolution { pose: fallback, colliding: hits(&fallback), outcome: DragOutcome::Blocked }
}

/// Yaw pointing from `center` toward `pointer` on the ground plane.
#[must_use]
pub fn pointer_yaw(center: Vec3, pointer: Vec3) -> f64 {
    (pointer.x - center.x).atan2(pointer.z - center.z)
}

/// Lock `yaw` onto an attached neighbor's yaw when it is close enough.
///
/// Only the first object (in list order) within `rotate_proximity` of the
/// mover's center is considered. Returns `yaw` unchanged otherwise.
#[must_use]
pub fn magnetic_yaw(yaw: f64, mover: &PlacedObject, objects: &[PlacedObject], cfg: &EngineConfig) -> f64 {
    let neighbor = objects
        .iter()
        .filter(|o| o.id != mover.id)
        .find(|o| mover.position.ground_distance_to(o.position) < cfg.rotate_proximity);

    match neighbor {
        Some(n) if angle_delta(yaw, n.rotation.y).abs() < cfg.rotate_snap_tolerance() => n.rotation.y,
        _ => yaw,
    }
}

/// Resolve a rotate-handle frame: the new rotation and whether it overlaps.
#[must_use]
pub fn resolve_rotation(
    pointer: Vec3,
    mover: &PlacedObject,
    objects: &[PlacedObject],
    cfg: &EngineConfig,
) -> (Euler, bool) {
    let yaw = magnetic_yaw(pointer_yaw(mover.position, pointer), mover, objects, cfg);
    let rotation = Euler::yaw(yaw);
    let colliding = any_collision(&Pose::new(mover.position, rotation), &mover.variant, Some(mover.id), objects, cfg);
    (rotation, colliding)
}
