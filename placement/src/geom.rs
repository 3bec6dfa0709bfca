#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in world space. `y` is vertical; the ground plane is `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the ground plane.
    #[must_use]
    pub fn ground(x: f64, z: f64) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Distance between two points projected onto the ground plane. `y` is ignored.
    #[must_use]
    pub fn ground_distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.z - other.z)
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

/// Euler angles in radians. Only `y` (yaw) matters to placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    /// A pure yaw rotation about the vertical axis.
    #[must_use]
    pub fn yaw(radians: f64) -> Self {
        Self { x: 0.0, y: radians, z: 0.0 }
    }
}

/// Position and orientation of an object on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Euler,
}

impl Pose {
    #[must_use]
    pub fn new(position: Vec3, rotation: Euler) -> Self {
        Self { position, rotation }
    }

    /// Yaw in radians.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }
}

/// Rotate the local +X vector of length `len` by `yaw`, staying on the ground plane.
///
/// Matches a right-handed Y-up frame: positive yaw turns +X toward -Z.
#[must_use]
pub fn local_x_offset(len: f64, yaw: f64) -> Vec3 {
    Vec3::ground(len * yaw.cos(), -len * yaw.sin())
}

/// Signed smallest difference `a - b`, wrapped into `[-π, π]`.
#[must_use]
pub fn angle_delta(a: f64, b: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let d = (a - b).rem_euclid(tau);
    if d > std::f64::consts::PI { d - tau } else { d }
}
