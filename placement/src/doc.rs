//! Document model: placed objects, their attributes, and the in-memory store.
//!
//! This module defines what is on the ground plane (`PlacedObject`,
//! `Category`), a sparse-update type for incremental edits
//! (`PartialPlacedObject`), and the ordered store that owns every live object
//! (`DocStore`).
//!
//! Order in the store is significant: snapping and rotation magnetism take the
//! first qualifying neighbor in list order, and history snapshots restore the
//! exact order they captured.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Euler, Pose, Vec3};

/// Unique identifier for a placed object.
pub type ObjectId = Uuid;

/// Broad kind of a placed object. Drives rendering and default attributes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Benches and other seating products.
    Seating,
    /// Trees, figures and other scenery.
    Environment,
}

/// Per-category attributes. Opaque to the placement engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
}

/// An object placed on the ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Unique identifier, stable for the object's lifetime.
    pub id: ObjectId,
    pub category: Category,
    /// Catalog tag selecting footprint dimensions.
    pub variant: String,
    /// Center of the footprint. `y` stays on the ground plane.
    pub position: Vec3,
    /// Orientation; only yaw (`rotation.y`) is used for placement.
    pub rotation: Euler,
    /// True while the last resolved pose overlaps another object.
    #[serde(default)]
    pub is_colliding: bool,
    #[serde(default)]
    pub attributes: Attributes,
}

impl PlacedObject {
    /// Create an object with a fresh id.
    #[must_use]
    pub fn new(category: Category, variant: impl Into<String>, pose: Pose) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            variant: variant.into(),
            position: pose.position,
            rotation: pose.rotation,
            is_colliding: false,
            attributes: Attributes::default(),
        }
    }

    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }
}

/// Sparse update for a placed object. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPlacedObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Euler>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_colliding: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
}

impl PartialPlacedObject {
    /// Patch setting both position and rotation.
    #[must_use]
    pub fn pose(pose: Pose) -> Self {
        Self { position: Some(pose.position), rotation: Some(pose.rotation), ..Default::default() }
    }

    /// Returns `true` if applying this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.rotation.is_none()
            && self.is_colliding.is_none()
            && self.color.is_none()
            && self.finish.is_none()
    }
}

/// Ordered in-memory store of placed objects.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    objects: Vec<PlacedObject>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Append an object. Returns false (and leaves the store untouched) if its
    /// id is already present.
    pub fn insert(&mut self, obj: PlacedObject) -> bool {
        if self.contains(&obj.id) {
            return false;
        }
        self.objects.push(obj);
        true
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<PlacedObject> {
        let idx = self.objects.iter().position(|o| o.id == *id)?;
        Some(self.objects.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Apply a partial update to an existing object. Returns false if the object doesn't exist.
    pub fn apply_partial(&mut self, id: &ObjectId, partial: &PartialPlacedObject) -> bool {
        let Some(obj) = self.objects.iter_mut().find(|o| o.id == *id) else {
            return false;
        };
        if let Some(position) = partial.position {
            obj.position = position;
        }
        if let Some(rotation) = partial.rotation {
            obj.rotation = rotation;
        }
        if let Some(colliding) = partial.is_colliding {
            obj.is_colliding = colliding;
        }
        if let Some(ref color) = partial.color {
            obj.attributes.color = Some(color.clone());
        }
        if let Some(ref finish) = partial.finish {
            obj.attributes.finish = Some(finish.clone());
        }
        true
    }

    /// Replace all objects with a full snapshot.
    pub fn load_snapshot(&mut self, objects: Vec<PlacedObject>) {
        self.objects = objects;
    }

    /// Copy of the full object list, in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PlacedObject> {
        self.objects.clone()
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
