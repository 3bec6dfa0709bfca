use serde::Serialize;

use crate::catalog::category_of;
use crate::collision::any_collision;
use crate::config::EngineConfig;
use crate::doc::{Attributes, Category, DocStore, ObjectId, PartialPlacedObject, PlacedObject};
use crate::geom::{Euler, Pose, Vec3};
use crate::history::History;
use crate::input::{InputState, InteractionKind, Key, KeyCommand, Modifiers, UiState, key_command};
use crate::resolve::{propose_drag_pose, resolve_drag, resolve_rotation};
use crate::snap::propose_snap;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Events returned from commands for the presentation layer to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectCreated(PlacedObject),
    ObjectUpdated { id: ObjectId, fields: PartialPlacedObject },
    ObjectDeleted { id: ObjectId },
    SelectionChanged(Option<ObjectId>),
    InteractionChanged(Option<(InteractionKind, ObjectId)>),
    /// The whole object list was swapped out by undo or redo.
    SceneReplaced,
}

/// What the presentation layer supplies to create an object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectDescriptor {
    pub variant: String,
    /// Catalog category when `None`.
    pub category: Option<Category>,
    pub pose: Pose,
    pub attributes: Attributes,
}

impl ObjectDescriptor {
    #[must_use]
    pub fn new(variant: impl Into<String>, pose: Pose) -> Self {
        Self { variant: variant.into(), pose, ..Default::default() }
    }
}

/// Active interaction as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub id: ObjectId,
}

/// Immutable copy of everything the presentation layer may observe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub objects: Vec<PlacedObject>,
    pub selected_id: Option<ObjectId>,
    pub interaction: Option<Interaction>,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Core engine state: the placed objects, selection, interaction and history.
///
/// All mutation goes through the command methods, each of which returns the
/// resulting [`Action`]s. Nothing here blocks or fails; stale ids and empty
/// stacks are quiet no-ops.
pub struct EngineCore {
    pub doc: DocStore,
    pub ui: UiState,
    pub input: InputState,
    history: History,
    config: EngineConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            doc: DocStore::new(),
            ui: UiState::default(),
            input: InputState::default(),
            history: History::new(config.history_limit),
            config,
        }
    }

    // --- Object commands ---

    /// Create an object from `descriptor`, recording history and selecting it.
    pub fn add_object(&mut self, descriptor: ObjectDescriptor) -> Vec<Action> {
        let category = descriptor.category.unwrap_or_else(|| category_of(&descriptor.variant));
        let mut obj = PlacedObject::new(category, descriptor.variant, descriptor.pose);
        obj.attributes = descriptor.attributes;
        self.push_object(obj)
    }

    /// Drop a new `variant` at a ground point, snapping it onto a neighbor
    /// when one is in range.
    pub fn drop_object(&mut self, variant: &str, point: Vec3) -> Vec<Action> {
        let target = Vec3::ground(point.x, point.z);
        let pose = propose_snap(target, self.doc.objects(), variant, None, &self.config)
            .map_or(Pose::new(target, Euler::default()), |anchor| anchor.pose);

        let category = category_of(variant);
        let mut obj = PlacedObject::new(category, variant, pose);
        if category == Category::Seating {
            obj.attributes = Attributes {
                color: Some(self.config.default_color.clone()),
                finish: Some(self.config.default_finish.clone()),
            };
        }
        obj.is_colliding = any_collision(&pose, variant, None, self.doc.objects(), &self.config);
        if obj.is_colliding {
            tracing::debug!(%variant, x = pose.position.x, z = pose.position.z, "dropped onto an occupied spot");
        }
        self.push_object(obj)
    }

    fn push_object(&mut self, mut obj: PlacedObject) -> Vec<Action> {
        while self.doc.contains(&obj.id) {
            obj.id = uuid::Uuid::new_v4();
        }
        let id = obj.id;
        self.history.record(self.doc.snapshot());
        self.doc.insert(obj.clone());
        tracing::debug!(%id, variant = %obj.variant, "object added");

        let mut actions = vec![Action::ObjectCreated(obj)];
        actions.extend(self.set_selection(Some(id)));
        actions
    }

    /// Delete an object, recording history. Unknown ids are ignored.
    pub fn remove_object(&mut self, id: &ObjectId) -> Vec<Action> {
        if !self.doc.contains(id) {
            return Vec::new();
        }
        self.history.record(self.doc.snapshot());
        self.doc.remove(id);
        tracing::debug!(%id, "object removed");

        let mut actions = vec![Action::ObjectDeleted { id: *id }];
        if self.ui.selected_id.as_ref() == Some(id) {
            actions.extend(self.set_selection(None));
        }
        if self.input.active().is_some_and(|(_, active)| active == *id) {
            actions.extend(self.cancel_interaction());
        }
        actions
    }

    /// Merge `fields` into an object without touching history.
    pub fn update_object(&mut self, id: &ObjectId, fields: PartialPlacedObject) -> Vec<Action> {
        if fields.is_empty() || !self.doc.apply_partial(id, &fields) {
            return Vec::new();
        }
        vec![Action::ObjectUpdated { id: *id, fields }]
    }

    /// Select an object, or clear the selection with `None`.
    pub fn select_object(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        if let Some(id) = id {
            if !self.doc.contains(&id) {
                return Vec::new();
            }
        }
        self.set_selection(id)
    }

    fn set_selection(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        if self.ui.selected_id == id {
            return Vec::new();
        }
        self.ui.selected_id = id;
        vec![Action::SelectionChanged(id)]
    }

    // --- Drag ---

    /// Start dragging an object. Ignored while another interaction is active.
    pub fn begin_drag(&mut self, id: &ObjectId) -> Vec<Action> {
        let Some(start) = self.begin_interaction(id) else {
            return Vec::new();
        };
        self.input = InputState::Dragging { id: *id, start };
        tracing::debug!(%id, "drag started");
        self.interaction_started(id)
    }

    /// Move the dragged object toward `pointer`, a ground-plane point.
    pub fn resolve_drag_frame(&mut self, pointer: Vec3) -> Vec<Action> {
        let InputState::Dragging { id, .. } = self.input else {
            return Vec::new();
        };
        let Some(mover) = self.doc.get(&id) else {
            return Vec::new();
        };

        let (proposed, anchor) = propose_drag_pose(pointer, mover, self.doc.objects(), &self.config);
        let resolution = resolve_drag(proposed, mover, self.doc.objects(), &self.config);
        tracing::trace!(
            %id,
            outcome = ?resolution.outcome,
            snapped = anchor.is_some(),
            x = resolution.pose.position.x,
            z = resolution.pose.position.z,
            "drag frame"
        );
        if resolution.colliding {
            tracing::debug!(%id, "drag pinned in a colliding pose");
        }

        let fields = PartialPlacedObject {
            is_colliding: Some(resolution.colliding),
            ..PartialPlacedObject::pose(resolution.pose)
        };
        self.update_object(&id, fields)
    }

    /// Release the dragged object, rolling it back if it is still colliding.
    pub fn end_drag(&mut self) -> Vec<Action> {
        let InputState::Dragging { id, start } = self.input else {
            return Vec::new();
        };
        self.finish_interaction(id, start)
    }

    // --- Rotate ---

    /// Start rotating an object. Ignored while another interaction is active.
    pub fn begin_rotate(&mut self, id: &ObjectId) -> Vec<Action> {
        let Some(start) = self.begin_interaction(id) else {
            return Vec::new();
        };
        self.input = InputState::Rotating { id: *id, start };
        tracing::debug!(%id, "rotate started");
        self.interaction_started(id)
    }

    /// Turn the rotating object to face `pointer`, locking onto an attached
    /// neighbor's yaw when close to it.
    pub fn resolve_rotate_frame(&mut self, pointer: Vec3) -> Vec<Action> {
        let InputState::Rotating { id, .. } = self.input else {
            return Vec::new();
        };
        let Some(mover) = self.doc.get(&id) else {
            return Vec::new();
        };

        let (rotation, colliding) = resolve_rotation(pointer, mover, self.doc.objects(), &self.config);
        tracing::trace!(%id, yaw = rotation.y, colliding, "rotate frame");

        let fields = PartialPlacedObject { rotation: Some(rotation), is_colliding: Some(colliding), ..Default::default() };
        self.update_object(&id, fields)
    }

    /// Release the rotate handle, rolling back if the object is still colliding.
    pub fn end_rotate(&mut self) -> Vec<Action> {
        let InputState::Rotating { id, start } = self.input else {
            return Vec::new();
        };
        self.finish_interaction(id, start)
    }

    fn begin_interaction(&mut self, id: &ObjectId) -> Option<Pose> {
        if !self.input.is_idle() {
            return None;
        }
        let start = self.doc.get(id)?.pose();
        self.history.record(self.doc.snapshot());
        Some(start)
    }

    fn interaction_started(&mut self, id: &ObjectId) -> Vec<Action> {
        let mut actions = self.set_selection(Some(*id));
        actions.push(Action::InteractionChanged(self.input.active()));
        actions
    }

    fn finish_interaction(&mut self, id: ObjectId, start: Pose) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = Vec::new();

        if self.is_colliding(&id) {
            tracing::debug!(%id, "released while colliding, rolling back");
            let fields = PartialPlacedObject { is_colliding: Some(false), ..PartialPlacedObject::pose(start) };
            actions.extend(self.update_object(&id, fields));
        }
        actions.push(Action::InteractionChanged(None));
        actions
    }

    fn cancel_interaction(&mut self) -> Vec<Action> {
        if self.input.is_idle() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::InteractionChanged(None)]
    }

    // --- History ---

    /// Restore the snapshot before the last recorded edit.
    pub fn undo(&mut self) -> Vec<Action> {
        let Some(previous) = self.history.undo(self.doc.snapshot()) else {
            return Vec::new();
        };
        tracing::debug!(objects = previous.len(), "undo");
        self.replace_scene(previous)
    }

    /// Re-apply the most recently undone edit.
    pub fn redo(&mut self) -> Vec<Action> {
        let Some(next) = self.history.redo(self.doc.snapshot()) else {
            return Vec::new();
        };
        tracing::debug!(objects = next.len(), "redo");
        self.replace_scene(next)
    }

    fn replace_scene(&mut self, objects: Vec<PlacedObject>) -> Vec<Action> {
        self.doc.load_snapshot(objects);
        let mut actions = vec![Action::SceneReplaced];
        actions.extend(self.set_selection(None));
        actions.extend(self.cancel_interaction());
        actions
    }

    // --- Keyboard ---

    /// Handle a key press through the default bindings.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        match key_command(key, modifiers) {
            Some(KeyCommand::DeleteSelection) => match self.ui.selected_id {
                Some(id) => self.remove_object(&id),
                None => Vec::new(),
            },
            Some(KeyCommand::Undo) => self.undo(),
            Some(KeyCommand::Redo) => self.redo(),
            None => Vec::new(),
        }
    }

    // --- Queries ---

    /// All live objects, in order.
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        self.doc.objects()
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.doc.get(id)
    }

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn interaction(&self) -> Option<Interaction> {
        self.input.active().map(|(kind, id)| Interaction { kind, id })
    }

    #[must_use]
    pub fn dragging_id(&self) -> Option<ObjectId> {
        match self.input {
            InputState::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn rotating_id(&self) -> Option<ObjectId> {
        match self.input {
            InputState::Rotating { id, .. } => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_colliding(&self, id: &ObjectId) -> bool {
        self.doc.get(id).is_some_and(|o| o.is_colliding)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            objects: self.doc.snapshot(),
            selected_id: self.ui.selected_id,
            interaction: self.interaction(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
