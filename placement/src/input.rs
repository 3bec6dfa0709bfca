//! Input model: modifier keys, keyboard bindings, and the interaction state machine.
//!
//! `InputState` is the interaction being tracked between pointer-down and
//! pointer-up. Each active variant carries the pose captured when the
//! interaction began, which is what a colliding release rolls back to.
//! The keyboard bindings are thin: they only map keys onto engine commands.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::doc::ObjectId;
use crate::geom::Pose;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Engine command bound to a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Delete / Backspace: remove the selected object.
    DeleteSelection,
    /// Ctrl/Cmd+Z.
    Undo,
    /// Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y.
    Redo,
}

/// Map a key chord onto an engine command, if it is bound.
#[must_use]
pub fn key_command(key: &Key, modifiers: Modifiers) -> Option<KeyCommand> {
    match key.0.as_str() {
        "Delete" | "Backspace" => Some(KeyCommand::DeleteSelection),
        "z" | "Z" if modifiers.command() => {
            if modifiers.shift {
                Some(KeyCommand::Redo)
            } else {
                Some(KeyCommand::Undo)
            }
        }
        "y" | "Y" if modifiers.command() => Some(KeyCommand::Redo),
        _ => None,
    }
}

/// Persistent UI state visible to the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected object, if any.
    pub selected_id: Option<ObjectId>,
}

/// Kind of pointer interaction in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Dragging,
    Rotating,
}

/// Internal state for the interaction state machine.
///
/// At most one interaction is active at a time.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No interaction in progress.
    #[default]
    Idle,
    /// The user is moving an object across the ground plane.
    Dragging {
        /// Id of the object being dragged.
        id: ObjectId,
        /// Pose at pointer-down, restored if the release is still colliding.
        start: Pose,
    },
    /// The user is turning an object with its rotation handle.
    Rotating {
        /// Id of the object being rotated.
        id: ObjectId,
        /// Pose at pointer-down, restored if the release is still colliding.
        start: Pose,
    },
}

impl InputState {
    /// The object and kind of the active interaction, if any.
    #[must_use]
    pub fn active(&self) -> Option<(InteractionKind, ObjectId)> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } => Some((InteractionKind::Dragging, *id)),
            Self::Rotating { id, .. } => Some((InteractionKind::Rotating, *id)),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
