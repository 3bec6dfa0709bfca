//! Interaction scripts: a JSON list of steps replayed against an engine.
//!
//! Objects are referred to by a name chosen in the `drop` step that created
//! them. A name that was never dropped is an error; a name whose object has
//! since been removed or undone is passed through and the engine ignores it.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::collections::HashMap;

use serde::Deserialize;

use placement::catalog::{is_known_color, is_known_finish};
use placement::doc::{ObjectId, PartialPlacedObject};
use placement::engine::{Action, EngineCore};
use placement::geom::Vec3;
use placement::input::{Key, Modifiers};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("step {step}: no object was dropped as `{name}`")]
    UnknownName { step: usize, name: String },
    #[error("step {step}: drop of `{variant}` created no object")]
    NothingCreated { step: usize, variant: String },
}

/// A ground-plane point as `[x, z]`.
pub type GroundPoint = [f64; 2];

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    Drop {
        name: String,
        variant: String,
        at: GroundPoint,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        finish: Option<String>,
    },
    /// Grab `name`, move through every point of `path`, release.
    Drag { name: String, path: Vec<GroundPoint> },
    /// Grab the rotate handle of `name`, point at each of `toward`, release.
    Rotate { name: String, toward: Vec<GroundPoint> },
    Select {
        #[serde(default)]
        name: Option<String>,
    },
    Remove { name: String },
    Undo,
    Redo,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
}

/// Parse a script document.
///
/// # Errors
///
/// Returns the JSON error when the text isn't an array of steps.
pub fn parse(text: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(text)
}

fn ground(point: GroundPoint) -> Vec3 {
    Vec3::ground(point[0], point[1])
}

/// Drives an [`EngineCore`] through a script.
pub struct Replay {
    core: EngineCore,
    names: HashMap<String, ObjectId>,
    actions: usize,
}

impl Replay {
    #[must_use]
    pub fn new(core: EngineCore) -> Self {
        Self { core, names: HashMap::new(), actions: 0 }
    }

    /// Apply every step in order.
    ///
    /// # Errors
    ///
    /// Stops at the first step that names an object no earlier step dropped.
    pub fn run(&mut self, steps: &[Step]) -> Result<(), ScriptError> {
        for (index, step) in steps.iter().enumerate() {
            let actions = self.apply(index + 1, step)?;
            tracing::debug!(step = index + 1, actions = actions.len(), "step applied");
            self.actions += actions.len();
        }
        Ok(())
    }

    fn apply(&mut self, step: usize, op: &Step) -> Result<Vec<Action>, ScriptError> {
        let actions = match op {
            Step::Drop { name, variant, at, color, finish } => {
                let mut actions = self.core.drop_object(variant, ground(*at));
                let id = actions
                    .iter()
                    .find_map(|a| match a {
                        Action::ObjectCreated(obj) => Some(obj.id),
                        _ => None,
                    })
                    .ok_or_else(|| ScriptError::NothingCreated { step, variant: variant.clone() })?;

                warn_unknown_attributes(step, color.as_deref(), finish.as_deref());
                let fields = PartialPlacedObject { color: color.clone(), finish: finish.clone(), ..Default::default() };
                actions.extend(self.core.update_object(&id, fields));

                if self.names.insert(name.clone(), id).is_some() {
                    tracing::warn!(step, %name, "name reused; earlier object is no longer addressable");
                }
                actions
            }
            Step::Drag { name, path } => {
                let id = self.lookup(step, name)?;
                let mut actions = self.core.begin_drag(&id);
                for point in path {
                    actions.extend(self.core.resolve_drag_frame(ground(*point)));
                }
                actions.extend(self.core.end_drag());
                actions
            }
            Step::Rotate { name, toward } => {
                let id = self.lookup(step, name)?;
                let mut actions = self.core.begin_rotate(&id);
                for point in toward {
                    actions.extend(self.core.resolve_rotate_frame(ground(*point)));
                }
                actions.extend(self.core.end_rotate());
                actions
            }
            Step::Select { name } => {
                let id = name.as_deref().map(|n| self.lookup(step, n)).transpose()?;
                self.core.select_object(id)
            }
            Step::Remove { name } => {
                let id = self.lookup(step, name)?;
                self.core.remove_object(&id)
            }
            Step::Undo => self.core.undo(),
            Step::Redo => self.core.redo(),
            Step::Key { key, ctrl, shift, alt, meta } => {
                let modifiers = Modifiers { shift: *shift, ctrl: *ctrl, alt: *alt, meta: *meta };
                self.core.on_key_down(&Key(key.clone()), modifiers)
            }
        };
        Ok(actions)
    }

    fn lookup(&self, step: usize, name: &str) -> Result<ObjectId, ScriptError> {
        self.names.get(name).copied().ok_or_else(|| ScriptError::UnknownName { step, name: name.to_owned() })
    }

    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    /// Id bound to a script name, if it was ever dropped.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    /// Total actions emitted so far.
    #[must_use]
    pub fn actions_emitted(&self) -> usize {
        self.actions
    }
}

fn warn_unknown_attributes(step: usize, color: Option<&str>, finish: Option<&str>) {
    if let Some(color) = color.filter(|c| !is_known_color(c)) {
        tracing::warn!(step, %color, "color is not in the catalog");
    }
    if let Some(finish) = finish.filter(|f| !is_known_finish(f)) {
        tracing::warn!(step, %finish, "finish is not in the catalog");
    }
}
