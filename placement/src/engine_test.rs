#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use uuid::Uuid;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn at(x: f64, z: f64) -> Pose {
    Pose::new(Vec3::ground(x, z), Euler::default())
}

/// Add a `variant` at `(x, z)` and return its id.
fn add(core: &mut EngineCore, variant: &str, x: f64, z: f64) -> ObjectId {
    let actions = core.add_object(ObjectDescriptor::new(variant, at(x, z)));
    created_id(&actions)
}

fn created_id(actions: &[Action]) -> ObjectId {
    actions
        .iter()
        .find_map(|a| match a {
            Action::ObjectCreated(obj) => Some(obj.id),
            _ => None,
        })
        .unwrap()
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn position(core: &EngineCore, id: &ObjectId) -> Vec3 {
    core.object(id).unwrap().position
}

fn assert_near(actual: Vec3, x: f64, z: f64) {
    assert!((actual.x - x).abs() < 1e-9 && (actual.z - z).abs() < 1e-9, "expected ({x}, {z}), got {actual:?}");
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Default::default() }
}

// =============================================================
// Construction and defaults
// =============================================================

#[test]
fn core_new_is_empty_and_idle() {
    let core = EngineCore::new();
    assert!(core.objects().is_empty());
    assert!(core.selection().is_none());
    assert!(core.interaction().is_none());
    assert!(!core.can_undo());
    assert!(!core.can_redo());
}

#[test]
fn core_history_limit_follows_config() {
    let core = EngineCore::with_config(EngineConfig { history_limit: 7, ..Default::default() });
    assert_eq!(core.history().limit(), 7);
    assert_eq!(core.config().history_limit, 7);
}

// =============================================================
// add_object
// =============================================================

#[test]
fn add_appends_and_selects() {
    let mut core = EngineCore::new();
    let actions = core.add_object(ObjectDescriptor::new("standard", at(1.0, 2.0)));
    let id = created_id(&actions);

    assert_eq!(core.objects().len(), 1);
    assert_eq!(core.selection(), Some(id));
    assert!(has_action(&actions, |a| *a == Action::SelectionChanged(Some(id))));
    assert_eq!(position(&core, &id), Vec3::ground(1.0, 2.0));
}

#[test]
fn add_uses_catalog_category() {
    let mut core = EngineCore::new();
    let tree = add(&mut core, "tree", 0.0, 0.0);
    let bench = add(&mut core, "standard", 5.0, 0.0);
    assert_eq!(core.object(&tree).unwrap().category, Category::Environment);
    assert_eq!(core.object(&bench).unwrap().category, Category::Seating);
}

#[test]
fn add_honors_explicit_category_and_attributes() {
    let mut core = EngineCore::new();
    let descriptor = ObjectDescriptor {
        variant: "lamp".into(),
        category: Some(Category::Environment),
        pose: at(0.0, 0.0),
        attributes: Attributes { color: Some("Zwart".into()), finish: None },
    };
    let id = created_id(&core.add_object(descriptor));
    let obj = core.object(&id).unwrap();
    assert_eq!(obj.category, Category::Environment);
    assert_eq!(obj.attributes.color.as_deref(), Some("Zwart"));
}

#[test]
fn add_ids_are_unique() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 5.0, 0.0);
    assert_ne!(a, b);
}

#[test]
fn add_records_history_and_clears_future() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    core.undo();
    assert!(core.can_redo());
    add(&mut core, "tree", 5.0, 0.0);
    assert!(!core.can_redo());
    assert!(core.can_undo());
}

// =============================================================
// remove_object
// =============================================================

#[test]
fn remove_deletes_and_deselects() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    let actions = core.remove_object(&id);

    assert!(core.objects().is_empty());
    assert!(core.selection().is_none());
    assert!(has_action(&actions, |a| *a == Action::ObjectDeleted { id }));
    assert!(has_action(&actions, |a| *a == Action::SelectionChanged(None)));
}

#[test]
fn remove_keeps_other_selection() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 5.0, 0.0);
    assert_eq!(core.selection(), Some(b));
    let actions = core.remove_object(&a);
    assert_eq!(core.selection(), Some(b));
    assert!(!has_action(&actions, |a| matches!(a, Action::SelectionChanged(_))));
}

#[test]
fn remove_unknown_is_noop() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let undo_depth = core.history().past_len();
    assert!(core.remove_object(&Uuid::new_v4()).is_empty());
    assert_eq!(core.objects().len(), 1);
    assert_eq!(core.history().past_len(), undo_depth);
}

#[test]
fn remove_dragged_object_ends_drag() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    let actions = core.remove_object(&id);
    assert!(core.dragging_id().is_none());
    assert!(has_action(&actions, |a| *a == Action::InteractionChanged(None)));
}

// =============================================================
// update_object / select_object
// =============================================================

#[test]
fn update_merges_without_history() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    let depth = core.history().past_len();

    let fields = PartialPlacedObject { finish: Some("gezuurd".into()), ..Default::default() };
    let actions = core.update_object(&id, fields.clone());

    assert_eq!(actions, vec![Action::ObjectUpdated { id, fields }]);
    assert_eq!(core.object(&id).unwrap().attributes.finish.as_deref(), Some("gezuurd"));
    assert_eq!(core.history().past_len(), depth);
}

#[test]
fn update_unknown_or_empty_is_noop() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    let patch = PartialPlacedObject { is_colliding: Some(true), ..Default::default() };
    assert!(core.update_object(&Uuid::new_v4(), patch).is_empty());
    assert!(core.update_object(&id, PartialPlacedObject::default()).is_empty());
}

#[test]
fn select_and_clear() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    let _b = add(&mut core, "standard", 5.0, 0.0);

    assert_eq!(core.select_object(Some(a)), vec![Action::SelectionChanged(Some(a))]);
    assert_eq!(core.selection(), Some(a));
    assert!(core.select_object(Some(a)).is_empty());
    assert_eq!(core.select_object(None), vec![Action::SelectionChanged(None)]);
    assert!(core.selection().is_none());
}

#[test]
fn select_unknown_is_noop() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    assert!(core.select_object(Some(Uuid::new_v4())).is_empty());
    assert_eq!(core.selection(), Some(a));
}

// =============================================================
// History round trips
// =============================================================

#[test]
fn add_then_undo_restores_exact_list() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    add(&mut core, "tree", 3.0, 3.0);
    let l0 = core.objects().to_vec();

    add(&mut core, "SF-S1", -4.0, 1.0);
    let l1 = core.objects().to_vec();

    let actions = core.undo();
    assert!(has_action(&actions, |a| *a == Action::SceneReplaced));
    assert_eq!(core.objects(), l0.as_slice());
    assert!(core.selection().is_none());

    core.redo();
    assert_eq!(core.objects(), l1.as_slice());
    assert!(core.selection().is_none());
}

#[test]
fn remove_then_undo_restores_order() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let mid = add(&mut core, "standard", 3.0, 0.0);
    add(&mut core, "standard", 6.0, 0.0);
    let before = core.objects().to_vec();

    core.remove_object(&mid);
    core.undo();
    assert_eq!(core.objects(), before.as_slice());
}

#[test]
fn new_edit_after_undo_drops_redo_branch() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    add(&mut core, "standard", 3.0, 0.0);
    core.undo();
    core.remove_object(&a);
    assert!(!core.can_redo());
    assert!(core.redo().is_empty());
    assert!(core.objects().is_empty());
}

#[test]
fn undo_redo_on_empty_stacks_are_noops() {
    let mut core = EngineCore::new();
    assert!(core.undo().is_empty());
    assert!(core.redo().is_empty());
}

#[test]
fn history_is_bounded() {
    let mut core = EngineCore::with_config(EngineConfig { history_limit: 30, ..Default::default() });
    for i in 0..40 {
        add(&mut core, "SF-S1", f64::from(i) * 3.0, 0.0);
    }
    assert_eq!(core.history().past_len(), 30);

    let mut undos = 0;
    while !core.undo().is_empty() {
        undos += 1;
    }
    assert_eq!(undos, 30);
    assert_eq!(core.objects().len(), 10);
}

#[test]
fn updates_are_not_undo_steps() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.update_object(&id, PartialPlacedObject { color: Some("Rood".into()), ..Default::default() });
    core.undo();
    assert!(core.objects().is_empty());
}

// =============================================================
// Drag lifecycle
// =============================================================

#[test]
fn begin_drag_records_history_and_selects() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 5.0, 0.0);
    let depth = core.history().past_len();

    let actions = core.begin_drag(&a);
    assert_eq!(core.dragging_id(), Some(a));
    assert_eq!(core.selection(), Some(a));
    assert_eq!(core.history().past_len(), depth + 1);
    assert!(has_action(&actions, |x| *x == Action::SelectionChanged(Some(a))));
    assert!(has_action(&actions, |x| *x == Action::InteractionChanged(Some((InteractionKind::Dragging, a)))));
    assert_ne!(core.selection(), Some(b));
}

#[test]
fn begin_drag_unknown_is_noop() {
    let mut core = EngineCore::new();
    assert!(core.begin_drag(&Uuid::new_v4()).is_empty());
    assert!(core.interaction().is_none());
    assert!(!core.can_undo());
}

#[test]
fn only_one_interaction_at_a_time() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 5.0, 0.0);
    core.begin_drag(&a);
    assert!(core.begin_drag(&b).is_empty());
    assert!(core.begin_rotate(&b).is_empty());
    assert_eq!(core.dragging_id(), Some(a));
    assert!(core.rotating_id().is_none());
}

#[test]
fn drag_frame_without_drag_is_noop() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    assert!(core.resolve_drag_frame(Vec3::ground(3.0, 3.0)).is_empty());
}

#[test]
fn free_drag_moves_object() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    let actions = core.resolve_drag_frame(Vec3::ground(4.0, -2.0));

    assert_eq!(position(&core, &id), Vec3::ground(4.0, -2.0));
    assert!(!core.is_colliding(&id));
    assert!(has_action(&actions, |a| matches!(a, Action::ObjectUpdated { id: x, .. } if *x == id)));
}

#[test]
fn drag_pointer_height_is_flattened() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    core.resolve_drag_frame(Vec3::new(2.0, 0.7, 2.0));
    assert_eq!(position(&core, &id), Vec3::ground(2.0, 2.0));
}

#[test]
fn drag_snaps_onto_neighbor_and_inherits_rotation() {
    let mut core = EngineCore::new();
    let a = add(&mut core, "standard", 0.0, 0.0);
    core.update_object(&a, PartialPlacedObject { rotation: Some(Euler::yaw(FRAC_PI_2)), ..Default::default() });
    let b = add(&mut core, "standard", 5.0, 5.0);
    core.update_object(&b, PartialPlacedObject { rotation: Some(Euler::yaw(0.3)), ..Default::default() });

    core.begin_drag(&b);
    // A's right anchor at yaw 90 is (0, -1.51).
    core.resolve_drag_frame(Vec3::ground(0.2, -1.4));
    let obj = core.object(&b).unwrap();
    assert_near(obj.position, 0.0, -1.51);
    assert_eq!(obj.rotation, Euler::yaw(FRAC_PI_2));
    assert!(!obj.is_colliding);
}

#[test]
fn drag_slides_along_x_when_z_blocked() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 0.0, 1.0);
    core.begin_drag(&b);
    core.resolve_drag_frame(Vec3::ground(0.5, 0.3));
    assert_eq!(position(&core, &b), Vec3::ground(0.5, 1.0));
    assert!(!core.is_colliding(&b));
}

#[test]
fn drag_slides_along_z_when_x_blocked() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 2.0, 0.0);
    core.begin_drag(&b);
    core.resolve_drag_frame(Vec3::ground(1.0, 0.2));
    assert_eq!(position(&core, &b), Vec3::ground(2.0, 0.2));
}

#[test]
fn drag_frames_accumulate_from_latest_pose() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 0.0, 1.0);
    core.begin_drag(&b);
    core.resolve_drag_frame(Vec3::ground(3.0, 1.0));
    core.resolve_drag_frame(Vec3::ground(3.0, 0.0));
    assert_eq!(position(&core, &b), Vec3::ground(3.0, 0.0));
    // Sliding now uses (3, 0) as the pre-frame pose.
    core.resolve_drag_frame(Vec3::ground(0.5, 0.0));
    assert_eq!(position(&core, &b), Vec3::ground(3.0, 0.0));
}

#[test]
fn clean_release_keeps_pose() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    core.resolve_drag_frame(Vec3::ground(4.0, 4.0));
    let actions = core.end_drag();

    assert_eq!(position(&core, &id), Vec3::ground(4.0, 4.0));
    assert!(core.dragging_id().is_none());
    assert_eq!(actions, vec![Action::InteractionChanged(None)]);
}

#[test]
fn colliding_release_rolls_back() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    // Dropped on top of A, so every frame is pinned.
    let b = add(&mut core, "standard", 0.3, 0.1);
    core.begin_drag(&b);
    core.resolve_drag_frame(Vec3::ground(0.35, 0.15));
    assert!(core.is_colliding(&b));

    let actions = core.end_drag();
    assert_eq!(position(&core, &b), Vec3::ground(0.3, 0.1));
    assert!(!core.is_colliding(&b));
    assert!(has_action(&actions, |a| matches!(a, Action::ObjectUpdated { fields, .. } if fields.is_colliding == Some(false))));
}

#[test]
fn end_drag_when_idle_is_noop() {
    let mut core = EngineCore::new();
    assert!(core.end_drag().is_empty());
    assert!(core.end_rotate().is_empty());
}

#[test]
fn drag_then_undo_restores_pre_drag_pose() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    core.resolve_drag_frame(Vec3::ground(2.0, 0.0));
    core.resolve_drag_frame(Vec3::ground(4.0, 0.0));
    core.end_drag();

    core.undo();
    assert_eq!(position(&core, &id), Vec3::ground(0.0, 0.0));
    core.redo();
    assert_eq!(position(&core, &id), Vec3::ground(4.0, 0.0));
}

#[test]
fn undo_during_drag_ends_interaction() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    core.resolve_drag_frame(Vec3::ground(2.0, 0.0));
    let actions = core.undo();
    assert!(core.interaction().is_none());
    assert!(has_action(&actions, |a| *a == Action::InteractionChanged(None)));
    assert_eq!(position(&core, &id), Vec3::ground(0.0, 0.0));
}

// =============================================================
// Rotate lifecycle
// =============================================================

#[test]
fn begin_rotate_records_history() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    let depth = core.history().past_len();
    let actions = core.begin_rotate(&id);
    assert_eq!(core.rotating_id(), Some(id));
    assert_eq!(core.history().past_len(), depth + 1);
    assert!(has_action(&actions, |a| *a == Action::InteractionChanged(Some((InteractionKind::Rotating, id)))));
}

#[test]
fn rotate_frame_applies_pointer_angle() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_rotate(&id);
    core.resolve_rotate_frame(Vec3::ground(1.0, 0.0));
    let yaw = core.object(&id).unwrap().rotation.y;
    assert!((yaw - FRAC_PI_2).abs() < 1e-12);
    assert_eq!(position(&core, &id), Vec3::ground(0.0, 0.0));
}

#[test]
fn rotate_frame_without_rotate_is_noop() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);
    assert!(core.resolve_rotate_frame(Vec3::ground(1.0, 0.0)).is_empty());
}

#[test]
fn rotate_locks_to_attached_neighbor() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 1.51, 0.0);
    core.begin_rotate(&b);
    core.resolve_rotate_frame(Vec3::ground(1.56, 1.0));
    assert_eq!(core.object(&b).unwrap().rotation, Euler::yaw(0.0));
}

#[test]
fn colliding_rotation_rolls_back_on_release() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    let b = add(&mut core, "standard", 0.0, 0.6);
    core.begin_rotate(&b);
    core.resolve_rotate_frame(Vec3::ground(1.0, 0.6));
    assert!(core.is_colliding(&b));

    core.end_rotate();
    let obj = core.object(&b).unwrap();
    assert_eq!(obj.rotation, Euler::yaw(0.0));
    assert!(!obj.is_colliding);
    assert!(core.rotating_id().is_none());
}

#[test]
fn clear_rotation_survives_release() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "tree", 0.0, 0.0);
    core.begin_rotate(&id);
    core.resolve_rotate_frame(Vec3::ground(1.0, 1.0));
    core.end_rotate();
    let yaw = core.object(&id).unwrap().rotation.y;
    assert!((yaw - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

// =============================================================
// drop_object
// =============================================================

#[test]
fn drop_in_open_space_uses_raw_point() {
    let mut core = EngineCore::new();
    let id = created_id(&core.drop_object("standard", Vec3::new(2.0, 0.3, -1.0)));
    let obj = core.object(&id).unwrap();
    assert_eq!(obj.position, Vec3::ground(2.0, -1.0));
    assert_eq!(obj.rotation, Euler::default());
    assert!(!obj.is_colliding);
    assert_eq!(core.selection(), Some(id));
}

#[test]
fn drop_gives_seating_default_attributes() {
    let mut core = EngineCore::new();
    let bench = created_id(&core.drop_object("backrest", Vec3::ground(0.0, 0.0)));
    let tree = created_id(&core.drop_object("tree", Vec3::ground(5.0, 5.0)));
    let bench = core.object(&bench).unwrap();
    assert_eq!(bench.attributes.color.as_deref(), Some("Grijs"));
    assert_eq!(bench.attributes.finish.as_deref(), Some("glad"));
    assert_eq!(core.object(&tree).unwrap().attributes, Attributes::default());
}

#[test]
fn drop_uses_configured_defaults() {
    let cfg = EngineConfig { default_color: "Wit".into(), default_finish: "uitgewassen".into(), ..Default::default() };
    let mut core = EngineCore::with_config(cfg);
    let id = created_id(&core.drop_object("standard", Vec3::ground(0.0, 0.0)));
    let attrs = &core.object(&id).unwrap().attributes;
    assert_eq!(attrs.color.as_deref(), Some("Wit"));
    assert_eq!(attrs.finish.as_deref(), Some("uitgewassen"));
}

#[test]
fn drop_onto_occupied_spot_is_flagged() {
    let mut core = EngineCore::new();
    core.drop_object("standard", Vec3::ground(0.0, 0.0));
    let id = created_id(&core.drop_object("standard", Vec3::ground(0.2, 0.1)));
    assert!(core.is_colliding(&id));
}

#[test]
fn drop_is_undoable() {
    let mut core = EngineCore::new();
    core.drop_object("standard", Vec3::ground(0.0, 0.0));
    core.undo();
    assert!(core.objects().is_empty());
}

// =============================================================
// End-to-end scenario
// =============================================================

#[test]
fn scenario_snap_drag_and_rollback() {
    let mut core = EngineCore::new();
    let a = created_id(&core.drop_object("standard", Vec3::ground(0.0, 0.0)));

    // Dropping B near A's right end snaps it edge to edge.
    let b = created_id(&core.drop_object("standard", Vec3::ground(1.52, 0.3)));
    let obj_b = core.object(&b).unwrap();
    assert_near(obj_b.position, 1.51, 0.0);
    assert_eq!(obj_b.rotation, Euler::yaw(0.0));
    assert!(!obj_b.is_colliding);
    let pre_drag = obj_b.pose();

    // Dragging B straight onto A slides it along Z instead of overlapping.
    core.begin_drag(&b);
    core.resolve_drag_frame(Vec3::ground(0.3, 0.2));
    let during = core.object(&b).unwrap();
    assert!(!during.is_colliding);
    assert!(!crate::collision::collides(&during.pose(), "standard", &core.object(&a).unwrap().pose(), "standard", core.config()));
    core.end_drag();
    assert_ne!(core.object(&b).unwrap().pose(), pre_drag);

    // Undo returns B to its pre-drag pose.
    core.undo();
    assert_eq!(core.object(&b).unwrap().pose(), pre_drag);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn delete_key_removes_selected_object() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    let actions = core.on_key_down(&Key("Delete".into()), Modifiers::default());
    assert!(core.object(&id).is_none());
    assert!(has_action(&actions, |a| *a == Action::ObjectDeleted { id }));
}

#[test]
fn backspace_key_removes_selected_object() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.on_key_down(&Key("Backspace".into()), Modifiers::default());
    assert!(core.object(&id).is_none());
}

#[test]
fn delete_key_without_selection_is_noop() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    core.select_object(None);
    assert!(core.on_key_down(&Key("Delete".into()), Modifiers::default()).is_empty());
    assert_eq!(core.objects().len(), 1);
}

#[test]
fn ctrl_z_and_ctrl_y() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    core.on_key_down(&Key("z".into()), ctrl());
    assert!(core.objects().is_empty());
    core.on_key_down(&Key("y".into()), ctrl());
    assert_eq!(core.objects().len(), 1);
    core.on_key_down(&Key("z".into()), ctrl());
    core.on_key_down(&Key("z".into()), Modifiers { ctrl: true, shift: true, ..Default::default() });
    assert_eq!(core.objects().len(), 1);
}

#[test]
fn unknown_key_is_noop() {
    let mut core = EngineCore::new();
    add(&mut core, "standard", 0.0, 0.0);
    assert!(core.on_key_down(&Key("q".into()), Modifiers::default()).is_empty());
}

// =============================================================
// Observation
// =============================================================

#[test]
fn snapshot_reflects_state() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    core.begin_drag(&id);

    let snap = core.snapshot();
    assert_eq!(snap.objects.len(), 1);
    assert_eq!(snap.selected_id, Some(id));
    assert_eq!(snap.interaction, Some(Interaction { kind: InteractionKind::Dragging, id }));
    assert!(snap.can_undo);
    assert!(!snap.can_redo);
}

#[test]
fn snapshot_serializes_for_observers() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "tree", 1.0, 2.0);
    core.begin_rotate(&id);
    let value = serde_json::to_value(core.snapshot()).unwrap();
    assert_eq!(value["objects"][0]["variant"], "tree");
    assert_eq!(value["interaction"]["kind"], "rotating");
    assert_eq!(value["selected_id"], serde_json::json!(id));
}

#[test]
fn snapshot_is_detached_from_live_state() {
    let mut core = EngineCore::new();
    let id = add(&mut core, "standard", 0.0, 0.0);
    let snap = core.snapshot();
    core.update_object(&id, PartialPlacedObject { position: Some(Vec3::ground(9.0, 9.0)), ..Default::default() });
    assert_eq!(snap.objects[0].position, Vec3::ground(0.0, 0.0));
}
