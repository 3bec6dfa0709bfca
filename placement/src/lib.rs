//! Placement engine for configuring concrete bench layouts on a ground plane.
//!
//! The crate owns everything about where objects may sit: oriented-rectangle
//! collision, magnetic end-to-end snapping, drag and rotate resolution with
//! slide fallback, and snapshot undo/redo. It has no rendering or I/O; a
//! presentation layer feeds ground-plane pointer points into
//! [`engine::EngineCore`] and applies the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: commands, interactions and queries |
//! | [`doc`] | Placed objects, sparse patches and the ordered store |
//! | [`catalog`] | Product footprints, categories, finishes and colors |
//! | [`collision`] | Footprint corners and separating-axis overlap tests |
//! | [`snap`] | End-to-end snap anchors |
//! | [`resolve`] | Per-frame drag and rotate resolution |
//! | [`history`] | Bounded undo/redo snapshot stacks |
//! | [`input`] | Key bindings, modifiers and the interaction state machine |
//! | [`summary`] | Bill of materials for the seating in a scene |
//! | [`geom`] | Vectors, Euler angles and poses |
//! | [`config`] | Engine tunables and environment loading |
//! | [`consts`] | Default numeric constants |

pub mod catalog;
pub mod collision;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod history;
pub mod input;
pub mod resolve;
pub mod snap;
pub mod summary;
