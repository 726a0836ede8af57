//! Drag-and-drop status-transition protocol.
//!
//! # Responsibility
//! - Model the item and column state machines for one drag interaction.
//! - Gate drops on the typed transfer payload and end legal drops in a
//!   store transition request.
//!
//! # Invariants
//! - A drop becomes legal only by passing the drag-over gate; a payload
//!   the board cannot interpret never activates hover feedback.
//! - Columns return to neutral on leave and after every drop.
//! - An unconsummated drag changes nothing: the item keeps its status
//!   because `move_project` was never called.

pub mod column;
pub mod item;
pub mod payload;
