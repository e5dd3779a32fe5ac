//! Game simulation module
//!
//! The discrete-time character simulation: plain-data player state, the
//! axis-separated tile collision resolver, and the per-tick runtime that
//! strings the effects together. Systems only ever touch the simulation
//! context they are handed; there are no globals.

pub mod collision;
pub mod player;
pub mod runtime;

pub use player::{Facing, Player, PlayerSprite};
pub use runtime::GameState;
