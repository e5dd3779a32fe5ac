//! Keyboard input
//!
//! Action-based polling over macroquad's keyboard state, snapshotted once
//! per tick into a plain struct the simulation consumes. The simulation
//! never touches the keyboard directly, which keeps it testable.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
