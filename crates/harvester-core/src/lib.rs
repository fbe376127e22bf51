//! Core grid types for the harvester RTS engine.
//!
//! Provides the geometry primitives every other engine crate builds on:
//!
//! - [`Coord`] — an integer tile coordinate with an invalid sentinel.
//! - [`Direction`] — the 8 compass directions, indexed 0–7 in angle order.
//! - [`angle_steps`] — minimal angular distance between two directions,
//!   shared by turning-cost and heading computations.

mod coord;
mod direction;

pub use coord::Coord;
pub use direction::{Direction, angle_steps};
