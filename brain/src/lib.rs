//! Brian's Brain - a three-state cellular automaton on a fixed 2D grid.
//!
//! Cells are `Ready`, `Firing` or `Refractory`. Each generation a ready cell
//! fires if exactly two of its Moore neighbors are firing, a firing cell
//! becomes refractory, and a refractory cell becomes ready again. The grid
//! does not wrap: neighbors off the edge simply do not exist.
//!
//! [`BrainEngine`] owns the grid and advances it; [`render`] turns a
//! [`Generation`] into points for whatever draws it.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;


pub use cell::Cell;
pub use config::Config;
pub use engine::BrainEngine;
pub use error::{ConfigError, EngineError};
pub use grid::{Census, Generation};
