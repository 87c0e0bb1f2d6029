//! Single-column hair/cloth strip sway for 2D mascots and games.
//!
//! `swishy` procedurally sways a vertical strip of mesh vertices in response
//! to its owner's world-space motion: think side-hair on an animated mascot
//! trailing behind the head as it moves. It is not a mass-spring cloth
//! simulation — displacement is a falloff-weighted, damped approach toward a
//! motion-derived target, which cannot overshoot or blow up regardless of
//! input.
//!
//! # Features
//!
//! - **Seam-safe vertex groups**: coincident duplicate vertices (emitted by
//!   per-face-UV grid generators) are written identically every tick
//! - **Fixed-timestep stepping**: a 60 Hz accumulator clock decouples the
//!   sway rate from the host's render frame rate
//! - **Rigid root, mobile tip**: per-row falloff with a configurable rigid
//!   section below `move_begin_index`
//! - **Enable/disable lifecycle**: disabling freezes the strip in place;
//!   re-enabling re-anchors motion sampling so there is no first-frame jump
//! - **Observable**: monitor fixed steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod vertex;
pub mod group;
pub mod unit;
pub mod motion;
pub mod clock;
pub mod config;
pub mod observer;
pub mod strip;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use vertex::{generate_grid, Vertex};
pub use group::{group_vertices, VertexGroup};
pub use unit::{build_row_units, RowUnit};
pub use motion::MotionSampler;
pub use clock::FixedStepClock;
pub use config::StripConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use strip::HairStrip;
pub use error::StripError;
