//! Gesture-driven particle shapes.
//!
//! A point cloud eases toward a target shape (sphere, heart, flower, saturn,
//! a finger heart, or letter glyphs) picked by the hand pose seen through the
//! webcam. The pure core in `core` builds and tests on any host; the
//! `wasm32` build adds the `ParticleApp` class the page drives.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use app::ParticleApp;
pub use crate::core::{
    FieldConfig, FieldError, GestureTable, HandFrame, ParticleField, Rgb, ShapeGenerator,
    ShapeLabel, TargetGenerator, TickOutcome, Variant,
};
