pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod generator;
pub mod gesture;
pub mod glyph;
pub mod landmarks;
pub mod shape;
pub mod transform;

pub use color::Rgb;
pub use config::{EasingParams, FieldConfig, HandMapping, ShapeParams, Variant};
pub use error::{FieldError, Result};
pub use field::{ease_particles, ParticleField, RenderView, TickOutcome};
pub use generator::{generate, ShapeGenerator, TargetGenerator};
pub use gesture::{GestureTable, HandPose};
pub use landmarks::HandFrame;
pub use shape::ShapeLabel;
pub use transform::HandTransform;
