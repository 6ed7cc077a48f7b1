//! Construction-time configuration for a particle field.
//!
//! The page ships in three flavours that differ only in density, sizing and
//! which gestures map to which shapes. Each is a [`Variant`] preset of the same
//! [`FieldConfig`]; only the color may change after construction.

use std::str::FromStr;

use glam::Vec2;

use super::color::Rgb;
use super::error::{FieldError, Result};
use super::gesture::GestureTable;
use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// 25k particles, sphere/heart/saturn/flower plus the finger heart.
    #[default]
    Classic,
    /// 50k particles, adds the `I` and `U` glyphs for one and two fingers.
    Glyphs,
    /// 50k particles, glyphs, and the finger heart spells out `LOVE`.
    Words,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Glyphs => "glyphs",
            Self::Words => "words",
        }
    }
}

impl FromStr for Variant {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "glyphs" => Ok(Self::Glyphs),
            "words" => Ok(Self::Words),
            _ => Err(FieldError::UnknownVariant(s.to_string())),
        }
    }
}

/// Dimensions for every parametric shape formula.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeParams {
    pub sphere_radius: f32,
    pub heart_x_amp: f32,
    pub heart_scale: f32,
    pub heart_depth: f32,
    pub love_x_amp: f32,
    pub love_scale: f32,
    pub love_lift: f32,
    pub love_depth: f32,
    pub saturn_core_fraction: f32,
    pub saturn_core_radius: f32,
    pub ring_inner: f32,
    pub ring_width: f32,
    pub ring_thickness: f32,
    /// Rotation of the ring about the x-axis, radians.
    pub ring_tilt: f32,
    pub flower_radius: f32,
    pub flower_petals: f32,
    pub flower_depth: f32,
    pub glyph_scale: f32,
    pub glyph_thickness: f32,
    pub glyph_depth: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            sphere_radius: SPHERE_RADIUS,
            heart_x_amp: HEART_X_AMP,
            heart_scale: HEART_SCALE,
            heart_depth: HEART_DEPTH,
            love_x_amp: LOVE_X_AMP,
            love_scale: LOVE_SCALE,
            love_lift: LOVE_LIFT,
            love_depth: LOVE_DEPTH,
            saturn_core_fraction: SATURN_CORE_FRACTION,
            saturn_core_radius: SATURN_CORE_RADIUS,
            ring_inner: SATURN_RING_INNER,
            ring_width: SATURN_RING_WIDTH,
            ring_thickness: SATURN_RING_THICKNESS,
            ring_tilt: 0.0,
            flower_radius: FLOWER_RADIUS,
            flower_petals: FLOWER_PETALS,
            flower_depth: FLOWER_DEPTH,
            glyph_scale: GLYPH_SCALE,
            glyph_thickness: GLYPH_THICKNESS,
            glyph_depth: GLYPH_DEPTH,
        }
    }
}

/// Per-tick easing and hand magnet.
#[derive(Clone, Debug, PartialEq)]
pub struct EasingParams {
    pub smoothing: f32,
    pub magnet_radius: f32,
    pub magnet_gain: f32,
}

impl Default for EasingParams {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING,
            magnet_radius: MAGNET_RADIUS,
            magnet_gain: MAGNET_GAIN,
        }
    }
}

/// How hand landmarks map onto scene transforms and gestures.
#[derive(Clone, Debug, PartialEq)]
pub struct HandMapping {
    pub rotation_blend: f32,
    pub scale_blend: f32,
    pub scale_gain: f32,
    pub scale_floor: f32,
    /// Scene units spanned by the full normalized frame, per axis.
    pub anchor_span: Vec2,
    pub pinch_threshold: f32,
}

impl Default for HandMapping {
    fn default() -> Self {
        Self {
            rotation_blend: ROTATION_BLEND,
            scale_blend: SCALE_BLEND,
            scale_gain: SCALE_GAIN,
            scale_floor: SCALE_FLOOR,
            anchor_span: Vec2::new(ANCHOR_SPAN_X, ANCHOR_SPAN_Y),
            pinch_threshold: PINCH_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub variant: Variant,
    pub particle_count: usize,
    pub camera_z: f32,
    pub point_size: f32,
    pub color: Rgb,
    pub shapes: ShapeParams,
    pub easing: EasingParams,
    pub hand: HandMapping,
    pub gestures: GestureTable,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Classic)
    }
}

impl FieldConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let classic = Self {
            variant,
            particle_count: CLASSIC_PARTICLE_COUNT,
            camera_z: CAMERA_Z,
            point_size: POINT_SIZE,
            color: Rgb::default(),
            shapes: ShapeParams::default(),
            easing: EasingParams::default(),
            hand: HandMapping::default(),
            gestures: GestureTable::Basic,
        };
        match variant {
            Variant::Classic => classic,
            Variant::Glyphs => Self {
                particle_count: DENSE_PARTICLE_COUNT,
                camera_z: 40.0,
                point_size: 0.1,
                shapes: ShapeParams {
                    sphere_radius: 12.0,
                    heart_scale: 0.6,
                    ring_tilt: 0.35,
                    ..ShapeParams::default()
                },
                easing: EasingParams {
                    smoothing: 0.15,
                    magnet_radius: 30.0,
                    ..EasingParams::default()
                },
                hand: HandMapping {
                    scale_floor: 0.2,
                    ..HandMapping::default()
                },
                gestures: GestureTable::Glyphs,
                ..classic
            },
            Variant::Words => Self {
                particle_count: DENSE_PARTICLE_COUNT,
                camera_z: 45.0,
                point_size: 0.1,
                shapes: ShapeParams {
                    sphere_radius: 15.0,
                    heart_scale: 0.7,
                    ring_tilt: 0.35,
                    flower_radius: 15.0,
                    glyph_scale: 1.3,
                    ..ShapeParams::default()
                },
                easing: EasingParams {
                    smoothing: 0.16,
                    magnet_radius: 28.0,
                    ..EasingParams::default()
                },
                hand: HandMapping {
                    scale_floor: 0.25,
                    ..HandMapping::default()
                },
                gestures: GestureTable::Words,
                ..classic
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        let unit = |v: f32| v > 0.0 && v <= 1.0;
        if self.particle_count == 0 {
            return Err(FieldError::InvalidConfig("particle_count must be positive"));
        }
        if !unit(self.easing.smoothing) {
            return Err(FieldError::InvalidConfig("smoothing must be in (0, 1]"));
        }
        if !unit(self.hand.rotation_blend) || !unit(self.hand.scale_blend) {
            return Err(FieldError::InvalidConfig("blend factors must be in (0, 1]"));
        }
        if self.easing.magnet_radius <= 0.0 {
            return Err(FieldError::InvalidConfig("magnet_radius must be positive"));
        }
        if self.easing.magnet_gain < 0.0 {
            return Err(FieldError::InvalidConfig("magnet_gain must not be negative"));
        }
        if self.hand.scale_floor <= 0.0 {
            return Err(FieldError::InvalidConfig("scale_floor must be positive"));
        }
        Ok(())
    }
}
