use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::config::HandMapping;
use super::landmarks::{HandFrame, INDEX_MCP, MIDDLE_MCP, PINKY_MCP};

/// Raw per-frame transform read off a hand, before any smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandTransform {
    /// Pitch (x) and yaw (y) in radians.
    pub rotation: Vec2,
    pub scale: f32,
    /// Magnet center in scene space.
    pub anchor: Vec3,
}

impl HandTransform {
    pub fn read(frame: &HandFrame, mapping: &HandMapping) -> Self {
        let palm = frame.point(MIDDLE_MCP);
        let offset = Vec2::new(palm.x - 0.5, palm.y - 0.5);
        let span = frame.planar_distance(INDEX_MCP, PINKY_MCP);
        Self {
            rotation: Vec2::new(offset.y * PI, offset.x * PI),
            scale: (span * mapping.scale_gain).max(mapping.scale_floor),
            // Mirror both axes: the video is selfie-flipped and y points down.
            anchor: (offset * -mapping.anchor_span).extend(0.0),
        }
    }
}

/// Exponential step of `current` toward `target`.
#[inline]
pub fn ease(current: f32, target: f32, blend: f32) -> f32 {
    current + (target - current) * blend
}
