//! One detected hand, as delivered by the vision model each frame.
//!
//! Coordinates are normalized to the video frame: x grows to the right, y
//! grows *downwards*, z is depth relative to the wrist. Indices follow the
//! usual 21-point hand model.

use glam::{Vec2, Vec3};

use super::error::{FieldError, Result};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertips checked for extension; each one's PIP joint sits two indices
/// earlier.
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandFrame {
    pub points: [Vec3; LANDMARK_COUNT],
}

impl Default for HandFrame {
    fn default() -> Self {
        Self {
            points: [Vec3::ZERO; LANDMARK_COUNT],
        }
    }
}

impl HandFrame {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Decode a flat `[x0, y0, z0, x1, ...]` array (63 values), or an
    /// `[x0, y0, x1, ...]` array (42 values) with z left at zero.
    pub fn from_flat(flat: &[f32]) -> Result<Self> {
        let stride = match flat.len() {
            n if n == LANDMARK_COUNT * 3 => 3,
            n if n == LANDMARK_COUNT * 2 => 2,
            got => {
                return Err(FieldError::LandmarkCount {
                    expected: LANDMARK_COUNT * 3,
                    got,
                })
            }
        };
        let mut frame = Self::default();
        for (point, chunk) in frame.points.iter_mut().zip(flat.chunks_exact(stride)) {
            let z = if stride == 3 { chunk[2] } else { 0.0 };
            *point = Vec3::new(chunk[0], chunk[1], z);
        }
        Ok(frame)
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    /// Distance between two landmarks in the image plane, ignoring depth.
    #[inline]
    pub fn planar_distance(&self, a: usize, b: usize) -> f32 {
        planar(self.points[a]).distance(planar(self.points[b]))
    }

    /// A finger counts as extended when its tip is above (smaller y than) its
    /// PIP joint.
    #[inline]
    pub fn is_extended(&self, tip: usize) -> bool {
        self.points[tip].y < self.points[tip - 2].y
    }
}

#[inline]
fn planar(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}
