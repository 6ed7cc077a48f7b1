// Synthetic hand frames for the host-side tests.

#![allow(dead_code)]

use gesture_particles::core::landmarks::*;
use gesture_particles::core::{generate, ShapeLabel, ShapeParams, TargetGenerator};
use gesture_particles::HandFrame;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A hand with the palm centered at `palm` (normalized), the given fingers
/// (index, middle, ring, pinky) extended, and the thumb either pinching the
/// index tip or held well away from it.
pub fn hand_at(palm: (f32, f32), extended: [bool; 4], pinch: bool) -> HandFrame {
    let (px, py) = palm;
    let mut points = [Vec3::new(px, py, 0.0); LANDMARK_COUNT];
    points[INDEX_MCP] = Vec3::new(px - 0.05, py, 0.0);
    points[PINKY_MCP] = Vec3::new(px + 0.10, py, 0.0);
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        let x = px - 0.05 + 0.05 * i as f32;
        points[tip - 2] = Vec3::new(x, py - 0.05, 0.0);
        let tip_y = if extended[i] { py - 0.2 } else { py + 0.05 };
        points[tip] = Vec3::new(x, tip_y, 0.0);
    }
    points[THUMB_TIP] = if pinch {
        points[INDEX_TIP] + Vec3::new(0.01, 0.01, 0.0)
    } else {
        Vec3::new(px - 0.3, py + 0.3, 0.0)
    };
    HandFrame::new(points)
}

pub fn hand(extended: [bool; 4], pinch: bool) -> HandFrame {
    hand_at((0.5, 0.5), extended, pinch)
}

/// Hand showing `n` extended fingers, counting from the index.
pub fn fingers(n: usize) -> HandFrame {
    let mut extended = [false; 4];
    extended.iter_mut().take(n).for_each(|e| *e = true);
    hand(extended, false)
}

pub fn finger_heart() -> HandFrame {
    hand([false; 4], true)
}

/// Wraps the real formulas and counts how often a target set is requested.
pub struct CountingGenerator {
    pub calls: usize,
    pub labels: Vec<ShapeLabel>,
    params: ShapeParams,
    rng: StdRng,
}

impl CountingGenerator {
    pub fn new(params: ShapeParams) -> Self {
        Self {
            calls: 0,
            labels: Vec::new(),
            params,
            rng: StdRng::seed_from_u64(42),
        }
    }
}

impl TargetGenerator for CountingGenerator {
    fn generate(&mut self, label: ShapeLabel, count: usize) -> Vec<Vec3> {
        self.calls += 1;
        self.labels.push(label);
        generate(label, count, &self.params, &mut self.rng)
    }
}
