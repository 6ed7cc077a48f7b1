//! Letter outlines drawn as a handful of strokes.
//!
//! Outlines are laid out on a unit grid roughly 16 units tall centered on the
//! origin. Sampling picks a stroke with probability proportional to its length
//! and then a uniform position along it, so point density is even across the
//! whole outline regardless of how it is split into strokes.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Line { from: Vec2, to: Vec2 },
    /// Circular arc, angles in radians, swept from `start` to `end`.
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
}

impl Stroke {
    const fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::Line {
            from: Vec2::new(x0, y0),
            to: Vec2::new(x1, y1),
        }
    }

    const fn arc(cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> Self {
        Self::Arc {
            center: Vec2::new(cx, cy),
            radius,
            start,
            end,
        }
    }

    pub fn length(&self) -> f32 {
        match *self {
            Self::Line { from, to } => from.distance(to),
            Self::Arc { radius, start, end, .. } => radius * (end - start).abs(),
        }
    }

    /// Point at fraction `t` (0..=1) along the stroke.
    pub fn at(&self, t: f32) -> Vec2 {
        match *self {
            Self::Line { from, to } => from.lerp(to, t),
            Self::Arc { center, radius, start, end } => {
                let a = start + (end - start) * t;
                center + radius * Vec2::new(a.cos(), a.sin())
            }
        }
    }
}

/// Capital I: a single bar.
pub const GLYPH_I: &[Stroke] = &[Stroke::line(0.0, -8.0, 0.0, 8.0)];

/// Capital U: two uprights joined by the lower half of a circle.
pub const GLYPH_U: &[Stroke] = &[
    Stroke::line(-5.0, 8.0, -5.0, -2.0),
    Stroke::arc(0.0, -2.0, 5.0, PI, TAU),
    Stroke::line(5.0, -2.0, 5.0, 8.0),
];

/// The word LOVE, letters 8 units tall.
pub const GLYPH_LOVE: &[Stroke] = &[
    // L
    Stroke::line(-15.0, 4.0, -15.0, -4.0),
    Stroke::line(-15.0, -4.0, -10.5, -4.0),
    // O
    Stroke::arc(-5.0, 0.0, 4.0, 0.0, TAU),
    // V
    Stroke::line(1.0, 4.0, 3.5, -4.0),
    Stroke::line(3.5, -4.0, 6.0, 4.0),
    // E
    Stroke::line(9.0, 4.0, 9.0, -4.0),
    Stroke::line(9.0, 4.0, 14.0, 4.0),
    Stroke::line(9.0, 0.0, 13.0, 0.0),
    Stroke::line(9.0, -4.0, 14.0, -4.0),
];

/// Sample a point uniformly along the outline.
pub fn sample_outline<R: Rng + ?Sized>(strokes: &[Stroke], rng: &mut R) -> Vec2 {
    let total: f32 = strokes.iter().map(Stroke::length).sum();
    if strokes.is_empty() || total <= 0.0 {
        return Vec2::ZERO;
    }
    let mut pick = rng.gen::<f32>() * total;
    for stroke in strokes {
        let len = stroke.length();
        if pick < len {
            return stroke.at(pick / len);
        }
        pick -= len;
    }
    // Rounding can leave `pick` a hair past the final stroke.
    strokes[strokes.len() - 1].at(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn u_glyph_length_is_two_uprights_and_half_circle() {
        let total: f32 = GLYPH_U.iter().map(Stroke::length).sum();
        assert!((total - (20.0 + 5.0 * PI)).abs() < 1e-4);
    }

    #[test]
    fn samples_stay_on_the_i_bar() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = sample_outline(GLYPH_I, &mut rng);
            assert_eq!(p.x, 0.0);
            assert!((-8.0..=8.0).contains(&p.y));
        }
    }

    #[test]
    fn empty_outline_samples_origin() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_outline(&[], &mut rng), Vec2::ZERO);
    }
}
