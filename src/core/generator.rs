//! Parametric target point clouds.
//!
//! Every point is sampled independently; the only state is the random source,
//! which callers inject so tests can seed it.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::ShapeParams;
use super::glyph::{sample_outline, Stroke, GLYPH_I, GLYPH_LOVE, GLYPH_U};
use super::shape::ShapeLabel;

/// Source of target sets for the particle field.
pub trait TargetGenerator {
    fn generate(&mut self, label: ShapeLabel, count: usize) -> Vec<Vec3>;
}

/// Default generator: the parametric formulas below driven by an owned RNG.
pub struct ShapeGenerator<R = StdRng> {
    params: ShapeParams,
    rng: R,
}

impl<R: Rng> ShapeGenerator<R> {
    pub fn with_rng(params: ShapeParams, rng: R) -> Self {
        Self { params, rng }
    }

    pub fn params(&self) -> &ShapeParams {
        &self.params
    }
}

impl ShapeGenerator<StdRng> {
    pub fn seeded(params: ShapeParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: ShapeParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }
}

impl<R: Rng> TargetGenerator for ShapeGenerator<R> {
    fn generate(&mut self, label: ShapeLabel, count: usize) -> Vec<Vec3> {
        generate(label, count, &self.params, &mut self.rng)
    }
}

/// Sample `count` points of the given shape.
pub fn generate<R: Rng + ?Sized>(
    label: ShapeLabel,
    count: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> Vec<Vec3> {
    let core_count = count as f32 * params.saturn_core_fraction;
    let ring_tilt = Quat::from_rotation_x(params.ring_tilt);
    (0..count)
        .map(|i| match label {
            ShapeLabel::Sphere => sphere_point(params.sphere_radius, rng),
            ShapeLabel::Heart => heart_point(
                params.heart_x_amp,
                params.heart_scale,
                0.0,
                params.heart_depth,
                rng,
            ),
            ShapeLabel::LoveSign => heart_point(
                params.love_x_amp,
                params.love_scale,
                params.love_lift,
                params.love_depth,
                rng,
            ),
            ShapeLabel::Saturn if (i as f32) < core_count => {
                sphere_point(params.saturn_core_radius, rng)
            }
            ShapeLabel::Saturn => ring_tilt * ring_point(params, rng),
            ShapeLabel::Flower => flower_point(params, rng),
            ShapeLabel::TextI => glyph_point(GLYPH_I, params, rng),
            ShapeLabel::TextYou => glyph_point(GLYPH_U, params, rng),
            ShapeLabel::TextLove => glyph_point(GLYPH_LOVE, params, rng),
        })
        .collect()
}

/// Uniform on the sphere surface: uniform azimuth, uniform height.
pub fn sphere_point<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let u: f32 = rng.gen_range(-1.0..1.0);
    let ring = radius * (1.0 - u * u).sqrt();
    Vec3::new(ring * t.cos(), ring * t.sin(), radius * u)
}

/// Flat heart curve with a jittered depth band of width `depth`.
fn heart_point<R: Rng + ?Sized>(x_amp: f32, scale: f32, lift: f32, depth: f32, rng: &mut R) -> Vec3 {
    let a = rng.gen_range(0.0..TAU);
    let x = x_amp * a.sin().powi(3) * scale;
    let y = (13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos() - (4.0 * a).cos())
        * scale
        + lift;
    let z = (rng.gen::<f32>() - 0.5) * depth;
    Vec3::new(x, y, z)
}

/// Thin flat ring in the xz-plane, before tilt.
fn ring_point<R: Rng + ?Sized>(params: &ShapeParams, rng: &mut R) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let r = params.ring_inner + rng.gen::<f32>() * params.ring_width;
    let y = (rng.gen::<f32>() - 0.5) * params.ring_thickness;
    Vec3::new(r * t.cos(), y, r * t.sin())
}

/// Rose curve `r = R cos(k t)`.
fn flower_point<R: Rng + ?Sized>(params: &ShapeParams, rng: &mut R) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let r = params.flower_radius * (params.flower_petals * t).cos();
    let z = rng.gen_range(-1.0..1.0) * params.flower_depth;
    Vec3::new(r * t.cos(), r * t.sin(), z)
}

fn glyph_point<R: Rng + ?Sized>(strokes: &[Stroke], params: &ShapeParams, rng: &mut R) -> Vec3 {
    let p = sample_outline(strokes, rng) * params.glyph_scale;
    let jitter = |rng: &mut R, width: f32| (rng.gen::<f32>() - 0.5) * width;
    Vec3::new(
        p.x + jitter(rng, params.glyph_thickness),
        p.y + jitter(rng, params.glyph_thickness),
        jitter(rng, params.glyph_depth),
    )
}
