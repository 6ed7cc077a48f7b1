//! The per-frame particle controller.
//!
//! [`ParticleField`] owns every piece of mutable core state: the particle
//! buffer, the current target set, the active shape, and the smoothed hand
//! transforms. An external driver calls [`ParticleField::tick`] once per
//! display frame with the hand seen this frame (if any), then uploads
//! [`ParticleField::positions_flat`] and applies [`ParticleField::rotation`] and
//! [`ParticleField::scale`] to the rendered points.

use glam::{Vec2, Vec3};
use log::{debug, info};
use rand::rngs::StdRng;

use super::color::Rgb;
use super::config::{EasingParams, FieldConfig};
use super::error::Result;
use super::generator::{ShapeGenerator, TargetGenerator};
use super::landmarks::HandFrame;
use super::shape::ShapeLabel;
use super::transform::{ease, HandTransform};

/// What one tick did, for the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The particle buffer was rewritten and must be re-uploaded.
    pub buffer_updated: bool,
    pub hand_seen: bool,
    /// Set when this tick switched the active shape.
    pub shape_changed: Option<ShapeLabel>,
}

/// Everything but the buffer that the renderer applies to the points, copied
/// out so the field can be released before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderView {
    pub rotation: Vec2,
    pub scale: f32,
    pub color: Rgb,
}

pub struct ParticleField<G = ShapeGenerator<StdRng>> {
    config: FieldConfig,
    generator: G,
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    active: ShapeLabel,
    anchor: Vec3,
    rotation: Vec2,
    scale: f32,
    color: Rgb,
    status: String,
}

impl ParticleField<ShapeGenerator<StdRng>> {
    /// Field with a runtime-seeded generator.
    pub fn new(config: FieldConfig) -> Result<Self> {
        let generator = ShapeGenerator::from_entropy(config.shapes.clone());
        Self::with_generator(config, generator)
    }

    /// Field whose shapes are reproducible for a given seed.
    pub fn seeded(config: FieldConfig, seed: u64) -> Result<Self> {
        let generator = ShapeGenerator::seeded(config.shapes.clone(), seed);
        Self::with_generator(config, generator)
    }
}

impl<G: TargetGenerator> ParticleField<G> {
    pub fn with_generator(config: FieldConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let count = config.particle_count;
        let active = ShapeLabel::default();
        let targets = generator.generate(active, count);
        info!(
            "[field] variant={} particles={} shape={}",
            config.variant.as_str(),
            count,
            active
        );
        Ok(Self {
            color: config.color,
            generator,
            positions: vec![Vec3::ZERO; count],
            targets,
            active,
            anchor: Vec3::ZERO,
            rotation: Vec2::ZERO,
            scale: 1.0,
            status: active.status_text(),
            config,
        })
    }

    /// Advance one display frame.
    ///
    /// Eases every particle toward the current targets, then, if a hand was
    /// seen, updates the transforms and re-classifies the gesture. Without a
    /// hand only the easing runs and all hand-derived state keeps its last
    /// value.
    pub fn tick(&mut self, hand: Option<&HandFrame>) -> TickOutcome {
        ease_particles(
            &mut self.positions,
            &self.targets,
            self.anchor,
            &self.config.easing,
        );
        let mut outcome = TickOutcome {
            buffer_updated: true,
            ..TickOutcome::default()
        };
        let Some(frame) = hand else {
            return outcome;
        };
        outcome.hand_seen = true;

        let mapping = &self.config.hand;
        let raw = HandTransform::read(frame, mapping);
        self.rotation = self.rotation.lerp(raw.rotation, mapping.rotation_blend);
        self.scale = ease(self.scale, raw.scale, mapping.scale_blend);
        self.anchor = raw.anchor;

        let label = self
            .config
            .gestures
            .classify(frame, mapping.pinch_threshold);
        if self.switch_to(label) {
            outcome.shape_changed = Some(label);
        }
        outcome
    }

    /// Force a shape by name; unknown names select the sphere. Returns whether
    /// the active shape changed.
    pub fn show_shape(&mut self, name: &str) -> bool {
        self.switch_to(ShapeLabel::parse_lenient(name))
    }

    fn switch_to(&mut self, label: ShapeLabel) -> bool {
        if label == self.active {
            return false;
        }
        debug!("[field] shape {} -> {}", self.active, label);
        self.targets = self.generator.generate(label, self.config.particle_count);
        self.active = label;
        self.status = label.status_text();
        true
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn active_shape(&self) -> ShapeLabel {
        self.active
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as packed `x, y, z` triples for upload.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn render_view(&self) -> RenderView {
        RenderView {
            rotation: self.rotation,
            scale: self.scale,
            color: self.color,
        }
    }
}

/// One easing pass over the whole buffer.
///
/// Each coordinate moves a fixed fraction toward its target. On top of that,
/// x and y are pulled toward the anchor with a force that grows linearly from
/// zero at `magnet_radius` (planar distance) to its maximum at the anchor.
/// Depth never feels the magnet.
pub fn ease_particles(positions: &mut [Vec3], targets: &[Vec3], anchor: Vec3, easing: &EasingParams) {
    let s = easing.smoothing;
    for (p, t) in positions.iter_mut().zip(targets) {
        let dx = anchor.x - p.x;
        let dy = anchor.y - p.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let force = ((easing.magnet_radius - dist) * easing.magnet_gain).max(0.0);

        p.x += (t.x - p.x) * s + dx * force;
        p.y += (t.y - p.y) * s + dy * force;
        p.z += (t.z - p.z) * s;
    }
}
