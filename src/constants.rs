//! Reference tuning for the `classic` variant.
//!
//! The other variants start from these values and override a handful of them
//! (see `core::config`). Keeping them here keeps magic numbers out of the
//! frame loop and the shape formulas.

// Field layout
pub const CLASSIC_PARTICLE_COUNT: usize = 25_000;
pub const DENSE_PARTICLE_COUNT: usize = 50_000;
pub const CAMERA_Z: f32 = 35.0; // camera distance from the origin along +z

// Rendering hints
pub const POINT_SIZE: f32 = 0.12;
pub const DEFAULT_COLOR: [u8; 3] = [0x00, 0xff, 0xcc]; // #00ffcc

// Easing
pub const SMOOTHING: f32 = 0.18; // per-tick blend of each particle toward its target
pub const MAGNET_RADIUS: f32 = 25.0; // planar distance beyond which the hand has no pull
pub const MAGNET_GAIN: f32 = 0.02; // force per unit of distance inside the radius

// Hand-derived transforms
pub const ROTATION_BLEND: f32 = 0.1;
pub const SCALE_BLEND: f32 = 0.2;
pub const SCALE_GAIN: f32 = 10.0; // hand span (normalized) to uniform scale
pub const SCALE_FLOOR: f32 = 0.3;
pub const ANCHOR_SPAN_X: f32 = 60.0; // scene units across the full frame width
pub const ANCHOR_SPAN_Y: f32 = 45.0;

// Gesture thresholds
pub const PINCH_THRESHOLD: f32 = 0.04; // normalized thumb-index distance

// Sphere
pub const SPHERE_RADIUS: f32 = 10.0;

// Heart: x = HEART_X_AMP * sin^3(a), y = classic heart polynomial, both scaled
pub const HEART_X_AMP: f32 = 12.0;
pub const HEART_SCALE: f32 = 0.5;
pub const HEART_DEPTH: f32 = 2.0; // full width of the z jitter band

// Finger-heart callback: a smaller heart lifted above the origin
pub const LOVE_X_AMP: f32 = 6.0;
pub const LOVE_SCALE: f32 = 0.4;
pub const LOVE_LIFT: f32 = 5.0;
pub const LOVE_DEPTH: f32 = 1.0;

// Saturn
pub const SATURN_CORE_FRACTION: f32 = 0.4;
pub const SATURN_CORE_RADIUS: f32 = 5.0;
pub const SATURN_RING_INNER: f32 = 8.0;
pub const SATURN_RING_WIDTH: f32 = 4.0;
pub const SATURN_RING_THICKNESS: f32 = 0.3;

// Flower (rose curve r = R cos(k t))
pub const FLOWER_RADIUS: f32 = 12.0;
pub const FLOWER_PETALS: f32 = 5.0;
pub const FLOWER_DEPTH: f32 = 3.0; // z = U(-1, 1) * FLOWER_DEPTH

// Glyph outlines
pub const GLYPH_SCALE: f32 = 1.0;
pub const GLYPH_THICKNESS: f32 = 0.6;
pub const GLYPH_DEPTH: f32 = 1.0;

// Blending for the points primitive
pub const ADDITIVE_BLENDING: bool = true;
pub const DEPTH_WRITE: bool = false;
