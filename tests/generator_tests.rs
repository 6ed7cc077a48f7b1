// Host-side tests for the parametric shape formulas.

use gesture_particles::core::generator::{generate, sphere_point};
use gesture_particles::core::{ShapeGenerator, ShapeLabel, ShapeParams, TargetGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const N: usize = 4_000;

fn sample(label: ShapeLabel, params: &ShapeParams, seed: u64) -> Vec<glam::Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(label, N, params, &mut rng)
}

/// Number of leading saturn points that sample the core sphere.
fn core_len(count: usize, fraction: f32) -> usize {
    (0..count)
        .filter(|&i| (i as f32) < count as f32 * fraction)
        .count()
}

#[test]
fn every_shape_yields_exactly_n_finite_points() {
    let params = ShapeParams::default();
    for label in ShapeLabel::ALL {
        let pts = sample(label, &params, 7);
        assert_eq!(pts.len(), N, "{label} produced wrong count");
        assert!(
            pts.iter().all(|p| p.is_finite()),
            "{label} produced a non-finite coordinate"
        );
    }
}

#[test]
fn zero_count_is_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate(ShapeLabel::Saturn, 0, &ShapeParams::default(), &mut rng).is_empty());
}

#[test]
fn sphere_points_lie_on_the_radius() {
    let params = ShapeParams::default();
    for p in sample(ShapeLabel::Sphere, &params, 11) {
        assert!(
            (p.length() - params.sphere_radius).abs() < 1e-3,
            "point {p:?} off the sphere"
        );
    }
}

#[test]
fn sphere_point_helper_respects_any_radius() {
    let mut rng = StdRng::seed_from_u64(5);
    for r in [1.0_f32, 5.0, 15.0] {
        let p = sphere_point(r, &mut rng);
        assert!((p.length() - r).abs() < 1e-3 * r);
    }
}

#[test]
fn heart_depth_stays_inside_jitter_band() {
    let params = ShapeParams::default();
    let half = params.heart_depth / 2.0;
    for p in sample(ShapeLabel::Heart, &params, 13) {
        assert!(p.z.abs() <= half, "z={} outside ±{half}", p.z);
        assert!(p.x.abs() <= params.heart_x_amp * params.heart_scale + 1e-4);
    }
}

#[test]
fn love_sign_is_a_smaller_heart_lifted_above_origin() {
    let params = ShapeParams::default();
    let pts = sample(ShapeLabel::LoveSign, &params, 17);
    let max_x = params.love_x_amp * params.love_scale + 1e-4;
    let mean_y = pts.iter().map(|p| p.y).sum::<f32>() / pts.len() as f32;
    assert!(pts.iter().all(|p| p.x.abs() <= max_x));
    assert!(pts.iter().all(|p| p.z.abs() <= params.love_depth / 2.0));
    assert!(mean_y > 0.0, "finger heart should sit above the origin");

    let heart = sample(ShapeLabel::Heart, &params, 17);
    let width = |v: &[glam::Vec3]| v.iter().map(|p| p.x.abs()).fold(0.0_f32, f32::max);
    assert!(width(&pts) < width(&heart));
}

#[test]
fn saturn_splits_core_and_ring() {
    let params = ShapeParams::default();
    let pts = sample(ShapeLabel::Saturn, &params, 19);
    let core = core_len(N, params.saturn_core_fraction);
    for p in &pts[..core] {
        assert!((p.length() - params.saturn_core_radius).abs() < 1e-3);
    }
    let outer = params.ring_inner + params.ring_width;
    for p in &pts[core..] {
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(r >= params.ring_inner - 1e-3 && r <= outer + 1e-3, "ring radius {r}");
        assert!(p.y.abs() <= params.ring_thickness / 2.0 + 1e-5);
    }
}

#[test]
fn saturn_core_rounds_partial_share_up() {
    let params = ShapeParams::default();
    let mut rng = StdRng::seed_from_u64(2);
    // 3 * 0.4 = 1.2, so indices 0 and 1 both belong to the core.
    let pts = generate(ShapeLabel::Saturn, 3, &params, &mut rng);
    assert_eq!(core_len(3, params.saturn_core_fraction), 2);
    for p in &pts[..2] {
        assert!((p.length() - params.saturn_core_radius).abs() < 1e-3);
    }
    let r = (pts[2].x * pts[2].x + pts[2].z * pts[2].z).sqrt();
    assert!(r >= params.ring_inner - 1e-3);
}

#[test]
fn tilted_ring_leaves_the_xz_plane() {
    let params = ShapeParams {
        ring_tilt: 0.35,
        ..ShapeParams::default()
    };
    let pts = sample(ShapeLabel::Saturn, &params, 23);
    let core = core_len(N, params.saturn_core_fraction);
    let max_y = pts[core..].iter().map(|p| p.y.abs()).fold(0.0_f32, f32::max);
    assert!(max_y > 1.0, "tilted ring should span y, got {max_y}");
    for p in &pts[core..] {
        let r = p.length();
        assert!(r <= params.ring_inner + params.ring_width + 0.2);
    }
}

#[test]
fn flower_follows_rose_curve_bounds() {
    let params = ShapeParams::default();
    for p in sample(ShapeLabel::Flower, &params, 29) {
        let r = (p.x * p.x + p.y * p.y).sqrt();
        assert!(r <= params.flower_radius + 1e-3);
        assert!(p.z.abs() <= params.flower_depth);
    }
}

#[test]
fn glyph_i_is_a_narrow_vertical_bar() {
    let params = ShapeParams::default();
    let pts = sample(ShapeLabel::TextI, &params, 31);
    let half = params.glyph_thickness / 2.0;
    assert!(pts.iter().all(|p| p.x.abs() <= half + 1e-5));
    assert!(pts.iter().any(|p| p.y > 6.0) && pts.iter().any(|p| p.y < -6.0));
}

#[test]
fn glyph_u_is_open_at_the_top() {
    let params = ShapeParams::default();
    let pts = sample(ShapeLabel::TextYou, &params, 37);
    // Nothing should fill the gap between the uprights above the bowl.
    let inside_top = pts
        .iter()
        .filter(|p| p.y > 0.0 && p.x.abs() < 3.0)
        .count();
    assert_eq!(inside_top, 0);
    assert!(pts.iter().any(|p| p.y < -6.0), "bowl should reach the bottom");
}

#[test]
fn glyph_love_spans_four_letters() {
    let params = ShapeParams::default();
    let pts = sample(ShapeLabel::TextLove, &params, 41);
    let min_x = pts.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    let max_x = pts.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    assert!(min_x < -14.0 && max_x > 13.0, "x range {min_x}..{max_x}");
    assert!(pts.iter().all(|p| p.y.abs() <= 4.0 + params.glyph_thickness));
}

#[test]
fn seeded_generators_are_reproducible() {
    let mut a = ShapeGenerator::seeded(ShapeParams::default(), 99);
    let mut b = ShapeGenerator::seeded(ShapeParams::default(), 99);
    assert_eq!(a.generate(ShapeLabel::Heart, 500), b.generate(ShapeLabel::Heart, 500));

    let mut c = ShapeGenerator::seeded(ShapeParams::default(), 100);
    assert_ne!(
        ShapeGenerator::seeded(ShapeParams::default(), 99).generate(ShapeLabel::Heart, 500),
        c.generate(ShapeLabel::Heart, 500)
    );
}

#[test]
fn unknown_label_names_fall_back_to_sphere() {
    assert_eq!(ShapeLabel::parse_lenient("triangle"), ShapeLabel::Sphere);
    assert_eq!(ShapeLabel::parse_lenient(""), ShapeLabel::Sphere);
    assert_eq!(ShapeLabel::from("LOVE_SIGN"), ShapeLabel::LoveSign);
    assert_eq!(ShapeLabel::parse("text_you"), Some(ShapeLabel::TextYou));
    assert_eq!(ShapeLabel::parse("nope"), None);

    let params = ShapeParams::default();
    let mut rng = StdRng::seed_from_u64(3);
    let pts = generate(ShapeLabel::parse_lenient("cube"), 200, &params, &mut rng);
    assert!(pts
        .iter()
        .all(|p| (p.length() - params.sphere_radius).abs() < 1e-3));
}

#[test]
fn labels_render_upper_case_status() {
    assert_eq!(ShapeLabel::LoveSign.display_name(), "LOVE_SIGN");
    assert_eq!(ShapeLabel::Flower.status_text(), "Mode: FLOWER");
    assert_eq!(ShapeLabel::TextYou.to_string(), "text_you");
}
