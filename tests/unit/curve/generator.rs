use super::*;
use crate::curve::shape::{BandShape, ControlPointShape};
use crate::foundation::math::Rng64;

const CANVAS: Canvas = Canvas {
    width: 800,
    height: 800,
};

fn generator() -> CurveGenerator {
    CurveGenerator::new(WaveParams::default())
}

#[test]
fn generates_three_resampled_curves_inside_vertical_margins() {
    let set = generator().generate(&BandShape, CANVAS, 0.0, Vec2::ZERO, false);

    assert_eq!(set.curves.len(), CURVE_COUNT);
    for curve in &set.curves {
        assert_eq!(curve.len(), PATH_SAMPLES);
        for p in curve {
            assert!(p.y >= CANVAS.height_f() * 0.05 - 1e-9);
            assert!(p.y <= CANVAS.height_f() * 0.95 + 1e-9);
            assert!(p.x.is_finite());
        }
    }
}

#[test]
fn curve_spacing_is_uniform_after_generation() {
    let set = generator().generate(&BandShape, CANVAS, 2.5, Vec2::new(0.4, -0.2), true);
    for curve in &set.curves {
        let gaps: Vec<f64> = curve.windows(2).map(|p| p[0].distance(p[1])).collect();
        let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
        for gap in gaps {
            assert!((gap - mean).abs() <= mean * 0.02);
        }
    }
}

#[test]
fn endpoints_stay_anchored_to_the_centerline() {
    let set = generator().generate(&BandShape, CANVAS, 3.7, Vec2::new(1.0, 1.0), true);
    for curve in &set.curves {
        let first = curve.first().unwrap();
        let last = curve.last().unwrap();
        assert!((first.x - CANVAS.width_f() * 0.5).abs() < 1e-6);
        assert!((last.x - CANVAS.width_f() * 0.5).abs() < 1e-6);
    }
}

#[test]
fn identical_seeds_generate_identical_sets() {
    let a_shape = ControlPointShape::seeded(0.22, &mut Rng64::new(11));
    let b_shape = ControlPointShape::seeded(0.22, &mut Rng64::new(11));
    let a = generator().generate(&a_shape, CANVAS, 1.0, Vec2::new(0.3, 0.1), false);
    let b = generator().generate(&b_shape, CANVAS, 1.0, Vec2::new(0.3, 0.1), false);
    assert_eq!(a, b);
}

#[test]
fn dramatic_mode_changes_the_shape() {
    let calm = generator().generate(&BandShape, CANVAS, 1.0, Vec2::ZERO, false);
    let dramatic = generator().generate(&BandShape, CANVAS, 1.0, Vec2::ZERO, true);
    let moved = calm
        .curves
        .iter()
        .zip(&dramatic.curves)
        .any(|(a, b)| a.iter().zip(b).any(|(p, q)| p.distance(*q) > 1.0));
    assert!(moved, "dramatic mode should displace the curves");
}

#[test]
fn pointer_sways_curves_horizontally() {
    let centered = generator().generate(&BandShape, CANVAS, 0.5, Vec2::ZERO, false);
    let pushed = generator().generate(&BandShape, CANVAS, 0.5, Vec2::new(1.0, 0.0), false);

    // Mid-curve samples move in the pointer's direction.
    let mid = PATH_SAMPLES / 2;
    for (calm, swayed) in centered.curves.iter().zip(&pushed.curves) {
        assert!(swayed[mid].x > calm[mid].x);
    }
}

#[test]
fn deviate_keeps_length_and_endpoints() {
    let baseline = generator().generate(&BandShape, CANVAS, 0.0, Vec2::ZERO, false);
    let wavered = generator().deviate(&baseline, CANVAS, 4.2, Vec2::new(0.5, 0.5));

    for (base, moved) in baseline.curves.iter().zip(&wavered.curves) {
        assert_eq!(base.len(), moved.len());
        assert!(base.first().unwrap().distance(*moved.first().unwrap()) < 1e-9);
        assert!(base.last().unwrap().distance(*moved.last().unwrap()) < 1e-9);
    }
}

#[test]
fn deviate_leaves_degenerate_curves_alone() {
    let mut baseline = PathSet::default();
    baseline.curves[0] = vec![Point::new(1.0, 1.0)];
    let out = generator().deviate(&baseline, CANVAS, 1.0, Vec2::new(1.0, 1.0));
    assert_eq!(out.curves[0], baseline.curves[0]);
}
