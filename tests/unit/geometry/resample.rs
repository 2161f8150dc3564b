use super::*;

fn wavy_path(samples: usize) -> Vec<Point> {
    // Dense, smooth, deliberately non-uniform spacing in t.
    (0..samples)
        .map(|i| {
            let t = i as f64 / (samples - 1) as f64;
            let skew = t * t;
            Point::new(100.0 * (skew * 6.0).sin(), 400.0 * skew)
        })
        .collect()
}

fn spacing(points: &[Point]) -> Vec<f64> {
    points.windows(2).map(|p| p[0].distance(p[1])).collect()
}

#[test]
fn output_has_exactly_target_count() {
    let path = wavy_path(37);
    for target in [2, 5, 100, 101, 250] {
        assert_eq!(resample(&path, target).len(), target);
    }
}

#[test]
fn output_spacing_is_uniform() {
    let out = resample(&wavy_path(400), 100);
    let gaps = spacing(&out);
    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    for gap in gaps {
        assert!(
            (gap - mean).abs() <= mean * 0.01,
            "gap {gap} deviates from mean {mean}"
        );
    }
}

#[test]
fn endpoints_are_preserved() {
    let path = wavy_path(50);
    let out = resample(&path, 100);
    assert!(out[0].distance(path[0]) < 1e-9);
    assert!(out[99].distance(path[49]) < 1e-9);
}

#[test]
fn uniform_input_is_a_fixed_point() {
    let line: Vec<Point> = (0..100)
        .map(|i| Point::new(3.0, i as f64 * 2.0))
        .collect();
    let out = resample(&line, 100);
    for (a, b) in line.iter().zip(&out) {
        assert!(a.distance(*b) < 1e-9);
    }
}

#[test]
fn degenerate_paths_pass_through() {
    assert!(resample(&[], 100).is_empty());

    let single = vec![Point::new(1.0, 2.0)];
    assert_eq!(resample(&single, 100), single);

    let pair = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    assert_eq!(resample(&pair, 1), pair);
}

#[test]
fn coincident_points_yield_copies_not_nan() {
    let stuck = vec![Point::new(5.0, 5.0); 4];
    let out = resample(&stuck, 10);
    assert_eq!(out.len(), 10);
    for p in out {
        assert_eq!(p, Point::new(5.0, 5.0));
    }
}

#[test]
fn zero_length_interior_edges_are_skipped() {
    let path = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(0.0, 20.0),
    ];
    let out = resample(&path, 21);
    assert_eq!(out.len(), 21);
    for (i, p) in out.iter().enumerate() {
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!((p.y - i as f64).abs() < 1e-9);
    }
}
