use super::*;
use crate::geometry::path::PATH_SAMPLES;
use kurbo::Point;

fn set_of(x: f64) -> PathSet {
    let mut set = PathSet::default();
    for (c, curve) in set.curves.iter_mut().enumerate() {
        *curve = (0..PATH_SAMPLES)
            .map(|i| Point::new(x + c as f64 * 10.0, i as f64))
            .collect();
    }
    set
}

#[test]
fn morph_mix_boundaries_reproduce_inputs() {
    let from = set_of(100.0);
    let target = set_of(700.0);

    let at_zero = morph_mix(&from, &target, 0.0);
    let at_one = morph_mix(&from, &target, 1.0);
    for c in 0..from.curves.len() {
        for i in 0..PATH_SAMPLES {
            assert!(at_zero.curves[c][i].distance(from.curves[c][i]) < 1e-9);
            assert!(at_one.curves[c][i].distance(target.curves[c][i]) < 1e-9);
        }
    }
}

#[test]
fn morph_mix_clamps_progress() {
    let from = set_of(0.0);
    let target = set_of(1.0);
    assert_eq!(morph_mix(&from, &target, -0.5), morph_mix(&from, &target, 0.0));
    assert_eq!(morph_mix(&from, &target, 1.5), morph_mix(&from, &target, 1.0));
}

#[test]
fn morph_mix_guards_length_mismatch() {
    let from = set_of(0.0);
    let mut target = set_of(1.0);
    target.curves[1].truncate(40);

    let mixed = morph_mix(&from, &target, 0.5);
    assert_eq!(mixed.curves[0].len(), PATH_SAMPLES);
    assert_eq!(mixed.curves[1].len(), 40);
    assert_eq!(mixed.curves[2].len(), PATH_SAMPLES);
}

#[test]
fn morphing_advances_and_caps_at_target() {
    let params = PhaseParams {
        morph_step: 0.25,
        blend_step: 0.5,
    };
    let baseline = set_of(0.0);
    let from = set_of(100.0);
    let target = set_of(200.0);
    let mut phase = Phase::Morphing {
        progress: 0.0,
        from: from.clone(),
        target: target.clone(),
    };

    let mut last = PathSet::default();
    for _ in 0..6 {
        last = phase.advance(&params, &baseline, || unreachable!("no wavering while morphing"));
    }
    assert!(phase.is_morphing(), "morph holds until told to complete");
    for c in 0..3 {
        assert!(last.curves[c][0].distance(target.curves[c][0]) < 1e-9);
    }
}

#[test]
fn blending_reaches_steady_and_full_wavering() {
    let params = PhaseParams {
        morph_step: 0.25,
        blend_step: 0.5,
    };
    let baseline = set_of(100.0);
    let wavering = set_of(140.0);

    let mut phase = Phase::Blending { progress: 0.0 };
    let first = phase.advance(&params, &baseline, || wavering.clone());
    assert_eq!(phase, Phase::Blending { progress: 0.5 });
    // Half progress through the cosine ease is the halfway blend.
    assert!((first.curves[0][0].x - 120.0).abs() < 1e-9);

    let second = phase.advance(&params, &baseline, || wavering.clone());
    assert_eq!(phase, Phase::Steady);
    assert!(second.curves[0][0].distance(wavering.curves[0][0]) < 1e-9);

    let steady = phase.advance(&params, &baseline, || wavering.clone());
    assert_eq!(steady, wavering);
}

#[test]
fn steady_never_leaves_on_its_own() {
    let params = PhaseParams::default();
    let baseline = set_of(0.0);
    let mut phase = Phase::Steady;
    for _ in 0..100 {
        phase.advance(&params, &baseline, || baseline.clone());
        assert_eq!(phase, Phase::Steady);
    }
}
