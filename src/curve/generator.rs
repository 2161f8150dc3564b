use kurbo::{Point, Vec2};

use crate::curve::shape::CurveShape;
use crate::foundation::{core::Canvas, math::arch};
use crate::geometry::{
    path::{CURVE_COUNT, PATH_SAMPLES, PathSet},
    resample::resample,
};

/// Raw `t` steps per curve before resampling (`t` advances by `1/100`).
const RAW_STEPS: usize = 100;

fn default_wave_amp() -> f64 {
    0.045
}

fn default_wave_freq() -> [f64; CURVE_COUNT] {
    [0.9, 1.3, 1.7]
}

fn default_wave_phase() -> [f64; CURVE_COUNT] {
    [0.0, 2.1, 4.2]
}

fn default_pointer_weight() -> [f64; CURVE_COUNT] {
    [0.12, 0.09, 0.15]
}

fn default_pointer_lift() -> f64 {
    0.03
}

fn default_dramatic_gain() -> f64 {
    1.75
}

fn default_drift_amp() -> f64 {
    0.18
}

fn default_drift_freq() -> f64 {
    0.23
}

fn default_time_scale() -> f64 {
    0.016
}

/// Motion tuning for curve synthesis.
///
/// Amplitudes are fractions of the canvas dimension they displace along;
/// frequencies are radians per frame-time unit. Per-curve arrays
/// deliberately hold distinct values so the three curves desynchronize.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveParams {
    /// Wave amplitude, fraction of canvas width.
    #[serde(default = "default_wave_amp")]
    pub wave_amp: f64,
    /// Per-curve wave frequency.
    #[serde(default = "default_wave_freq")]
    pub wave_freq: [f64; CURVE_COUNT],
    /// Per-curve wave phase offset.
    #[serde(default = "default_wave_phase")]
    pub wave_phase: [f64; CURVE_COUNT],
    /// Per-curve horizontal pointer influence, fraction of canvas width.
    #[serde(default = "default_pointer_weight")]
    pub pointer_weight: [f64; CURVE_COUNT],
    /// Vertical pointer influence, fraction of canvas height.
    #[serde(default = "default_pointer_lift")]
    pub pointer_lift: f64,
    /// Amplitude multiplier applied in dramatic mode.
    #[serde(default = "default_dramatic_gain")]
    pub dramatic_gain: f64,
    /// Dramatic-mode horizontal shift amplitude, fraction of canvas width.
    #[serde(default = "default_drift_amp")]
    pub drift_amp: f64,
    /// Frequency of the slow dramatic-mode shift.
    #[serde(default = "default_drift_freq")]
    pub drift_freq: f64,
    /// Frame-counter-to-frame-time conversion factor.
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_amp: default_wave_amp(),
            wave_freq: default_wave_freq(),
            wave_phase: default_wave_phase(),
            pointer_weight: default_pointer_weight(),
            pointer_lift: default_pointer_lift(),
            dramatic_gain: default_dramatic_gain(),
            drift_amp: default_drift_amp(),
            drift_freq: default_drift_freq(),
            time_scale: default_time_scale(),
        }
    }
}

/// Procedural generator for the three-curve [`PathSet`].
///
/// Every curve spans the canvas vertically with a 5% margin at each end and
/// deviates horizontally by a pluggable [`CurveShape`] plus wave, pointer,
/// and (in dramatic mode) slow-drift terms. All displacement terms are
/// weighted by the `sin(t * PI)` envelope so the endpoints stay anchored
/// while the middle sways, which is what lets letters emerge from nothing
/// at the top fade zone and vanish into the bottom one.
#[derive(Clone, Debug)]
pub struct CurveGenerator {
    params: WaveParams,
}

impl CurveGenerator {
    /// Build a generator from motion tuning.
    pub fn new(params: WaveParams) -> Self {
        Self { params }
    }

    /// Borrow the motion tuning.
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Generate a fresh path set.
    ///
    /// `pointer` is the normalized `[-1, 1]` pointer offset. In dramatic
    /// mode amplitudes grow by `dramatic_gain` and a slow per-curve
    /// horizontal drift is added, producing the visibly different target
    /// shapes segment transitions morph toward. Every curve is resampled to
    /// [`PATH_SAMPLES`] points before being returned.
    pub fn generate(
        &self,
        shape: &dyn CurveShape,
        canvas: Canvas,
        frame_time: f64,
        pointer: Vec2,
        dramatic: bool,
    ) -> PathSet {
        let p = &self.params;
        let w = canvas.width_f();
        let h = canvas.height_f();
        let gain = if dramatic { p.dramatic_gain } else { 1.0 };
        if dramatic {
            tracing::trace!(frame_time, "generating dramatic target path set");
        }

        let mut set = PathSet::default();
        for (curve, slot) in set.curves.iter_mut().enumerate() {
            let wave = (frame_time * p.wave_freq[curve] + p.wave_phase[curve]).sin()
                * p.wave_amp
                * w
                * gain;
            let drift = if dramatic {
                let slow = frame_time * p.drift_freq;
                ((slow + curve as f64 * 1.7).sin() + 0.5 * (slow * 0.6 + curve as f64).cos())
                    * p.drift_amp
                    * w
            } else {
                0.0
            };
            let sway = pointer.x * p.pointer_weight[curve] * w;
            let lift = pointer.y * p.pointer_lift * h;

            let mut raw = Vec::with_capacity(RAW_STEPS + 1);
            for i in 0..=RAW_STEPS {
                let t = i as f64 / RAW_STEPS as f64;
                let env = arch(t);
                let x = w * 0.5 + shape.center_offset(t, curve, canvas) + (wave + drift + sway) * env;
                let y = h * (0.05 + 0.9 * t) + lift * env;
                raw.push(Point::new(x, y));
            }
            *slot = resample(&raw, PATH_SAMPLES);
        }
        set
    }

    /// Displace a baseline by the non-dramatic wave and pointer terms.
    ///
    /// This is the wavering deviation used by the blending and steady
    /// phases: the baseline is not regenerated, only pushed sideways, so the
    /// settled silhouette persists underneath the idle motion.
    pub fn deviate(
        &self,
        baseline: &PathSet,
        canvas: Canvas,
        frame_time: f64,
        pointer: Vec2,
    ) -> PathSet {
        let p = &self.params;
        let w = canvas.width_f();
        let h = canvas.height_f();

        let mut out = baseline.clone();
        for (curve, points) in out.curves.iter_mut().enumerate() {
            let n = points.len();
            if n < 2 {
                continue;
            }
            let wave = (frame_time * p.wave_freq[curve] + p.wave_phase[curve]).sin()
                * p.wave_amp
                * w;
            let sway = pointer.x * p.pointer_weight[curve] * w;
            let lift = pointer.y * p.pointer_lift * h;
            for (i, point) in points.iter_mut().enumerate() {
                let env = arch(i as f64 / (n - 1) as f64);
                point.x += (wave + sway) * env;
                point.y += lift * env;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/generator.rs"]
mod tests;
