use crate::foundation::{core::Canvas, math::Rng64};
use crate::geometry::path::CURVE_COUNT;

/// Breakpoints per curve in a shape table (20%-wide `t` bands).
const BREAKPOINTS: usize = 6;

/// Horizontal deviation strategy for one family of curve shapes.
///
/// The generator builds every curve as a vertical centerline plus a
/// `center_offset(t, curve, canvas)` horizontal deviation; shape families
/// differ only in this one function, which is what lets the two historical
/// variants (fixed bands vs. randomized control points) share the entire
/// engine.
///
/// Implementations return an offset in pixels and are expected to be
/// anchored, approximately zero at `t = 0` and `t = 1`, so curve ends stay
/// pinned to the canvas margins.
pub trait CurveShape: std::fmt::Debug {
    /// Horizontal deviation from the canvas centerline at `t` in `[0, 1]`.
    fn center_offset(&self, t: f64, curve: usize, canvas: Canvas) -> f64;

    /// Re-roll any randomized internals before a dramatic target is
    /// generated. Fixed shapes ignore this.
    fn reshuffle(&mut self, _rng: &mut Rng64) {}
}

/// Smoothly interpolate a breakpoint table at `t` with half-cosine joins.
///
/// Breakpoints are spaced evenly over `[0, 1]`; between two neighbors the
/// value follows `0.5 - 0.5 * cos(local * PI)`, so bands meet with zero
/// slope and the piecewise shape reads as one continuous curve.
fn piecewise_cosine(values: &[f64], t: f64) -> f64 {
    match values.len() {
        0 => return 0.0,
        1 => return values[0],
        _ => {}
    }
    let pos = t.clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let k = (pos.floor() as usize).min(values.len() - 2);
    let local = pos - k as f64;
    let eased = 0.5 - 0.5 * (local * std::f64::consts::PI).cos();
    values[k] + (values[k + 1] - values[k]) * eased
}

/// Fixed piecewise-band shape (the "hourglass" family).
///
/// Each curve carries a constant table of horizontal offsets, one per 20%
/// band of `t`, expressed as fractions of the canvas width. The three
/// tables pinch toward the center mid-canvas and flare at the quarter
/// points, giving the set its waisted silhouette.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BandShape;

impl BandShape {
    const TABLES: [[f64; BREAKPOINTS]; CURVE_COUNT] = [
        [0.0, 0.17, 0.05, -0.12, 0.10, 0.0],
        [0.0, -0.14, 0.04, 0.13, -0.09, 0.0],
        [0.0, 0.07, -0.16, 0.03, 0.12, 0.0],
    ];
}

impl CurveShape for BandShape {
    fn center_offset(&self, t: f64, curve: usize, canvas: Canvas) -> f64 {
        piecewise_cosine(&Self::TABLES[curve % CURVE_COUNT], t) * canvas.width_f()
    }
}

/// Seeded randomized control-point shape (the "alphabet" family).
///
/// Each curve holds a table of breakpoint offsets drawn from the engine's
/// seeded RNG, anchored to zero at both ends. [`CurveShape::reshuffle`]
/// re-rolls the interior breakpoints, so every dramatic transition lands on
/// a fresh silhouette while staying reproducible for a given scene seed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPointShape {
    amplitude: f64,
    tables: [[f64; BREAKPOINTS]; CURVE_COUNT],
}

impl ControlPointShape {
    /// Build a shape with interior breakpoints in `[-amplitude, amplitude]`
    /// (fractions of canvas width), drawn from `rng`.
    pub fn seeded(amplitude: f64, rng: &mut Rng64) -> Self {
        let mut shape = Self {
            amplitude,
            tables: [[0.0; BREAKPOINTS]; CURVE_COUNT],
        };
        shape.reroll(rng);
        shape
    }

    fn reroll(&mut self, rng: &mut Rng64) {
        for table in &mut self.tables {
            for (i, v) in table.iter_mut().enumerate() {
                *v = if i == 0 || i == BREAKPOINTS - 1 {
                    0.0
                } else {
                    rng.next_f64_signed() * self.amplitude
                };
            }
        }
    }
}

impl CurveShape for ControlPointShape {
    fn center_offset(&self, t: f64, curve: usize, canvas: Canvas) -> f64 {
        piecewise_cosine(&self.tables[curve % CURVE_COUNT], t) * canvas.width_f()
    }

    fn reshuffle(&mut self, rng: &mut Rng64) {
        self.reroll(rng);
    }
}

fn default_amplitude() -> f64 {
    0.22
}

/// Declarative shape selection for a scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum ShapeKind {
    /// Fixed piecewise bands.
    Bands,
    /// Seeded randomized control-point tables.
    ControlPoints {
        /// Interior breakpoint range as a fraction of canvas width.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::ControlPoints {
            amplitude: default_amplitude(),
        }
    }
}

impl ShapeKind {
    /// Build the shape strategy this kind describes, drawing any randomized
    /// internals from `rng`.
    pub fn build(&self, rng: &mut Rng64) -> Box<dyn CurveShape> {
        match *self {
            Self::Bands => Box::new(BandShape),
            Self::ControlPoints { amplitude } => {
                Box::new(ControlPointShape::seeded(amplitude, rng))
            }
        }
    }
}
