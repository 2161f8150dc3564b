use crate::{
    animation::phase::PhaseParams,
    curve::generator::WaveParams,
    curve::shape::ShapeKind,
    foundation::core::Canvas,
    foundation::error::{DriftlineError, DriftlineResult},
    text::cycler::CycleParams,
    text::letters::StreamParams,
};

fn default_canvas() -> Canvas {
    Canvas {
        width: 800,
        height: 800,
    }
}

/// A complete scene description.
///
/// A scene is a pure data model: canvas dimensions, the ordered poem lines,
/// a determinism seed, the curve-shape family, and tuning tables. Every
/// field beyond the poem has a sensible default, so a minimal JSON scene is
/// just `{"poem": ["...", ...]}`. Driving a scene is performed by
/// [`crate::Engine`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Canvas dimensions in pixels.
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    /// Ordered poem lines; windows of three stream along the curves.
    pub poem: Vec<String>,
    /// Global deterministic seed for randomized curve shapes.
    #[serde(default)]
    pub seed: u64,
    /// Curve-shape family.
    #[serde(default)]
    pub shape: ShapeKind,
    /// Segment-cycling timing.
    #[serde(default)]
    pub cycle: CycleParams,
    /// Morph/blend phase pacing.
    #[serde(default)]
    pub phase: PhaseParams,
    /// Curve motion tuning.
    #[serde(default)]
    pub wave: WaveParams,
    /// Letter-stream tuning.
    #[serde(default)]
    pub stream: StreamParams,
}

impl Scene {
    /// Build a scene from poem lines with every tuning field at its default.
    pub fn with_poem(poem: Vec<String>) -> Self {
        Self {
            canvas: default_canvas(),
            poem,
            seed: 0,
            shape: ShapeKind::default(),
            cycle: CycleParams::default(),
            phase: PhaseParams::default(),
            wave: WaveParams::default(),
            stream: StreamParams::default(),
        }
    }

    /// Validate the scene before an engine is built over it.
    pub fn validate(&self) -> DriftlineResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(DriftlineError::validation("canvas must be non-zero"));
        }
        if self.poem.is_empty() {
            return Err(DriftlineError::validation("poem must have at least one line"));
        }
        if !(self.cycle.transition_step > 0.0 && self.cycle.transition_step <= 1.0) {
            return Err(DriftlineError::validation(
                "cycle.transition_step must be in (0, 1]",
            ));
        }
        if !(self.phase.morph_step > 0.0 && self.phase.morph_step <= 1.0) {
            return Err(DriftlineError::validation(
                "phase.morph_step must be in (0, 1]",
            ));
        }
        if !(self.phase.blend_step > 0.0 && self.phase.blend_step <= 1.0) {
            return Err(DriftlineError::validation(
                "phase.blend_step must be in (0, 1]",
            ));
        }
        if self.cycle.dwell_frames == 0 {
            return Err(DriftlineError::validation("cycle.dwell_frames must be > 0"));
        }
        if !(0.0..=0.5).contains(&self.stream.fade_zone) {
            return Err(DriftlineError::validation(
                "stream.fade_zone must be in [0, 0.5]",
            ));
        }
        if !(0.0..=1.0).contains(&self.stream.opacity_floor) {
            return Err(DriftlineError::validation(
                "stream.opacity_floor must be in [0, 1]",
            ));
        }

        let finite = [
            self.wave.wave_amp,
            self.wave.pointer_lift,
            self.wave.dramatic_gain,
            self.wave.drift_amp,
            self.wave.drift_freq,
            self.wave.time_scale,
            self.stream.scroll_speed,
        ]
        .into_iter()
        .chain(self.wave.wave_freq)
        .chain(self.wave.wave_phase)
        .chain(self.wave.pointer_weight)
        .all(f64::is_finite);
        if !finite {
            return Err(DriftlineError::validation("motion tuning must be finite"));
        }
        Ok(())
    }

    /// Deserialize a scene from JSON and validate it.
    pub fn from_json_str(json: &str) -> DriftlineResult<Self> {
        let scene: Self =
            serde_json::from_str(json).map_err(|e| DriftlineError::serde(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene to pretty JSON.
    pub fn to_json_string(&self) -> DriftlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DriftlineError::serde(e.to_string()))
    }
}
