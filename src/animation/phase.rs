use crate::{animation::ease::Ease, geometry::path::PathSet};

fn default_morph_step() -> f64 {
    0.005
}

fn default_blend_step() -> f64 {
    0.015
}

/// Per-tick progress increments for the morph and blend phases.
///
/// Increments are fixed per call, not wall-clock scaled: effective animation
/// speed is tied to frame rate, and a paused frame loop simply resumes where
/// it left off.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseParams {
    /// Added to morph progress each tick.
    #[serde(default = "default_morph_step")]
    pub morph_step: f64,
    /// Added to blend progress each tick.
    #[serde(default = "default_blend_step")]
    pub blend_step: f64,
}

impl Default for PhaseParams {
    fn default() -> Self {
        Self {
            morph_step: default_morph_step(),
            blend_step: default_blend_step(),
        }
    }
}

/// The curve animation's three mutually exclusive phases.
///
/// - [`Phase::Morphing`]: eased interpolation from a snapshot of the curves
///   toward a freshly generated dramatic target.
/// - [`Phase::Blending`]: eased cross-fade from the frozen post-morph
///   baseline into continuous wavering.
/// - [`Phase::Steady`]: continuous idle wavering around the baseline; never
///   terminates on its own.
///
/// Progress accumulators never regress: `Morphing.progress` restarts at 0
/// only when a new target is generated (a new `Morphing` value is built),
/// and `Blending.progress` restarts at 0 only on entry after a completed
/// segment transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// Interpolating from `from` toward `target`.
    Morphing {
        /// Morph progress in `[0, 1]`.
        progress: f64,
        /// Snapshot of the displayed curves when the transition began.
        from: PathSet,
        /// Freshly generated destination shape.
        target: PathSet,
    },
    /// Cross-fading the settled baseline into wavering motion.
    Blending {
        /// Blend progress in `[0, 1]`.
        progress: f64,
    },
    /// Idle wavering around the baseline.
    Steady,
}

impl Phase {
    /// Advance one tick and return the curve set to display this frame.
    ///
    /// `wavering` lazily produces the baseline displaced by the current
    /// non-dramatic wave and pointer terms; it is only invoked by the
    /// blending and steady phases.
    pub fn advance(
        &mut self,
        params: &PhaseParams,
        baseline: &PathSet,
        wavering: impl FnOnce() -> PathSet,
    ) -> PathSet {
        match self {
            Self::Morphing {
                progress,
                from,
                target,
            } => {
                *progress = (*progress + params.morph_step).min(1.0);
                morph_mix(from, target, Ease::InOutSine.apply(*progress))
            }
            Self::Blending { progress } => {
                *progress = (*progress + params.blend_step).min(1.0);
                let done = *progress >= 1.0;
                let shown = morph_mix(baseline, &wavering(), Ease::InOutSine.apply(*progress));
                if done {
                    tracing::debug!("blend complete, entering steady wavering");
                    *self = Self::Steady;
                }
                shown
            }
            Self::Steady => wavering(),
        }
    }

    /// True while a morph is in flight.
    pub fn is_morphing(&self) -> bool {
        matches!(self, Self::Morphing { .. })
    }
}

/// Point-by-point interpolation between two path sets at eased progress `t`.
///
/// Each output curve takes the minimum of the two input lengths, which
/// guards against accidental shape mismatches; `t` outside `[0, 1]` is
/// clamped.
pub fn morph_mix(a: &PathSet, b: &PathSet, t: f64) -> PathSet {
    let t = t.clamp(0.0, 1.0);
    let mut out = PathSet::default();
    for (slot, (ca, cb)) in out.curves.iter_mut().zip(a.curves.iter().zip(&b.curves)) {
        let n = ca.len().min(cb.len());
        *slot = (0..n).map(|i| ca[i].lerp(cb[i], t)).collect();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
