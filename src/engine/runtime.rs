use crate::{
    animation::phase::Phase,
    curve::{generator::CurveGenerator, shape::CurveShape},
    foundation::core::{Canvas, FrameIndex, FrameInput},
    foundation::error::DriftlineResult,
    foundation::math::Rng64,
    geometry::path::{CURVE_COUNT, PathSet},
    scene::model::Scene,
    text::cycler::SegmentCycler,
    text::letters::{LetterAssignment, LetterInstance, layout_curve, pushed_line},
};

/// Everything the embedder needs to draw one frame.
///
/// The engine computes letter positions and opacities; rasterizing glyphs
/// (and optionally dotting the guide paths) is the embedder's concern.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameSnapshot {
    /// The frame this snapshot was computed for.
    pub frame: FrameIndex,
    /// Visible letters per curve, already faded and culled.
    pub letters: Vec<Vec<LetterInstance>>,
    /// The fixed-position preview line (push substitution at line scale).
    pub preview: String,
    /// The displayed curves, for guide-dot rendering.
    pub paths: PathSet,
    /// First line index of the active poem window.
    pub segment_start: usize,
}

/// One animation instance driving one canvas.
///
/// The engine owns all animation state explicitly (curves, phase machine,
/// segment cycler, letter assignments, RNG) and mutates it only inside
/// [`Engine::tick`], which the embedder calls once per animation frame.
/// There is no hidden shared state and nothing asynchronous: a tick
/// completes synchronously, and progress increments are fixed per call, so
/// animation speed follows the host frame rate by design.
#[derive(Debug)]
pub struct Engine {
    scene: Scene,
    shape: Box<dyn CurveShape>,
    generator: CurveGenerator,
    rng: Rng64,
    frame: u64,
    baseline: PathSet,
    displayed: PathSet,
    phase: Phase,
    cycler: SegmentCycler,
    letters: Vec<LetterAssignment>,
}

impl Engine {
    /// Build an engine over a validated scene.
    ///
    /// The initial curves are generated in non-dramatic mode at frame time
    /// zero, so two engines built from identical scenes start, and stay,
    /// in identical states for identical inputs.
    pub fn new(scene: Scene) -> DriftlineResult<Self> {
        scene.validate()?;
        let mut rng = Rng64::new(scene.seed);
        let shape = scene.shape.build(&mut rng);
        let generator = CurveGenerator::new(scene.wave.clone());
        let cycler = SegmentCycler::new(scene.poem.len(), scene.cycle)?;

        let baseline = generator.generate(
            shape.as_ref(),
            scene.canvas,
            0.0,
            kurbo::Vec2::ZERO,
            false,
        );
        let letters = assignments_for(&scene.poem, &cycler);

        Ok(Self {
            displayed: baseline.clone(),
            baseline,
            scene,
            shape,
            generator,
            rng,
            frame: 0,
            phase: Phase::Steady,
            cycler,
            letters,
        })
    }

    /// Advance one animation frame and return what to draw.
    #[tracing::instrument(skip(self, input), fields(frame = self.frame))]
    pub fn tick(&mut self, input: FrameInput) -> FrameSnapshot {
        let frame = self.frame;
        if input.advance_requested {
            self.cycler.request_advance(frame);
        }

        let event = self.cycler.update(frame);
        if event.began {
            self.begin_transition(input);
        }
        if event.completed {
            self.complete_transition();
        }

        let canvas = self.scene.canvas;
        let frame_time = self.frame_time();
        let generator = &self.generator;
        let baseline = &self.baseline;
        self.displayed = self.phase.advance(&self.scene.phase, baseline, || {
            generator.deviate(baseline, canvas, frame_time, input.pointer)
        });

        let snapshot = self.snapshot();
        self.frame += 1;
        snapshot
    }

    /// Apply a canvas resize: an immediate, non-animated reset.
    ///
    /// A fresh non-dramatic path set is generated at the new dimensions and
    /// the letter assignments are rebuilt for the active segment; any
    /// in-flight morph is abandoned rather than replayed at the new size.
    pub fn resize(&mut self, canvas: Canvas) {
        tracing::debug!(width = canvas.width, height = canvas.height, "canvas resized");
        self.scene.canvas = canvas;
        self.baseline = self.generator.generate(
            self.shape.as_ref(),
            canvas,
            self.frame_time(),
            kurbo::Vec2::ZERO,
            false,
        );
        self.displayed = self.baseline.clone();
        self.phase = Phase::Steady;
        self.letters = assignments_for(&self.scene.poem, &self.cycler);
    }

    /// The curves currently being displayed.
    pub fn displayed_paths(&self) -> &PathSet {
        &self.displayed
    }

    /// First line index of the active poem window.
    pub fn segment_start(&self) -> usize {
        self.cycler.segment_start()
    }

    /// Borrow the scene this engine was built from.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn frame_time(&self) -> f64 {
        self.frame as f64 * self.scene.wave.time_scale
    }

    fn begin_transition(&mut self, input: FrameInput) {
        tracing::debug!("transition began, generating dramatic target");
        self.shape.reshuffle(&mut self.rng);
        let target = self.generator.generate(
            self.shape.as_ref(),
            self.scene.canvas,
            self.frame_time(),
            input.pointer,
            true,
        );
        self.phase = Phase::Morphing {
            progress: 0.0,
            from: self.displayed.clone(),
            target,
        };
    }

    fn complete_transition(&mut self) {
        if let Phase::Morphing { target, .. } = std::mem::replace(&mut self.phase, Phase::Steady) {
            self.baseline = target;
        }
        self.phase = Phase::Blending { progress: 0.0 };
        self.letters = assignments_for(&self.scene.poem, &self.cycler);
    }

    fn snapshot(&self) -> FrameSnapshot {
        let progress = self.cycler.transition_progress();
        let letters = (0..CURVE_COUNT)
            .map(|curve| {
                layout_curve(
                    self.displayed.curve(curve),
                    &self.letters[curve],
                    curve,
                    self.frame,
                    progress,
                    &self.scene.stream,
                )
            })
            .collect();

        let current_line = &self.scene.poem[self.cycler.window()[0]];
        let next_line = &self.scene.poem[self.cycler.next_start()];
        FrameSnapshot {
            frame: FrameIndex(self.frame),
            letters,
            preview: pushed_line(current_line, next_line, progress),
            paths: self.displayed.clone(),
            segment_start: self.cycler.segment_start(),
        }
    }
}

fn assignments_for(poem: &[String], cycler: &SegmentCycler) -> Vec<LetterAssignment> {
    let assignment =
        LetterAssignment::from_windows(poem, cycler.segment_start(), cycler.next_start());
    vec![assignment; CURVE_COUNT]
}

#[cfg(test)]
#[path = "../../tests/unit/engine/runtime.rs"]
mod tests;
