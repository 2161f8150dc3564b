use crate::foundation::error::{DriftlineError, DriftlineResult};

/// Lines per poem segment (one 3-line window per scene).
pub const SEGMENT_LINES: usize = 3;

/// Completion guard against accumulated float error in the progress sum.
const PROGRESS_EPSILON: f64 = 1e-9;

fn default_dwell_frames() -> u64 {
    600
}

fn default_debounce_frames() -> u64 {
    30
}

fn default_transition_step() -> f64 {
    0.01
}

/// Timing for segment cycling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CycleParams {
    /// Frames a segment stays before the next automatic transition
    /// (600 is ten seconds at 60fps).
    #[serde(default = "default_dwell_frames")]
    pub dwell_frames: u64,
    /// Minimum frames between accepted manual triggers.
    #[serde(default = "default_debounce_frames")]
    pub debounce_frames: u64,
    /// Added to transition progress each tick.
    #[serde(default = "default_transition_step")]
    pub transition_step: f64,
}

impl Default for CycleParams {
    fn default() -> Self {
        Self {
            dwell_frames: default_dwell_frames(),
            debounce_frames: default_debounce_frames(),
            transition_step: default_transition_step(),
        }
    }
}

/// What one cycler tick reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleEvent {
    /// A transition began this tick.
    pub began: bool,
    /// A transition completed this tick (the window advanced).
    pub completed: bool,
}

/// Tracks which 3-line poem window is active and drives transitions.
///
/// At most one transition is in flight at a time: a trigger that lands while
/// one is running is dropped, not queued. Completion re-schedules the next
/// automatic change `dwell_frames` out, overwriting any forced change frame
/// set mid-flight.
#[derive(Clone, Debug)]
pub struct SegmentCycler {
    params: CycleParams,
    line_count: usize,
    segment_start: usize,
    next_change_frame: u64,
    last_manual_frame: Option<u64>,
    progress: Option<f64>,
}

impl SegmentCycler {
    /// Build a cycler over a poem of `line_count` lines. The first automatic
    /// transition is scheduled one dwell period out.
    pub fn new(line_count: usize, params: CycleParams) -> DriftlineResult<Self> {
        if line_count == 0 {
            return Err(DriftlineError::validation("poem must have at least one line"));
        }
        Ok(Self {
            next_change_frame: params.dwell_frames,
            params,
            line_count,
            segment_start: 0,
            last_manual_frame: None,
            progress: None,
        })
    }

    /// First line index of the active window.
    pub fn segment_start(&self) -> usize {
        self.segment_start
    }

    /// First line index of the upcoming window.
    pub fn next_start(&self) -> usize {
        (self.segment_start + SEGMENT_LINES) % self.line_count
    }

    /// Line indices of the active window, wrapping modulo the poem length.
    pub fn window(&self) -> [usize; SEGMENT_LINES] {
        std::array::from_fn(|k| (self.segment_start + k) % self.line_count)
    }

    /// Text-transition progress, 0 while idle.
    pub fn transition_progress(&self) -> f64 {
        self.progress.unwrap_or(0.0)
    }

    /// True while a transition is in flight.
    pub fn in_transition(&self) -> bool {
        self.progress.is_some()
    }

    /// Request a manual segment advance at `frame`.
    ///
    /// Accepted only when at least `debounce_frames` have elapsed since the
    /// last accepted request; returns whether it was accepted. An accepted
    /// request forces the next automatic change to `frame`, so the advance
    /// begins on the following [`SegmentCycler::update`] unless a transition
    /// is already running.
    pub fn request_advance(&mut self, frame: u64) -> bool {
        let accepted = self
            .last_manual_frame
            .is_none_or(|last| frame.saturating_sub(last) >= self.params.debounce_frames);
        if accepted {
            self.last_manual_frame = Some(frame);
            self.next_change_frame = frame;
        }
        accepted
    }

    /// Advance one tick.
    pub fn update(&mut self, frame: u64) -> CycleEvent {
        let mut event = CycleEvent::default();
        match self.progress {
            None => {
                if frame >= self.next_change_frame {
                    self.progress = Some(0.0);
                    event.began = true;
                }
            }
            Some(p) => {
                let p = p + self.params.transition_step;
                if p >= 1.0 - PROGRESS_EPSILON {
                    self.segment_start = (self.segment_start + SEGMENT_LINES) % self.line_count;
                    self.progress = None;
                    self.next_change_frame = frame + self.params.dwell_frames;
                    event.completed = true;
                    tracing::debug!(segment_start = self.segment_start, "segment advanced");
                } else {
                    self.progress = Some(p);
                }
            }
        }
        event
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/cycler.rs"]
mod tests;
