//! Driftline is a generative curve-and-letter animation engine.
//!
//! Three organic curves span a canvas top to bottom; poem text streams
//! along them at uniform arc-length spacing, and timed segment transitions
//! morph the curves through an explicit three-phase state machine while new
//! text pushes the old off the curves.
//!
//! # Frame pipeline
//!
//! 1. **Cycle**: [`SegmentCycler`] decides whether a poem-window transition
//!    begins or completes this frame
//! 2. **Generate**: [`CurveGenerator`] + a [`CurveShape`] strategy produce
//!    target [`PathSet`]s (always arc-length resampled via [`resample`])
//! 3. **Advance**: [`Phase`] interpolates morph, blend-in, or idle wavering
//! 4. **Layout**: letters are placed with scroll offset, push substitution,
//!    and edge fading into a [`FrameSnapshot`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a [`Scene`] seed plus an input sequence
//!   fully determine every frame.
//! - **Renderer-agnostic**: the engine computes positions and opacities;
//!   it never draws.
//! - **Frame-driven**: progress advances by fixed per-tick increments, no
//!   wall-clock reads.
//!
//! For a standalone walkthrough of the architecture, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod curve;
mod engine;
mod foundation;
mod geometry;
mod scene;
mod text;

/// High-level, standalone documentation for Driftline's concepts.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::phase::{Phase, PhaseParams, morph_mix};
pub use curve::generator::{CurveGenerator, WaveParams};
pub use curve::shape::{BandShape, ControlPointShape, CurveShape, ShapeKind};
pub use engine::runtime::{Engine, FrameSnapshot};
pub use foundation::core::{Canvas, FrameIndex, FrameInput, Point, Vec2};
pub use foundation::error::{DriftlineError, DriftlineResult};
pub use foundation::math::Rng64;
pub use geometry::path::{CURVE_COUNT, PATH_SAMPLES, PathSet};
pub use geometry::resample::resample;
pub use scene::model::Scene;
pub use text::cycler::{CycleEvent, CycleParams, SEGMENT_LINES, SegmentCycler};
pub use text::letters::{
    LetterAssignment, LetterInstance, StreamParams, edge_fade, layout_curve, pushed_line,
};
