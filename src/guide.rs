//! # Driftline guide
//!
//! This module is a standalone walkthrough of Driftline's architecture and
//! public API: a shared mental model of what "a frame" means in this
//! codebase.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Scene`](crate::Scene): the declarative input (canvas, poem lines,
//!   seed, shape family, tuning tables)
//! - [`Engine`](crate::Engine): one animation instance owning all state,
//!   advanced one frame at a time
//! - [`PathSet`](crate::PathSet): the three concurrently animated curves of
//!   one scene, each resampled to a fixed point count
//! - [`CurveShape`](crate::CurveShape): the pluggable horizontal-deviation
//!   strategy that distinguishes shape families
//! - [`Phase`](crate::Phase): the explicit morph → blend → steady state
//!   machine
//! - [`FrameSnapshot`](crate::FrameSnapshot): positioned, faded letters plus
//!   the displayed curves; everything an embedder draws
//!
//! Each call to [`Engine::tick`](crate::Engine::tick) runs one frame:
//!
//! 1. **Cycle**: the segment cycler decides whether a poem-window
//!    transition begins or completes this frame
//! 2. **Generate**: a beginning transition snapshots the displayed curves
//!    and generates a dramatic target via
//!    [`CurveGenerator`](crate::CurveGenerator)
//! 3. **Advance**: the phase machine produces the curves to display
//!    (morph interpolation, blend-in, or idle wavering)
//! 4. **Layout**: poem characters are placed along the curves with a
//!    continuous scroll offset, push substitution, and edge fading
//!
//! ---
//!
//! ## Frame-driven time
//!
//! Nothing in the engine reads a wall clock. Progress accumulators advance
//! by fixed per-tick increments, so animation speed is tied to the host
//! frame rate, and a paused loop resumes exactly where it stopped. This is
//! a deliberate simplicity/portability tradeoff: the engine is fully
//! deterministic for a given scene and input sequence, which is also what
//! makes it unit-testable without a live canvas.
//!
//! ---
//!
//! ## Determinism and randomness
//!
//! Randomized curve shapes draw from a seedable SplitMix64 generator
//! ([`Rng64`](crate::Rng64)) owned by the engine and seeded from
//! [`Scene::seed`](crate::Scene::seed). There are no ambient random calls:
//! two engines built from identical scenes produce identical frames for
//! identical inputs.
//!
//! ---
//!
//! ## What Driftline does not do
//!
//! Driftline computes geometry and opacity; it never rasterizes. Glyph
//! drawing, color, guide-dot rendering, resize detection, and pointer
//! normalization all belong to the embedder, which keeps the engine
//! portable across rendering surfaces.
