pub use kurbo::{Point, Vec2};

/// 0-based frame index within the engine's run.
///
/// The engine is frame-driven: all progress accumulators advance by fixed
/// per-tick increments, so a `FrameIndex` is the only clock there is.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Width as `f64`, for geometry math.
    pub fn width_f(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`, for geometry math.
    pub fn height_f(self) -> f64 {
        f64::from(self.height)
    }
}

/// Per-tick input read once at the start of a frame.
///
/// The pointer is expected in normalized `[-1, 1]` coordinates (the embedder
/// owns the pixel-to-normalized mapping). Passing input by value gives the
/// "last pointer position wins, applied atomically per frame" consistency
/// model without any shared state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    /// Normalized pointer offset from canvas center, each axis in `[-1, 1]`.
    pub pointer: Vec2,
    /// True when the user asked for a manual segment advance this frame.
    pub advance_requested: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            advance_requested: false,
        }
    }
}
