use kurbo::Point;

/// Number of concurrently animated curves in one scene.
pub const CURVE_COUNT: usize = 3;

/// Canonical point count of a curve after resampling.
pub const PATH_SAMPLES: usize = 100;

/// The three concurrently animated curves comprising one scene.
///
/// Each curve is an ordered polyline from the top of the canvas to the
/// bottom. Curves are generated independently but share a common frame time
/// and pointer influence so their motions feel correlated. After generation
/// every curve holds exactly [`PATH_SAMPLES`] points spaced uniformly in arc
/// length, which is what makes a fixed letter-index-to-point-index mapping
/// produce visually even letter spacing while the shape moves.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathSet {
    /// Curves indexed `0..CURVE_COUNT`.
    pub curves: [Vec<Point>; CURVE_COUNT],
}

impl PathSet {
    /// Borrow one curve's points.
    pub fn curve(&self, index: usize) -> &[Point] {
        &self.curves[index]
    }

    /// True when every curve has at least two points.
    ///
    /// The letter layout skips curves that fail this (a degenerate frame,
    /// never a panic).
    pub fn is_renderable(&self) -> bool {
        self.curves.iter().all(|c| c.len() >= 2)
    }
}
