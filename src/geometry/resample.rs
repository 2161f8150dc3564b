use kurbo::Point;

/// Redistribute a polyline's points at uniform arc-length spacing.
///
/// Computes the cumulative Euclidean arc length of `path`, divides the total
/// into `target_count - 1` equal segments, and linearly interpolates a point
/// at each segment boundary. The first and last output points coincide with
/// the input endpoints, and floating-point overshoot past the final cumulative
/// distance clamps to the last point.
///
/// Degenerate inputs short-circuit: fewer than two input points or a
/// `target_count` below two returns the input unchanged, and a path whose
/// total length is zero (all points coincident) returns `target_count`
/// copies of the first point. Zero-length interior edges are stepped over
/// without dividing by them.
pub fn resample(path: &[Point], target_count: usize) -> Vec<Point> {
    if path.len() < 2 || target_count < 2 {
        return path.to_vec();
    }

    let mut cum = Vec::with_capacity(path.len());
    cum.push(0.0f64);
    let mut total = 0.0f64;
    for pair in path.windows(2) {
        total += pair[0].distance(pair[1]);
        cum.push(total);
    }

    if total <= 0.0 {
        return vec![path[0]; target_count];
    }

    let segment = total / (target_count - 1) as f64;
    let mut out = Vec::with_capacity(target_count);
    let mut cursor = 0usize;
    for i in 0..target_count {
        let d = i as f64 * segment;
        while cursor + 2 < path.len() && cum[cursor + 1] < d {
            cursor += 1;
        }
        let span = cum[cursor + 1] - cum[cursor];
        let t = if span <= f64::EPSILON {
            0.0
        } else {
            ((d - cum[cursor]) / span).clamp(0.0, 1.0)
        };
        out.push(path[cursor].lerp(path[cursor + 1], t));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resample.rs"]
mod tests;
