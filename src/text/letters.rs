use kurbo::Point;

use crate::text::cycler::SEGMENT_LINES;

/// Every other resampled point carries a letter.
const LETTER_STRIDE: usize = 2;

/// Per-curve stagger added to the transition progress, so the three curves
/// cascade instead of switching text in unison.
const CURVE_STAGGER: f64 = 0.1;

fn default_scroll_speed() -> f64 {
    0.3
}

fn default_fade_zone() -> f64 {
    0.15
}

fn default_opacity_floor() -> f64 {
    10.0 / 255.0
}

/// Tuning for the letter stream.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StreamParams {
    /// Path samples advanced per frame by the scroll offset.
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f64,
    /// Normalized entrance/exit fade band at each end of a curve.
    #[serde(default = "default_fade_zone")]
    pub fade_zone: f64,
    /// Letters below this opacity are culled instead of drawn.
    #[serde(default = "default_opacity_floor")]
    pub opacity_floor: f64,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            scroll_speed: default_scroll_speed(),
            fade_zone: default_fade_zone(),
            opacity_floor: default_opacity_floor(),
        }
    }
}

/// The characters one curve streams: the active window and the upcoming one.
///
/// Both arrays are the whitespace-stripped characters of a 3-line poem
/// window. They are normalized to be non-empty (an all-whitespace window
/// yields a single space), so modulo indexing never needs a guard.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterAssignment {
    current: Vec<char>,
    next: Vec<char>,
}

impl LetterAssignment {
    /// Build the assignment for the windows starting at `start` and
    /// `next_start` (line indices wrap modulo the poem length).
    pub fn from_windows(poem: &[String], start: usize, next_start: usize) -> Self {
        Self {
            current: window_chars(poem, start),
            next: window_chars(poem, next_start),
        }
    }

    /// Characters of the active window.
    pub fn current(&self) -> &[char] {
        &self.current
    }

    /// Characters of the upcoming window.
    pub fn next(&self) -> &[char] {
        &self.next
    }

    /// The character shown at `letter_index` on `curve` while the text
    /// transition is at `progress`.
    ///
    /// New text pushes in from the front: with staggered speed
    /// `progress + curve * 0.1`, the first `floor(speed * next.len())`
    /// letter slots show the upcoming window and the rest show the active
    /// window displaced by that count. Indices wrap modulo the available
    /// characters, so text repeats cyclically along the curve rather than
    /// running out.
    pub fn letter_at(&self, letter_index: usize, curve: usize, progress: f64) -> char {
        if progress <= 0.0 {
            return self.current[letter_index % self.current.len()];
        }
        let speed = progress + curve as f64 * CURVE_STAGGER;
        let shown = (speed * self.next.len() as f64).floor() as usize;
        if letter_index < shown {
            self.next[letter_index % self.next.len()]
        } else {
            self.current[(letter_index - shown) % self.current.len()]
        }
    }
}

fn window_chars(poem: &[String], start: usize) -> Vec<char> {
    if poem.is_empty() {
        return vec![' '];
    }
    let mut chars: Vec<char> = (0..SEGMENT_LINES)
        .flat_map(|k| poem[(start + k) % poem.len()].chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    if chars.is_empty() {
        chars.push(' ');
    }
    chars
}

/// One positioned, faded letter ready for the embedder to draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterInstance {
    /// The character to draw.
    pub ch: char,
    /// Canvas position.
    pub pos: Point,
    /// Opacity in `[0, 1]` after edge fading.
    pub opacity: f64,
}

/// Lay out one curve's visible letters for one frame.
///
/// Letters sit on every other resampled point and share a continuous scroll
/// offset of `frame * scroll_speed` samples, wrapping modulo the path
/// length, which reads as text flowing down the curve. Each letter's
/// position interpolates linearly between its two bracketing path samples;
/// opacity fades linearly to zero inside the entrance and exit bands and
/// letters below the opacity floor are culled.
pub fn layout_curve(
    path: &[Point],
    assignment: &LetterAssignment,
    curve: usize,
    frame: u64,
    transition_progress: f64,
    params: &StreamParams,
) -> Vec<LetterInstance> {
    let n = path.len();
    if n < 2 {
        return Vec::new();
    }

    let scroll = frame as f64 * params.scroll_speed;
    let mut out = Vec::with_capacity(n / LETTER_STRIDE + 1);
    for i in (0..n).step_by(LETTER_STRIDE) {
        let at = (i as f64 + scroll) % n as f64;
        let u = at / n as f64;
        let opacity = edge_fade(u, params.fade_zone);
        if opacity < params.opacity_floor {
            continue;
        }

        let base = at.floor() as usize;
        let frac = at - base as f64;
        let pos = path[base % n].lerp(path[(base + 1) % n], frac);
        let ch = assignment.letter_at(i / LETTER_STRIDE, curve, transition_progress);
        out.push(LetterInstance { ch, pos, opacity });
    }
    out
}

/// Linear entrance/exit fade over normalized path position `u`.
pub fn edge_fade(u: f64, fade_zone: f64) -> f64 {
    if fade_zone <= 0.0 {
        return 1.0;
    }
    let u = u.clamp(0.0, 1.0);
    if u < fade_zone {
        u / fade_zone
    } else if u > 1.0 - fade_zone {
        (1.0 - u) / fade_zone
    } else {
        1.0
    }
}

/// Whole-line push substitution for the fixed-position preview text.
///
/// The same stagger-free push algorithm as [`LetterAssignment::letter_at`],
/// operating on a full line: at `progress`, the first
/// `floor(progress * next.len())` character slots come from `next` and the
/// remainder from `current` displaced rightward, with displaced characters
/// past the line's end dropped.
pub fn pushed_line(current: &str, next: &str, progress: f64) -> String {
    if progress <= 0.0 {
        return current.to_string();
    }
    let cur: Vec<char> = current.chars().collect();
    let nxt: Vec<char> = next.chars().collect();
    let shown = (progress.clamp(0.0, 1.0) * nxt.len() as f64).floor() as usize;

    let total = cur.len().max(shown);
    let mut out = String::with_capacity(total);
    for k in 0..total {
        if k < shown {
            out.push(nxt[k]);
        } else {
            out.push(cur[k - shown]);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/letters.rs"]
mod tests;
