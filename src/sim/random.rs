//! Random target lifetimes

use rand::Rng;

/// Draw a lifetime uniformly from `[min, max]`.
///
/// A degenerate or inverted range yields `min`; the result never leaves the
/// range.
pub fn draw_duration<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max).clamp(min, max)
}
