//! Stepped easing helpers.
//!
//! `divide_scale` clips a progress value into the `i`-th of `n` equal windows
//! of `[0, 1]` and rescales that window back to `[0, 1]`, which is how the bar
//! renderer staggers its sub-animations.

use std::f32::consts::PI;

/// Reciprocal of a window count
#[inline]
pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Progress left over once the first `i` windows of `n` are consumed
#[inline]
pub fn max_scale(x: f32, i: usize, n: usize) -> f32 {
    (x - i as f32 * inverse(n)).max(0.0)
}

/// Progress within the `i`-th of `n` windows, rescaled to `[0, 1]`
#[inline]
pub fn divide_scale(x: f32, i: usize, n: usize) -> f32 {
    inverse(n).min(max_scale(x, i, n)) * n as f32
}

/// Out-and-back sine remap: 0 -> 0, 0.5 -> 1, 1 -> 0
#[inline]
pub fn sinify(x: f32) -> f32 {
    (x * PI).sin()
}
