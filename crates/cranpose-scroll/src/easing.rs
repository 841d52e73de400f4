//! Easing curve for animated scroll offsets.

/// Ease-out curve used by scroll animations.
///
/// * `t` - elapsed time, in `[0, d]`
/// * `b` - start value
/// * `c` - total change in value
/// * `d` - duration, must be non-zero
///
/// Despite the name the curve is built from squared terms: a quadratic
/// ease-in over the first half of the duration and a mirrored ease-out over
/// the second half. Existing scroll animations are tuned against this exact
/// shape, so it must not be swapped for a true quartic.
#[inline]
pub fn ease_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}
