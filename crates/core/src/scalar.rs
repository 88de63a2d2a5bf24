//! Random perturbation primitives for a single bounded scalar channel.
//!
//! Every primitive computes a closed interval from the original value and its
//! parameters, then draws one uniform sample from it. The clamped variants
//! replace the unit interval with a caller-supplied `[lo, hi]`, which is how the
//! chroma-based models keep chroma and value/lightness/luma inside the gamut.
//!
//! Precondition violations (reversed ranges, negative deltas, proportions
//! outside their domain, NaN) are returned as [`ColorError`] rather than
//! producing a silently degenerate interval.

use crate::error::ColorError;
use crate::random::RandomSource;

/// Clamps `x` to `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation `a + (b - a) * t`.
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Draws from `[lo, hi]`, refusing an inverted interval.
fn sample<R: RandomSource + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> Result<f64, ColorError> {
    // `!(lo <= hi)` also rejects NaN bounds.
    if !(lo <= hi) {
        return Err(ColorError::InvertedInterval { lo, hi });
    }
    Ok(rng.range_closed(lo, hi))
}

fn check_bounds(lo: f64, hi: f64) -> Result<(), ColorError> {
    ColorError::check_finite("lo", lo)?;
    ColorError::check_finite("hi", hi)?;
    if lo > hi {
        return Err(ColorError::InvertedInterval { lo, hi });
    }
    Ok(())
}

fn check_delta(max_abs_delta: f64) -> Result<f64, ColorError> {
    let d = ColorError::check_finite("delta", max_abs_delta)?;
    if d < 0.0 {
        return Err(ColorError::NegativeDelta(d));
    }
    Ok(d)
}

fn check_delta_range(min_delta: f64, max_delta: f64) -> Result<(), ColorError> {
    ColorError::check_finite("min delta", min_delta)?;
    ColorError::check_finite("max delta", max_delta)?;
    if min_delta > max_delta {
        return Err(ColorError::InvalidDelta {
            min: min_delta,
            max: max_delta,
        });
    }
    Ok(())
}

pub(crate) fn check_proportion(p: f64, min: f64, max: f64) -> Result<f64, ColorError> {
    let p = ColorError::check_finite("proportion", p)?;
    if p < min || p > max {
        return Err(ColorError::ProportionOutOfRange { value: p, min, max });
    }
    Ok(p)
}

pub(crate) fn check_proportion_range(min_p: f64, max_p: f64) -> Result<(), ColorError> {
    check_proportion(min_p, -1.0, 1.0)?;
    check_proportion(max_p, -1.0, 1.0)?;
    if min_p > max_p {
        return Err(ColorError::InvertedRange {
            min: min_p,
            max: max_p,
        });
    }
    Ok(())
}

/// Moves `original` a proportion `p` of the way toward 0 (negative `p`) or
/// toward 1 (positive `p`).
fn spread_bound(original: f64, p: f64) -> f64 {
    if p < 0.0 {
        original * (1.0 + p)
    } else {
        original + (1.0 - original) * p
    }
}

// -- Shift --

/// Uniform sample from `[original - d, original + d]` clamped to `[0, 1]`.
pub fn shift<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    max_abs_delta: f64,
) -> Result<f64, ColorError> {
    shift_clamped(rng, original, max_abs_delta, 0.0, 1.0)
}

/// Uniform sample from `[original + min_delta, original + max_delta]` clamped
/// to `[0, 1]`.
pub fn shift_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    min_delta: f64,
    max_delta: f64,
) -> Result<f64, ColorError> {
    shift_range_clamped(rng, original, min_delta, max_delta, 0.0, 1.0)
}

/// Symmetric shift whose interval is clamped to `[lo, hi]`.
pub fn shift_clamped<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    max_abs_delta: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, ColorError> {
    let d = check_delta(max_abs_delta)?;
    shift_range_clamped(rng, original, -d, d, lo, hi)
}

/// Asymmetric shift whose interval is clamped to `[lo, hi]`.
pub fn shift_range_clamped<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    min_delta: f64,
    max_delta: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, ColorError> {
    let original = ColorError::check_finite("original", original)?;
    check_delta_range(min_delta, max_delta)?;
    check_bounds(lo, hi)?;
    let a = (original + min_delta).clamp(lo, hi);
    let b = (original + max_delta).clamp(lo, hi);
    sample(rng, a, b)
}

// -- Spread --

/// Moves `original` up to proportion `p` of the remaining distance toward
/// either end of `[0, 1]`: the interval is `[o(1-p), o + (1-o)p]`.
pub fn spread<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    max_proportion: f64,
) -> Result<f64, ColorError> {
    spread_clamped(rng, original, max_proportion, 0.0, 1.0)
}

/// Asymmetric spread. Each proportion in `[-1, 1]` moves its bound toward 0
/// when negative and toward 1 when positive.
pub fn spread_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    min_proportion: f64,
    max_proportion: f64,
) -> Result<f64, ColorError> {
    spread_range_clamped(rng, original, min_proportion, max_proportion, 0.0, 1.0)
}

/// Symmetric spread intersected with `[lo, hi]`.
pub fn spread_clamped<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    max_proportion: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, ColorError> {
    let p = check_proportion(max_proportion, 0.0, 1.0)?;
    spread_range_clamped(rng, original, -p, p, lo, hi)
}

/// Asymmetric spread intersected with `[lo, hi]`.
///
/// Both computed bounds are clamped into `[lo, hi]` before sampling, so an
/// original lying outside the legal range still yields a legal value.
pub fn spread_range_clamped<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    min_proportion: f64,
    max_proportion: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, ColorError> {
    let original = clamp01(ColorError::check_finite("original", original)?);
    check_proportion_range(min_proportion, max_proportion)?;
    check_bounds(lo, hi)?;
    let a = spread_bound(original, min_proportion).clamp(lo, hi);
    let b = spread_bound(original, max_proportion).clamp(lo, hi);
    sample(rng, a, b)
}

// -- Lerp --

/// Uniform sample between `original` and `target`, i.e. interpolation by a
/// random factor in `[0, 1]`.
pub fn lerp<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    target: f64,
) -> Result<f64, ColorError> {
    let original = ColorError::check_finite("original", original)?;
    let target = ColorError::check_finite("target", target)?;
    sample(rng, original.min(target), original.max(target))
}

/// [`lerp`] with the result clamped to `[lo, hi]`.
pub fn lerp_clamped<R: RandomSource + ?Sized>(
    rng: &mut R,
    original: f64,
    target: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, ColorError> {
    check_bounds(lo, hi)?;
    let original = ColorError::check_finite("original", original)?.clamp(lo, hi);
    let target = ColorError::check_finite("target", target)?.clamp(lo, hi);
    sample(rng, original.min(target), original.max(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;
    use crate::random::testing::{Midpoint, Scripted};

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Shift --

    #[test]
    fn shift_with_midpoint_source_yields_midpoint_of_clamped_interval() {
        let v = shift(&mut Midpoint, 0.9, 0.3).unwrap();
        assert!(approx_eq(v, 0.8), "expected 0.8, got {v}");
    }

    #[test]
    fn shift_interval_is_clamped_at_zero() {
        let lo = shift(&mut Scripted::new(&[0.0]), 0.1, 0.3).unwrap();
        let hi = shift(&mut Scripted::new(&[1.0]), 0.1, 0.3).unwrap();
        assert_eq!(lo, 0.0);
        assert!(approx_eq(hi, 0.4), "got {hi}");
    }

    #[test]
    fn shift_rejects_negative_delta() {
        assert_eq!(
            shift(&mut Midpoint, 0.5, -0.1),
            Err(ColorError::NegativeDelta(-0.1))
        );
    }

    #[test]
    fn shift_range_rejects_reversed_deltas() {
        let err = shift_range(&mut Midpoint, 0.5, 0.2, -0.2).unwrap_err();
        assert_eq!(err, ColorError::InvalidDelta { min: 0.2, max: -0.2 });
    }

    #[test]
    fn shift_range_only_upward() {
        let lo = shift_range(&mut Scripted::new(&[0.0]), 0.5, 0.1, 0.2).unwrap();
        let hi = shift_range(&mut Scripted::new(&[1.0]), 0.5, 0.1, 0.2).unwrap();
        assert!(approx_eq(lo, 0.6), "got {lo}");
        assert!(approx_eq(hi, 0.7), "got {hi}");
    }

    #[test]
    fn shift_clamped_respects_custom_bounds() {
        let mut rng = Xorshift64::new(5);
        for _ in 0..1000 {
            let v = shift_clamped(&mut rng, 0.3, 0.5, 0.2, 0.4).unwrap();
            assert!((0.2..=0.4).contains(&v), "got {v}");
        }
    }

    #[test]
    fn shift_clamped_rejects_inverted_bounds() {
        let err = shift_clamped(&mut Midpoint, 0.3, 0.1, 0.6, 0.4).unwrap_err();
        assert_eq!(err, ColorError::InvertedInterval { lo: 0.6, hi: 0.4 });
    }

    #[test]
    fn shift_rejects_nan_original() {
        assert!(matches!(
            shift(&mut Midpoint, f64::NAN, 0.1),
            Err(ColorError::NonFinite(_))
        ));
    }

    // -- Spread --

    #[test]
    fn full_spread_covers_unit_interval() {
        let lo = spread(&mut Scripted::new(&[0.0]), 0.5, 1.0).unwrap();
        let hi = spread(&mut Scripted::new(&[1.0]), 0.5, 1.0).unwrap();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn full_spread_covers_unit_interval_for_any_original() {
        for original in [0.0, 0.1, 0.73, 1.0] {
            let lo = spread(&mut Scripted::new(&[0.0]), original, 1.0).unwrap();
            let hi = spread(&mut Scripted::new(&[1.0]), original, 1.0).unwrap();
            assert_eq!(lo, 0.0, "original {original}");
            assert_eq!(hi, 1.0, "original {original}");
        }
    }

    #[test]
    fn spread_is_proportional_to_remaining_distance() {
        // o = 0.8, p = 0.5 -> [0.4, 0.9]
        let lo = spread(&mut Scripted::new(&[0.0]), 0.8, 0.5).unwrap();
        let hi = spread(&mut Scripted::new(&[1.0]), 0.8, 0.5).unwrap();
        assert!(approx_eq(lo, 0.4), "got {lo}");
        assert!(approx_eq(hi, 0.9), "got {hi}");
    }

    #[test]
    fn spread_range_moves_each_bound_independently() {
        // o = 0.5, [-0.5, 0.5] -> [0.25, 0.75]; [0.2, 0.6] -> [0.6, 0.8]
        let lo = spread_range(&mut Scripted::new(&[0.0]), 0.5, 0.2, 0.6).unwrap();
        let hi = spread_range(&mut Scripted::new(&[1.0]), 0.5, 0.2, 0.6).unwrap();
        assert!(approx_eq(lo, 0.6), "got {lo}");
        assert!(approx_eq(hi, 0.8), "got {hi}");
    }

    #[test]
    fn spread_rejects_proportion_out_of_range() {
        assert!(matches!(
            spread(&mut Midpoint, 0.5, 1.5),
            Err(ColorError::ProportionOutOfRange { .. })
        ));
        assert!(matches!(
            spread_range(&mut Midpoint, 0.5, -1.2, 0.0),
            Err(ColorError::ProportionOutOfRange { .. })
        ));
    }

    #[test]
    fn spread_range_rejects_reversed_proportions() {
        assert_eq!(
            spread_range(&mut Midpoint, 0.5, 0.4, -0.4),
            Err(ColorError::InvertedRange {
                min: 0.4,
                max: -0.4
            })
        );
    }

    #[test]
    fn spread_clamped_into_degenerate_bounds_returns_the_bound() {
        let mut rng = Xorshift64::new(11);
        for _ in 0..100 {
            assert_eq!(spread_clamped(&mut rng, 0.4, 0.7, 0.0, 0.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn spread_clamped_with_original_beyond_bounds_stays_legal() {
        // Original chroma above its legal maximum: both bounds clamp to hi.
        let mut rng = Xorshift64::new(3);
        for _ in 0..100 {
            let v = spread_range_clamped(&mut rng, 0.9, -0.1, 0.1, 0.0, 0.3).unwrap();
            assert!((0.0..=0.3).contains(&v), "got {v}");
        }
    }

    // -- Lerp --

    #[test]
    fn lerp_to_self_is_identity() {
        let mut rng = Xorshift64::new(9);
        for x in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(lerp(&mut rng, x, x).unwrap(), x);
        }
    }

    #[test]
    fn lerp_works_in_both_directions() {
        let down = lerp(&mut Scripted::new(&[0.0]), 0.9, 0.1).unwrap();
        let up = lerp(&mut Scripted::new(&[1.0]), 0.9, 0.1).unwrap();
        assert!(approx_eq(down, 0.1));
        assert!(approx_eq(up, 0.9));
    }

    #[test]
    fn lerp_clamped_limits_target() {
        let v = lerp_clamped(&mut Scripted::new(&[1.0]), 0.2, 0.9, 0.0, 0.5).unwrap();
        assert!(approx_eq(v, 0.5), "got {v}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn shift_stays_in_unit_interval(
                seed: u64,
                original in 0.0_f64..=1.0,
                delta in 0.0_f64..=2.0,
            ) {
                let mut rng = Xorshift64::new(seed);
                let v = shift(&mut rng, original, delta).unwrap();
                prop_assert!((0.0..=1.0).contains(&v), "shift = {v}");
                prop_assert!((v - original).abs() <= delta + EPSILON);
            }

            #[test]
            fn spread_range_stays_in_unit_interval(
                seed: u64,
                original in 0.0_f64..=1.0,
                a in -1.0_f64..=1.0,
                b in -1.0_f64..=1.0,
            ) {
                let (min_p, max_p) = if a <= b { (a, b) } else { (b, a) };
                let mut rng = Xorshift64::new(seed);
                let v = spread_range(&mut rng, original, min_p, max_p).unwrap();
                prop_assert!((0.0..=1.0).contains(&v), "spread = {v}");
            }

            #[test]
            fn spread_clamped_stays_in_bounds(
                seed: u64,
                original in 0.0_f64..=1.0,
                p in 0.0_f64..=1.0,
                x in 0.0_f64..=1.0,
                y in 0.0_f64..=1.0,
            ) {
                let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
                let mut rng = Xorshift64::new(seed);
                let v = spread_clamped(&mut rng, original, p, lo, hi).unwrap();
                prop_assert!(v >= lo && v <= hi, "{v} outside [{lo}, {hi}]");
            }

            #[test]
            fn lerp_stays_between_endpoints(
                seed: u64,
                a in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
            ) {
                let mut rng = Xorshift64::new(seed);
                let v = lerp(&mut rng, a, b).unwrap();
                prop_assert!(v >= a.min(b) && v <= a.max(b));
            }
        }
    }
}
