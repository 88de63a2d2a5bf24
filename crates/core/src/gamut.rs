//! Gamut boundaries of the chroma-based models and the validity-correcting
//! wrapper used by every mutation of them.
//!
//! For a fixed hue, the displayable (chroma, second channel) pairs of HCV, HCL
//! and HCY form the triangle `(0, 0)`, `(0, 1)`, `(1, apex)`. The apex is 1 for
//! value, 0.5 for lightness, and the luma of the fully saturated hue for luma.
//! Both boundary functions follow from the apex alone:
//!
//! - `max_chroma(s) = s / apex` below the apex, `(1 - s) / (1 - apex)` above;
//! - `min_max_second(c) = (c * apex, c * apex + 1 - c)`.

use crate::error::ColorError;
use crate::hue::Hue;
use crate::random::RandomSource;
use crate::scalar::clamp01;
use crate::triangle::Triangle;
use glam::DVec2;

/// Generator attempts allowed when the original color is in gamut.
pub const MAX_ITERATIONS_FROM_VALID: usize = 100;

/// Generator attempts allowed when the original color is already out of gamut.
pub const MAX_ITERATIONS_FROM_INVALID: usize = 5;

/// Tolerance for floating-point error in the validity predicate.
pub const GAMUT_EPSILON: f64 = 1e-9;

/// Largest chroma whose triangle apex is `apex`, at second-channel `second`.
pub fn max_chroma_for_apex(apex: f64, second: f64) -> f64 {
    let s = clamp01(second);
    let c = if s <= apex {
        if apex > 0.0 {
            s / apex
        } else {
            1.0
        }
    } else {
        (1.0 - s) / (1.0 - apex)
    };
    clamp01(c)
}

/// Legal second-channel range at `chroma` for a triangle with the given apex.
pub fn min_max_second_for_apex(apex: f64, chroma: f64) -> (f64, f64) {
    let c = clamp01(chroma);
    let lo = c * apex;
    (lo, (lo + 1.0 - c).max(lo))
}

/// A validity predicate paired with a projection onto the valid set.
pub trait GamutCheck: Sized {
    /// Whether the color is representable.
    fn is_valid(&self) -> bool;

    /// The closest representable color.
    fn nearest_valid(&self) -> Self;
}

/// A hue/chroma/second-channel color model with a triangular gamut.
pub trait ChromaModel: GamutCheck + Copy {
    fn from_parts(hue: Hue, chroma: f64, second: f64, opacity: f64) -> Self;

    fn hue(&self) -> Hue;

    fn chroma(&self) -> f64;

    /// Value, lightness or luma.
    fn second(&self) -> f64;

    fn opacity(&self) -> f64;

    /// Second-channel coordinate of the fully saturated color at `hue`.
    fn apex(hue: Hue) -> f64;

    /// Largest displayable chroma at `hue` and `second`.
    fn max_chroma_at(hue: Hue, second: f64) -> f64 {
        max_chroma_for_apex(Self::apex(hue), second)
    }

    /// Displayable second-channel range at `hue` and `chroma`.
    fn second_range_at(hue: Hue, chroma: f64) -> (f64, f64) {
        min_max_second_for_apex(Self::apex(hue), chroma)
    }

    /// The valid (chroma, second) triangle at `hue`.
    fn region(hue: Hue) -> Triangle {
        Triangle::chroma_region(Self::apex(hue))
    }
}

fn in_unit(x: f64) -> bool {
    (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&x)
}

/// The validity predicate shared by all chroma models.
pub fn is_in_gamut<C: ChromaModel>(color: &C) -> bool {
    let (c, s, a) = (color.chroma(), color.second(), color.opacity());
    in_unit(c) && in_unit(s) && in_unit(a) && c <= C::max_chroma_at(color.hue(), s) + GAMUT_EPSILON
}

/// Euclidean projection of (chroma, second) onto the hue's triangle, with
/// opacity clamped to `[0, 1]`. Non-finite channels are treated as 0.
pub fn project_to_gamut<C: ChromaModel>(color: &C) -> C {
    let finite = |x: f64| if x.is_finite() { x } else { 0.0 };
    let hue = color.hue();
    let p = C::region(hue).nearest(DVec2::new(finite(color.chroma()), finite(color.second())));
    C::from_parts(
        hue,
        clamp01(p.x),
        clamp01(p.y),
        clamp01(finite(color.opacity())),
    )
}

/// Uniform color over the whole gamut: hue first, then (chroma, second) from
/// the hue's triangle. Valid by construction for an opacity in `[0, 1]`,
/// which callers check beforehand.
pub(crate) fn random_in_gamut<C, R>(rng: &mut R, opacity: f64) -> C
where
    C: ChromaModel,
    R: RandomSource + ?Sized,
{
    let hue = Hue::random(rng);
    let p = C::region(hue).sample(rng);
    C::from_parts(hue, clamp01(p.x), clamp01(p.y), opacity)
}

/// Iteration budget for [`generate_valid`] given the original color.
pub fn max_iterations<C: GamutCheck>(original: &C) -> usize {
    if original.is_valid() {
        MAX_ITERATIONS_FROM_VALID
    } else {
        MAX_ITERATIONS_FROM_INVALID
    }
}

/// Calls `generate` until it yields a valid color, at most
/// [`max_iterations`] times, then falls back to projecting the last candidate.
///
/// A gamut excursion is never an error. Errors returned by `generate` are
/// malformed requests and propagate immediately.
pub fn generate_valid<C, R, F>(original: &C, rng: &mut R, mut generate: F) -> Result<C, ColorError>
where
    C: GamutCheck,
    R: RandomSource + ?Sized,
    F: FnMut(&mut R) -> Result<C, ColorError>,
{
    let limit = max_iterations(original);
    let mut candidate = generate(rng)?;
    let mut attempts = 1;
    while !candidate.is_valid() {
        if attempts == limit {
            log::debug!("no in-gamut candidate after {limit} attempts, projecting to nearest valid");
            return Ok(candidate.nearest_valid());
        }
        log::trace!("candidate {attempts} out of gamut, retrying");
        candidate = generate(rng)?;
        attempts += 1;
    }
    Ok(candidate)
}
