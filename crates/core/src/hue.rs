//! Hue as a circular scalar with period 1.
//!
//! [`Hue`] carries its own shift, spread and lerp because a linear clamp makes
//! no sense on a circle: arcs wrap, and interpolation follows the shorter way
//! around. When both ways are equally short the result is drawn uniformly
//! from the whole circle, so neither direction is favored.

use crate::error::ColorError;
use crate::random::RandomSource;
use crate::scalar::{check_proportion, check_proportion_range};
use serde::{Deserialize, Serialize};

/// A hue angle measured in turns, always in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Hue(f64);

/// Wraps `x` into `[0, 1)`.
pub fn wrap(x: f64) -> f64 {
    let w = x.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

impl From<f64> for Hue {
    fn from(turns: f64) -> Self {
        Hue::new(turns)
    }
}

impl From<Hue> for f64 {
    fn from(h: Hue) -> Self {
        h.0
    }
}

impl Hue {
    /// Creates a hue from a value in turns, wrapping it into `[0, 1)`.
    /// Non-finite input maps to 0.
    pub fn new(turns: f64) -> Self {
        if turns.is_finite() {
            Hue(wrap(turns))
        } else {
            Hue(0.0)
        }
    }

    /// Creates a hue from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Hue::new(degrees / 360.0)
    }

    /// The hue in turns, in `[0, 1)`.
    pub fn turns(self) -> f64 {
        self.0
    }

    /// The hue in degrees, in `[0, 360)`.
    pub fn degrees(self) -> f64 {
        self.0 * 360.0
    }

    /// Uniform hue over the whole circle.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Hue::new(rng.unit_half_open())
    }

    /// Signed distance from `self` to `other` along the shorter arc, in
    /// `(-0.5, 0.5]`.
    pub fn distance_to(self, other: Hue) -> f64 {
        let d = other.0 - self.0;
        match d {
            d if d > 0.5 => d - 1.0,
            d if d <= -0.5 => d + 1.0,
            d => d,
        }
    }

    /// Interpolation by `t` along the shorter arc. Exactly opposite hues have
    /// no shorter arc, so one fair draw from `rng` picks the direction.
    pub fn mix<R: RandomSource + ?Sized>(self, rng: &mut R, target: Hue, t: f64) -> Hue {
        let mut d = self.distance_to(target);
        if d == 0.5 && rng.unit_half_open() < 0.5 {
            d = -0.5;
        }
        Hue::new(self.0 + t * d)
    }

    /// Uniform draw from the arc starting at `start` with the given length.
    fn sample_arc<R: RandomSource + ?Sized>(rng: &mut R, start: f64, length: f64) -> Hue {
        if length >= 1.0 {
            Hue::random(rng)
        } else {
            Hue::new(rng.range_closed(start, start + length))
        }
    }

    /// Uniform draw from `[h - d, h + d]`, wrapped.
    pub fn shift<R: RandomSource + ?Sized>(
        self,
        rng: &mut R,
        max_abs_delta: f64,
    ) -> Result<Hue, ColorError> {
        let d = ColorError::check_finite("delta", max_abs_delta)?;
        if d < 0.0 {
            return Err(ColorError::NegativeDelta(d));
        }
        Ok(Self::sample_arc(rng, self.0 - d, 2.0 * d))
    }

    /// Uniform draw from `[h + min_delta, h + max_delta]`, wrapped. The sign of
    /// each delta fixes the direction, so the arc may be the longer one.
    pub fn shift_range<R: RandomSource + ?Sized>(
        self,
        rng: &mut R,
        min_delta: f64,
        max_delta: f64,
    ) -> Result<Hue, ColorError> {
        ColorError::check_finite("min delta", min_delta)?;
        ColorError::check_finite("max delta", max_delta)?;
        if min_delta > max_delta {
            return Err(ColorError::InvalidDelta {
                min: min_delta,
                max: max_delta,
            });
        }
        Ok(Self::sample_arc(rng, self.0 + min_delta, max_delta - min_delta))
    }

    /// Spread by up to proportion `p` of the half circle in either direction.
    /// `p == 1` spans the full circle and samples it uniformly.
    pub fn spread<R: RandomSource + ?Sized>(
        self,
        rng: &mut R,
        max_proportion: f64,
    ) -> Result<Hue, ColorError> {
        let p = check_proportion(max_proportion, 0.0, 1.0)?;
        self.spread_range(rng, -p, p)
    }

    /// Asymmetric spread; proportions in `[-1, 1]` of the half circle.
    pub fn spread_range<R: RandomSource + ?Sized>(
        self,
        rng: &mut R,
        min_proportion: f64,
        max_proportion: f64,
    ) -> Result<Hue, ColorError> {
        check_proportion_range(min_proportion, max_proportion)?;
        let start = self.0 + 0.5 * min_proportion;
        let length = 0.5 * (max_proportion - min_proportion);
        Ok(Self::sample_arc(rng, start, length))
    }

    /// Uniform draw from the shorter arc between `self` and `target`.
    ///
    /// Exactly opposite hues have two equally short arcs; the draw then covers
    /// the whole circle.
    pub fn lerp<R: RandomSource + ?Sized>(self, rng: &mut R, target: Hue) -> Hue {
        let delta = target.0 - self.0;
        let delta = match delta.abs() {
            a if a == 0.5 => return Hue::random(rng),
            a if a > 0.5 => delta - delta.signum(),
            _ => delta,
        };
        let start = self.0.min(self.0 + delta);
        Self::sample_arc(rng, start, delta.abs())
    }
}
