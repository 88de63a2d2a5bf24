//! Channel operations and the traits every color model implements.
//!
//! A [`ChannelOp`] names one perturbation (shift, spread or lerp) and its
//! parameters. The dispatch decides how to run it on a given channel: linear on
//! `[0, 1]`, circular on hue, or clamped to a gamut-derived range for the
//! chroma and second channels of the chroma-based models (see
//! [`crate::chroma`]).

use crate::error::ColorError;
use crate::hue::Hue;
use crate::params::require_f64;
use crate::random::RandomSource;
use crate::scalar;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One random perturbation of a scalar channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChannelOp {
    /// Uniform in `[x - max_delta, x + max_delta]`.
    Shift { max_delta: f64 },
    /// Uniform in `[x + min_delta, x + max_delta]`.
    ShiftRange { min_delta: f64, max_delta: f64 },
    /// Move up to `max_proportion` of the remaining distance either way.
    Spread { max_proportion: f64 },
    /// Asymmetric spread with proportions in `[-1, 1]`.
    SpreadRange {
        min_proportion: f64,
        max_proportion: f64,
    },
    /// Uniform between the current value and `target`.
    Lerp { target: f64 },
}

impl ChannelOp {
    /// Names accepted by [`ChannelOp::from_params`].
    pub const KINDS: [&'static str; 5] = ["shift", "shift-range", "spread", "spread-range", "lerp"];

    /// Builds an operation from its kind name and a JSON object of parameters.
    ///
    /// | kind           | parameters                             |
    /// |----------------|----------------------------------------|
    /// | `shift`        | `max_delta`                            |
    /// | `shift-range`  | `min_delta`, `max_delta`               |
    /// | `spread`       | `max_proportion`                       |
    /// | `spread-range` | `min_proportion`, `max_proportion`     |
    /// | `lerp`         | `target`                               |
    pub fn from_params(kind: &str, params: &Value) -> Result<Self, ColorError> {
        match kind.to_ascii_lowercase().as_str() {
            "shift" => Ok(ChannelOp::Shift {
                max_delta: require_f64(params, "max_delta")?,
            }),
            "shift-range" => Ok(ChannelOp::ShiftRange {
                min_delta: require_f64(params, "min_delta")?,
                max_delta: require_f64(params, "max_delta")?,
            }),
            "spread" => Ok(ChannelOp::Spread {
                max_proportion: require_f64(params, "max_proportion")?,
            }),
            "spread-range" => Ok(ChannelOp::SpreadRange {
                min_proportion: require_f64(params, "min_proportion")?,
                max_proportion: require_f64(params, "max_proportion")?,
            }),
            "lerp" => Ok(ChannelOp::Lerp {
                target: require_f64(params, "target")?,
            }),
            other => Err(ColorError::UnknownOperation(other.to_string())),
        }
    }

    /// The kind name, as accepted by [`ChannelOp::from_params`].
    pub fn kind(&self) -> &'static str {
        match self {
            ChannelOp::Shift { .. } => "shift",
            ChannelOp::ShiftRange { .. } => "shift-range",
            ChannelOp::Spread { .. } => "spread",
            ChannelOp::SpreadRange { .. } => "spread-range",
            ChannelOp::Lerp { .. } => "lerp",
        }
    }

    /// Applies the operation to a channel living on `[0, 1]`.
    pub fn apply_linear<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        original: f64,
    ) -> Result<f64, ColorError> {
        self.apply_clamped(rng, original, 0.0, 1.0)
    }

    /// Applies the operation to a channel whose legal range is `[lo, hi]`.
    pub fn apply_clamped<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        original: f64,
        lo: f64,
        hi: f64,
    ) -> Result<f64, ColorError> {
        match *self {
            ChannelOp::Shift { max_delta } => {
                scalar::shift_clamped(rng, original, max_delta, lo, hi)
            }
            ChannelOp::ShiftRange {
                min_delta,
                max_delta,
            } => scalar::shift_range_clamped(rng, original, min_delta, max_delta, lo, hi),
            ChannelOp::Spread { max_proportion } => {
                scalar::spread_clamped(rng, original, max_proportion, lo, hi)
            }
            ChannelOp::SpreadRange {
                min_proportion,
                max_proportion,
            } => scalar::spread_range_clamped(
                rng,
                original,
                min_proportion,
                max_proportion,
                lo,
                hi,
            ),
            ChannelOp::Lerp { target } => scalar::lerp_clamped(rng, original, target, lo, hi),
        }
    }

    /// Applies the operation to a hue. A lerp target is read in turns.
    pub fn apply_hue<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        hue: Hue,
    ) -> Result<Hue, ColorError> {
        match *self {
            ChannelOp::Shift { max_delta } => hue.shift(rng, max_delta),
            ChannelOp::ShiftRange {
                min_delta,
                max_delta,
            } => hue.shift_range(rng, min_delta, max_delta),
            ChannelOp::Spread { max_proportion } => hue.spread(rng, max_proportion),
            ChannelOp::SpreadRange {
                min_proportion,
                max_proportion,
            } => hue.spread_range(rng, min_proportion, max_proportion),
            ChannelOp::Lerp { target } => {
                let target = ColorError::check_finite("target", target)?;
                Ok(hue.lerp(rng, Hue::new(target)))
            }
        }
    }
}

/// A named channel of one color model.
pub trait Channel: Copy + PartialEq + 'static {
    /// Lowercase model name used in error messages.
    const MODEL: &'static str;
    /// Every channel, color channels first and opacity last.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// One- or two-letter abbreviation.
    fn short(self) -> &'static str;

    /// Whether this channel is a hue.
    fn is_hue(self) -> bool {
        false
    }

    /// Whether this channel is the opacity.
    fn is_opacity(self) -> bool;

    /// Parses a channel by full name or abbreviation, ignoring case.
    fn parse(s: &str) -> Result<Self, ColorError> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|ch| ch.name() == lower || ch.short() == lower)
            .ok_or_else(|| ColorError::UnknownChannel {
                model: Self::MODEL.to_string(),
                channel: s.to_string(),
            })
    }

    /// The color channels, opacity excluded.
    fn color_channels() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied().filter(|ch| !ch.is_opacity())
    }
}

/// Uniform generation over a model's whole valid space.
pub trait RandomColor: Sized {
    /// Draws the color channels uniformly over the valid space and attaches
    /// `opacity` unchanged. `opacity` must already lie in `[0, 1]`.
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self;

    /// A uniformly random color with the given opacity, which must lie in
    /// `[0, 1]`.
    fn random_with_opacity<R: RandomSource + ?Sized>(
        rng: &mut R,
        opacity: f64,
    ) -> Result<Self, ColorError> {
        let opacity = ColorError::check_opacity(opacity)?;
        Ok(Self::sample_space(rng, opacity))
    }

    /// A uniformly random opaque color.
    fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::sample_space(rng, 1.0)
    }

    /// A uniformly random color with uniformly random opacity.
    fn random_translucent<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let opacity = rng.unit_closed();
        Self::sample_space(rng, opacity)
    }
}

/// Random perturbation of an existing color.
pub trait Mutate: Sized + Copy {
    type Channel: Channel;

    /// Applies `op` to a single channel.
    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: Self::Channel,
        op: ChannelOp,
        rng: &mut R,
    ) -> Result<Self, ColorError>;

    /// Applies `op` to every color channel; opacity is left untouched.
    fn mutate<R: RandomSource + ?Sized>(&self, op: ChannelOp, rng: &mut R)
        -> Result<Self, ColorError>;

    /// Interpolates toward `target` by one random factor shared by all
    /// channels, opacity included. Hue follows the shorter arc.
    fn lerp_toward<R: RandomSource + ?Sized>(
        &self,
        target: &Self,
        rng: &mut R,
    ) -> Result<Self, ColorError>;

    fn shift_channel<R: RandomSource + ?Sized>(
        &self,
        channel: Self::Channel,
        max_delta: f64,
        rng: &mut R,
    ) -> Result<Self, ColorError> {
        self.mutate_channel(channel, ChannelOp::Shift { max_delta }, rng)
    }

    fn shift_channel_range<R: RandomSource + ?Sized>(
        &self,
        channel: Self::Channel,
        min_delta: f64,
        max_delta: f64,
        rng: &mut R,
    ) -> Result<Self, ColorError> {
        self.mutate_channel(
            channel,
            ChannelOp::ShiftRange {
                min_delta,
                max_delta,
            },
            rng,
        )
    }

    fn spread_channel<R: RandomSource + ?Sized>(
        &self,
        channel: Self::Channel,
        max_proportion: f64,
        rng: &mut R,
    ) -> Result<Self, ColorError> {
        self.mutate_channel(channel, ChannelOp::Spread { max_proportion }, rng)
    }

    fn spread_channel_range<R: RandomSource + ?Sized>(
        &self,
        channel: Self::Channel,
        min_proportion: f64,
        max_proportion: f64,
        rng: &mut R,
    ) -> Result<Self, ColorError> {
        self.mutate_channel(
            channel,
            ChannelOp::SpreadRange {
                min_proportion,
                max_proportion,
            },
            rng,
        )
    }

    fn lerp_channel<R: RandomSource + ?Sized>(
        &self,
        channel: Self::Channel,
        target: f64,
        rng: &mut R,
    ) -> Result<Self, ColorError> {
        self.mutate_channel(channel, ChannelOp::Lerp { target }, rng)
    }
}

/// Positional access to the channels of a rectangular model, where every
/// point of the channel hypercube is a valid color.
pub trait ChannelSet: Copy {
    type Channel: Channel;

    fn get(&self, channel: Self::Channel) -> f64;

    fn with(self, channel: Self::Channel, value: f64) -> Self;
}

// -- Rectangular dispatch --

/// Runs `op` on one channel of a rectangular model.
pub(crate) fn mutate_rect_channel<C, R>(
    color: &C,
    channel: C::Channel,
    op: ChannelOp,
    rng: &mut R,
) -> Result<C, ColorError>
where
    C: ChannelSet,
    R: RandomSource + ?Sized,
{
    let value = if channel.is_hue() {
        op.apply_hue(rng, Hue::new(color.get(channel)))?.turns()
    } else {
        op.apply_linear(rng, color.get(channel))?
    };
    Ok(color.with(channel, value))
}

/// Runs `op` independently on every color channel of a rectangular model.
pub(crate) fn mutate_rect<C, R>(color: &C, op: ChannelOp, rng: &mut R) -> Result<C, ColorError>
where
    C: ChannelSet,
    R: RandomSource + ?Sized,
{
    C::Channel::color_channels().try_fold(*color, |acc, ch| mutate_rect_channel(&acc, ch, op, rng))
}

/// Interpolates every channel by one shared random factor.
pub(crate) fn lerp_rect<C, R>(color: &C, target: &C, rng: &mut R) -> C
where
    C: ChannelSet,
    R: RandomSource + ?Sized,
{
    let t = rng.unit_closed();
    C::Channel::ALL.iter().fold(*color, |acc, &ch| {
        let (a, b) = (color.get(ch), target.get(ch));
        let value = if ch.is_hue() {
            Hue::new(a).mix(rng, Hue::new(b), t).turns()
        } else {
            scalar::mix(a, b, t)
        };
        acc.with(ch, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::{Midpoint, Scripted};
    use serde_json::json;

    // -- Parameter parsing --

    #[test]
    fn from_params_builds_each_kind() {
        assert_eq!(
            ChannelOp::from_params("shift", &json!({"max_delta": 0.1})).unwrap(),
            ChannelOp::Shift { max_delta: 0.1 }
        );
        assert_eq!(
            ChannelOp::from_params("Shift-Range", &json!({"min_delta": -0.1, "max_delta": 0.2}))
                .unwrap(),
            ChannelOp::ShiftRange {
                min_delta: -0.1,
                max_delta: 0.2
            }
        );
        assert_eq!(
            ChannelOp::from_params("spread", &json!({"max_proportion": 0.5})).unwrap(),
            ChannelOp::Spread {
                max_proportion: 0.5
            }
        );
        assert_eq!(
            ChannelOp::from_params(
                "spread-range",
                &json!({"min_proportion": -0.5, "max_proportion": 0.25})
            )
            .unwrap(),
            ChannelOp::SpreadRange {
                min_proportion: -0.5,
                max_proportion: 0.25
            }
        );
        assert_eq!(
            ChannelOp::from_params("lerp", &json!({"target": 1})).unwrap(),
            ChannelOp::Lerp { target: 1.0 }
        );
    }

    #[test]
    fn from_params_reports_missing_parameter() {
        let err = ChannelOp::from_params("shift-range", &json!({"min_delta": 0.0})).unwrap_err();
        assert_eq!(err, ColorError::ParamNotFound("max_delta".into()));
    }

    #[test]
    fn from_params_rejects_unknown_kind() {
        assert!(matches!(
            ChannelOp::from_params("wiggle", &json!({})),
            Err(ColorError::UnknownOperation(_))
        ));
    }

    #[test]
    fn kind_round_trips_through_from_params_names() {
        for kind in ChannelOp::KINDS {
            let params = json!({
                "max_delta": 0.1, "min_delta": 0.0,
                "max_proportion": 0.1, "min_proportion": 0.0,
                "target": 0.5,
            });
            assert_eq!(ChannelOp::from_params(kind, &params).unwrap().kind(), kind);
        }
    }

    #[test]
    fn serializes_with_kind_tag() {
        let op = ChannelOp::Spread {
            max_proportion: 0.25,
        };
        let v = serde_json::to_value(op).unwrap();
        assert_eq!(v, json!({"kind": "spread", "max_proportion": 0.25}));
        let back: ChannelOp = serde_json::from_value(v).unwrap();
        assert_eq!(back, op);
    }

    // -- Application --

    #[test]
    fn apply_clamped_respects_bounds_for_every_kind() {
        let ops = [
            ChannelOp::Shift { max_delta: 1.0 },
            ChannelOp::ShiftRange {
                min_delta: -1.0,
                max_delta: 1.0,
            },
            ChannelOp::Spread {
                max_proportion: 1.0,
            },
            ChannelOp::SpreadRange {
                min_proportion: -1.0,
                max_proportion: 1.0,
            },
            ChannelOp::Lerp { target: 1.0 },
        ];
        for op in ops {
            for draw in [0.0, 1.0] {
                let v = op
                    .apply_clamped(&mut Scripted::new(&[draw]), 0.3, 0.2, 0.4)
                    .unwrap();
                assert!((0.2..=0.4).contains(&v), "{op:?} gave {v}");
            }
        }
    }

    #[test]
    fn apply_hue_lerp_wraps_target() {
        let h = ChannelOp::Lerp { target: 1.25 }
            .apply_hue(&mut Midpoint, Hue::new(0.25))
            .unwrap();
        assert_eq!(h, Hue::new(0.25));
    }
}
