//! Channel dispatch for the chroma-based models.
//!
//! Chroma is clamped to `[0, max_chroma(hue, second)]` and the second channel
//! to `second_range(hue, chroma)` before the scalar primitive runs. Every
//! candidate then passes through [`generate_valid`], which catches the cases
//! the per-channel clamps cannot see, such as a hue shift on HCY moving the
//! luma apex out from under an existing chroma/luma pair.

use crate::error::ColorError;
use crate::gamut::{generate_valid, ChromaModel};
use crate::ops::ChannelOp;
use crate::random::RandomSource;
use crate::scalar::mix;

/// The role a channel plays in a chroma-based model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaChannel {
    Hue,
    Chroma,
    /// Value, lightness or luma.
    Second,
    Opacity,
}

/// One candidate with a single channel perturbed.
fn perturb<C, R>(color: &C, channel: ChromaChannel, op: ChannelOp, rng: &mut R) -> Result<C, ColorError>
where
    C: ChromaModel,
    R: RandomSource + ?Sized,
{
    let (h, c, s, a) = (color.hue(), color.chroma(), color.second(), color.opacity());
    let out = match channel {
        ChromaChannel::Hue => C::from_parts(op.apply_hue(rng, h)?, c, s, a),
        ChromaChannel::Chroma => {
            let max = C::max_chroma_at(h, s);
            C::from_parts(h, op.apply_clamped(rng, c, 0.0, max)?, s, a)
        }
        ChromaChannel::Second => {
            let (lo, hi) = C::second_range_at(h, c);
            C::from_parts(h, c, op.apply_clamped(rng, s, lo, hi)?, a)
        }
        ChromaChannel::Opacity => C::from_parts(h, c, s, op.apply_linear(rng, a)?),
    };
    Ok(out)
}

/// Applies `op` to one channel, keeping the result in gamut.
pub(crate) fn mutate_channel<C, R>(
    color: &C,
    channel: ChromaChannel,
    op: ChannelOp,
    rng: &mut R,
) -> Result<C, ColorError>
where
    C: ChromaModel,
    R: RandomSource + ?Sized,
{
    generate_valid(color, rng, |rng| perturb(color, channel, op, rng))
}

/// Applies `op` to hue, then chroma, then the second channel. Each step reads
/// its bounds from the channels already perturbed.
pub(crate) fn mutate<C, R>(color: &C, op: ChannelOp, rng: &mut R) -> Result<C, ColorError>
where
    C: ChromaModel,
    R: RandomSource + ?Sized,
{
    generate_valid(color, rng, |rng| {
        let hued = perturb(color, ChromaChannel::Hue, op, rng)?;
        let chromed = perturb(&hued, ChromaChannel::Chroma, op, rng)?;
        perturb(&chromed, ChromaChannel::Second, op, rng)
    })
}

/// Interpolates toward `target` by one random factor; hue takes the shorter
/// arc. Retries with a fresh factor if the hue-dependent gamut is left.
pub(crate) fn lerp_toward<C, R>(color: &C, target: &C, rng: &mut R) -> Result<C, ColorError>
where
    C: ChromaModel,
    R: RandomSource + ?Sized,
{
    generate_valid(color, rng, |rng| {
        let t = rng.unit_closed();
        Ok(C::from_parts(
            color.hue().mix(rng, target.hue(), t),
            mix(color.chroma(), target.chroma(), t),
            mix(color.second(), target.second(), t),
            mix(color.opacity(), target.opacity(), t),
        ))
    })
}

/// Implements [`GamutCheck`](crate::gamut::GamutCheck),
/// [`RandomColor`](crate::ops::RandomColor) and [`Mutate`](crate::ops::Mutate)
/// for a [`ChromaModel`] whose channel enum converts into [`ChromaChannel`].
macro_rules! impl_chroma_model {
    ($model:ty, $channel:ty) => {
        impl $crate::gamut::GamutCheck for $model {
            fn is_valid(&self) -> bool {
                $crate::gamut::is_in_gamut(self)
            }

            fn nearest_valid(&self) -> Self {
                $crate::gamut::project_to_gamut(self)
            }
        }

        impl $crate::ops::RandomColor for $model {
            fn sample_space<R: $crate::random::RandomSource + ?Sized>(
                rng: &mut R,
                opacity: f64,
            ) -> Self {
                $crate::gamut::random_in_gamut(rng, opacity)
            }
        }

        impl $crate::ops::Mutate for $model {
            type Channel = $channel;

            fn mutate_channel<R: $crate::random::RandomSource + ?Sized>(
                &self,
                channel: $channel,
                op: $crate::ops::ChannelOp,
                rng: &mut R,
            ) -> Result<Self, $crate::error::ColorError> {
                $crate::chroma::mutate_channel(self, channel.into(), op, rng)
            }

            fn mutate<R: $crate::random::RandomSource + ?Sized>(
                &self,
                op: $crate::ops::ChannelOp,
                rng: &mut R,
            ) -> Result<Self, $crate::error::ColorError> {
                $crate::chroma::mutate(self, op, rng)
            }

            fn lerp_toward<R: $crate::random::RandomSource + ?Sized>(
                &self,
                target: &Self,
                rng: &mut R,
            ) -> Result<Self, $crate::error::ColorError> {
                $crate::chroma::lerp_toward(self, target, rng)
            }
        }
    };
}

pub(crate) use impl_chroma_model;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamut::GamutCheck;
    use crate::hue::Hue;
    use crate::model::Hcl;
    use crate::random::testing::Scripted;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn chroma_bound_uses_current_second_channel() {
        let c = Hcl::new(Hue::new(0.4), 0.1, 0.8);
        let op = ChannelOp::Shift { max_delta: 1.0 };
        let m = mutate_channel(&c, ChromaChannel::Chroma, op, &mut Scripted::new(&[1.0])).unwrap();
        assert!((m.c - 0.4).abs() < EPSILON);
    }

    #[test]
    fn whole_color_mutate_reads_bounds_from_perturbed_channels() {
        // Hue first (a full-turn shift draws from the whole circle), then
        // chroma up to its bound at l = 0.5, then lightness inside the range
        // left by the new chroma.
        let c = Hcl::new(Hue::new(0.0), 0.0, 0.5);
        let op = ChannelOp::Shift { max_delta: 1.0 };
        let m = mutate(&c, op, &mut Scripted::new(&[0.25, 1.0, 0.0])).unwrap();
        assert!((m.h.turns() - 0.25).abs() < EPSILON);
        assert!((m.c - 1.0).abs() < EPSILON);
        assert!((m.l - 0.5).abs() < EPSILON);
        assert!(m.is_valid());
    }

    #[test]
    fn opacity_is_unbounded_by_gamut() {
        let c = Hcl::new(Hue::new(0.0), 1.0, 0.5);
        let op = ChannelOp::Lerp { target: 0.0 };
        let m = mutate_channel(&c, ChromaChannel::Opacity, op, &mut Scripted::new(&[0.0])).unwrap();
        assert_eq!(m.a, 0.0);
        assert_eq!((m.c, m.l), (1.0, 0.5));
    }

    #[test]
    fn malformed_operation_is_an_error_not_a_projection() {
        let c = Hcl::new(Hue::new(0.0), 0.2, 0.5);
        let op = ChannelOp::Spread { max_proportion: 2.0 };
        assert!(mutate_channel(&c, ChromaChannel::Second, op, &mut Scripted::new(&[0.5])).is_err());
    }
}
