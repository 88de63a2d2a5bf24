//! Hue, saturation, lightness: the bicone, stretched into a cylinder.

use super::{compose, decompose, opaque, Rgb};
use crate::error::ColorError;
use crate::hue::Hue;
use crate::ops::{self, Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: Hue,
    pub s: f64,
    pub l: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HslChannel {
    Hue,
    Saturation,
    Lightness,
    Opacity,
}

impl Hsl {
    pub fn new(h: Hue, s: f64, l: f64) -> Self {
        Hsl { h, s, l, a: 1.0 }
    }
}

/// Largest chroma at lightness `l`.
fn chroma_span(l: f64) -> f64 {
    1.0 - (2.0 * l - 1.0).abs()
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let d = decompose(&rgb);
        let l = 0.5 * (d.max + d.min);
        let span = chroma_span(l);
        let s = if span > 0.0 {
            (d.chroma / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Hsl {
            h: d.hue,
            s,
            l,
            a: rgb.a,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let chroma = hsl.s * chroma_span(hsl.l);
        compose(hsl.h, chroma, hsl.l - 0.5 * chroma, hsl.a)
    }
}

impl FromStr for HslChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for HslChannel {
    const MODEL: &'static str = "hsl";
    const ALL: &'static [Self] = &[
        HslChannel::Hue,
        HslChannel::Saturation,
        HslChannel::Lightness,
        HslChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            HslChannel::Hue => "hue",
            HslChannel::Saturation => "saturation",
            HslChannel::Lightness => "lightness",
            HslChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            HslChannel::Hue => "h",
            HslChannel::Saturation => "s",
            HslChannel::Lightness => "l",
            HslChannel::Opacity => "a",
        }
    }

    fn is_hue(self) -> bool {
        self == HslChannel::Hue
    }

    fn is_opacity(self) -> bool {
        self == HslChannel::Opacity
    }
}

impl ChannelSet for Hsl {
    type Channel = HslChannel;

    fn get(&self, channel: HslChannel) -> f64 {
        match channel {
            HslChannel::Hue => self.h.turns(),
            HslChannel::Saturation => self.s,
            HslChannel::Lightness => self.l,
            HslChannel::Opacity => self.a,
        }
    }

    fn with(mut self, channel: HslChannel, value: f64) -> Self {
        match channel {
            HslChannel::Hue => self.h = Hue::new(value),
            HslChannel::Saturation => self.s = value,
            HslChannel::Lightness => self.l = value,
            HslChannel::Opacity => self.a = value,
        }
        self
    }
}

impl RandomColor for Hsl {
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self {
        Hsl {
            h: Hue::random(rng),
            s: rng.unit_closed(),
            l: rng.unit_closed(),
            a: opacity,
        }
    }
}

impl Mutate for Hsl {
    type Channel = HslChannel;

    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: HslChannel,
        op: ChannelOp,
        rng: &mut R,
    ) -> Result<Self, ColorError> {
        ops::mutate_rect_channel(self, channel, op, rng)
    }

    fn mutate<R: RandomSource + ?Sized>(&self, op: ChannelOp, rng: &mut R) -> Result<Self, ColorError> {
        ops::mutate_rect(self, op, rng)
    }

    fn lerp_toward<R: RandomSource + ?Sized>(&self, target: &Self, rng: &mut R) -> Result<Self, ColorError> {
        Ok(ops::lerp_rect(self, target, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::Midpoint;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn white_and_black_have_no_saturation() {
        assert_eq!(Hsl::from(Rgb::new(1.0, 1.0, 1.0)).s, 0.0);
        assert_eq!(Hsl::from(Rgb::new(0.0, 0.0, 0.0)).s, 0.0);
    }

    #[test]
    fn pure_green_sits_at_half_lightness() {
        let g = Hsl::from(Rgb::new(0.0, 1.0, 0.0));
        assert!((g.h.turns() - 1.0 / 3.0).abs() < EPSILON);
        assert_eq!((g.s, g.l), (1.0, 0.5));
    }

    #[test]
    fn full_saturation_at_extreme_lightness_is_still_white() {
        let rgb = Rgb::from(Hsl::new(Hue::new(0.3), 1.0, 1.0));
        assert_eq!(rgb, Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn spread_saturation_reaches_proportion_of_remaining_distance() {
        // [0.4 - 0.4 * 0.5, 0.4 + 0.6 * 0.5] = [0.2, 0.7]
        let c = Hsl::new(Hue::new(0.1), 0.4, 0.5);
        let m = c
            .spread_channel(HslChannel::Saturation, 0.5, &mut Midpoint)
            .unwrap();
        assert!((m.s - 0.45).abs() < EPSILON);
        assert_eq!((m.h, m.l), (c.h, c.l));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_round_trip(r in 0.0_f64..=1.0, g in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let back = Rgb::from(Hsl::from(Rgb::new(r, g, b)));
                prop_assert!((back.r - r).abs() < EPSILON);
                prop_assert!((back.g - g).abs() < EPSILON);
                prop_assert!((back.b - b).abs() < EPSILON);
            }
        }
    }
}
