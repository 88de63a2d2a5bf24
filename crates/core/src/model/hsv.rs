//! Hue, saturation, value: the hexcone, stretched into a cylinder.

use super::{compose, decompose, opaque, Rgb};
use crate::error::ColorError;
use crate::hue::Hue;
use crate::ops::{self, Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: Hue,
    pub s: f64,
    pub v: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsvChannel {
    Hue,
    Saturation,
    Value,
    Opacity,
}

impl Hsv {
    pub fn new(h: Hue, s: f64, v: f64) -> Self {
        Hsv { h, s, v, a: 1.0 }
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let d = decompose(&rgb);
        let s = if d.max > 0.0 { d.chroma / d.max } else { 0.0 };
        Hsv {
            h: d.hue,
            s,
            v: d.max,
            a: rgb.a,
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let chroma = hsv.v * hsv.s;
        compose(hsv.h, chroma, hsv.v - chroma, hsv.a)
    }
}

impl FromStr for HsvChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for HsvChannel {
    const MODEL: &'static str = "hsv";
    const ALL: &'static [Self] = &[
        HsvChannel::Hue,
        HsvChannel::Saturation,
        HsvChannel::Value,
        HsvChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            HsvChannel::Hue => "hue",
            HsvChannel::Saturation => "saturation",
            HsvChannel::Value => "value",
            HsvChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            HsvChannel::Hue => "h",
            HsvChannel::Saturation => "s",
            HsvChannel::Value => "v",
            HsvChannel::Opacity => "a",
        }
    }

    fn is_hue(self) -> bool {
        self == HsvChannel::Hue
    }

    fn is_opacity(self) -> bool {
        self == HsvChannel::Opacity
    }
}

impl ChannelSet for Hsv {
    type Channel = HsvChannel;

    fn get(&self, channel: HsvChannel) -> f64 {
        match channel {
            HsvChannel::Hue => self.h.turns(),
            HsvChannel::Saturation => self.s,
            HsvChannel::Value => self.v,
            HsvChannel::Opacity => self.a,
        }
    }

    fn with(mut self, channel: HsvChannel, value: f64) -> Self {
        match channel {
            HsvChannel::Hue => self.h = Hue::new(value),
            HsvChannel::Saturation => self.s = value,
            HsvChannel::Value => self.v = value,
            HsvChannel::Opacity => self.a = value,
        }
        self
    }
}

impl RandomColor for Hsv {
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self {
        Hsv {
            h: Hue::random(rng),
            s: rng.unit_closed(),
            v: rng.unit_closed(),
            a: opacity,
        }
    }
}

impl Mutate for Hsv {
    type Channel = HsvChannel;

    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: HsvChannel,
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
    use crate::prng::Xorshift64;
    use crate::random::testing::Scripted;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn primaries_convert() {
        let red = Hsv::from(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(red, Hsv::new(Hue::new(0.0), 1.0, 1.0));
        let blue = Hsv::from(Rgb::new(0.0, 0.0, 1.0));
        assert!((blue.h.turns() - 2.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn black_has_zero_saturation() {
        let black = Hsv::from(Rgb::new(0.0, 0.0, 0.0));
        assert_eq!((black.s, black.v), (0.0, 0.0));
    }

    #[test]
    fn hue_shift_wraps() {
        let c = Hsv::new(Hue::new(0.95), 0.5, 0.5)
            .shift_channel(HsvChannel::Hue, 0.1, &mut Scripted::new(&[1.0]))
            .unwrap();
        assert!((c.h.turns() - 0.05).abs() < EPSILON);
    }

    #[test]
    fn lerp_toward_takes_shorter_hue_arc() {
        let from = Hsv::new(Hue::new(0.9), 1.0, 1.0);
        let to = Hsv::new(Hue::new(0.1), 1.0, 1.0);
        let c = from.lerp_toward(&to, &mut Scripted::new(&[0.5])).unwrap();
        assert!(c.h.turns() < EPSILON || c.h.turns() > 1.0 - EPSILON);
    }

    #[test]
    fn lerp_toward_opposite_hue_goes_both_ways() {
        let from = Hsv::new(Hue::new(0.0), 1.0, 1.0);
        let to = Hsv::new(Hue::new(0.5), 1.0, 1.0);
        let mut rng = Xorshift64::new(11);
        let n = 10_000;
        let wrapped = (0..n)
            .filter(|_| from.lerp_toward(&to, &mut rng).unwrap().h.turns() > 0.5)
            .count();
        let share = wrapped as f64 / n as f64;
        assert!((share - 0.5).abs() < 0.03, "share {share}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_round_trip(r in 0.0_f64..=1.0, g in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let back = Rgb::from(Hsv::from(Rgb::new(r, g, b)));
                prop_assert!((back.r - r).abs() < EPSILON);
                prop_assert!((back.g - g).abs() < EPSILON);
                prop_assert!((back.b - b).abs() < EPSILON);
            }
        }
    }
}
