//! Hue, saturation, luma: [`Hcy`] with chroma expressed as a fraction of the
//! largest chroma available at that hue and luma. Stretching the triangle this
//! way makes every point of the channel cube displayable.

use super::{compose, decompose, luma, opaque, Hcy, Rgb};
use crate::error::ColorError;
use crate::hue::Hue;
use crate::ops::{self, Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsy {
    pub h: Hue,
    pub s: f64,
    pub y: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsyChannel {
    Hue,
    Saturation,
    Luma,
    Opacity,
}

impl Hsy {
    pub fn new(h: Hue, s: f64, y: f64) -> Self {
        Hsy { h, s, y, a: 1.0 }
    }
}

impl From<Rgb> for Hsy {
    fn from(rgb: Rgb) -> Self {
        let d = decompose(&rgb);
        let y = luma(rgb.r, rgb.g, rgb.b);
        let max = Hcy::max_chroma(d.hue, y);
        let s = if max > 0.0 {
            (d.chroma / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Hsy {
            h: d.hue,
            s,
            y,
            a: rgb.a,
        }
    }
}

impl From<Hsy> for Rgb {
    fn from(hsy: Hsy) -> Self {
        let chroma = hsy.s.clamp(0.0, 1.0) * Hcy::max_chroma(hsy.h, hsy.y);
        let m = hsy.y - chroma * Hcy::apex_luma(hsy.h);
        compose(hsy.h, chroma, m, hsy.a)
    }
}

impl From<Hsy> for Hcy {
    fn from(hsy: Hsy) -> Self {
        Hcy {
            h: hsy.h,
            c: hsy.s * Hcy::max_chroma(hsy.h, hsy.y),
            y: hsy.y,
            a: hsy.a,
        }
    }
}

impl FromStr for HsyChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for HsyChannel {
    const MODEL: &'static str = "hsy";
    const ALL: &'static [Self] = &[
        HsyChannel::Hue,
        HsyChannel::Saturation,
        HsyChannel::Luma,
        HsyChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            HsyChannel::Hue => "hue",
            HsyChannel::Saturation => "saturation",
            HsyChannel::Luma => "luma",
            HsyChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            HsyChannel::Hue => "h",
            HsyChannel::Saturation => "s",
            HsyChannel::Luma => "y",
            HsyChannel::Opacity => "a",
        }
    }

    fn is_hue(self) -> bool {
        self == HsyChannel::Hue
    }

    fn is_opacity(self) -> bool {
        self == HsyChannel::Opacity
    }
}

impl ChannelSet for Hsy {
    type Channel = HsyChannel;

    fn get(&self, channel: HsyChannel) -> f64 {
        match channel {
            HsyChannel::Hue => self.h.turns(),
            HsyChannel::Saturation => self.s,
            HsyChannel::Luma => self.y,
            HsyChannel::Opacity => self.a,
        }
    }

    fn with(mut self, channel: HsyChannel, value: f64) -> Self {
        match channel {
            HsyChannel::Hue => self.h = Hue::new(value),
            HsyChannel::Saturation => self.s = value,
            HsyChannel::Luma => self.y = value,
            HsyChannel::Opacity => self.a = value,
        }
        self
    }
}

impl RandomColor for Hsy {
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self {
        Hsy {
            h: Hue::random(rng),
            s: rng.unit_closed(),
            y: rng.unit_closed(),
            a: opacity,
        }
    }
}

impl Mutate for Hsy {
    type Channel = HsyChannel;

    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: HsyChannel,
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
