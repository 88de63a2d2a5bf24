//! Subtractive cyan, magenta, yellow: each channel is one minus its RGB
//! counterpart.

use super::{opaque, Rgb};
use crate::error::ColorError;
use crate::ops::{self, Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmy {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmyChannel {
    Cyan,
    Magenta,
    Yellow,
    Opacity,
}

impl Cmy {
    pub fn new(c: f64, m: f64, y: f64) -> Self {
        Cmy { c, m, y, a: 1.0 }
    }
}

impl From<Rgb> for Cmy {
    fn from(rgb: Rgb) -> Self {
        Cmy {
            c: 1.0 - rgb.r,
            m: 1.0 - rgb.g,
            y: 1.0 - rgb.b,
            a: rgb.a,
        }
    }
}

impl From<Cmy> for Rgb {
    fn from(cmy: Cmy) -> Self {
        Rgb {
            r: (1.0 - cmy.c).clamp(0.0, 1.0),
            g: (1.0 - cmy.m).clamp(0.0, 1.0),
            b: (1.0 - cmy.y).clamp(0.0, 1.0),
            a: cmy.a.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for CmyChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for CmyChannel {
    const MODEL: &'static str = "cmy";
    const ALL: &'static [Self] = &[
        CmyChannel::Cyan,
        CmyChannel::Magenta,
        CmyChannel::Yellow,
        CmyChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            CmyChannel::Cyan => "cyan",
            CmyChannel::Magenta => "magenta",
            CmyChannel::Yellow => "yellow",
            CmyChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            CmyChannel::Cyan => "c",
            CmyChannel::Magenta => "m",
            CmyChannel::Yellow => "y",
            CmyChannel::Opacity => "a",
        }
    }

    fn is_opacity(self) -> bool {
        self == CmyChannel::Opacity
    }
}

impl ChannelSet for Cmy {
    type Channel = CmyChannel;

    fn get(&self, channel: CmyChannel) -> f64 {
        match channel {
            CmyChannel::Cyan => self.c,
            CmyChannel::Magenta => self.m,
            CmyChannel::Yellow => self.y,
            CmyChannel::Opacity => self.a,
        }
    }

    fn with(mut self, channel: CmyChannel, value: f64) -> Self {
        match channel {
            CmyChannel::Cyan => self.c = value,
            CmyChannel::Magenta => self.m = value,
            CmyChannel::Yellow => self.y = value,
            CmyChannel::Opacity => self.a = value,
        }
        self
    }
}

impl RandomColor for Cmy {
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self {
        Cmy {
            c: rng.unit_closed(),
            m: rng.unit_closed(),
            y: rng.unit_closed(),
            a: opacity,
        }
    }
}

impl Mutate for Cmy {
    type Channel = CmyChannel;

    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: CmyChannel,
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
