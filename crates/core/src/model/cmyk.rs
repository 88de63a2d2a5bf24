//! Cyan, magenta, yellow and key (black).
//!
//! Conversion from RGB extracts as much key as possible, `k = 1 - max(r, g, b)`,
//! so at least one of c, m, y is zero. Every point of the four-channel cube
//! still converts back, which keeps the model rectangular.

use super::{opaque, Rgb};
use crate::error::ColorError;
use crate::ops::{self, Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmykChannel {
    Cyan,
    Magenta,
    Yellow,
    Key,
    Opacity,
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Cmyk { c, m, y, k, a: 1.0 }
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
        let ink = |x: f64| if k < 1.0 { (1.0 - x - k) / (1.0 - k) } else { 0.0 };
        Cmyk {
            c: ink(rgb.r),
            m: ink(rgb.g),
            y: ink(rgb.b),
            k,
            a: rgb.a,
        }
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        let light = 1.0 - cmyk.k;
        let channel = |ink: f64| ((1.0 - ink) * light).clamp(0.0, 1.0);
        Rgb {
            r: channel(cmyk.c),
            g: channel(cmyk.m),
            b: channel(cmyk.y),
            a: cmyk.a.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for CmykChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for CmykChannel {
    const MODEL: &'static str = "cmyk";
    const ALL: &'static [Self] = &[
        CmykChannel::Cyan,
        CmykChannel::Magenta,
        CmykChannel::Yellow,
        CmykChannel::Key,
        CmykChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            CmykChannel::Cyan => "cyan",
            CmykChannel::Magenta => "magenta",
            CmykChannel::Yellow => "yellow",
            CmykChannel::Key => "key",
            CmykChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            CmykChannel::Cyan => "c",
            CmykChannel::Magenta => "m",
            CmykChannel::Yellow => "y",
            CmykChannel::Key => "k",
            CmykChannel::Opacity => "a",
        }
    }

    fn is_opacity(self) -> bool {
        self == CmykChannel::Opacity
    }
}

impl ChannelSet for Cmyk {
    type Channel = CmykChannel;

    fn get(&self, channel: CmykChannel) -> f64 {
        match channel {
            CmykChannel::Cyan => self.c,
            CmykChannel::Magenta => self.m,
            CmykChannel::Yellow => self.y,
            CmykChannel::Key => self.k,
            CmykChannel::Opacity => self.a,
        }
    }

    fn with(mut self, channel: CmykChannel, value: f64) -> Self {
        match channel {
            CmykChannel::Cyan => self.c = value,
            CmykChannel::Magenta => self.m = value,
            CmykChannel::Yellow => self.y = value,
            CmykChannel::Key => self.k = value,
            CmykChannel::Opacity => self.a = value,
        }
        self
    }
}

impl RandomColor for Cmyk {
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self {
        Cmyk {
            c: rng.unit_closed(),
            m: rng.unit_closed(),
            y: rng.unit_closed(),
            k: rng.unit_closed(),
            a: opacity,
        }
    }
}

impl Mutate for Cmyk {
    type Channel = CmykChannel;

    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: CmykChannel,
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
