//! Red, green, blue and opacity, each on `[0, 1]`.
//!
//! `Rgb` is the hub every other model converts through. It also parses and
//! prints hex strings (`#rrggbb` or `#rrggbbaa`) with 8-bit quantization.

use super::opaque;
use crate::error::ColorError;
use crate::ops::{self, Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
    Opacity,
}

fn hex_byte(digits: &str, component: &str) -> Result<f64, ColorError> {
    u8::from_str_radix(digits, 16)
        .map(|v| v as f64 / 255.0)
        .map_err(|e| ColorError::InvalidColor(format!("invalid {component} component: {e}")))
}

fn to_byte(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Rgb {
    /// An opaque color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b, a: 1.0 }
    }

    pub fn with_opacity(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgb { r, g, b, a }
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"`, with or without the `#`, ignoring case.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {hex:?}"
            )));
        }
        let a = if digits.len() == 8 {
            hex_byte(&digits[6..8], "opacity")?
        } else {
            1.0
        };
        Ok(Rgb {
            r: hex_byte(&digits[0..2], "red")?,
            g: hex_byte(&digits[2..4], "green")?,
            b: hex_byte(&digits[4..6], "blue")?,
            a,
        })
    }

    /// `"#rrggbb"` for opaque colors, `"#rrggbbaa"` otherwise. Components are
    /// clamped and rounded to 8 bits.
    pub fn to_hex(self) -> String {
        let (r, g, b) = (to_byte(self.r), to_byte(self.g), to_byte(self.b));
        match to_byte(self.a) {
            255 => format!("#{r:02x}{g:02x}{b:02x}"),
            a => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

impl FromStr for RgbChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for RgbChannel {
    const MODEL: &'static str = "rgb";
    const ALL: &'static [Self] = &[
        RgbChannel::Red,
        RgbChannel::Green,
        RgbChannel::Blue,
        RgbChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            RgbChannel::Red => "red",
            RgbChannel::Green => "green",
            RgbChannel::Blue => "blue",
            RgbChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            RgbChannel::Red => "r",
            RgbChannel::Green => "g",
            RgbChannel::Blue => "b",
            RgbChannel::Opacity => "a",
        }
    }

    fn is_opacity(self) -> bool {
        self == RgbChannel::Opacity
    }
}

impl ChannelSet for Rgb {
    type Channel = RgbChannel;

    fn get(&self, channel: RgbChannel) -> f64 {
        match channel {
            RgbChannel::Red => self.r,
            RgbChannel::Green => self.g,
            RgbChannel::Blue => self.b,
            RgbChannel::Opacity => self.a,
        }
    }

    fn with(mut self, channel: RgbChannel, value: f64) -> Self {
        match channel {
            RgbChannel::Red => self.r = value,
            RgbChannel::Green => self.g = value,
            RgbChannel::Blue => self.b = value,
            RgbChannel::Opacity => self.a = value,
        }
        self
    }
}

impl RandomColor for Rgb {
    fn sample_space<R: RandomSource + ?Sized>(rng: &mut R, opacity: f64) -> Self {
        Rgb {
            r: rng.unit_closed(),
            g: rng.unit_closed(),
            b: rng.unit_closed(),
            a: opacity,
        }
    }
}

impl Mutate for Rgb {
    type Channel = RgbChannel;

    fn mutate_channel<R: RandomSource + ?Sized>(
        &self,
        channel: RgbChannel,
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
