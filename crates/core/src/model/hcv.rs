//! Hue, chroma, value. For a fixed hue the valid (chroma, value) pairs form the
//! triangle with apex at value 1: chroma can never exceed value.

use super::{compose, decompose, opaque, Rgb};
use crate::chroma::{impl_chroma_model, ChromaChannel};
use crate::error::ColorError;
use crate::gamut::{max_chroma_for_apex, min_max_second_for_apex, ChromaModel};
use crate::hue::Hue;
use crate::ops::Channel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hcv {
    pub h: Hue,
    pub c: f64,
    pub v: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HcvChannel {
    Hue,
    Chroma,
    Value,
    Opacity,
}

impl Hcv {
    pub fn new(h: Hue, c: f64, v: f64) -> Self {
        Hcv { h, c, v, a: 1.0 }
    }

    /// Largest chroma at `value`, which is `value` itself. Only black
    /// (`value == 0`) forces zero chroma; at `value == 1` every chroma up to 1
    /// is displayable.
    pub fn max_chroma(value: f64) -> f64 {
        max_chroma_for_apex(1.0, value)
    }

    /// Legal value range at `chroma`: `[chroma, 1]`.
    pub fn min_max_value(chroma: f64) -> (f64, f64) {
        min_max_second_for_apex(1.0, chroma)
    }
}

impl From<Rgb> for Hcv {
    fn from(rgb: Rgb) -> Self {
        let d = decompose(&rgb);
        Hcv {
            h: d.hue,
            c: d.chroma,
            v: d.max,
            a: rgb.a,
        }
    }
}

impl From<Hcv> for Rgb {
    fn from(hcv: Hcv) -> Self {
        compose(hcv.h, hcv.c, hcv.v - hcv.c, hcv.a)
    }
}

impl From<HcvChannel> for ChromaChannel {
    fn from(ch: HcvChannel) -> Self {
        match ch {
            HcvChannel::Hue => ChromaChannel::Hue,
            HcvChannel::Chroma => ChromaChannel::Chroma,
            HcvChannel::Value => ChromaChannel::Second,
            HcvChannel::Opacity => ChromaChannel::Opacity,
        }
    }
}

impl FromStr for HcvChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for HcvChannel {
    const MODEL: &'static str = "hcv";
    const ALL: &'static [Self] = &[
        HcvChannel::Hue,
        HcvChannel::Chroma,
        HcvChannel::Value,
        HcvChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            HcvChannel::Hue => "hue",
            HcvChannel::Chroma => "chroma",
            HcvChannel::Value => "value",
            HcvChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            HcvChannel::Hue => "h",
            HcvChannel::Chroma => "c",
            HcvChannel::Value => "v",
            HcvChannel::Opacity => "a",
        }
    }

    fn is_hue(self) -> bool {
        self == HcvChannel::Hue
    }

    fn is_opacity(self) -> bool {
        self == HcvChannel::Opacity
    }
}


impl ChromaModel for Hcv {
    fn from_parts(hue: Hue, chroma: f64, second: f64, opacity: f64) -> Self {
        Hcv {
            h: hue,
            c: chroma,
            v: second,
            a: opacity,
        }
    }

    fn hue(&self) -> Hue {
        self.h
    }

    fn chroma(&self) -> f64 {
        self.c
    }

    fn second(&self) -> f64 {
        self.v
    }

    fn opacity(&self) -> f64 {
        self.a
    }

    fn apex(_hue: Hue) -> f64 {
        1.0
    }
}

impl_chroma_model!(Hcv, HcvChannel);
