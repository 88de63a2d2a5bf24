//! Hue, chroma, lightness, where lightness is the mean of the largest and
//! smallest RGB component. Full chroma is only reachable at lightness 0.5.

use super::{compose, decompose, opaque, Rgb};
use crate::chroma::{impl_chroma_model, ChromaChannel};
use crate::error::ColorError;
use crate::gamut::{max_chroma_for_apex, min_max_second_for_apex, ChromaModel};
use crate::hue::Hue;
use crate::ops::Channel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hcl {
    pub h: Hue,
    pub c: f64,
    pub l: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HclChannel {
    Hue,
    Chroma,
    Lightness,
    Opacity,
}

impl Hcl {
    pub fn new(h: Hue, c: f64, l: f64) -> Self {
        Hcl { h, c, l, a: 1.0 }
    }

    /// Largest chroma at `lightness`: `1 - |2l - 1|`.
    pub fn max_chroma(lightness: f64) -> f64 {
        max_chroma_for_apex(0.5, lightness)
    }

    /// Legal lightness range at `chroma`: `[c / 2, 1 - c / 2]`.
    pub fn min_max_lightness(chroma: f64) -> (f64, f64) {
        min_max_second_for_apex(0.5, chroma)
    }
}

impl From<Rgb> for Hcl {
    fn from(rgb: Rgb) -> Self {
        let d = decompose(&rgb);
        Hcl {
            h: d.hue,
            c: d.chroma,
            l: 0.5 * (d.max + d.min),
            a: rgb.a,
        }
    }
}

impl From<Hcl> for Rgb {
    fn from(hcl: Hcl) -> Self {
        compose(hcl.h, hcl.c, hcl.l - 0.5 * hcl.c, hcl.a)
    }
}

impl From<HclChannel> for ChromaChannel {
    fn from(ch: HclChannel) -> Self {
        match ch {
            HclChannel::Hue => ChromaChannel::Hue,
            HclChannel::Chroma => ChromaChannel::Chroma,
            HclChannel::Lightness => ChromaChannel::Second,
            HclChannel::Opacity => ChromaChannel::Opacity,
        }
    }
}

impl FromStr for HclChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for HclChannel {
    const MODEL: &'static str = "hcl";
    const ALL: &'static [Self] = &[
        HclChannel::Hue,
        HclChannel::Chroma,
        HclChannel::Lightness,
        HclChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            HclChannel::Hue => "hue",
            HclChannel::Chroma => "chroma",
            HclChannel::Lightness => "lightness",
            HclChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            HclChannel::Hue => "h",
            HclChannel::Chroma => "c",
            HclChannel::Lightness => "l",
            HclChannel::Opacity => "a",
        }
    }

    fn is_hue(self) -> bool {
        self == HclChannel::Hue
    }

    fn is_opacity(self) -> bool {
        self == HclChannel::Opacity
    }
}


impl ChromaModel for Hcl {
    fn from_parts(hue: Hue, chroma: f64, second: f64, opacity: f64) -> Self {
        Hcl {
            h: hue,
            c: chroma,
            l: second,
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
        self.l
    }

    fn opacity(&self) -> f64 {
        self.a
    }

    fn apex(_hue: Hue) -> f64 {
        0.5
    }
}

impl_chroma_model!(Hcl, HclChannel);
