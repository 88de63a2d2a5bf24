//! Hue, chroma, luma, with Rec. 601 luma weights.
//!
//! Unlike value and lightness, the luma of the fully saturated color depends on
//! hue: 0.114 for blue, 0.886 for yellow. The gamut triangle therefore tilts as
//! hue changes, and a pure hue shift can carry an in-gamut color out of it. The
//! mutation wrapper catches that case by retrying, then projecting.

use super::{compose, decompose, luma, opaque, pure_hue, Rgb};
use crate::chroma::{impl_chroma_model, ChromaChannel};
use crate::error::ColorError;
use crate::gamut::{max_chroma_for_apex, min_max_second_for_apex, ChromaModel};
use crate::hue::Hue;
use crate::ops::Channel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hcy {
    pub h: Hue,
    pub c: f64,
    pub y: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HcyChannel {
    Hue,
    Chroma,
    Luma,
    Opacity,
}

impl Hcy {
    pub fn new(h: Hue, c: f64, y: f64) -> Self {
        Hcy { h, c, y, a: 1.0 }
    }

    /// Luma of the fully saturated color at `hue`.
    pub fn apex_luma(hue: Hue) -> f64 {
        let [r, g, b] = pure_hue(hue);
        luma(r, g, b)
    }

    /// Largest chroma at `hue` and `luma`.
    pub fn max_chroma(hue: Hue, luma: f64) -> f64 {
        max_chroma_for_apex(Self::apex_luma(hue), luma)
    }

    /// Legal luma range at `hue` and `chroma`.
    pub fn min_max_luma(hue: Hue, chroma: f64) -> (f64, f64) {
        min_max_second_for_apex(Self::apex_luma(hue), chroma)
    }
}

impl From<Rgb> for Hcy {
    fn from(rgb: Rgb) -> Self {
        let d = decompose(&rgb);
        Hcy {
            h: d.hue,
            c: d.chroma,
            y: luma(rgb.r, rgb.g, rgb.b),
            a: rgb.a,
        }
    }
}

impl From<Hcy> for Rgb {
    fn from(hcy: Hcy) -> Self {
        let m = hcy.y - hcy.c * Hcy::apex_luma(hcy.h);
        compose(hcy.h, hcy.c, m, hcy.a)
    }
}

impl From<HcyChannel> for ChromaChannel {
    fn from(ch: HcyChannel) -> Self {
        match ch {
            HcyChannel::Hue => ChromaChannel::Hue,
            HcyChannel::Chroma => ChromaChannel::Chroma,
            HcyChannel::Luma => ChromaChannel::Second,
            HcyChannel::Opacity => ChromaChannel::Opacity,
        }
    }
}

impl FromStr for HcyChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Channel for HcyChannel {
    const MODEL: &'static str = "hcy";
    const ALL: &'static [Self] = &[
        HcyChannel::Hue,
        HcyChannel::Chroma,
        HcyChannel::Luma,
        HcyChannel::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            HcyChannel::Hue => "hue",
            HcyChannel::Chroma => "chroma",
            HcyChannel::Luma => "luma",
            HcyChannel::Opacity => "opacity",
        }
    }

    fn short(self) -> &'static str {
        match self {
            HcyChannel::Hue => "h",
            HcyChannel::Chroma => "c",
            HcyChannel::Luma => "y",
            HcyChannel::Opacity => "a",
        }
    }

    fn is_hue(self) -> bool {
        self == HcyChannel::Hue
    }

    fn is_opacity(self) -> bool {
        self == HcyChannel::Opacity
    }
}


impl ChromaModel for Hcy {
    fn from_parts(hue: Hue, chroma: f64, second: f64, opacity: f64) -> Self {
        Hcy {
            h: hue,
            c: chroma,
            y: second,
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
        self.y
    }

    fn opacity(&self) -> f64 {
        self.a
    }

    fn apex(hue: Hue) -> f64 {
        Hcy::apex_luma(hue)
    }
}

impl_chroma_model!(Hcy, HcyChannel);
