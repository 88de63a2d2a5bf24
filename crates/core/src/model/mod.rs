//! The supported color models and conversions between them.
//!
//! Every model converts to and from [`Rgb`]. The rectangular models (`Rgb`,
//! `Cmy`, `Cmyk`, `Hsv`, `Hsl`, `Hsy`) have independent channels; the
//! chroma-based models (`Hcv`, `Hcl`, `Hcy`) have a triangular gamut handled by
//! [`crate::gamut`].
//!
//! [`ColorModel`] and [`AnyColor`] select a model at runtime, e.g. from a CLI
//! argument or a recipe file.

pub mod cmy;
pub mod cmyk;
pub mod hcl;
pub mod hcv;
pub mod hcy;
pub mod hsl;
pub mod hsv;
pub mod hsy;
pub mod rgb;

pub use cmy::{Cmy, CmyChannel};
pub use cmyk::{Cmyk, CmykChannel};
pub use hcl::{Hcl, HclChannel};
pub use hcv::{Hcv, HcvChannel};
pub use hcy::{Hcy, HcyChannel};
pub use hsl::{Hsl, HslChannel};
pub use hsv::{Hsv, HsvChannel};
pub use hsy::{Hsy, HsyChannel};
pub use rgb::{Rgb, RgbChannel};

use crate::error::ColorError;
use crate::gamut::{ChromaModel, GamutCheck};
use crate::hue::Hue;
use crate::ops::{Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rec. 601 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Luma of an RGB triple.
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b
}

pub(crate) fn opaque() -> f64 {
    1.0
}

/// The fully saturated RGB color at `hue` (chroma 1, minimum 0).
pub(crate) fn pure_hue(hue: Hue) -> [f64; 3] {
    let h6 = hue.turns() * 6.0;
    let x = 1.0 - ((h6 % 2.0) - 1.0).abs();
    match h6 as usize {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}

/// Hue, chroma, minimum and maximum of an RGB color.
pub(crate) struct Decomposed {
    pub hue: Hue,
    pub chroma: f64,
    pub min: f64,
    pub max: f64,
}

pub(crate) fn decompose(rgb: &Rgb) -> Decomposed {
    let (r, g, b) = (rgb.r, rgb.g, rgb.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let turns = if chroma <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / chroma).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / chroma + 2.0) / 6.0
    } else {
        ((r - g) / chroma + 4.0) / 6.0
    };
    Decomposed {
        hue: Hue::new(turns),
        chroma,
        min,
        max,
    }
}

/// Builds `pure_hue(hue) * chroma + m`, clamped to the unit cube.
pub(crate) fn compose(hue: Hue, chroma: f64, m: f64, a: f64) -> Rgb {
    let [r, g, b] = pure_hue(hue);
    Rgb {
        r: (r * chroma + m).clamp(0.0, 1.0),
        g: (g * chroma + m).clamp(0.0, 1.0),
        b: (b * chroma + m).clamp(0.0, 1.0),
        a: a.clamp(0.0, 1.0),
    }
}

/// How whole-space generators choose the opacity of a new color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opacity {
    /// Every color gets this opacity.
    Fixed(f64),
    /// Every color gets an independent uniform opacity.
    Random,
}

impl Default for Opacity {
    fn default() -> Self {
        Opacity::Fixed(1.0)
    }
}

fn random_with<C: RandomColor, R: RandomSource + ?Sized>(
    rng: &mut R,
    opacity: Opacity,
) -> Result<C, ColorError> {
    match opacity {
        Opacity::Fixed(a) => C::random_with_opacity(rng, a),
        Opacity::Random => Ok(C::random_translucent(rng)),
    }
}

/// A color model, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Cmy,
    Cmyk,
    Hsv,
    Hsl,
    Hsy,
    Hcv,
    Hcl,
    Hcy,
}

impl ColorModel {
    pub const ALL: [ColorModel; 9] = [
        ColorModel::Rgb,
        ColorModel::Cmy,
        ColorModel::Cmyk,
        ColorModel::Hsv,
        ColorModel::Hsl,
        ColorModel::Hsy,
        ColorModel::Hcv,
        ColorModel::Hcl,
        ColorModel::Hcy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Cmy => "cmy",
            ColorModel::Cmyk => "cmyk",
            ColorModel::Hsv => "hsv",
            ColorModel::Hsl => "hsl",
            ColorModel::Hsy => "hsy",
            ColorModel::Hcv => "hcv",
            ColorModel::Hcl => "hcl",
            ColorModel::Hcy => "hcy",
        }
    }

    /// Whether the model's gamut is a triangle rather than the unit cube.
    pub fn is_chroma_based(self) -> bool {
        matches!(self, ColorModel::Hcv | ColorModel::Hcl | ColorModel::Hcy)
    }

    /// Channel names, color channels first and opacity last.
    pub fn channel_names(self) -> Vec<&'static str> {
        fn names<C: Channel>() -> Vec<&'static str> {
            C::ALL.iter().map(|ch| ch.name()).collect()
        }
        match self {
            ColorModel::Rgb => names::<RgbChannel>(),
            ColorModel::Cmy => names::<CmyChannel>(),
            ColorModel::Cmyk => names::<CmykChannel>(),
            ColorModel::Hsv => names::<HsvChannel>(),
            ColorModel::Hsl => names::<HslChannel>(),
            ColorModel::Hsy => names::<HsyChannel>(),
            ColorModel::Hcv => names::<HcvChannel>(),
            ColorModel::Hcl => names::<HclChannel>(),
            ColorModel::Hcy => names::<HcyChannel>(),
        }
    }

    /// A uniformly random color of this model. A fixed opacity outside
    /// `[0, 1]` is rejected.
    pub fn random<R: RandomSource + ?Sized>(
        self,
        rng: &mut R,
        opacity: Opacity,
    ) -> Result<AnyColor, ColorError> {
        let color = match self {
            ColorModel::Rgb => AnyColor::Rgb(random_with(rng, opacity)?),
            ColorModel::Cmy => AnyColor::Cmy(random_with(rng, opacity)?),
            ColorModel::Cmyk => AnyColor::Cmyk(random_with(rng, opacity)?),
            ColorModel::Hsv => AnyColor::Hsv(random_with(rng, opacity)?),
            ColorModel::Hsl => AnyColor::Hsl(random_with(rng, opacity)?),
            ColorModel::Hsy => AnyColor::Hsy(random_with(rng, opacity)?),
            ColorModel::Hcv => AnyColor::Hcv(random_with(rng, opacity)?),
            ColorModel::Hcl => AnyColor::Hcl(random_with(rng, opacity)?),
            ColorModel::Hcy => AnyColor::Hcy(random_with(rng, opacity)?),
        };
        Ok(color)
    }

    /// Converts an RGB color into this model.
    pub fn from_rgb(self, rgb: Rgb) -> AnyColor {
        match self {
            ColorModel::Rgb => AnyColor::Rgb(rgb),
            ColorModel::Cmy => AnyColor::Cmy(rgb.into()),
            ColorModel::Cmyk => AnyColor::Cmyk(rgb.into()),
            ColorModel::Hsv => AnyColor::Hsv(rgb.into()),
            ColorModel::Hsl => AnyColor::Hsl(rgb.into()),
            ColorModel::Hsy => AnyColor::Hsy(rgb.into()),
            ColorModel::Hcv => AnyColor::Hcv(rgb.into()),
            ColorModel::Hcl => AnyColor::Hcl(rgb.into()),
            ColorModel::Hcy => AnyColor::Hcy(rgb.into()),
        }
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ColorModel::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ColorError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color of any supported model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum AnyColor {
    Rgb(Rgb),
    Cmy(Cmy),
    Cmyk(Cmyk),
    Hsv(Hsv),
    Hsl(Hsl),
    Hsy(Hsy),
    Hcv(Hcv),
    Hcl(Hcl),
    Hcy(Hcy),
}

fn mutate_named<C: Mutate, R: RandomSource + ?Sized>(
    color: &C,
    channel: Option<&str>,
    op: ChannelOp,
    rng: &mut R,
) -> Result<C, ColorError> {
    match channel {
        Some(name) => color.mutate_channel(C::Channel::parse(name)?, op, rng),
        None => color.mutate(op, rng),
    }
}

fn channel_values<C: ChannelSet>(color: &C) -> Vec<(&'static str, f64)> {
    C::Channel::ALL
        .iter()
        .map(|&ch| (ch.name(), color.get(ch)))
        .collect()
}

fn chroma_values<C: ChromaModel + Mutate>(color: &C) -> Vec<(&'static str, f64)> {
    let values = [
        color.hue().turns(),
        color.chroma(),
        color.second(),
        color.opacity(),
    ];
    C::Channel::ALL
        .iter()
        .map(|ch| ch.name())
        .zip(values)
        .collect()
}

impl AnyColor {
    pub fn model(&self) -> ColorModel {
        match self {
            AnyColor::Rgb(_) => ColorModel::Rgb,
            AnyColor::Cmy(_) => ColorModel::Cmy,
            AnyColor::Cmyk(_) => ColorModel::Cmyk,
            AnyColor::Hsv(_) => ColorModel::Hsv,
            AnyColor::Hsl(_) => ColorModel::Hsl,
            AnyColor::Hsy(_) => ColorModel::Hsy,
            AnyColor::Hcv(_) => ColorModel::Hcv,
            AnyColor::Hcl(_) => ColorModel::Hcl,
            AnyColor::Hcy(_) => ColorModel::Hcy,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            AnyColor::Rgb(c) => c,
            AnyColor::Cmy(c) => c.into(),
            AnyColor::Cmyk(c) => c.into(),
            AnyColor::Hsv(c) => c.into(),
            AnyColor::Hsl(c) => c.into(),
            AnyColor::Hsy(c) => c.into(),
            AnyColor::Hcv(c) => c.into(),
            AnyColor::Hcl(c) => c.into(),
            AnyColor::Hcy(c) => c.into(),
        }
    }

    /// Whether the color is displayable: inside the unit cube for rectangular
    /// models, inside the hue's triangle for chroma-based ones.
    pub fn is_valid(&self) -> bool {
        match self {
            AnyColor::Hcv(c) => c.is_valid(),
            AnyColor::Hcl(c) => c.is_valid(),
            AnyColor::Hcy(c) => c.is_valid(),
            other => other
                .channels()
                .iter()
                .all(|&(_, v)| (0.0..=1.0).contains(&v)),
        }
    }

    /// `(name, value)` for every channel; hue is reported in turns.
    pub fn channels(&self) -> Vec<(&'static str, f64)> {
        match self {
            AnyColor::Rgb(c) => channel_values(c),
            AnyColor::Cmy(c) => channel_values(c),
            AnyColor::Cmyk(c) => channel_values(c),
            AnyColor::Hsv(c) => channel_values(c),
            AnyColor::Hsl(c) => channel_values(c),
            AnyColor::Hsy(c) => channel_values(c),
            AnyColor::Hcv(c) => chroma_values(c),
            AnyColor::Hcl(c) => chroma_values(c),
            AnyColor::Hcy(c) => chroma_values(c),
        }
    }

    /// Applies `op` to the named channel, or to every color channel when
    /// `channel` is `None`.
    pub fn mutate<R: RandomSource + ?Sized>(
        &self,
        channel: Option<&str>,
        op: ChannelOp,
        rng: &mut R,
    ) -> Result<AnyColor, ColorError> {
        Ok(match self {
            AnyColor::Rgb(c) => AnyColor::Rgb(mutate_named(c, channel, op, rng)?),
            AnyColor::Cmy(c) => AnyColor::Cmy(mutate_named(c, channel, op, rng)?),
            AnyColor::Cmyk(c) => AnyColor::Cmyk(mutate_named(c, channel, op, rng)?),
            AnyColor::Hsv(c) => AnyColor::Hsv(mutate_named(c, channel, op, rng)?),
            AnyColor::Hsl(c) => AnyColor::Hsl(mutate_named(c, channel, op, rng)?),
            AnyColor::Hsy(c) => AnyColor::Hsy(mutate_named(c, channel, op, rng)?),
            AnyColor::Hcv(c) => AnyColor::Hcv(mutate_named(c, channel, op, rng)?),
            AnyColor::Hcl(c) => AnyColor::Hcl(mutate_named(c, channel, op, rng)?),
            AnyColor::Hcy(c) => AnyColor::Hcy(mutate_named(c, channel, op, rng)?),
        })
    }

    /// Interpolates toward `target`, converted into this color's model first.
    pub fn lerp_toward<R: RandomSource + ?Sized>(
        &self,
        target: &AnyColor,
        rng: &mut R,
    ) -> Result<AnyColor, ColorError> {
        let target = if target.model() == self.model() {
            *target
        } else {
            self.model().from_rgb(target.to_rgb())
        };
        Ok(match (self, &target) {
            (AnyColor::Rgb(a), AnyColor::Rgb(b)) => AnyColor::Rgb(a.lerp_toward(b, rng)?),
            (AnyColor::Cmy(a), AnyColor::Cmy(b)) => AnyColor::Cmy(a.lerp_toward(b, rng)?),
            (AnyColor::Cmyk(a), AnyColor::Cmyk(b)) => AnyColor::Cmyk(a.lerp_toward(b, rng)?),
            (AnyColor::Hsv(a), AnyColor::Hsv(b)) => AnyColor::Hsv(a.lerp_toward(b, rng)?),
            (AnyColor::Hsl(a), AnyColor::Hsl(b)) => AnyColor::Hsl(a.lerp_toward(b, rng)?),
            (AnyColor::Hsy(a), AnyColor::Hsy(b)) => AnyColor::Hsy(a.lerp_toward(b, rng)?),
            (AnyColor::Hcv(a), AnyColor::Hcv(b)) => AnyColor::Hcv(a.lerp_toward(b, rng)?),
            (AnyColor::Hcl(a), AnyColor::Hcl(b)) => AnyColor::Hcl(a.lerp_toward(b, rng)?),
            (AnyColor::Hcy(a), AnyColor::Hcy(b)) => AnyColor::Hcy(a.lerp_toward(b, rng)?),
            (_, other) => {
                return Err(ColorError::InvalidColor(format!(
                    "cannot interpolate {} toward {}",
                    self.model(),
                    other.model()
                )))
            }
        })
    }
}
