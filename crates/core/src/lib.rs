#![deny(unsafe_code)]
//! Uniform random color generation and perturbation across nine color models.
//!
//! Provides the scalar perturbation primitives (shift, spread, lerp), the
//! circular `Hue`, the `RandomSource` abstraction with the `Xorshift64` PRNG,
//! the triangle sampler and projection behind the chroma-based models, the
//! validity-correcting retry wrapper, the models themselves (`Rgb`, `Cmy`,
//! `Cmyk`, `Hsv`, `Hsl`, `Hsy`, `Hcv`, `Hcl`, `Hcy`) and a reproducible
//! `Recipe`.

pub mod chroma;
pub mod error;
pub mod gamut;
pub mod hue;
pub mod model;
pub mod ops;
pub mod params;
pub mod prng;
pub mod random;
pub mod recipe;
pub mod scalar;
pub mod triangle;

pub use chroma::ChromaChannel;
pub use error::ColorError;
pub use gamut::{generate_valid, ChromaModel, GamutCheck};
pub use hue::Hue;
pub use model::{
    AnyColor, Cmy, CmyChannel, Cmyk, CmykChannel, ColorModel, Hcl, HclChannel, Hcv, HcvChannel,
    Hcy, HcyChannel, Hsl, HslChannel, Hsv, HsvChannel, Hsy, HsyChannel, Opacity, Rgb, RgbChannel,
};
pub use ops::{Channel, ChannelOp, ChannelSet, Mutate, RandomColor};
pub use prng::Xorshift64;
#[cfg(feature = "rand")]
pub use random::RandAdapter;
pub use random::RandomSource;
pub use recipe::Recipe;
pub use triangle::Triangle;
