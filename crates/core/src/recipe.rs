//! Reproducible description of a batch of random colors.
//!
//! A [`Recipe`] captures everything needed to regenerate the same colors: model,
//! PRNG seed, count and opacity policy. Two identical recipes produce
//! bit-identical output.

use crate::error::ColorError;
use crate::model::{AnyColor, ColorModel, Opacity};
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub model: ColorModel,
    pub seed: u64,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub opacity: Opacity,
}

impl Recipe {
    /// One opaque color.
    pub fn new(model: ColorModel, seed: u64) -> Self {
        Self {
            model,
            seed,
            count: default_count(),
            opacity: Opacity::default(),
        }
    }

    /// Checks that at least one color is requested and that a fixed opacity
    /// lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.count == 0 {
            return Err(ColorError::InvalidRecipe("count must be at least 1".into()));
        }
        if let Opacity::Fixed(a) = self.opacity {
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorError::InvalidRecipe(format!(
                    "opacity {a} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a recipe from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let recipe: Recipe =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidRecipe(e.to_string()))?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Reads a recipe file.
    pub fn load(path: &Path) -> Result<Self, ColorError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ColorError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Generates `count` colors from a fresh PRNG seeded with `seed`.
    pub fn generate(&self) -> Result<Vec<AnyColor>, ColorError> {
        self.validate()?;
        let mut rng = Xorshift64::new(self.seed);
        log::debug!(
            "generating {} {} colors from seed {}",
            self.count,
            self.model,
            self.seed
        );
        (0..self.count)
            .map(|_| self.model.random(&mut rng, self.opacity))
            .collect()
    }
}
