//! RGBA color values with mutation and distance operations.
//!
//! Colors are immutable values: `mutate` returns a new color instead of
//! modifying in place. Channels are not clamped after mutation, so long
//! mutation chains can drift outside [0, 1]; the host renderer decides how
//! to display out-of-gamut values.

use serde::{Deserialize, Serialize};

use super::random::Random;

/// An RGBA color with `f32` channels nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Creates a color from explicit channel values.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color with uniformly random RGB channels.
    pub fn random(rng: &mut Random) -> Self {
        Self {
            r: rng.unit(),
            g: rng.unit(),
            b: rng.unit(),
            a: 1.0,
        }
    }

    /// Returns a copy with each RGB channel independently offset by a
    /// uniform value in [-amount, amount).
    ///
    /// Alpha is unchanged and the offset channels are not clamped.
    pub fn mutate(&self, rng: &mut Random, amount: f32) -> Self {
        Self {
            r: self.r + rng.in_range(-amount, amount),
            g: self.g + rng.in_range(-amount, amount),
            b: self.b + rng.in_range(-amount, amount),
            a: self.a,
        }
    }

    /// Calculates the Euclidean distance to another color over the RGB
    /// channels. Alpha is ignored.
    ///
    /// # Returns
    ///
    /// A non-negative, symmetric distance that is zero exactly when the RGB
    /// channels match.
    pub fn distance(&self, other: &Color) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}
