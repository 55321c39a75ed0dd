//! Typed errors for invalid simulation inputs.

use thiserror::Error;

/// Errors raised when validating simulation inputs.
///
/// Every variant is an invalid-argument failure: the call is rejected before
/// any simulation state is mutated, so a failed call leaves the habitat
/// exactly as it was.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// `tick` requires at least one creature to rank.
    #[error("population must contain at least one creature")]
    EmptyPopulation,
    /// Seeding requires a positive layout width.
    #[error("layout width must be positive, got {width}")]
    InvalidLayoutWidth {
        /// The rejected layout width.
        width: f32,
    },
    /// Seeding requires a creature radius of at least one pixel.
    #[error("creature radius must round to at least one pixel, got {radius}")]
    InvalidCreatureRadius {
        /// The rejected creature radius.
        radius: f32,
    },
    /// Seeding requires room for at least one creature cell per row.
    #[error("layout width {width} cannot fit a creature cell {diameter} pixels wide")]
    LayoutWidthTooNarrow {
        /// The rejected layout width.
        width: f32,
        /// The required cell width in pixels.
        diameter: usize,
    },
    /// `Random::index` requires a non-empty range to sample from.
    #[error("random index bound must be at least 1")]
    ZeroIndexBound,
}
