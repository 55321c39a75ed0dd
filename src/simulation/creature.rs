//! Creature entities and the deterministic seed-time layout.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// A colored creature in the population.
///
/// The color is the creature's entire genome: it is what selection acts on
/// each tick. The position is assigned once at seed time and only matters to
/// the host renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Stable identifier, equal to the creature's seed index.
    pub id: usize,
    /// Position in 2D space. Layout only, never read by the evolution step.
    pub pos: Array1<f32>,
    /// Current fill color.
    pub color: Color,
}

impl Creature {
    /// Creates a creature at the given position with the given color.
    pub fn new(id: usize, pos: Array1<f32>, color: Color) -> Self {
        Self { id, pos, color }
    }
}

/// Computes the seed-time position of the creature at `index`.
///
/// Creatures are packed left-to-right, then top-to-bottom, in cells one
/// diameter wide. The arithmetic is integer pixel math: the x coordinate
/// wraps at `layout_width`, and the row advances every
/// `layout_width / diameter` creatures.
///
/// The caller must ensure `layout_width >= 2 * radius` and that `radius`
/// rounds to at least one pixel.
pub fn row_packed_position(index: usize, layout_width: f32, radius: f32) -> Array1<f32> {
    let radius = radius.round() as usize;
    let diameter = 2 * radius;
    let width = layout_width.floor() as usize;
    let per_row = width / diameter;

    let x = (index * diameter + radius) % width;
    let y = (index / per_row) * diameter + radius;

    Array1::from_vec(vec![x as f32, y as f32])
}
