//! Population state and the per-tick evolution step.
//!
//! Each tick ranks the population by color distance to the background,
//! resets the background once every creature is nearly indistinguishable
//! from it, copies the best-matching color over the worst-matching ones,
//! and applies a small random drift to a handful of creatures.

use log::debug;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::creature::{self, Creature};
use super::error::SimulationError;
use super::params::Params;
use super::random::Random;

/// One culled creature per this many creatures, per tick.
const CULL_DIVISOR: usize = 20;
/// One drifted creature per this many creatures, per tick.
const DRIFT_DIVISOR: usize = 10;

/// The simulation state: a fixed population of creatures and the background
/// color they are selected toward.
///
/// Fields are public so the host renderer can read creature colors and
/// positions directly after each tick. The creature order is stable and
/// index-addressable for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habitat {
    /// All creatures, in seed order.
    pub creatures: Vec<Creature>,
    /// The evolutionary target color. Replaced wholesale when the population
    /// converges on it.
    pub background: Color,
    /// Number of completed ticks.
    pub ticks: u64,
}

impl Habitat {
    /// Creates a habitat with `n_creatures` randomly colored creatures laid
    /// out in rows, and a random background.
    ///
    /// # Errors
    ///
    /// Fails without creating any state when the layout width is not
    /// positive, the creature radius rounds to zero pixels, or the layout
    /// width cannot fit a single creature cell.
    pub fn seed(params: &Params, rng: &mut Random) -> Result<Self, SimulationError> {
        if params.layout_width <= 0.0 {
            return Err(SimulationError::InvalidLayoutWidth {
                width: params.layout_width,
            });
        }
        let radius = params.creature_radius.round() as usize;
        if radius == 0 {
            return Err(SimulationError::InvalidCreatureRadius {
                radius: params.creature_radius,
            });
        }
        let diameter = 2 * radius;
        if (params.layout_width.floor() as usize) < diameter {
            return Err(SimulationError::LayoutWidthTooNarrow {
                width: params.layout_width,
                diameter,
            });
        }

        let mut creatures = Vec::with_capacity(params.n_creatures);
        for i in 0..params.n_creatures {
            let pos =
                creature::row_packed_position(i, params.layout_width, params.creature_radius);
            creatures.push(Creature::new(i, pos, Color::random(rng)));
        }

        Ok(Self {
            creatures,
            background: Color::random(rng),
            ticks: 0,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// In order: ranks creatures by color distance to the background, resets
    /// the background if even the farthest creature is within the
    /// convergence threshold, overwrites the `N / 20` worst-matching colors
    /// with the current best-matching one, then drifts `N / 10` randomly
    /// chosen colors by at most `drift_amount` per channel.
    ///
    /// # Errors
    ///
    /// Fails without mutating any state when the population is empty.
    pub fn tick(&mut self, params: &Params, rng: &mut Random) -> Result<(), SimulationError> {
        if self.creatures.is_empty() {
            return Err(SimulationError::EmptyPopulation);
        }

        // distances to the pre-tick background, by creature index
        let distances: Vec<f32> = self
            .creatures
            .iter()
            .map(|c| c.color.distance(&self.background))
            .collect();

        // rank creature indices nearest-first; the sort is stable, so ties
        // keep seed order
        let mut ranked: Vec<usize> = (0..self.creatures.len()).collect();
        ranked.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

        // converged: even the worst match is nearly the background color
        let farthest = ranked[ranked.len() - 1];
        if distances[farthest] < params.convergence_threshold {
            self.background = Color::random(rng);
            debug!(
                "population converged at tick {}, background reset",
                self.ticks
            );
        }

        // culling: the worst matches inherit the current best match's color
        for _ in 0..self.creatures.len() / CULL_DIVISOR {
            if let Some(worst) = ranked.pop() {
                let copy = self.creatures[ranked[0]].color;
                self.creatures[worst].color = copy;
            }
        }

        // drift: the index is drawn against the ranked list as shrunk by
        // culling, so creatures in the last N / 20 seed positions never
        // drift
        for _ in 0..self.creatures.len() / DRIFT_DIVISOR {
            let i = rng.index(ranked.len())?;
            self.creatures[i].color = self.creatures[i].color.mutate(rng, params.drift_amount);
        }

        self.ticks += 1;
        Ok(())
    }
}
