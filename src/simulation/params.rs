//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Simulation parameters that control seeding and the evolution step.
///
/// Missing fields deserialize to their defaults, so a host config file only
/// needs to name the values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of creatures in the population.
    pub n_creatures: usize,
    /// Width in pixels available for the seed-time layout.
    pub layout_width: f32,
    /// Creature circle radius in pixels. Layout cells are one diameter wide.
    pub creature_radius: f32,
    /// Distance below which the whole population counts as converged on the
    /// background, triggering a background reset.
    pub convergence_threshold: f32,
    /// Maximum per-channel offset applied by color drift each tick.
    pub drift_amount: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n_creatures: 28,
            layout_width: 640.0,
            creature_radius: 40.0,
            convergence_threshold: 0.01,
            drift_amount: 0.01,
        }
    }
}
