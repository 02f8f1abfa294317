//! Externally owned simulation parameters.
//!
//! Ranges are advisory: a UI slider clamps them, the engine does not. The
//! only clamp the engine applies is on the derived spread chance.

use serde::{Deserialize, Serialize};

/// Side length of the grid used when the caller has no preference.
pub const DEFAULT_GRID_SIZE: usize = 200;

/// Fraction of cells seeded as `Tree` by `create_initial_grid`.
pub const INITIAL_TREE_PROBABILITY: f64 = 0.3;

/// How a tree with several burning neighbours decides whether it ignites.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadModel {
    /// Scan neighbours in row-major order, one draw per burning neighbour,
    /// and stop at the first draw that ignites.
    #[default]
    FirstMatch,
    /// One draw per tree against `1 - prod(1 - p_i)` over all burning
    /// neighbours.
    Union,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Chance an `Empty` cell becomes `Tree` in one step, in [0, 1].
    pub growth_probability: f64,
    /// Compass heading the wind blows toward, in degrees [0, 360).
    pub wind_direction: f64,
    /// Wind magnitude in [0, 20]; each unit shifts spread chance by 0.1.
    pub wind_strength: f64,
    /// Relative humidity percentage in [0, 100].
    pub humidity: f64,
    pub spread_model: SpreadModel,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            growth_probability: 0.01,
            wind_direction: 90.0,
            wind_strength: 5.0,
            humidity: 30.0,
            spread_model: SpreadModel::FirstMatch,
        }
    }
}

impl SimParams {
    /// Multiplier applied to every spread chance: `1 - humidity / 100`.
    #[must_use]
    pub fn humidity_factor(&self) -> f64 {
        1.0 - self.humidity / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_ui_state() {
        let params = SimParams::default();
        assert_eq!(params.growth_probability, 0.01);
        assert_eq!(params.wind_direction, 90.0);
        assert_eq!(params.wind_strength, 5.0);
        assert_eq!(params.humidity, 30.0);
        assert_eq!(params.spread_model, SpreadModel::FirstMatch);
    }

    #[test]
    fn humidity_factor_is_linear() {
        let mut params = SimParams::default();
        params.humidity = 0.0;
        assert_eq!(params.humidity_factor(), 1.0);
        params.humidity = 100.0;
        assert_eq!(params.humidity_factor(), 0.0);
        params.humidity = 25.0;
        assert_eq!(params.humidity_factor(), 0.75);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: SimParams =
            serde_json::from_str(r#"{ "humidity": 80, "spread_model": "union" }"#).unwrap();
        assert_eq!(params.humidity, 80.0);
        assert_eq!(params.spread_model, SpreadModel::Union);
        assert_eq!(params.wind_direction, 90.0);
        assert_eq!(params.growth_probability, 0.01);
    }
}
