//! Wind offset derivation and per-neighbour spread chance.

use crate::params::SimParams;

/// Spread chance from a burning neighbour with no wind and no humidity.
pub const BASE_SPREAD_CHANCE: f64 = 0.3;

/// `wind_strength` units per 1.0 of spread chance.
pub const WIND_STRENGTH_SCALE: f64 = 10.0;

/// Discrete `(di, dj)` neighbour direction snapped from the compass heading.
///
/// `(0, 0)` means no directional bias; it never matches a neighbour offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct WindOffset {
    pub di: i32,
    pub dj: i32,
}

impl WindOffset {
    #[must_use]
    pub fn new(di: i32, dj: i32) -> Self {
        Self { di, dj }
    }

    /// Snap a heading in degrees onto one of the eight neighbour directions.
    ///
    /// `di = -round(sin θ)`, `dj = -round(cos θ)`, with ties rounded to even.
    #[must_use]
    pub fn from_degrees(wind_direction: f64) -> Self {
        let theta = wind_direction.to_radians();
        Self {
            di: snap(theta.sin()),
            dj: snap(theta.cos()),
        }
    }

    /// The opposite direction, which receives the spread penalty.
    #[must_use]
    pub fn upwind(self) -> Self {
        Self {
            di: -self.di,
            dj: -self.dj,
        }
    }

    #[must_use]
    pub fn matches(self, di: i32, dj: i32) -> bool {
        self.di == di && self.dj == dj
    }
}

// -0.0 and NaN both cast to 0.
fn snap(component: f64) -> i32 {
    -component.round_ties_even() as i32
}

/// Probability that a burning neighbour at `(di, dj)` ignites the tree.
///
/// Clamped into [0, 1] whatever the parameters are.
#[must_use]
pub fn spread_chance(params: &SimParams, wind: WindOffset, di: i32, dj: i32) -> f64 {
    let wind_effect = params.wind_strength / WIND_STRENGTH_SCALE;
    let mut base = BASE_SPREAD_CHANCE;
    if wind.matches(di, dj) {
        base += wind_effect;
    } else if wind.upwind().matches(di, dj) {
        base -= wind_effect;
    }
    let chance = (base * params.humidity_factor()).clamp(0.0, 1.0);
    // clamp passes NaN through
    if chance.is_nan() {
        0.0
    } else {
        chance
    }
}
