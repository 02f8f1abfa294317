//! Tree cell: catches fire from burning neighbours.
//!
//! First-match scans neighbours in row-major order with one draw per burning
//! neighbour and stops at the first success, so the realised ignition chance
//! depends on scan order. Union makes a single draw against the combined
//! chance `1 - prod(1 - p_i)`.

use rand::Rng;

use super::StepContext;
use crate::api::Neighborhood;
use crate::cell::CellState;
use crate::params::SpreadModel;
use crate::wind::spread_chance;

pub fn update_tree<R: Rng + ?Sized>(
    view: &Neighborhood,
    ctx: &StepContext,
    rng: &mut R,
) -> CellState {
    let ignites = match ctx.params.spread_model {
        SpreadModel::FirstMatch => first_match(view, ctx, rng),
        SpreadModel::Union => union(view, ctx, rng),
    };
    if ignites {
        CellState::Burning
    } else {
        CellState::Tree
    }
}

fn first_match<R: Rng + ?Sized>(view: &Neighborhood, ctx: &StepContext, rng: &mut R) -> bool {
    for (di, dj) in view.burning() {
        let chance = spread_chance(ctx.params, ctx.wind, di, dj);
        if rng.gen::<f64>() < chance {
            return true;
        }
    }
    false
}

fn union<R: Rng + ?Sized>(view: &Neighborhood, ctx: &StepContext, rng: &mut R) -> bool {
    let mut any_burning = false;
    let mut survive = 1.0;
    for (di, dj) in view.burning() {
        any_burning = true;
        survive *= 1.0 - spread_chance(ctx.params, ctx.wind, di, dj);
    }
    // no draw when nothing nearby is burning
    any_burning && rng.gen::<f64>() < 1.0 - survive
}
