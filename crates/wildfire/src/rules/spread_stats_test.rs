//! Regression test: sampled ignition rates should match the spread chances.

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::api::NEIGHBOR_OFFSETS;
    use crate::cell::CellState;
    use crate::params::{SimParams, SpreadModel};
    use crate::{step, Grid};

    const TRIALS: usize = 4000;
    const TOLERANCE: f64 = 0.03;

    /// 3x3 torus, tree in the centre, fire at the given neighbour offsets.
    fn scene(burning: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(3).unwrap();
        grid.set(1, 1, CellState::Tree);
        for &(di, dj) in burning {
            grid.set((1 + di) as usize, (1 + dj) as usize, CellState::Burning);
        }
        grid
    }

    fn ignition_rate(burning: &[(i32, i32)], params: &SimParams, seed: u64) -> f64 {
        let grid = scene(burning);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hits = (0..TRIALS)
            .filter(|_| {
                let next = step(&grid, params, &mut rng).unwrap();
                next.get(1, 1) == Some(CellState::Burning)
            })
            .count();
        hits as f64 / TRIALS as f64
    }

    fn params(wind_direction: f64, wind_strength: f64, humidity: f64) -> SimParams {
        SimParams {
            growth_probability: 0.0,
            wind_direction,
            wind_strength,
            humidity,
            spread_model: SpreadModel::FirstMatch,
        }
    }

    #[test]
    fn calm_air_spreads_equally_in_all_directions() {
        let p = params(90.0, 0.0, 30.0);
        let expected = 0.3 * 0.7;
        let rates: Vec<f64> = NEIGHBOR_OFFSETS
            .iter()
            .enumerate()
            .map(|(i, &offset)| ignition_rate(&[offset], &p, 100 + i as u64))
            .collect();
        eprintln!("calm rates: {rates:?}");
        for rate in rates {
            assert!((rate - expected).abs() < TOLERANCE, "rate {rate} vs {expected}");
        }
    }

    #[test]
    fn wind_favours_downwind_neighbor() {
        // wind 180° -> offset (0, 1): fire to the right pushes into the tree.
        let p = params(180.0, 2.0, 0.0);
        let downwind = ignition_rate(&[(0, 1)], &p, 1);
        let upwind = ignition_rate(&[(0, -1)], &p, 2);
        let crosswind = ignition_rate(&[(1, 0)], &p, 3);
        eprintln!("down={downwind} up={upwind} cross={crosswind}");
        assert!((downwind - 0.5).abs() < TOLERANCE);
        assert!((upwind - 0.1).abs() < TOLERANCE);
        assert!((crosswind - 0.3).abs() < TOLERANCE);
    }

    #[test]
    fn humidity_damps_sampled_spread() {
        let rates: Vec<f64> = [0.0, 25.0, 50.0, 75.0, 100.0]
            .iter()
            .enumerate()
            .map(|(i, &h)| ignition_rate(&[(-1, -1)], &params(0.0, 0.0, h), 200 + i as u64))
            .collect();
        eprintln!("humidity rates: {rates:?}");
        for pair in rates.windows(2) {
            assert!(pair[1] <= pair[0] + TOLERANCE, "{rates:?}");
        }
        assert_eq!(rates[4], 0.0);
    }

    #[test]
    fn first_match_and_union_agree_on_ignition_rate() {
        let burning = [(-1, -1), (0, 1), (1, 0)];
        let first = params(0.0, 0.0, 0.0);
        let union = SimParams {
            spread_model: SpreadModel::Union,
            ..first
        };
        let expected = 1.0 - 0.7f64.powi(3);
        let first_rate = ignition_rate(&burning, &first, 300);
        let union_rate = ignition_rate(&burning, &union, 301);
        eprintln!("first={first_rate} union={union_rate} expected={expected}");
        assert!((first_rate - expected).abs() < TOLERANCE);
        assert!((union_rate - expected).abs() < TOLERANCE);
    }
}
