use std::fs;
use std::path::Path;

use wildfire::{SimParams, SpreadModel};

use crate::Args;

/// Defaults, then the optional JSON file, then individual flags.
pub fn resolve_params(args: &Args) -> Result<SimParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => load_params(path)?,
        None => SimParams::default(),
    };
    if let Some(v) = args.growth_probability {
        params.growth_probability = v;
    }
    if let Some(v) = args.wind_direction {
        params.wind_direction = v;
    }
    if let Some(v) = args.wind_strength {
        params.wind_strength = v;
    }
    if let Some(v) = args.humidity {
        params.humidity = v;
    }
    if args.union_spread {
        params.spread_model = SpreadModel::Union;
    }
    Ok(params)
}

fn load_params(path: &Path) -> Result<SimParams, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("reading {}: {e}", path.display()))?;
    let params = serde_json::from_str(&text)
        .map_err(|e| format!("parsing {}: {e}", path.display()))?;
    Ok(params)
}

/// Parse `ROW,COL`.
pub fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("row {row:?}: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("col {col:?}: {e}"))?;
    Ok((row, col))
}
