//! 9-box grid geometry: x is performance, y is potential, both ranked 1..=3.

use crate::errors::EngineError;
use crate::models::employee::{Assessment, Level};

/// Display labels per cell, indexed `[potential - 1][performance - 1]`.
const CELL_LABELS: [[&str; 3]; 3] = [
    ["Talent Risk", "Effective Contributor", "Trusted Professional"],
    ["Inconsistent Player", "Core Player", "High Performer"],
    ["Rough Diamond", "Emerging Leader", "Future Leader"],
];

pub fn to_box_key(performance: Level, potential: Level) -> String {
    format!("{}-{}", performance.rank(), potential.rank())
}

/// Inverse of `to_box_key`'s coordinate mapping.
pub fn from_grid_coordinates(x: i64, y: i64) -> Result<(Level, Level), EngineError> {
    let level = |v: i64| u8::try_from(v).ok().and_then(Level::from_rank);
    match (level(x), level(y)) {
        (Some(performance), Some(potential)) => Ok((performance, potential)),
        _ => Err(EngineError::InvalidCoordinate { x, y }),
    }
}

/// Parses a `"{x}-{y}"` key back into levels.
pub fn parse_box_key(box_key: &str) -> Result<(Level, Level), EngineError> {
    let (x, y) = box_key
        .split_once('-')
        .and_then(|(x, y)| Some((x.trim().parse::<i64>().ok()?, y.trim().parse::<i64>().ok()?)))
        .ok_or(EngineError::InvalidCoordinate { x: 0, y: 0 })?;
    from_grid_coordinates(x, y)
}

pub fn cell_label(performance: Level, potential: Level) -> &'static str {
    CELL_LABELS[usize::from(potential.rank() - 1)][usize::from(performance.rank() - 1)]
}

/// All nine box keys in row-major order from 1-1 to 3-3.
pub fn all_box_keys() -> Vec<String> {
    Level::ALL
        .iter()
        .flat_map(|&potential| {
            Level::ALL
                .iter()
                .map(move |&performance| to_box_key(performance, potential))
        })
        .collect()
}

/// Placement from labels. Missing levels default to medium.
pub fn place(performance: Option<Level>, potential: Option<Level>) -> Assessment {
    Assessment::new(performance.unwrap_or_default(), potential.unwrap_or_default())
}

/// Placement from a drop onto grid coordinates.
pub fn place_at(x: i64, y: i64) -> Result<Assessment, EngineError> {
    let (performance, potential) = from_grid_coordinates(x, y)?;
    Ok(Assessment::new(performance, potential))
}
