use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Three-point rating used on both grid axes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Grid rank: low=1, medium=2, high=3.
    pub fn rank(self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Level> {
        match rank {
            1 => Some(Level::Low),
            2 => Some(Level::Medium),
            3 => Some(Level::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            other => Err(format!("'{other}' is not one of low, medium, high")),
        }
    }
}

/// A 9-box placement. `box_key` is derived from the two levels and is only
/// ever produced by `Assessment::new`, so the three fields cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub performance: Level,
    pub potential: Level,
    pub box_key: String,
}

impl Assessment {
    pub fn new(performance: Level, potential: Level) -> Self {
        Self {
            performance,
            potential,
            box_key: crate::assessment::grid::to_box_key(performance, potential),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
}

/// Employee snapshot as supplied by the caller. The engine never writes it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub department_id: Option<Uuid>,
    /// Join date; `created_at` in the dashboard's records.
    #[serde(alias = "created_at")]
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub assessment: Option<Assessment>,
}
