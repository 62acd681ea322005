use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::WaypointError;

//─────────────────────────────────────────────────────────────────────────────

/// A supply a traveler can pick up at a rest stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Supply {
    Food,
    Axe,
    Raft,
}

impl FromStr for Supply {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "food" => Ok(Supply::Food),
            "axe" => Ok(Supply::Axe),
            "raft" => Ok(Supply::Raft),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Supply::Food => write!(f, "food"),
            Supply::Axe => write!(f, "axe"),
            Supply::Raft => write!(f, "raft"),
        }
    }
}

/// An obstacle blocking the way out of a rest stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Obstacle {
    /// Needs one raft to cross.
    River,
    /// Needs one axe to clear.
    FallenTree,
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obstacle::River => write!(f, "river"),
            Obstacle::FallenTree => write!(f, "fallen tree"),
        }
    }
}

/// A labeled rest stop on the mountain. Immutable once built.
///
/// Waypoints compare by label only; two waypoints with the same label are
/// the same stop as far as the mountain is concerned.
#[derive(Clone, Debug)]
pub struct Waypoint {
    label: String,
    supplies: Vec<Supply>,
    obstacles: Vec<Obstacle>,
}

impl Waypoint {
    /// Builds a waypoint.
    ///
    /// # Errors
    /// Returns `WaypointError::InvalidWaypoint` if `label` is empty or only whitespace.
    pub fn new(
        label: impl Into<String>,
        supplies: Vec<Supply>,
        obstacles: Vec<Obstacle>,
    ) -> Result<Self, WaypointError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(WaypointError::InvalidWaypoint);
        }
        Ok(Self {
            label,
            supplies,
            obstacles,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Waypoint {}

impl PartialOrd for Waypoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Waypoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}
