use std::fs;

use super::error::{LineError, WaypointLoaderError};
use crate::mountain::{Obstacle, Supply, Waypoint, WaypointError};

//─────────────────────────────────────────────────────────────────────────────

/// A line that was skipped while loading, kept so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub text: String,
    pub reason: LineError,
}

/// The tokens of one input line, sorted into label, supplies and obstacles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub label: &'a str,
    pub supplies: Vec<Supply>,
    pub obstacles: Vec<Obstacle>,
}

impl ParsedLine<'_> {
    pub fn into_waypoint(self) -> Result<Waypoint, WaypointError> {
        Waypoint::new(self.label, self.supplies, self.obstacles)
    }
}

/// Everything read from one input file, in file order.
#[derive(Debug, Default)]
pub struct LoadedWaypoints {
    pub waypoints: Vec<Waypoint>,
    pub skipped: Vec<SkippedLine>,
}

/// Loads rest stops from a file, one per line.
pub fn load_waypoints_from_file(file_path: &str) -> Result<LoadedWaypoints, WaypointLoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| WaypointLoaderError::ReadFile(file_path.into(), e))?;

    parse_waypoints(&file_content).map_err(|(line, source)| WaypointLoaderError::InvalidWaypoint {
        file: file_path.into(),
        line,
        source,
    })
}

/// Parses every line of `content`. Malformed lines are collected in
/// `skipped`; a line that parses but cannot become a waypoint stops the load
/// and reports its line number.
pub fn parse_waypoints(content: &str) -> Result<LoadedWaypoints, (usize, WaypointError)> {
    let mut loaded = LoadedWaypoints::default();
    for (index, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(parsed) => {
                let waypoint = parsed.into_waypoint().map_err(|e| (index + 1, e))?;
                loaded.waypoints.push(waypoint);
            }
            Err(reason) => loaded.skipped.push(SkippedLine {
                line_number: index + 1,
                text: line.to_string(),
                reason,
            }),
        }
    }
    Ok(loaded)
}

/// Splits one line into a label, its supplies and its obstacles.
///
/// The first token is the label. Supply words count only until the first
/// obstacle word; after that only `river` and the phrase `fallen tree` are
/// kept and every other token is ignored.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, LineError> {
    let mut tokens = line.split_whitespace().peekable();
    let label = tokens.next().ok_or(LineError::MissingLabel)?;

    let mut supplies = Vec::new();
    let mut obstacles = Vec::new();
    let mut in_obstacles = false;

    while let Some(token) = tokens.next() {
        if !in_obstacles {
            if let Ok(supply) = token.parse::<Supply>() {
                supplies.push(supply);
                continue;
            }
            in_obstacles = token == "river" || token == "fallen";
        }
        match token {
            "river" => obstacles.push(Obstacle::River),
            "fallen" if tokens.peek() == Some(&"tree") => {
                tokens.next();
                obstacles.push(Obstacle::FallenTree);
            }
            _ => {}
        }
    }

    Ok(ParsedLine {
        label,
        supplies,
        obstacles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Waypoint {
        parse_line(line).unwrap().into_waypoint().unwrap()
    }

    #[test]
    fn label_only() {
        let waypoint = parsed("M");
        assert_eq!(waypoint.label(), "M");
        assert!(waypoint.supplies().is_empty());
        assert!(waypoint.obstacles().is_empty());
    }

    #[test]
    fn supplies_then_obstacles() {
        let waypoint = parsed("K food raft food axe river fallen tree");
        assert_eq!(
            waypoint.supplies(),
            &[Supply::Food, Supply::Raft, Supply::Food, Supply::Axe]
        );
        assert_eq!(waypoint.obstacles(), &[Obstacle::River, Obstacle::FallenTree]);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let waypoint = parsed("Q  rope food   tent");
        assert_eq!(waypoint.supplies(), &[Supply::Food]);
        assert!(waypoint.obstacles().is_empty());
    }

    #[test]
    fn supplies_after_obstacles_are_ignored() {
        let waypoint = parsed("X fallen tree food river axe");
        assert!(waypoint.supplies().is_empty());
        assert_eq!(waypoint.obstacles(), &[Obstacle::FallenTree, Obstacle::River]);
    }

    #[test]
    fn dangling_fallen_is_ignored() {
        let waypoint = parsed("Y raft fallen");
        assert_eq!(waypoint.supplies(), &[Supply::Raft]);
        assert!(waypoint.obstacles().is_empty());

        let waypoint = parsed("Z fallen log river");
        assert_eq!(waypoint.obstacles(), &[Obstacle::River]);
    }

    #[test]
    fn tree_without_fallen_is_not_an_obstacle() {
        let waypoint = parsed("T river tree");
        assert_eq!(waypoint.obstacles(), &[Obstacle::River]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("   ").unwrap_err(), LineError::MissingLabel);

        let loaded = parse_waypoints("B food\n\nA\n  \nC raft\n").unwrap();
        let labels: Vec<&str> = loaded.waypoints.iter().map(Waypoint::label).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.skipped[0].line_number, 2);
        assert_eq!(loaded.skipped[1].line_number, 4);
    }

    #[test]
    fn missing_file() {
        let err = load_waypoints_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WaypointLoaderError::ReadFile(_, _)));
    }
}
