use droid_explorer::{MoveOutcome, Point};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FloorPlanError {
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },
    #[error("floor plan has no droid start ('D')")]
    MissingStart,
    #[error("second droid start at row {row}, column {col}")]
    DuplicateStart { row: usize, col: usize },
    #[error("second goal at row {row}, column {col}")]
    DuplicateGoal { row: usize, col: usize },
}

/// A parsed droid program: which cells are open and where the goal is.
///
/// Coordinates are relative to the droid start, which is the origin.
/// Anything not drawn as open is a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    open: HashSet<Point>,
    goal: Option<Point>,
}

impl FloorPlan {
    /// `#` wall, `.` open, `D` start, `O` goal, space wall. Lines may be ragged.
    pub fn parse(source: &str) -> Result<Self, FloorPlanError> {
        let mut open = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in source.lines().enumerate() {
            for (col, ch) in line.trim_end_matches('\r').chars().enumerate() {
                let cell = (col as i32, row as i32);
                match ch {
                    '#' | ' ' => {}
                    '.' => open.push(cell),
                    'D' => {
                        if start.replace(cell).is_some() {
                            return Err(FloorPlanError::DuplicateStart { row, col });
                        }
                    }
                    'O' => {
                        if goal.replace(cell).is_some() {
                            return Err(FloorPlanError::DuplicateGoal { row, col });
                        }
                    }
                    ch => return Err(FloorPlanError::UnknownTile { ch, row, col }),
                }
            }
        }

        let (sx, sy) = start.ok_or(FloorPlanError::MissingStart)?;
        let shift = |(x, y): (i32, i32)| Point::new(x - sx, y - sy);

        let mut open: HashSet<Point> = open.into_iter().map(shift).collect();
        open.insert(Point::ORIGIN);
        let goal = goal.map(shift);
        if let Some(goal) = goal {
            open.insert(goal);
        }
        Ok(Self { open, goal })
    }

    /// What a droid standing next to `cell` finds when it steps in.
    pub fn outcome_at(&self, cell: Point) -> MoveOutcome {
        if Some(cell) == self.goal {
            MoveOutcome::Goal
        } else if self.open.contains(&cell) {
            MoveOutcome::Open
        } else {
            MoveOutcome::Wall
        }
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn open_cells(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_relative_to_start() {
        let plan = FloorPlan::parse("#####\n#O.D#\n###.#\n").unwrap();
        assert_eq!(plan.goal(), Some(Point::new(-2, 0)));
        assert_eq!(plan.open_cells(), 4);
        assert_eq!(plan.outcome_at(Point::ORIGIN), MoveOutcome::Open);
        assert_eq!(plan.outcome_at(Point::new(-1, 0)), MoveOutcome::Open);
        assert_eq!(plan.outcome_at(Point::new(0, 1)), MoveOutcome::Open);
        assert_eq!(plan.outcome_at(Point::new(-2, 0)), MoveOutcome::Goal);
        assert_eq!(plan.outcome_at(Point::new(1, 0)), MoveOutcome::Wall);
        assert_eq!(plan.outcome_at(Point::new(40, -7)), MoveOutcome::Wall);
    }

    #[test]
    fn ragged_lines_and_spaces_are_walls() {
        let plan = FloorPlan::parse("  #\n D.\r\n").unwrap();
        assert_eq!(plan.goal(), None);
        assert_eq!(plan.outcome_at(Point::new(1, 0)), MoveOutcome::Open);
        assert_eq!(plan.outcome_at(Point::new(-1, 0)), MoveOutcome::Wall);
        assert_eq!(plan.outcome_at(Point::new(2, 0)), MoveOutcome::Wall);
    }

    #[test]
    fn rejects_malformed_programs() {
        assert_eq!(FloorPlan::parse("#..#"), Err(FloorPlanError::MissingStart));
        assert_eq!(
            FloorPlan::parse("D.D"),
            Err(FloorPlanError::DuplicateStart { row: 0, col: 2 })
        );
        assert_eq!(
            FloorPlan::parse("DO\n.O"),
            Err(FloorPlanError::DuplicateGoal { row: 1, col: 1 })
        );
        assert_eq!(
            FloorPlan::parse("D.\n.x"),
            Err(FloorPlanError::UnknownTile { ch: 'x', row: 1, col: 1 })
        );
    }
}
