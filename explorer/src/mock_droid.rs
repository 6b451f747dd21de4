use crate::droid::{Droid, MoveOutcome};
use crate::geom::{Direction, Point};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory droid over a fixed set of open cells.
///
/// Useful for tests and dry runs: it never fails and counts every call so
/// callers can check how many moves and releases an explorer issued.
#[derive(Debug, Clone)]
pub struct MockDroid {
    open: HashSet<Point>,
    goal: Option<Point>,
    position: Point,
    pub moves: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
}

impl MockDroid {
    /// `open` should contain the start cell; the goal is treated as open.
    pub fn new(open: impl IntoIterator<Item = Point>, goal: Option<Point>) -> Self {
        Self::starting_at(Point::ORIGIN, open, goal)
    }

    pub fn starting_at(
        start: Point,
        open: impl IntoIterator<Item = Point>,
        goal: Option<Point>,
    ) -> Self {
        let mut open: HashSet<Point> = open.into_iter().collect();
        open.insert(start);
        if let Some(goal) = goal {
            open.insert(goal);
        }
        Self {
            open,
            goal,
            position: start,
            moves: Arc::new(AtomicUsize::new(0)),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Parses a picture using the floor-plan alphabet: `#` wall, `.` open,
    /// `D` start, `O` goal. The start cell becomes the origin.
    pub fn from_picture(picture: &str) -> Self {
        let mut open = Vec::new();
        let mut start = (0, 0);
        let mut goal = None;
        for (row, line) in picture.lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = (col as i32, row as i32);
                match ch {
                    '.' => open.push(cell),
                    'D' => start = cell,
                    'O' => goal = Some(cell),
                    _ => {}
                }
            }
        }
        let shift = |(x, y): (i32, i32)| Point::new(x - start.0, y - start.1);
        Self::new(open.into_iter().map(shift), goal.map(shift))
    }

    pub fn open_cells(&self) -> &HashSet<Point> {
        &self.open
    }
}

#[async_trait]
impl Droid for MockDroid {
    async fn step(&mut self, direction: Direction) -> anyhow::Result<MoveOutcome> {
        self.moves.fetch_add(1, Ordering::SeqCst);
        let next = direction.step(self.position);
        if Some(next) == self.goal {
            self.position = next;
            return Ok(MoveOutcome::Goal);
        }
        if self.open.contains(&next) {
            self.position = next;
            return Ok(MoveOutcome::Open);
        }
        Ok(MoveOutcome::Wall)
    }

    fn position(&self) -> Point {
        self.position
    }

    async fn release(&mut self) -> anyhow::Result<()> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
