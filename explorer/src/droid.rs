use crate::error::ExploreError;
use crate::geom::{Direction, Point};
use async_trait::async_trait;

/// What the droid found when it tried to step into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Impassable. The droid did not move.
    Wall,
    /// The droid moved into an open cell.
    Open,
    /// The droid moved into the goal cell.
    Goal,
}

impl MoveOutcome {
    pub fn code(self) -> i64 {
        match self {
            MoveOutcome::Wall => 0,
            MoveOutcome::Open => 1,
            MoveOutcome::Goal => 2,
        }
    }

    pub fn from_code(code: i64) -> Result<Self, ExploreError> {
        match code {
            0 => Ok(MoveOutcome::Wall),
            1 => Ok(MoveOutcome::Open),
            2 => Ok(MoveOutcome::Goal),
            other => Err(ExploreError::UnknownOutcome(other)),
        }
    }

    pub fn moved(self) -> bool {
        self != MoveOutcome::Wall
    }
}

/// A single-step agent in an unknown grid.
///
/// Implementations update `position` only when `step` returns something
/// other than [`MoveOutcome::Wall`]. `release` stops whatever backs the droid
/// and must be safe to call more than once.
#[async_trait]
pub trait Droid: Send {
    async fn step(&mut self, direction: Direction) -> anyhow::Result<MoveOutcome>;
    fn position(&self) -> Point;
    async fn release(&mut self) -> anyhow::Result<()>;
}
