use crate::floor_plan::{FloorPlan, FloorPlanError};
use crate::worker;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use droid_explorer::{Direction, Droid, MoveOutcome, Point};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error(transparent)]
    Program(#[from] FloorPlanError),
    #[error("droid worker needs a running tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Droid backed by a floor-plan worker task.
///
/// Commands and outcomes travel over two unbounded channels. Each `step`
/// sends exactly one command and waits for exactly one outcome, so answers
/// can never be matched to the wrong move.
pub struct FloorDroid {
    commands: Option<UnboundedSender<i64>>,
    outcomes: UnboundedReceiver<i64>,
    worker: Option<JoinHandle<()>>,
    position: Point,
}

impl FloorDroid {
    /// Parses `program` and starts its worker.
    pub fn spawn(program: &str) -> Result<Self, SpawnError> {
        Self::with_plan(FloorPlan::parse(program)?)
    }

    /// Starts the worker on the current tokio runtime.
    pub fn with_plan(plan: FloorPlan) -> Result<Self, SpawnError> {
        let runtime = Handle::try_current()?;
        let (command_tx, command_rx) = unbounded_channel();
        let (outcome_tx, outcome_rx) = unbounded_channel();
        let worker = runtime.spawn(worker::run(plan, command_rx, outcome_tx));
        Ok(Self {
            commands: Some(command_tx),
            outcomes: outcome_rx,
            worker: Some(worker),
            position: Point::ORIGIN,
        })
    }

    pub fn is_released(&self) -> bool {
        self.worker.is_none()
    }
}

#[async_trait]
impl Droid for FloorDroid {
    async fn step(&mut self, direction: Direction) -> anyhow::Result<MoveOutcome> {
        let commands = self
            .commands
            .as_ref()
            .ok_or_else(|| anyhow!("droid has been released"))?;
        commands
            .send(direction.code())
            .map_err(|_| anyhow!("droid worker stopped before accepting move {}", direction))?;
        let code = self
            .outcomes
            .recv()
            .await
            .ok_or_else(|| anyhow!("droid worker stopped before answering move {}", direction))?;

        let outcome = MoveOutcome::from_code(code)?;
        if outcome.moved() {
            self.position = direction.step(self.position);
        }
        Ok(outcome)
    }

    fn position(&self) -> Point {
        self.position
    }

    async fn release(&mut self) -> anyhow::Result<()> {
        self.commands.take();
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        worker.abort();
        match worker.await {
            Err(e) if e.is_panic() => Err(e).context("droid worker panicked"),
            _ => {
                debug!("droid released");
                Ok(())
            }
        }
    }
}

impl Drop for FloorDroid {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#D..#
#.#O#
#####";

    #[tokio::test]
    async fn wall_does_not_move_the_droid() {
        let mut droid = FloorDroid::spawn(ROOM).unwrap();
        assert_eq!(droid.step(Direction::North).await.unwrap(), MoveOutcome::Wall);
        assert_eq!(droid.position(), Point::ORIGIN);
        assert_eq!(droid.step(Direction::West).await.unwrap(), MoveOutcome::Wall);
        assert_eq!(droid.position(), Point::ORIGIN);

        assert_eq!(droid.step(Direction::East).await.unwrap(), MoveOutcome::Open);
        assert_eq!(droid.step(Direction::East).await.unwrap(), MoveOutcome::Open);
        assert_eq!(droid.step(Direction::South).await.unwrap(), MoveOutcome::Goal);
        assert_eq!(droid.position(), Point::new(2, 1));
        droid.release().await.unwrap();
    }

    #[tokio::test]
    async fn release_is_idempotent() {
        let mut droid = FloorDroid::spawn(ROOM).unwrap();
        droid.step(Direction::South).await.unwrap();
        droid.release().await.unwrap();
        assert!(droid.is_released());
        droid.release().await.unwrap();

        let err = droid.step(Direction::North).await.unwrap_err();
        assert!(err.to_string().contains("released"));
        assert_eq!(droid.position(), Point::new(0, 1));
    }

    #[tokio::test]
    async fn bad_program_is_rejected() {
        assert!(matches!(
            FloorDroid::spawn("#..#"),
            Err(SpawnError::Program(FloorPlanError::MissingStart))
        ));
    }

    #[test]
    fn spawn_outside_runtime_is_an_error() {
        assert!(matches!(
            FloorDroid::spawn(ROOM),
            Err(SpawnError::NoRuntime(_))
        ));
    }
}
