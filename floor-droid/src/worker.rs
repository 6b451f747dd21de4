use crate::floor_plan::FloorPlan;
use droid_explorer::{Direction, Point};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Runs a floor-plan program.
///
/// Reads one direction code per command, answers with one outcome code, and
/// tracks the true droid position. Stops when the command channel closes,
/// the outcome channel is dropped, or an unknown command arrives.
pub(crate) async fn run(
    plan: FloorPlan,
    mut commands: UnboundedReceiver<i64>,
    outcomes: UnboundedSender<i64>,
) {
    let mut position = Point::ORIGIN;
    let mut steps = 0usize;

    while let Some(code) = commands.recv().await {
        let Some(direction) = Direction::from_code(code) else {
            warn!(code, "unknown droid command, halting");
            break;
        };
        let target = direction.step(position);
        let outcome = plan.outcome_at(target);
        if outcome.moved() {
            position = target;
        }
        steps += 1;
        if outcomes.send(outcome.code()).is_err() {
            break;
        }
    }

    debug!(steps, position = %position, "droid worker halted");
}
