//! Per-frame simulation step
//!
//! Frame-rate coupled: every constant is tuned for ~60 calls per second and
//! there is no delta-time compensation.

use super::collision::collides;
use super::state::{GameEvent, Run};

/// Input for a single tick (deterministic snapshot of held controls)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub duck: bool,
}

/// Advance the run by one frame
///
/// Returns `Some(GameEvent::GameOver)` on the frame the avatar hits an
/// obstacle. Does nothing unless the run is `Running`.
pub fn tick(run: &mut Run, input: &TickInput) -> Option<GameEvent> {
    if !run.is_running() {
        return None;
    }

    run.time_ticks += 1;

    if let Some(mut obstacle) =
        run.spawner
            .advance(run.game_speed, run.playfield, run.avatar.base_height)
    {
        obstacle.id = run.next_entity_id();
        log::debug!(
            "Spawned obstacle {} ({:?}, {}px) at frame {}",
            obstacle.id,
            obstacle.kind,
            obstacle.size.x,
            run.time_ticks
        );
        run.obstacles.push(obstacle);
    }

    // Obstacles: move, then drop anything fully past the left edge
    let speed = run.game_speed;
    for obstacle in &mut run.obstacles {
        obstacle.update(speed);
    }
    run.obstacles.retain(|o| !o.is_off_screen());

    run.avatar
        .update(input, run.tuning.gravity, run.playfield.height);

    let player = run.avatar.bounds();
    if run.obstacles.iter().any(|o| collides(&player, &o.bounds())) {
        return Some(run.end());
    }

    run.score.tick();
    run.game_speed += run.tuning.speed_increment.max(0.0);

    None
}
