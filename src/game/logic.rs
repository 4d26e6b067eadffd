//! State machine and per-tick orchestration for a dragon flight session.

use super::collision::{check_collision, check_pass};
use super::obstacles::{advance, maybe_spawn};
use super::physics::{apply_flap, step_player, Boundary};
use super::types::{CrashCause, Field, GameInput, GameSession, GameState};
use rand::Rng;

/// Something that happened during a tick, for logging and presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Start -> Playing.
    Began,
    /// GameOver -> Playing.
    Reset,
    Flapped,
    Spawned { gap_center: f64 },
    Passed { score: u32 },
    Crashed { cause: CrashCause, score: u32 },
}

/// Apply one input to the state machine.
///
/// Inputs that the current state does not accept are ignored and produce no
/// event.
pub fn process_input(session: &mut GameSession, input: GameInput) -> Option<TickEvent> {
    match (session.state, input) {
        (GameState::Start, GameInput::Begin) => {
            let now = session.now_ms;
            session.restart_run(now);
            session.state = GameState::Playing;
            Some(TickEvent::Began)
        }
        (GameState::GameOver, GameInput::Reset) => {
            let now = session.now_ms;
            session.restart_run(now);
            session.state = GameState::Playing;
            Some(TickEvent::Reset)
        }
        (GameState::Playing, GameInput::Flap) => {
            apply_flap(&mut session.player, &session.config);
            Some(TickEvent::Flapped)
        }
        _ => None,
    }
}

/// Run one fixed tick.
///
/// `now_ms` is the logical clock, `field` the current play-field size and
/// `inputs` the events gathered since the previous tick, in arrival order.
/// Never fails: crashes are state transitions.
pub fn tick<R: Rng>(
    session: &mut GameSession,
    now_ms: u64,
    field: Field,
    inputs: &[GameInput],
    rng: &mut R,
) -> Vec<TickEvent> {
    session.now_ms = now_ms;
    session.field = field;

    let mut events: Vec<TickEvent> = inputs
        .iter()
        .filter_map(|&input| process_input(session, input))
        .collect();

    if session.state != GameState::Playing {
        return events;
    }
    session.tick_count += 1;

    if step_player(&mut session.player, field, &session.config) == Boundary::Floor {
        session.state = GameState::GameOver;
        events.push(TickEvent::Crashed {
            cause: CrashCause::Floor,
            score: session.score,
        });
        return events;
    }

    if let Some(gap_center) = maybe_spawn(
        &mut session.obstacles,
        &mut session.last_spawn_ms,
        now_ms,
        field,
        &session.config,
        rng,
    ) {
        events.push(TickEvent::Spawned { gap_center });
    }

    advance(
        &mut session.obstacles,
        session.config.obstacle_speed,
        session.config.despawn_x,
    );

    for obstacle in session.obstacles.iter_mut() {
        if check_pass(obstacle, &session.player) > 0 {
            session.score += 1;
            events.push(TickEvent::Passed {
                score: session.score,
            });
        }
        if check_collision(obstacle, &session.player, &session.config) {
            session.state = GameState::GameOver;
            events.push(TickEvent::Crashed {
                cause: CrashCause::Obstacle,
                score: session.score,
            });
            break;
        }
    }

    events
}
