use xxhash_rust::xxh3::xxh3_64;

use crate::effects::{Cue, CueSink};
use crate::mapgen::{GenConfig, MapGenerator};
use crate::snapshot::WorldSnapshot;
use crate::state::WorldState;
use crate::types::*;

mod chase;
pub mod visibility;

pub use visibility::{SIGHT_RADIUS, within_sight};

pub const WIN_SCORE: u32 = 100;
pub const COIN_SCORE: u32 = 10;
pub const DOOR_KEY_COST: u32 = 1;

/// One play session over one world. There are no globals; every operation
/// goes through this object, and none of them mutate anything once the
/// phase is `Finished`.
pub struct Game {
    seed: u64,
    tick: u64,
    state: WorldState,
    phase: SessionPhase,
    log: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64, config: &GenConfig) -> Self {
        let state = MapGenerator::new(seed, config.clone()).generate();
        let phase = phase_for(&state);
        Self { seed, tick: 0, state, phase, log: Vec::new() }
    }

    /// Fresh session adopting a saved world wholesale.
    pub fn from_snapshot(snapshot: WorldSnapshot) -> Self {
        let state = snapshot.into_world();
        let phase = phase_for(&state);
        Self { seed: 0, tick: 0, state, phase, log: Vec::new() }
    }

    /// Replace the world mid-session. A finished session stays finished;
    /// loading is not a resume path.
    pub fn restore(&mut self, snapshot: WorldSnapshot) {
        if self.finished() {
            return;
        }
        self.state = snapshot.into_world();
        self.phase = phase_for(&self.state);
    }

    /// One requested player step. Interaction with the target tile resolves
    /// first; the position commits only if the step survives it.
    pub fn apply_move(&mut self, dir: Direction, cues: &mut dyn CueSink) -> MoveResult {
        if self.finished() {
            return MoveResult::SessionOver;
        }

        let (dy, dx) = dir.delta();
        let target =
            Pos { y: self.state.player.pos.y + dy, x: self.state.player.pos.x + dx };

        match self.state.map.tile_at(target) {
            TileKind::Wall => return MoveResult::Blocked,
            TileKind::Coin => {
                self.state.player.score += COIN_SCORE;
                self.state.map.set_tile(target, TileKind::Floor);
                cues.play(Cue::Coin);
                self.log.push(GameEvent::CoinCollected { pos: target });
            }
            TileKind::Key => {
                self.state.player.keys += 1;
                self.state.map.set_tile(target, TileKind::Floor);
                cues.play(Cue::Key);
                self.log.push(GameEvent::KeyCollected { pos: target });
            }
            TileKind::Door => {
                if self.state.player.keys < DOOR_KEY_COST {
                    // Locked door: the whole move is rejected, not just the open.
                    return MoveResult::Blocked;
                }
                self.state.player.keys -= DOOR_KEY_COST;
                self.state.map.set_tile(target, TileKind::Floor);
                cues.play(Cue::Door);
                self.log.push(GameEvent::DoorOpened { pos: target });
            }
            TileKind::Floor => {}
        }

        self.state.player.pos = target;
        self.check_terminal(cues);
        MoveResult::Moved
    }

    /// One chase step for every enemy, in collection order. Each enemy that
    /// ends the step on the player's tile lands one hit; the loop stops the
    /// moment a terminal condition fires.
    pub fn advance_enemies(&mut self, cues: &mut dyn CueSink) {
        if self.finished() {
            return;
        }

        self.tick += 1;
        let player_pos = self.state.player.pos;
        for index in 0..self.state.enemies.len() {
            let from = self.state.enemies[index].pos;
            let to = chase::chase_step(&self.state.map, from, player_pos);
            self.state.enemies[index].pos = to;

            if to == player_pos {
                self.state.player.health = self.state.player.health.saturating_sub(1);
                cues.play(Cue::Damage);
                self.log.push(GameEvent::DamageTaken { pos: to });
                self.check_terminal(cues);
                if self.finished() {
                    return;
                }
            }
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn finished(&self) -> bool {
        matches!(self.phase, SessionPhase::Finished(_))
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.phase {
            SessionPhase::Finished(outcome) => Some(outcome),
            SessionPhase::Running => None,
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.state)
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.state.canonical_bytes())
    }

    /// Runs after every stat-affecting event. Health and score cannot both
    /// trip in one event, so whichever fires first ends the session.
    fn check_terminal(&mut self, cues: &mut dyn CueSink) {
        if self.finished() {
            return;
        }

        let outcome = if self.state.player.health == 0 {
            Some(RunOutcome::Defeat)
        } else if self.state.player.score >= WIN_SCORE {
            Some(RunOutcome::Victory)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.phase = SessionPhase::Finished(outcome);
            self.log.push(GameEvent::Finished(outcome));
            cues.play(match outcome {
                RunOutcome::Victory => Cue::Win,
                RunOutcome::Defeat => Cue::GameOver,
            });
        }
    }
}

fn phase_for(state: &WorldState) -> SessionPhase {
    if state.player.health == 0 {
        SessionPhase::Finished(RunOutcome::Defeat)
    } else if state.player.score >= WIN_SCORE {
        SessionPhase::Finished(RunOutcome::Victory)
    } else {
        SessionPhase::Running
    }
}
