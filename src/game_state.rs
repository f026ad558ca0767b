// game_state.rs

use crate::config::{pipes, resolution};
use crate::entities::bird::Bird;
use crate::entities::pipe::PipePair;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the first jump input
    Idle,
    /// Round in progress
    Active,
    /// Terminal; only a reset leaves this phase
    Over,
}

/// Sound cues emitted by the simulation and drained by the main loop.
/// The simulation never touches the audio device itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Score,
    Collision,
}

/// All live round state: the bird, the left-to-right ordered pipe
/// stream, the score and the round flags.
pub struct World {
    pub bird: Bird,
    pub pipes: Vec<PipePair>,
    pub score: u32,
    pub started: bool,
    pub over: bool,
    pub spawn_timer: u32,
    cues: Vec<Cue>,
}

impl World {
    pub fn new() -> Self {
        World {
            bird: Bird::new(resolution::WIDTH / 4.0, resolution::HEIGHT / 2.0),
            pipes: Vec::new(),
            score: 0,
            started: false,
            over: false,
            spawn_timer: 0,
            cues: Vec::new(),
        }
    }

    /// Discard all pipes and return to the pre-start state
    pub fn reset(&mut self) {
        *self = World::new();
    }

    pub fn phase(&self) -> RoundPhase {
        if self.over {
            RoundPhase::Over
        } else if self.started {
            RoundPhase::Active
        } else {
            RoundPhase::Idle
        }
    }

    /// A jump input. The first one starts the round; jumps after the
    /// round is over are ignored until a reset.
    pub fn handle_jump(&mut self) {
        if self.over {
            return;
        }
        if !self.started {
            self.started = true;
        }
        self.bird.jump();
        self.cues.push(Cue::Jump);
    }

    /// Advance the simulation one frame. Does nothing before the first
    /// jump or after the round has ended.
    pub fn step(&mut self) {
        if !self.started || self.over {
            return;
        }
        self.bird.update();
        self.advance_pipes();
        self.check_boundaries();
    }

    /// Per-frame cues, in the order they fired
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    fn advance_pipes(&mut self) {
        for pipe in &mut self.pipes {
            pipe.update();

            // Score each pipe exactly once, when its right edge clears
            // the bird's column
            if !pipe.passed && pipe.x + pipe.width < self.bird.x {
                pipe.passed = true;
                self.score += 1;
                self.cues.push(Cue::Score);
            }
        }

        // Compact out expired pipes after the traversal
        self.pipes.retain(|pipe| !pipe.is_off_screen());

        self.spawn_timer += 1;
        if self.spawn_timer >= pipes::SPAWN_INTERVAL {
            self.spawn_timer = 0;
            self.pipes
                .push(PipePair::new(resolution::WIDTH, PipePair::random_gap_y()));
        }
    }

    fn check_boundaries(&mut self) {
        // The ceiling is soft: stop the bird at the top of the screen.
        // The floor is terminal.
        if self.bird.y <= 0.0 {
            self.bird.y = 0.0;
            self.bird.velocity = 0.0;
        } else if self.bird.y >= resolution::HEIGHT {
            self.end_round();
            return;
        }

        let hit = self
            .pipes
            .iter()
            .any(|pipe| pipe.collides_with(&self.bird.rect));
        if hit {
            self.end_round();
        }
    }

    fn end_round(&mut self) {
        if self.over {
            return;
        }
        self.over = true;
        self.cues.push(Cue::Collision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::physics;

    fn active_world() -> World {
        let mut world = World::new();
        world.handle_jump();
        world.drain_cues();
        world
    }

    #[test]
    fn first_jump_starts_the_round() {
        let mut world = World::new();
        assert_eq!(world.phase(), RoundPhase::Idle);

        world.handle_jump();
        assert_eq!(world.phase(), RoundPhase::Active);
        assert_eq!(world.bird.velocity, physics::JUMP_STRENGTH);
        assert_eq!(world.drain_cues(), vec![Cue::Jump]);
    }

    #[test]
    fn idle_world_does_not_simulate() {
        let mut world = World::new();
        let y = world.bird.y;
        for _ in 0..10 {
            world.step();
        }
        assert_eq!(world.bird.y, y);
        assert!(world.pipes.is_empty());
        assert!(world.drain_cues().is_empty());
    }

    #[test]
    fn pipes_spawn_on_the_interval() {
        let mut world = active_world();
        // Keep the bird aloft so the round survives the whole interval
        for frame in 1..=pipes::SPAWN_INTERVAL {
            if frame % 19 == 0 {
                world.handle_jump();
            }
            world.step();
        }
        assert_eq!(world.pipes.len(), 1);
        assert_eq!(world.spawn_timer, 0);
        // Spawned at the right edge; it moves from the next frame on
        assert_eq!(world.pipes[0].x, resolution::WIDTH);
    }

    #[test]
    fn score_increments_exactly_once_per_pipe() {
        let mut world = active_world();
        // Gap centered on the bird's spawn row so the crossing is clean
        world.pipes.push(PipePair::new(150.0, resolution::HEIGHT / 2.0));

        for frame in 1..=60 {
            if frame % 19 == 0 {
                world.handle_jump();
            }
            world.step();
        }

        assert!(!world.over, "bird should survive the crossing");
        assert_eq!(world.score, 1);
        let scores = world
            .drain_cues()
            .iter()
            .filter(|cue| **cue == Cue::Score)
            .count();
        assert_eq!(scores, 1);
    }

    #[test]
    fn expired_pipes_are_removed() {
        let mut world = active_world();
        world
            .pipes
            .push(PipePair::new(-pipes::WIDTH + 1.0, resolution::HEIGHT / 2.0));
        world.handle_jump();
        world.step();
        assert!(world.pipes.is_empty());
    }

    #[test]
    fn floor_contact_is_terminal_and_cues_once() {
        let mut world = active_world();
        world.bird.velocity = 0.0;
        world.bird.y = resolution::HEIGHT;
        world.step();

        assert_eq!(world.phase(), RoundPhase::Over);
        let collisions = world
            .drain_cues()
            .iter()
            .filter(|cue| **cue == Cue::Collision)
            .count();
        assert_eq!(collisions, 1);
    }

    #[test]
    fn round_over_freezes_the_world() {
        let mut world = active_world();
        world.bird.velocity = 0.0;
        world.bird.y = resolution::HEIGHT;
        world.pipes.push(PipePair::new(700.0, 300.0));
        world.step();
        assert!(world.over);
        world.drain_cues();

        let score = world.score;
        let bird_y = world.bird.y;
        let pipe_x = world.pipes[0].x;
        for _ in 0..30 {
            world.step();
        }
        assert_eq!(world.score, score);
        assert_eq!(world.bird.y, bird_y);
        assert_eq!(world.pipes[0].x, pipe_x);
        assert!(world.drain_cues().is_empty());

        // Jump input is ignored while over
        world.handle_jump();
        assert_eq!(world.bird.y, bird_y);
        assert!(world.drain_cues().is_empty());
    }

    #[test]
    fn ceiling_clamps_without_ending_the_round() {
        let mut world = active_world();
        world.bird.y = 1.0;
        world.bird.velocity = physics::JUMP_STRENGTH;
        world.step();

        assert_eq!(world.bird.y, 0.0);
        assert_eq!(world.bird.velocity, 0.0);
        assert_eq!(world.phase(), RoundPhase::Active);
    }

    #[test]
    fn pipe_collision_ends_the_round() {
        let mut world = active_world();
        // A low gap puts the upper rectangle across the bird's row
        world
            .pipes
            .push(PipePair::new(world.bird.x - 10.0, 450.0));
        world.step();
        assert_eq!(world.phase(), RoundPhase::Over);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut world = active_world();
        world.pipes.push(PipePair::new(400.0, 300.0));
        world.score = 7;
        world.bird.y = resolution::HEIGHT;
        world.step();
        assert!(world.over);

        world.reset();
        assert_eq!(world.score, 0);
        assert!(world.pipes.is_empty());
        assert!(!world.started);
        assert!(!world.over);
        assert_eq!(world.spawn_timer, 0);
        assert_eq!(world.bird.x, resolution::WIDTH / 4.0);
        assert_eq!(world.bird.y, resolution::HEIGHT / 2.0);
        assert_eq!(world.bird.velocity, 0.0);
        assert!(world.drain_cues().is_empty());
    }
}
