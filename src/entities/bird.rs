// entities/bird.rs

use crate::config::colors;
use crate::config::physics::{BIRD_SIZE, GRAVITY, JUMP_STRENGTH, MAX_FALL_SPEED};
use crate::utils::rect::Rect;
use piston_window::*;

/// The player-controlled bird. The x column is fixed; only y moves.
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub size: f64,
    pub rect: Rect,
}

impl Bird {
    pub fn new(x: f64, y: f64) -> Self {
        let size = BIRD_SIZE;
        Bird {
            x,
            y,
            velocity: 0.0,
            size,
            rect: Rect::new(x - size / 2.0, y - size / 2.0, size, size),
        }
    }

    /// Launch upward. Overwrites the current velocity rather than adding
    /// to it, so repeated presses never stack.
    pub fn jump(&mut self) {
        self.velocity = JUMP_STRENGTH;
    }

    /// Apply one frame of gravity. Boundary policy lives in the
    /// simulation step, not here.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        // Cap fall speed so the bird cannot tunnel through a pipe
        if self.velocity > MAX_FALL_SPEED {
            self.velocity = MAX_FALL_SPEED;
        }

        self.rect.x = self.x - self.size / 2.0;
        self.rect.y = self.y - self.size / 2.0;
    }

    pub fn draw(&self, context: Context, g: &mut G2d) {
        let r = self.size / 2.0;
        ellipse(
            colors::BLUE,
            [self.x - r, self.y - r, self.size, self.size],
            context.transform,
            g,
        );

        // Eye
        let eye_x = self.x + self.size / 4.0;
        let eye_y = self.y - self.size / 6.0;
        ellipse(
            colors::WHITE,
            [eye_x - 4.0, eye_y - 4.0, 8.0, 8.0],
            context.transform,
            g,
        );
        ellipse(
            colors::BLACK,
            [eye_x - 2.0, eye_y - 2.0, 4.0, 4.0],
            context.transform,
            g,
        );
    }
}
