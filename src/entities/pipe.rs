// entities/pipe.rs

use crate::config::colors;
use crate::config::pipes::{CAP_HEIGHT, CAP_OVERHANG, GAP_HEIGHT, GAP_MARGIN, SPEED, WIDTH};
use crate::config::resolution;
use crate::utils::math::safe_gen_range;
use crate::utils::rect::Rect;
use piston_window::*;

/// A pipe obstacle pair with a pass-through gap. The gap geometry is
/// fixed at construction; only x changes afterwards.
pub struct PipePair {
    pub x: f64,
    pub gap_y: f64,
    pub width: f64,
    pub gap_height: f64,
    pub passed: bool,
    pub top: Rect,
    pub bottom: Rect,
}

impl PipePair {
    pub fn new(x: f64, gap_y: f64) -> Self {
        let width = WIDTH;
        let gap_height = GAP_HEIGHT;
        let bottom_y = gap_y + gap_height / 2.0;
        PipePair {
            x,
            gap_y,
            width,
            gap_height,
            passed: false,
            top: Rect::new(x, 0.0, width, gap_y - gap_height / 2.0),
            bottom: Rect::new(x, bottom_y, width, resolution::HEIGHT - bottom_y),
        }
    }

    /// Pick a gap center that keeps the whole gap on-screen with a margin
    pub fn random_gap_y() -> f64 {
        safe_gen_range(
            GAP_HEIGHT / 2.0 + GAP_MARGIN,
            resolution::HEIGHT - GAP_HEIGHT / 2.0 - GAP_MARGIN,
            "pipe gap center",
        )
    }

    /// Move left one frame; the collision rectangles translate with x
    pub fn update(&mut self) {
        self.x -= SPEED;
        self.top.x = self.x;
        self.bottom.x = self.x;
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        rect.intersects(&self.top) || rect.intersects(&self.bottom)
    }

    /// True once the right edge has left the screen entirely
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn draw(&self, context: Context, g: &mut G2d) {
        let border = Rectangle::new_border(colors::DARK_GREEN, 1.5);

        rectangle(colors::GREEN, self.top.as_xywh(), context.transform, g);
        border.draw(
            self.top.as_xywh(),
            &context.draw_state,
            context.transform,
            g,
        );

        rectangle(colors::GREEN, self.bottom.as_xywh(), context.transform, g);
        border.draw(
            self.bottom.as_xywh(),
            &context.draw_state,
            context.transform,
            g,
        );

        // Decorative caps flanking the gap
        let cap_width = self.width + 2.0 * CAP_OVERHANG;
        let top_cap = [
            self.x - CAP_OVERHANG,
            self.top.height - CAP_HEIGHT,
            cap_width,
            CAP_HEIGHT,
        ];
        let bottom_cap = [self.x - CAP_OVERHANG, self.bottom.y, cap_width, CAP_HEIGHT];
        for cap in [top_cap, bottom_cap] {
            rectangle(colors::GREEN, cap, context.transform, g);
            border.draw(cap, &context.draw_state, context.transform, g);
        }
    }
}
