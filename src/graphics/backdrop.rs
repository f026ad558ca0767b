// graphics/backdrop.rs

use crate::config::{colors, resolution};
use piston_window::*;

const GROUND_HEIGHT: f64 = 50.0;
const CLOUD_Y: f64 = 80.0;
const CLOUD_SPACING: f64 = 200.0;

/// Sky fill, a row of clouds and the ground strip. Drawn first, behind
/// every entity.
pub fn draw(context: Context, g: &mut G2d) {
    clear(colors::SKY_BLUE, g);

    // Each cloud is three overlapping circles
    let mut x = -50.0;
    while x < resolution::WIDTH + 100.0 {
        for (dx, radius) in [(0.0, 30.0), (25.0, 35.0), (50.0, 30.0)] {
            ellipse(
                colors::WHITE,
                [
                    x + dx - radius,
                    CLOUD_Y - radius,
                    radius * 2.0,
                    radius * 2.0,
                ],
                context.transform,
                g,
            );
        }
        x += CLOUD_SPACING;
    }

    let ground = [
        0.0,
        resolution::HEIGHT - GROUND_HEIGHT,
        resolution::WIDTH,
        GROUND_HEIGHT,
    ];
    rectangle(colors::GREEN, ground, context.transform, g);
    Rectangle::new_border(colors::DARK_GREEN, 1.5).draw(
        ground,
        &context.draw_state,
        context.transform,
        g,
    );
}
