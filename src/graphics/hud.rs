// graphics/hud.rs

use crate::config::{colors, resolution};
use crate::game_state::{RoundPhase, World};
use crate::graphics::seven_segment::SevenSegmentDisplay;
use piston_window::*;

/// Black panel with a light border behind every overlay, for
/// readability against the sky
fn draw_panel(rect: [f64; 4], context: Context, g: &mut G2d) {
    rectangle(colors::BLACK, rect, context.transform, g);
    Rectangle::new_border(colors::WHITE, 1.5).draw(
        rect,
        &context.draw_state,
        context.transform,
        g,
    );
}

/// Draw one line of text horizontally centered at `center_x` with its
/// baseline at `baseline_y`, over its own backing panel.
fn draw_centered_line(
    line: &str,
    font_size: u32,
    color: [f32; 4],
    center_x: f64,
    baseline_y: f64,
    glyphs: &mut Glyphs,
    context: Context,
    g: &mut G2d,
) {
    let width = glyphs.width(font_size, line).unwrap_or(0.0);
    let x = center_x - width / 2.0;
    let size = f64::from(font_size);

    draw_panel(
        [x - 20.0, baseline_y - size - 10.0, width + 40.0, size + 24.0],
        context,
        g,
    );
    text::Text::new_color(color, font_size)
        .draw(
            line,
            glyphs,
            &context.draw_state,
            context.transform.trans(x, baseline_y),
            g,
        )
        .ok();
}

/// State overlays. Reads the world; never mutates it.
pub fn draw(world: &World, glyphs: &mut Glyphs, context: Context, g: &mut G2d) {
    // Score readout, always visible like the original HUD
    let display = SevenSegmentDisplay::new(22.0, 36.0, 8.0);
    draw_panel([10.0, 10.0, 140.0, 56.0], context, g);
    display.draw_number(world.score, 24.0, 20.0, colors::WHITE, context, g);

    let center_x = resolution::WIDTH / 2.0;
    let center_y = resolution::HEIGHT / 2.0;

    match world.phase() {
        RoundPhase::Idle => {
            draw_centered_line(
                "Flappy Bird - Pi Edition",
                32,
                colors::WHITE,
                center_x,
                center_y - 50.0,
                glyphs,
                context,
                g,
            );
            draw_centered_line(
                "Touch sensor or press SPACE to start!",
                24,
                colors::WHITE,
                center_x,
                center_y + 10.0,
                glyphs,
                context,
                g,
            );
        }
        RoundPhase::Active => {}
        RoundPhase::Over => {
            draw_centered_line(
                "GAME OVER",
                32,
                colors::RED,
                center_x,
                center_y - 50.0,
                glyphs,
                context,
                g,
            );
            draw_centered_line(
                &format!("Final Score: {}", world.score),
                24,
                colors::WHITE,
                center_x,
                center_y,
                glyphs,
                context,
                g,
            );
            draw_centered_line(
                "Press R to restart or ESC to quit",
                24,
                colors::WHITE,
                center_x,
                center_y + 50.0,
                glyphs,
                context,
                g,
            );
        }
    }
}
