// main.rs

mod audio;
mod config;
mod entities;
mod game_state;
mod graphics;
mod utils;
mod game {
    pub mod input_handler;
    pub mod touch_sensor;
}

// Crates
extern crate piston_window;
extern crate rand;
extern crate rodio;

use piston_window::*;
use std::path::Path;
use std::process;

use crate::audio::SoundPlayer;
use crate::config::resolution;
use crate::game::input_handler::{translate_press, Command};
use crate::game::touch_sensor::TouchSensor;
use crate::game_state::World;
use crate::graphics::{backdrop, hud};

fn main() {
    println!("==================================================");
    println!("Raspberry Pi Flappy Bird");
    println!("==================================================");
    println!("Hardware: Touch sensor on GPIO {}", config::input::GPIO_PIN);
    println!("Keyboard: SPACE or UP arrow to jump");
    println!("ESC to quit, R to restart after game over");
    println!("==================================================");

    if let Err(e) = run() {
        eprintln!("Failed to start game: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // Audio and the touch sensor degrade on their own; only the window
    // and the font are hard requirements.
    let sound_player = SoundPlayer::new();
    let mut touch_sensor = TouchSensor::new();

    let mut window: PistonWindow = WindowSettings::new(
        "Raspberry Pi Flappy Bird",
        [resolution::WIDTH as u32, resolution::HEIGHT as u32],
    )
    .resizable(false)
    .exit_on_esc(false)
    .build()
    .map_err(|e| format!("Failed to build window: {}", e))?;
    window.set_ups(config::FPS);
    window.set_max_fps(config::FPS);
    println!("Window created.");

    let mut glyphs = load_glyphs(&mut window)?;
    let mut world = World::new();

    println!("Starting game loop...");
    while let Some(e) = window.next() {
        if let Some(button) = e.press_args() {
            match translate_press(button) {
                Some(Command::Quit) => {
                    println!("Quit requested.");
                    window.set_should_close(true);
                }
                Some(Command::Jump) => world.handle_jump(),
                Some(Command::Restart) => {
                    if world.over {
                        world.reset();
                        println!("New round.");
                    }
                }
                None => {}
            }
        }

        if e.update_args().is_some() {
            if touch_sensor.poll() {
                world.handle_jump();
            }
            world.step();
            for cue in world.drain_cues() {
                sound_player.play(cue);
            }
        }

        if e.render_args().is_some() {
            window.draw_2d(&e, |c, g, device| {
                backdrop::draw(c, g);
                for pipe in &world.pipes {
                    pipe.draw(c, g);
                }
                world.bird.draw(c, g);
                hud::draw(&world, &mut glyphs, c, g);
                glyphs.factory.encoder.flush(device);
            });
        }
    }

    println!("Cleaning up...");
    Ok(())
}

/// The game ships no assets, so the glyph cache comes from a standard
/// OS font location.
fn load_glyphs(window: &mut PistonWindow) -> Result<Glyphs, String> {
    let candidates = [
        Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        Path::new("/usr/share/fonts/TTF/DejaVuSans.ttf"),
        Path::new("/System/Library/Fonts/Supplemental/Arial.ttf"),
        Path::new("C:\\Windows\\Fonts\\arial.ttf"),
    ];

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match window.load_font(path) {
            Ok(glyphs) => {
                println!("Loaded font from {:?}", path);
                return Ok(glyphs);
            }
            Err(e) => eprintln!("Failed to load font at {:?}: {}. Trying next.", path, e),
        }
    }

    Err("No usable system font found for the HUD".to_string())
}
