// audio/mod.rs

use rodio::mixer::Mixer;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use std::sync::Arc;
use std::time::Duration;

use crate::game_state::Cue;

/// Owns the output stream and synthesizes the game's tones. No audio
/// assets are read from disk; every cue is built from sine sources.
pub struct AudioManager {
    _stream: OutputStream,
    mixer: Arc<Mixer>,
}

impl AudioManager {
    pub fn new() -> Result<Self, String> {
        let stream = rodio::OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to open audio stream: {}", e))?;

        let mixer = stream.mixer().clone();
        println!("[AudioManager] Audio system initialized");

        Ok(AudioManager {
            _stream: stream,
            mixer: mixer.into(),
        })
    }

    /// Fire-and-forget playback of one synthesized cue. Never blocks the
    /// frame; the sink is detached immediately.
    pub fn play_cue(&self, cue: Cue) {
        let sink = Sink::connect_new(&self.mixer);
        match cue {
            Cue::Jump => {
                // Two stacked octaves, short chirp
                let tone = SineWave::new(880.0)
                    .mix(SineWave::new(1760.0))
                    .amplify(0.15)
                    .take_duration(Duration::from_millis(100));
                sink.append(tone);
            }
            Cue::Score => {
                let tone = SineWave::new(1320.0)
                    .amplify(0.2)
                    .take_duration(Duration::from_millis(100));
                sink.append(tone);
            }
            Cue::Collision => {
                // Low thud with a fade so it does not click
                let mut tone = SineWave::new(200.0)
                    .amplify(0.2)
                    .take_duration(Duration::from_millis(300));
                tone.set_filter_fadeout();
                sink.append(tone);
            }
        }
        sink.detach();
    }
}

/// Cue player that degrades to permanent silence when the audio device
/// is unavailable at startup.
pub struct SoundPlayer {
    manager: Option<AudioManager>,
}

impl SoundPlayer {
    pub fn new() -> Self {
        match AudioManager::new() {
            Ok(manager) => SoundPlayer {
                manager: Some(manager),
            },
            Err(e) => {
                println!("Warning: Sound system not available: {}", e);
                SoundPlayer { manager: None }
            }
        }
    }

    pub fn play(&self, cue: Cue) {
        if let Some(manager) = &self.manager {
            manager.play_cue(cue);
        }
    }
}
