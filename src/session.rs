//! Host-facing session control
//!
//! A [`Session`] owns one [`GameState`] and drives it with a classic
//! fixed-timestep accumulator: the host reports wall-clock time, the
//! session converts it into zero or more fixed ticks. Input is
//! level-triggered; the host sets the currently held controls and every
//! tick inside an `advance` call samples the same snapshot.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, cues_for};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, LevelCatalog, TickInput, tick};

/// Progress counters for HUD display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub score: u64,
    pub coins: u32,
    pub level: u32,
}

pub struct Session {
    state: GameState,
    settings: Settings,
    audio: Option<Box<dyn AudioSink>>,
    input: TickInput,
    /// Unsimulated wall-clock time, in seconds
    accumulator: f32,
}

impl Session {
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        Self {
            state: GameState::new(catalog, seed),
            settings: Settings::default(),
            audio: None,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_audio(mut self, sink: Box<dyn AudioSink>) -> Self {
        self.audio = Some(sink);
        self
    }

    /// Read-only view of the simulation state, for rendering.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Replace the held-controls snapshot sampled by subsequent ticks.
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    /// Feed elapsed wall-clock seconds and run the fixed ticks they pay
    /// for, up to [`MAX_SUBSTEPS`] per call. Oversized gaps (debugger
    /// pauses, suspended tabs) are clamped rather than replayed.
    ///
    /// Returns this call's events in occurrence order, after routing
    /// them to the audio sink.
    pub fn advance(&mut self, elapsed_seconds: f32) -> Vec<GameEvent> {
        self.accumulator += elapsed_seconds.min(0.1);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.state, &self.input));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // The substep cap truncates the backlog for good; whole ticks
        // left behind here would replay on a later call.
        if self.accumulator >= SIM_DT {
            self.accumulator = 0.0;
        }

        if self.settings.sound {
            if let Some(sink) = self.audio.as_mut() {
                for cue in events.iter().flat_map(cues_for).copied() {
                    sink.play(cue);
                }
            }
        }
        events
    }

    pub fn pause(&mut self) {
        self.state.running = false;
    }

    pub fn resume(&mut self) {
        self.state.running = true;
    }

    /// Restart the current level, keeping score and coins. Pending time
    /// and held input are discarded so the fresh round starts cold.
    /// Returns the refreshed counters for an immediate HUD update.
    pub fn restart_level(&mut self) -> Progress {
        self.state.restart_level();
        self.accumulator = 0.0;
        self.input = TickInput::default();
        self.progress()
    }

    /// Jump straight to a level. Out-of-range indices wrap to 1.
    /// Returns the refreshed counters for an immediate HUD update.
    pub fn select_level(&mut self, index: u32) -> Progress {
        self.state.load_level(index);
        self.accumulator = 0.0;
        self.input = TickInput::default();
        self.progress()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            score: self.state.score,
            coins: self.state.coins,
            level: self.state.level,
        }
    }
}
