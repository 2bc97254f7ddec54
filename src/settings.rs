//! Host preferences
//!
//! Settings gate presentation only. The simulation itself ignores them;
//! the session applies them at the edges (whether cues reach the audio
//! sink, whether shake and particles are surfaced to the renderer).

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// Cosmetic quality tier, mainly a particle budget for weak hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityPreset {
    Low,
    Medium,
    High,
}

impl QualityPreset {
    /// How many live particles the renderer should draw at most.
    pub fn max_particles(self) -> usize {
        match self {
            QualityPreset::Low => MAX_PARTICLES / 4,
            QualityPreset::Medium => MAX_PARTICLES / 2,
            QualityPreset::High => MAX_PARTICLES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Forward sound cues to the audio sink
    pub sound: bool,
    /// Surface the screen-shake offset to the renderer
    pub screen_shake: bool,
    pub quality: QualityPreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            screen_shake: true,
            quality: QualityPreset::High,
        }
    }
}

impl Settings {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse settings, filling any missing field with its default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
