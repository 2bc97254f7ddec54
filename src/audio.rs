//! Sound-cue surface
//!
//! The simulation never talks to an audio device. It emits
//! [`GameEvent`]s; [`cues_for`] maps those to abstract sound effects and
//! an [`AudioSink`] implementation turns effects into actual playback.
//! Playback is fire-and-forget: a sink failing or dropping a cue must
//! not affect the simulation.

use crate::sim::GameEvent;

/// Abstract sound effects, one per audible game moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Short rising chirp on takeoff
    Jump,
    /// Bright two-note ding on coin pickup
    Coin,
    /// Low thump on a successful stomp
    Stomp,
    /// Knock plus reward ding on question-block activation
    BlockHit,
    /// Descending jingle on a lost round
    Death,
    /// Victory fanfare on level or game completion
    Fanfare,
}

/// Map a simulation event to its sound cues, in play order. Block
/// activation plays the knock and the reward ding together.
pub fn cues_for(event: &GameEvent) -> &'static [SoundEffect] {
    match event {
        GameEvent::Jump => &[SoundEffect::Jump],
        GameEvent::CoinCollected => &[SoundEffect::Coin],
        GameEvent::BlockHit => &[SoundEffect::BlockHit, SoundEffect::Coin],
        GameEvent::Stomp => &[SoundEffect::Stomp],
        GameEvent::Died => &[SoundEffect::Death],
        GameEvent::LevelComplete { .. } | GameEvent::GameComplete => &[SoundEffect::Fanfare],
        GameEvent::ProgressChanged { .. } => &[],
    }
}

/// Host-provided audio output.
pub trait AudioSink {
    /// Play one effect. Implementations must not block the caller.
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that logs cues instead of playing them. Used headless and in
/// tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("audio cue: {effect:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_audible_event_has_a_cue() {
        assert_eq!(cues_for(&GameEvent::Jump), [SoundEffect::Jump]);
        assert_eq!(cues_for(&GameEvent::CoinCollected), [SoundEffect::Coin]);
        assert_eq!(cues_for(&GameEvent::Stomp), [SoundEffect::Stomp]);
        assert_eq!(cues_for(&GameEvent::Died), [SoundEffect::Death]);
        assert_eq!(
            cues_for(&GameEvent::LevelComplete { next_level: 2 }),
            [SoundEffect::Fanfare]
        );
        assert_eq!(cues_for(&GameEvent::GameComplete), [SoundEffect::Fanfare]);
    }

    #[test]
    fn test_block_hit_plays_knock_and_reward_ding() {
        assert_eq!(
            cues_for(&GameEvent::BlockHit),
            [SoundEffect::BlockHit, SoundEffect::Coin]
        );
    }

    #[test]
    fn test_progress_updates_are_silent() {
        let event = GameEvent::ProgressChanged {
            score: 100,
            coins: 1,
            level: 1,
        };
        assert!(cues_for(&event).is_empty());
    }
}
