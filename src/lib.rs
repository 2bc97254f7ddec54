//! Pipe Runner - a side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Fixed-timestep driver and host-facing session control
//! - `audio`: Sound-cue surface (fire-and-forget, optional)
//! - `settings`: Host preferences
//!
//! Rendering, input plumbing and audio synthesis are host concerns; the
//! crate exposes read-only state snapshots and an event stream instead.

pub mod audio;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, NullAudio, SoundEffect};
pub use session::{Progress, Session};
pub use settings::{QualityPreset, Settings};

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; velocities are per-tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Viewport dimensions
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick, applied every tick
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -15.0;
    /// Upward speed cap applied when the jump control is released early
    pub const JUMP_CUT_SPEED: f32 = -4.0;
    /// Horizontal acceleration per tick while a direction is held
    pub const MOVE_ACCEL: f32 = 0.5;
    /// Horizontal velocity multiplier per tick
    pub const FRICTION: f32 = 0.8;
    /// Horizontal speed clamp
    pub const MAX_RUN_SPEED: f32 = 5.0;

    /// Margin used to classify a collision as landing/ceiling rather than
    /// a side hit, measured against the pre-displacement edge position
    pub const CONTACT_TOLERANCE: f32 = 10.0;

    /// Player rectangle
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 400.0;

    /// Enemy rectangle
    pub const ENEMY_WIDTH: f32 = 32.0;
    pub const ENEMY_HEIGHT: f32 = 32.0;

    /// Question-block rectangle (square)
    pub const BLOCK_SIZE: f32 = 32.0;

    /// Collectible rectangle
    pub const COIN_SIZE: f32 = 20.0;
    /// Coin spin advance per tick (decorative)
    pub const COIN_SPIN: f32 = 0.15;

    /// Rewards
    pub const COIN_SCORE: u64 = 50;
    pub const BLOCK_SCORE: u64 = 100;
    pub const STOMP_SCORE: u64 = 200;

    /// Upward bounce applied to the player on a successful stomp
    pub const STOMP_BOUNCE: f32 = -8.0;
    /// Question-block bounce animation length in ticks
    pub const BLOCK_BOUNCE_TICKS: u32 = 10;
    /// Fraction of upward speed returned as downward "bonk" on block hit
    pub const BONK_REBOUND: f32 = 0.5;

    /// Reward pop-up launch velocity, gravity, fade and spin per tick
    pub const POPUP_LAUNCH_VY: f32 = -8.0;
    pub const POPUP_GRAVITY: f32 = 0.3;
    pub const POPUP_FADE: f32 = 0.02;
    pub const POPUP_SPIN: f32 = 0.2;
    pub const POPUP_SIZE: f32 = 20.0;

    /// Particle lifetime in ticks and downward acceleration per tick
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_GRAVITY: f32 = 0.3;
    /// Hard cap on live particles (oldest evicted first)
    pub const MAX_PARTICLES: usize = 256;

    /// Screen shake impulse on stomp, decay factor and snap-to-zero floor
    pub const SHAKE_IMPULSE: f32 = 10.0;
    pub const SHAKE_DECAY: f32 = 0.9;
    pub const SHAKE_FLOOR: f32 = 0.5;

    /// Camera may scroll this far past the level end marker
    pub const CAMERA_END_MARGIN: f32 = 200.0;
    /// Falling this far below the viewport triggers a round reset
    pub const FALL_MARGIN: f32 = 100.0;
    /// y of the lowest walkable surface; enemies below it skip ledge checks
    pub const GROUND_LINE_Y: f32 = 550.0;

    /// Walk-cycle bookkeeping
    pub const WALK_ANIM_RATE: f32 = 0.2;
    pub const WALK_FRAME_COUNT: u8 = 4;
    pub const WALK_SPEED_THRESHOLD: f32 = 0.5;

    /// Landing squash impulse and per-tick recovery toward 1.0
    pub const LAND_SQUASH_X: f32 = 1.2;
    pub const LAND_SQUASH_Y: f32 = 0.8;
    pub const SQUASH_RECOVERY: f32 = 0.15;
}
