//! Game state and core simulation types
//!
//! The aggregate [`GameState`] owns every piece of mutable simulation
//! state; the per-tick update functions take it explicitly instead of
//! reaching for ambient globals. Everything is serde-serializable so a
//! host can snapshot/restore a run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level::LevelCatalog;
use crate::consts::*;

/// The player character. Position is the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Landed this tick (resolved by a top contact)
    pub on_ground: bool,
    /// Previous tick's grounded flag, for landing edge detection
    pub was_on_ground: bool,
    pub facing_right: bool,
    /// Jump control latch: set on jump, cleared on release. Edge-triggers
    /// the jump so holding the control does not re-fire while grounded.
    pub jump_latched: bool,
    /// Walk-cycle frame (0..WALK_FRAME_COUNT), advances only while
    /// grounded and moving
    pub anim_frame: u8,
    pub anim_timer: f32,
    /// Squash/stretch scalars, visual only; decay toward 1.0
    pub squash: Vec2,
}

impl Player {
    pub fn at_level_start() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            on_ground: false,
            was_on_ground: false,
            facing_right: true,
            jump_latched: false,
            anim_frame: 0,
            anim_timer: 0.0,
            squash: Vec2::ONE,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}

/// Render-theme tag for static platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Ground,
    Brick,
}

/// Static platform geometry. Immutable for the lifetime of a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
    pub kind: SurfaceKind,
}

/// Static pipe obstacle. Solid like a platform, drawn differently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub rect: Aabb,
}

/// A patrolling enemy. `vx`'s sign encodes the patrol direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub vx: f32,
    /// Cleared when stomped; a dead enemy is skipped entirely but stays
    /// allocated so template indices remain stable
    pub alive: bool,
}

impl Enemy {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A collectible coin. `collected` is monotonic within a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub collected: bool,
    /// Decorative spin phase, advanced by the simulation
    pub rotation: f32,
}

impl Coin {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: Vec2::splat(COIN_SIZE),
        }
    }
}

/// A hittable question block. `hit` is monotonic within a level; a hit
/// block is inert (no reward, no collision).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBlock {
    pub pos: Vec2,
    pub hit: bool,
    /// Cosmetic bounce countdown, set on activation
    pub bounce: u32,
}

impl QuestionBlock {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: Vec2::splat(BLOCK_SIZE),
        }
    }
}

/// Particle tint, resolved to actual colors by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Landing dust, stomp debris
    Earth,
    /// Coin sparkle
    Gold,
}

/// A transient visual particle. Removed when `life` reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub color: ParticleColor,
}

/// The coin that pops out of a hit block: rises, falls back under its own
/// gravity, spins, and fades out. Removed once fully transparent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinPopup {
    pub pos: Vec2,
    pub vy: f32,
    pub rotation: f32,
    pub opacity: f32,
}

/// Horizontal scroll offset, clamped to level bounds each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

/// Events emitted by a tick, in occurrence order. Audio cues, HUD
/// refreshes and render effects are all driven from this log; the
/// simulation itself never reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    CoinCollected,
    BlockHit,
    Stomp,
    /// Fell out of bounds or touched an enemy; the level was reloaded
    Died,
    LevelComplete {
        next_level: u32,
    },
    /// Final level finished; score and coins were reset, level 1 reloaded
    GameComplete,
    /// Score, coin count or level index changed
    ProgressChanged {
        score: u64,
        coins: u32,
        level: u32,
    },
}

/// Complete simulation state. One instance per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Read-only level catalog supplied at startup
    pub catalog: LevelCatalog,
    /// Current level index (1-based)
    pub level: u32,
    /// Cumulative score; survives death, reset only on full completion
    pub score: u64,
    /// Cumulative coin count; same lifetime as `score`
    pub coins: u32,
    /// Paused/running flag; a paused state ignores ticks
    pub running: bool,
    /// Tick counter
    pub frame: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub pipes: Vec<Pipe>,
    pub coin_items: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub blocks: Vec<QuestionBlock>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub popups: Vec<CoinPopup>,
    /// Screen-shake intensity, decays multiplicatively
    pub screen_shake: f32,
    pub camera: Camera,
    /// Seeded RNG for cosmetic spread; gameplay never samples it
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh session on level 1.
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        let mut state = Self {
            catalog,
            level: 1,
            score: 0,
            coins: 0,
            running: true,
            frame: 0,
            player: Player::at_level_start(),
            platforms: Vec::new(),
            pipes: Vec::new(),
            coin_items: Vec::new(),
            enemies: Vec::new(),
            blocks: Vec::new(),
            particles: Vec::new(),
            popups: Vec::new(),
            screen_shake: 0.0,
            camera: Camera::default(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.load_level(1);
        state
    }

    /// Round reset after death: restore the player's transform and
    /// animation state, then reload the current level. Score and coins
    /// are untouched.
    pub fn restart_level(&mut self) {
        self.player = Player::at_level_start();
        self.load_level(self.level);
    }

    /// Snapshot of the progress counters as an event, for HUD refreshes.
    pub fn progress_event(&self) -> GameEvent {
        GameEvent::ProgressChanged {
            score: self.score,
            coins: self.coins,
            level: self.level,
        }
    }
}
