//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one frame)
//! - Seeded RNG only (cosmetic particle spread)
//! - No rendering or platform dependencies
//!
//! Each tick mutates a [`GameState`] in a fixed order and returns the list
//! of [`GameEvent`]s the frame produced, so audio, HUD and render
//! collaborators can be driven from the event log.

pub mod collision;
pub mod effects;
pub mod enemy;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, classify_contact, overlaps};
pub use level::{CatalogError, EnemyDef, LevelCatalog, LevelDef, PipeDef, PlatformDef, SpawnPoint, Theme};
pub use state::{
    Camera, Coin, CoinPopup, Enemy, GameEvent, GameState, Particle, ParticleColor, Pipe, Platform,
    Player, QuestionBlock, SurfaceKind,
};
pub use tick::{TickInput, tick};
