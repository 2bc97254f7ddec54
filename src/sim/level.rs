//! Level catalog and load/reset
//!
//! Levels are immutable templates: static geometry plus entity
//! placements, validated once when a catalog is built. Loading a level
//! deep-copies the templates into fresh runtime collections on the
//! [`GameState`]; nothing carries over between loads except the
//! cumulative score and coin counters.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::{
    Camera, Coin, Enemy, GameState, Pipe, Platform, QuestionBlock, SurfaceKind,
};
use crate::consts::*;

/// Background/render theme of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Ground,
    Sky,
    Underground,
}

/// Platform template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: SurfaceKind,
}

/// Pipe template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Spawn point for a coin or a question block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// Enemy template. Sign of `vx` is the initial patrol direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDef {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
}

/// One level's immutable template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    pub theme: Theme,
    pub platforms: Vec<PlatformDef>,
    pub coins: Vec<SpawnPoint>,
    pub enemies: Vec<EnemyDef>,
    pub pipes: Vec<PipeDef>,
    pub blocks: Vec<SpawnPoint>,
    /// Reaching this x completes the level
    pub end_x: f32,
}

/// Catalog construction/parse failure.
#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    Empty,
    BadLevel {
        index: usize,
        reason: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "catalog parse error: {err}"),
            CatalogError::Empty => write!(f, "catalog contains no levels"),
            CatalogError::BadLevel { index, reason } => {
                write!(f, "level {index} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// Ordered, read-only collection of level definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<LevelDef>,
}

impl LevelCatalog {
    /// Build a catalog, validating every level once up front.
    pub fn new(levels: Vec<LevelDef>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, def) in levels.iter().enumerate() {
            let index = i + 1;
            if def.end_x <= 0.0 {
                return Err(CatalogError::BadLevel {
                    index,
                    reason: "end marker must be positive",
                });
            }
            if def
                .platforms
                .iter()
                .any(|p| p.width <= 0.0 || p.height <= 0.0)
            {
                return Err(CatalogError::BadLevel {
                    index,
                    reason: "platform with non-positive size",
                });
            }
            if def.pipes.iter().any(|p| p.width <= 0.0 || p.height <= 0.0) {
                return Err(CatalogError::BadLevel {
                    index,
                    reason: "pipe with non-positive size",
                });
            }
            if def.enemies.iter().any(|e| e.vx == 0.0) {
                log::warn!("level {index}: enemy with zero patrol speed");
            }
        }
        Ok(Self { levels })
    }

    /// Parse a catalog from a JSON array of level definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let levels: Vec<LevelDef> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Look up a level by 1-based index.
    pub fn get(&self, index: u32) -> Option<&LevelDef> {
        (index >= 1)
            .then(|| self.levels.get(index as usize - 1))
            .flatten()
    }

    /// The built-in three-level campaign.
    pub fn builtin() -> Self {
        Self {
            levels: vec![level_one(), level_two(), level_three()],
        }
    }
}

impl GameState {
    /// Instantiate a level's runtime state from its template.
    ///
    /// An index outside the catalog wraps to 1 (this is the
    /// completion-of-final-level path, not an error). Replaces all
    /// per-level mutable state; only score and coins persist.
    pub fn load_level(&mut self, index: u32) {
        let max = self.catalog.len() as u32;
        let index = if (1..=max).contains(&index) { index } else { 1 };
        self.level = index;
        let def = &self.catalog.levels[index as usize - 1];

        self.platforms = def
            .platforms
            .iter()
            .map(|p| Platform {
                rect: Aabb::new(p.x, p.y, p.width, p.height),
                kind: p.kind,
            })
            .collect();
        self.pipes = def
            .pipes
            .iter()
            .map(|p| Pipe {
                rect: Aabb::new(p.x, p.y, p.width, p.height),
            })
            .collect();
        self.coin_items = def
            .coins
            .iter()
            .map(|c| Coin {
                pos: Vec2::new(c.x, c.y),
                collected: false,
                rotation: 0.0,
            })
            .collect();
        self.enemies = def
            .enemies
            .iter()
            .map(|e| Enemy {
                pos: Vec2::new(e.x, e.y),
                size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                vx: e.vx,
                alive: true,
            })
            .collect();
        self.blocks = def
            .blocks
            .iter()
            .map(|b| QuestionBlock {
                pos: Vec2::new(b.x, b.y),
                hit: false,
                bounce: 0,
            })
            .collect();

        self.player.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.player.vel = Vec2::ZERO;
        self.player.on_ground = false;

        self.particles.clear();
        self.popups.clear();
        self.screen_shake = 0.0;
        self.camera = Camera::default();

        log::debug!(
            "loaded level {index} ({:?}): {} platforms, {} pipes, {} coins, {} enemies, {} blocks",
            def.theme,
            self.platforms.len(),
            self.pipes.len(),
            self.coin_items.len(),
            self.enemies.len(),
            self.blocks.len()
        );
    }

    /// Template of the currently loaded level.
    pub fn current_def(&self) -> &LevelDef {
        &self.catalog.levels[self.level as usize - 1]
    }
}

fn ground(x: f32, y: f32, width: f32, height: f32) -> PlatformDef {
    PlatformDef {
        x,
        y,
        width,
        height,
        kind: SurfaceKind::Ground,
    }
}

fn brick(x: f32, y: f32, width: f32, height: f32) -> PlatformDef {
    PlatformDef {
        x,
        y,
        width,
        height,
        kind: SurfaceKind::Brick,
    }
}

fn pipe(x: f32, y: f32) -> PipeDef {
    PipeDef {
        x,
        y,
        width: 50.0,
        height: 64.0,
    }
}

fn at(x: f32, y: f32) -> SpawnPoint {
    SpawnPoint { x, y }
}

fn enemy(x: f32, y: f32, vx: f32) -> EnemyDef {
    EnemyDef { x, y, vx }
}

/// Level 1: traditional ground level, rolling hills and valleys.
fn level_one() -> LevelDef {
    LevelDef {
        theme: Theme::Ground,
        platforms: vec![
            // Ground with jumpable gaps
            ground(0.0, 550.0, 350.0, 50.0),
            ground(450.0, 550.0, 250.0, 50.0),
            ground(750.0, 550.0, 200.0, 50.0),
            ground(1000.0, 550.0, 300.0, 50.0),
            ground(1350.0, 550.0, 250.0, 50.0),
            ground(1650.0, 550.0, 300.0, 50.0),
            ground(2000.0, 550.0, 600.0, 50.0),
            // Step platforms
            brick(300.0, 480.0, 80.0, 20.0),
            brick(430.0, 420.0, 80.0, 20.0),
            brick(560.0, 360.0, 80.0, 20.0),
            // Bridge platforms
            brick(700.0, 400.0, 100.0, 20.0),
            brick(880.0, 350.0, 100.0, 20.0),
            // Valley crossing
            brick(1300.0, 450.0, 120.0, 20.0),
            brick(1550.0, 400.0, 100.0, 20.0),
            // High platforms
            brick(1750.0, 350.0, 80.0, 20.0),
            brick(1900.0, 300.0, 80.0, 20.0),
            brick(2100.0, 380.0, 100.0, 20.0),
        ],
        coins: vec![
            at(330.0, 450.0),
            at(460.0, 390.0),
            at(590.0, 330.0),
            at(750.0, 370.0),
            at(920.0, 320.0),
            at(1350.0, 420.0),
            at(1580.0, 370.0),
            at(1780.0, 320.0),
            at(1930.0, 270.0),
            at(2130.0, 350.0),
        ],
        enemies: vec![
            enemy(200.0, 518.0, 1.0),
            enemy(550.0, 518.0, -1.0),
            enemy(850.0, 518.0, 1.0),
            enemy(1200.0, 518.0, -1.0),
            enemy(1800.0, 518.0, 1.0),
        ],
        pipes: vec![pipe(500.0, 486.0), pipe(1150.0, 486.0), pipe(1700.0, 486.0)],
        blocks: vec![at(440.0, 370.0), at(900.0, 300.0), at(1910.0, 250.0)],
        end_x: 2500.0,
    }
}

/// Level 2: sky world, floating cloud platforms.
fn level_two() -> LevelDef {
    LevelDef {
        theme: Theme::Sky,
        platforms: vec![
            ground(0.0, 550.0, 200.0, 50.0),
            brick(240.0, 500.0, 100.0, 20.0),
            brick(380.0, 450.0, 80.0, 20.0),
            brick(520.0, 400.0, 100.0, 20.0),
            brick(660.0, 350.0, 80.0, 20.0),
            brick(800.0, 300.0, 120.0, 20.0),
            brick(980.0, 350.0, 80.0, 20.0),
            brick(1120.0, 300.0, 100.0, 20.0),
            brick(1300.0, 250.0, 120.0, 20.0),
            brick(1500.0, 300.0, 80.0, 20.0),
            brick(1640.0, 350.0, 100.0, 20.0),
            brick(1800.0, 400.0, 80.0, 20.0),
            brick(1940.0, 450.0, 100.0, 20.0),
            brick(2120.0, 500.0, 80.0, 20.0),
            brick(2280.0, 450.0, 100.0, 20.0),
            brick(2460.0, 400.0, 80.0, 20.0),
            brick(2620.0, 450.0, 100.0, 20.0),
            ground(2800.0, 550.0, 500.0, 50.0),
        ],
        coins: vec![
            at(270.0, 470.0),
            at(410.0, 420.0),
            at(550.0, 370.0),
            at(690.0, 320.0),
            at(850.0, 270.0),
            at(1010.0, 320.0),
            at(1160.0, 270.0),
            at(1340.0, 220.0),
            at(1420.0, 220.0),
            at(1500.0, 220.0),
            at(1530.0, 270.0),
            at(1670.0, 320.0),
            at(1830.0, 370.0),
            at(1970.0, 420.0),
            at(2150.0, 470.0),
            at(2310.0, 420.0),
            at(2490.0, 370.0),
            at(2650.0, 420.0),
        ],
        enemies: vec![
            enemy(320.0, 468.0, 1.2),
            enemy(560.0, 368.0, -1.2),
            enemy(850.0, 268.0, 1.2),
            enemy(1170.0, 268.0, -1.2),
            enemy(1350.0, 218.0, 1.2),
            enemy(1870.0, 368.0, -1.2),
            enemy(2200.0, 468.0, 1.2),
            enemy(2540.0, 368.0, -1.2),
        ],
        pipes: vec![
            pipe(450.0, 436.0),
            pipe(1050.0, 286.0),
            pipe(1720.0, 286.0),
            pipe(2400.0, 386.0),
        ],
        blocks: vec![
            at(840.0, 250.0),
            at(1150.0, 250.0),
            at(1350.0, 200.0),
            at(1850.0, 350.0),
        ],
        end_x: 3200.0,
    }
}

/// Level 3: underground maze, drop-downs and an ascending finish.
fn level_three() -> LevelDef {
    LevelDef {
        theme: Theme::Underground,
        platforms: vec![
            ground(0.0, 550.0, 250.0, 50.0),
            brick(300.0, 500.0, 80.0, 20.0),
            brick(430.0, 450.0, 70.0, 20.0),
            brick(560.0, 400.0, 80.0, 20.0),
            // Upper path
            brick(690.0, 350.0, 70.0, 20.0),
            brick(820.0, 300.0, 100.0, 20.0),
            brick(980.0, 300.0, 70.0, 20.0),
            // Drop-down section
            brick(1120.0, 380.0, 80.0, 20.0),
            brick(1250.0, 430.0, 70.0, 20.0),
            // Lower path
            brick(1380.0, 480.0, 80.0, 20.0),
            brick(1510.0, 460.0, 70.0, 20.0),
            brick(1640.0, 420.0, 80.0, 20.0),
            // Ascending challenge
            brick(1770.0, 380.0, 70.0, 20.0),
            brick(1900.0, 340.0, 80.0, 20.0),
            brick(2030.0, 300.0, 70.0, 20.0),
            brick(2160.0, 340.0, 100.0, 20.0),
            brick(2330.0, 380.0, 70.0, 20.0),
            brick(2460.0, 420.0, 80.0, 20.0),
            // Final stretch
            brick(2610.0, 470.0, 70.0, 20.0),
            ground(2750.0, 550.0, 600.0, 50.0),
        ],
        coins: vec![
            at(330.0, 470.0),
            at(460.0, 420.0),
            at(590.0, 370.0),
            at(720.0, 320.0),
            at(860.0, 270.0),
            at(1010.0, 270.0),
            at(1140.0, 350.0),
            at(1270.0, 400.0),
            at(1400.0, 450.0),
            at(1530.0, 430.0),
            at(1660.0, 390.0),
            at(1790.0, 350.0),
            at(1920.0, 310.0),
            at(2050.0, 270.0),
            at(2200.0, 310.0),
            at(2350.0, 350.0),
            at(2480.0, 390.0),
            at(2630.0, 440.0),
            at(800.0, 250.0),
            at(2100.0, 250.0),
        ],
        enemies: vec![
            enemy(400.0, 418.0, 1.5),
            enemy(650.0, 368.0, -1.5),
            enemy(850.0, 268.0, 1.5),
            enemy(1200.0, 348.0, -1.5),
            enemy(1450.0, 448.0, 1.5),
            enemy(1700.0, 388.0, -1.5),
            enemy(1950.0, 308.0, 1.5),
            enemy(2250.0, 308.0, -1.5),
            enemy(2550.0, 398.0, 1.5),
            enemy(2950.0, 518.0, -1.5),
        ],
        pipes: vec![
            pipe(520.0, 436.0),
            pipe(950.0, 236.0),
            pipe(1580.0, 396.0),
            pipe(2130.0, 236.0),
            pipe(2700.0, 486.0),
        ],
        blocks: vec![
            at(850.0, 250.0),
            at(1010.0, 250.0),
            at(1660.0, 390.0),
            at(1930.0, 290.0),
            at(2480.0, 390.0),
        ],
        end_x: 3200.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1).map(|l| l.theme), Some(Theme::Ground));
        assert_eq!(catalog.get(3).map(|l| l.theme), Some(Theme::Underground));
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            LevelCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_bad_geometry_rejected() {
        let mut def = level_one();
        def.platforms[0].width = 0.0;
        let err = LevelCatalog::new(vec![def]).unwrap_err();
        assert!(matches!(err, CatalogError::BadLevel { index: 1, .. }));
    }

    #[test]
    fn test_load_level_wraps_out_of_range_to_one() {
        let mut state = GameState::new(LevelCatalog::builtin(), 7);
        state.load_level(4);
        assert_eq!(state.level, 1);
        state.load_level(0);
        assert_eq!(state.level, 1);
        state.load_level(2);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_load_level_resets_runtime_state_but_not_progress() {
        let mut state = GameState::new(LevelCatalog::builtin(), 7);
        state.score = 450;
        state.coins = 6;
        state.coin_items[0].collected = true;
        state.blocks[0].hit = true;
        state.enemies[0].alive = false;
        state.screen_shake = 5.0;
        state.camera.x = 300.0;

        state.load_level(1);

        assert!(state.coin_items.iter().all(|c| !c.collected));
        assert!(state.blocks.iter().all(|b| !b.hit && b.bounce == 0));
        assert!(state.enemies.iter().all(|e| e.alive));
        assert!(
            state
                .enemies
                .iter()
                .all(|e| e.size == Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
        );
        assert_eq!(state.screen_shake, 0.0);
        assert_eq!(state.camera.x, 0.0);
        assert_eq!(state.player.pos.x, crate::consts::PLAYER_START_X);
        // Cumulative progress is untouched by a reload
        assert_eq!(state.score, 450);
        assert_eq!(state.coins, 6);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let json = serde_json::to_string(&vec![level_one()]).unwrap();
        let catalog = LevelCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().end_x, 2500.0);
    }

    #[test]
    fn test_catalog_json_parse_error() {
        assert!(matches!(
            LevelCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
