//! Enemy patrol and player interaction
//!
//! Enemies walk horizontally at a constant speed, turning around at
//! walls and at platform edges. They ignore gravity; level data places
//! them on their patrol surface. Contact with the player is either a
//! stomp (the player was falling onto them, same edge rule as a landing)
//! or damage.

use super::collision::{Aabb, Contact, classify_contact, overlaps};
use super::effects::spawn_burst;
use super::state::{Enemy, GameEvent, GameState, ParticleColor, Platform};
use crate::consts::*;

/// Advance every living enemy by one tick. Returns `true` when the
/// player took damage; the caller owns the resulting round reset.
pub fn update_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let GameState {
        player,
        enemies,
        platforms,
        pipes,
        particles,
        rng,
        score,
        coins,
        level,
        screen_shake,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        if !enemy.alive {
            continue;
        }
        enemy.pos.x += enemy.vx;

        for platform in platforms.iter() {
            turn_at_wall(enemy, &platform.rect);
        }
        for pipe in pipes.iter() {
            turn_at_wall(enemy, &pipe.rect);
        }

        if at_ledge(enemy, platforms) {
            enemy.vx = -enemy.vx;
        }

        if overlaps(&player.aabb(), &enemy.aabb()) {
            let stomped = player.vel.y > 0.0
                && classify_contact(&player.aabb(), player.vel, &enemy.aabb())
                    == Contact::Landing;
            if stomped {
                enemy.alive = false;
                player.vel.y = STOMP_BOUNCE;
                *score += STOMP_SCORE;
                *screen_shake = SHAKE_IMPULSE;
                spawn_burst(
                    particles,
                    rng,
                    enemy.aabb().center(),
                    10,
                    ParticleColor::Earth,
                );
                events.push(GameEvent::Stomp);
                events.push(GameEvent::ProgressChanged {
                    score: *score,
                    coins: *coins,
                    level: *level,
                });
            } else {
                return true;
            }
        }
    }
    false
}

/// Snap out of a wall and reverse the patrol direction.
fn turn_at_wall(enemy: &mut Enemy, solid: &Aabb) {
    if !overlaps(&enemy.aabb(), solid) {
        return;
    }
    if enemy.vx > 0.0 {
        enemy.pos.x = solid.left() - enemy.size.x;
    } else if enemy.vx < 0.0 {
        enemy.pos.x = solid.right();
    }
    enemy.vx = -enemy.vx;
}

/// An enemy is at a ledge when no platform top sits exactly under its
/// feet with horizontal overlap. Enemies walking along the bottom of
/// the world are exempt so they keep patrolling across gap floors.
fn at_ledge(enemy: &Enemy, platforms: &[Platform]) -> bool {
    let feet = enemy.aabb();
    let supported = platforms.iter().any(|p| {
        feet.bottom() == p.rect.top()
            && feet.right() > p.rect.left()
            && feet.left() < p.rect.right()
    });
    !supported && enemy.pos.y < GROUND_LINE_Y
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::level::{EnemyDef, LevelCatalog, LevelDef, PlatformDef, Theme};
    use crate::sim::state::SurfaceKind;

    fn plat(x: f32, y: f32, width: f32, height: f32) -> PlatformDef {
        PlatformDef {
            x,
            y,
            width,
            height,
            kind: SurfaceKind::Ground,
        }
    }

    fn state_with(platforms: Vec<PlatformDef>, enemies: Vec<EnemyDef>) -> GameState {
        let catalog = LevelCatalog::new(vec![LevelDef {
            theme: Theme::Ground,
            platforms,
            coins: Vec::new(),
            enemies,
            pipes: Vec::new(),
            blocks: Vec::new(),
            end_x: 100_000.0,
        }])
        .unwrap();
        let mut state = GameState::new(catalog, 3);
        // Park the player well away from the patrol routes
        state.player.pos = Vec2::new(-1000.0, 0.0);
        state
    }

    #[test]
    fn test_patrol_turns_at_wall() {
        let mut state = state_with(
            vec![plat(0.0, 550.0, 600.0, 50.0), plat(400.0, 450.0, 50.0, 100.0)],
            vec![EnemyDef {
                x: 300.0,
                y: 518.0,
                vx: 1.0,
            }],
        );
        let mut events = Vec::new();
        for _ in 0..200 {
            update_enemies(&mut state, &mut events);
            if state.enemies[0].vx < 0.0 {
                break;
            }
        }
        // Snapped flush against the wall face, now heading back
        assert_eq!(state.enemies[0].vx, -1.0);
        assert_eq!(state.enemies[0].pos.x, 400.0 - state.enemies[0].size.x);
        assert!(events.is_empty());
    }

    #[test]
    fn test_patrol_turns_at_ledge() {
        let mut state = state_with(
            vec![plat(200.0, 550.0, 200.0, 50.0)],
            vec![EnemyDef {
                x: 380.0,
                y: 518.0,
                vx: 1.0,
            }],
        );
        let mut events = Vec::new();
        for _ in 0..100 {
            update_enemies(&mut state, &mut events);
            if state.enemies[0].vx < 0.0 {
                break;
            }
        }
        assert_eq!(state.enemies[0].vx, -1.0);
        // Turned the moment its feet left the platform's span
        assert_eq!(state.enemies[0].pos.x, 400.0);
    }

    #[test]
    fn test_stomp_kills_enemy_and_bounces_player() {
        let mut state = state_with(
            vec![plat(0.0, 550.0, 3000.0, 50.0)],
            vec![EnemyDef {
                x: 200.0,
                y: 518.0,
                vx: 1.0,
            }],
        );
        state.player.pos = Vec2::new(200.0, 490.0);
        state.player.vel = Vec2::new(0.0, 10.0);

        let mut events = Vec::new();
        let hurt = update_enemies(&mut state, &mut events);

        assert!(!hurt);
        assert!(!state.enemies[0].alive);
        assert_eq!(state.player.vel.y, STOMP_BOUNCE);
        assert_eq!(state.score, STOMP_SCORE);
        assert_eq!(state.screen_shake, SHAKE_IMPULSE);
        assert_eq!(state.particles.len(), 10);
        assert!(events.contains(&GameEvent::Stomp));
    }

    #[test]
    fn test_side_contact_hurts_player() {
        let mut state = state_with(
            vec![plat(0.0, 550.0, 3000.0, 50.0)],
            vec![EnemyDef {
                x: 200.0,
                y: 518.0,
                vx: 1.0,
            }],
        );
        // Standing inside the enemy, not falling
        state.player.pos = Vec2::new(210.0, 518.0);
        state.player.vel = Vec2::ZERO;

        let mut events = Vec::new();
        let hurt = update_enemies(&mut state, &mut events);

        assert!(hurt);
        assert!(state.enemies[0].alive);
        assert!(events.is_empty());
    }

    #[test]
    fn test_dead_enemy_is_inert() {
        let mut state = state_with(
            vec![plat(0.0, 550.0, 3000.0, 50.0)],
            vec![EnemyDef {
                x: 200.0,
                y: 518.0,
                vx: 1.0,
            }],
        );
        state.enemies[0].alive = false;
        state.player.pos = Vec2::new(200.0, 518.0);

        let mut events = Vec::new();
        let hurt = update_enemies(&mut state, &mut events);

        assert!(!hurt);
        assert!(events.is_empty());
        // Dead enemies do not patrol either
        assert_eq!(state.enemies[0].pos.x, 200.0);
    }
}
