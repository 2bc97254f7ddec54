//! Character physics and collision resolution
//!
//! Per tick, in order: input acceleration and friction, edge-triggered
//! variable-height jump, gravity, position integration, collision
//! resolution against platforms, pipes and unhit question blocks,
//! fall-out-of-bounds and level-completion transitions, then animation
//! bookkeeping. Collision outcomes are classified per solid from the
//! pre-displacement edge rule in [`super::collision`]; solids are
//! evaluated independently in list order, so a later resolution may
//! override an earlier one. That approximation is deliberate.

use glam::Vec2;

use super::collision::{Aabb, Contact, classify_contact, overlaps};
use super::effects::spawn_burst;
use super::state::{CoinPopup, GameEvent, GameState, ParticleColor, Player};
use super::tick::TickInput;
use crate::consts::*;

/// Advance the player by one tick. Returns `true` if a transition
/// (death or level completion) reloaded a level, in which case the
/// animation pass is skipped for the fresh state.
pub fn update_player(
    state: &mut GameState,
    input: &TickInput,
    events: &mut Vec<GameEvent>,
) -> bool {
    apply_input(&mut state.player, input, events);
    resolve_world(state, events);
    if apply_transitions(state, events) {
        return true;
    }
    animate(state);
    false
}

fn apply_input(player: &mut Player, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.left {
        player.vel.x -= MOVE_ACCEL;
        player.facing_right = false;
    }
    if input.right {
        player.vel.x += MOVE_ACCEL;
        player.facing_right = true;
    }
    player.vel.x *= FRICTION;
    player.vel.x = player.vel.x.clamp(-MAX_RUN_SPEED, MAX_RUN_SPEED);

    // Variable-height jump: edge-triggered on press, capped on release
    if input.jump && player.on_ground && !player.jump_latched {
        player.vel.y = JUMP_IMPULSE;
        player.on_ground = false;
        player.jump_latched = true;
        events.push(GameEvent::Jump);
    } else if !input.jump {
        player.jump_latched = false;
        if player.vel.y < JUMP_CUT_SPEED {
            player.vel.y = JUMP_CUT_SPEED;
        }
    }

    // Gravity applies every tick; a landing resolution corrects it
    player.vel.y += GRAVITY;
    player.pos += player.vel;
}

/// Resolve against platforms, pipes, then unhit question blocks.
/// Ceiling contact with a block activates it instead of a plain stop.
fn resolve_world(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let GameState {
        player,
        platforms,
        pipes,
        blocks,
        popups,
        score,
        coins,
        level,
        ..
    } = state;

    player.on_ground = false;

    for platform in platforms.iter() {
        resolve_solid(player, &platform.rect);
    }
    for pipe in pipes.iter() {
        resolve_solid(player, &pipe.rect);
    }

    for block in blocks.iter_mut() {
        if block.hit {
            continue;
        }
        let rect = block.aabb();
        if !overlaps(&player.aabb(), &rect) {
            continue;
        }
        match classify_contact(&player.aabb(), player.vel, &rect) {
            Contact::Landing => {
                player.pos.y = rect.top() - PLAYER_HEIGHT;
                player.vel.y = 0.0;
                player.on_ground = true;
            }
            Contact::Ceiling => {
                // Activation: one-time reward plus a dampened "bonk"
                // rebound instead of a plain stop
                player.pos.y = rect.bottom();
                player.vel.y = -player.vel.y * BONK_REBOUND;
                block.hit = true;
                block.bounce = BLOCK_BOUNCE_TICKS;
                *score += BLOCK_SCORE;
                *coins += 1;
                popups.push(CoinPopup {
                    pos: Vec2::new(
                        rect.center().x - POPUP_SIZE / 2.0,
                        rect.top() - POPUP_SIZE,
                    ),
                    vy: POPUP_LAUNCH_VY,
                    rotation: 0.0,
                    opacity: 1.0,
                });
                events.push(GameEvent::BlockHit);
                events.push(GameEvent::ProgressChanged {
                    score: *score,
                    coins: *coins,
                    level: *level,
                });
            }
            Contact::Side => side_stop(player, &rect),
        }
    }
}

fn resolve_solid(player: &mut Player, solid: &Aabb) {
    if !overlaps(&player.aabb(), solid) {
        return;
    }
    match classify_contact(&player.aabb(), player.vel, solid) {
        Contact::Landing => {
            player.pos.y = solid.top() - PLAYER_HEIGHT;
            player.vel.y = 0.0;
            player.on_ground = true;
        }
        Contact::Ceiling => {
            player.pos.y = solid.bottom();
            player.vel.y = 0.0;
        }
        Contact::Side => side_stop(player, solid),
    }
}

fn side_stop(player: &mut Player, solid: &Aabb) {
    if player.vel.x > 0.0 {
        player.pos.x = solid.left() - PLAYER_WIDTH;
        player.vel.x = 0.0;
    } else if player.vel.x < 0.0 {
        player.pos.x = solid.right();
        player.vel.x = 0.0;
    }
}

/// Fall-out-of-bounds and level-completion transitions. Both fully
/// reload a level; only full-game completion resets score and coins.
fn apply_transitions(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if state.player.pos.y > VIEW_HEIGHT + FALL_MARGIN {
        events.push(GameEvent::Died);
        state.restart_level();
        events.push(state.progress_event());
        return true;
    }

    if state.player.pos.x >= state.current_def().end_x {
        if (state.level as usize) < state.catalog.len() {
            let next = state.level + 1;
            events.push(GameEvent::LevelComplete { next_level: next });
            state.load_level(next);
        } else {
            events.push(GameEvent::GameComplete);
            state.score = 0;
            state.coins = 0;
            state.load_level(1);
        }
        events.push(state.progress_event());
        return true;
    }
    false
}

/// Walk-cycle, landing squash and dust. Purely visual.
fn animate(state: &mut GameState) {
    let GameState {
        player,
        particles,
        rng,
        ..
    } = state;

    if player.vel.x.abs() > WALK_SPEED_THRESHOLD && player.on_ground {
        player.anim_timer += WALK_ANIM_RATE;
        if player.anim_timer >= 1.0 {
            player.anim_timer = 0.0;
            player.anim_frame = (player.anim_frame + 1) % WALK_FRAME_COUNT;
        }
    } else {
        player.anim_frame = 0;
        player.anim_timer = 0.0;
    }

    // Landing edge: dust burst plus a one-time squash impulse
    if !player.was_on_ground && player.on_ground {
        let base = Vec2::new(
            player.pos.x + PLAYER_WIDTH / 2.0,
            player.pos.y + PLAYER_HEIGHT,
        );
        spawn_burst(particles, rng, base, 5, ParticleColor::Earth);
        player.squash = Vec2::new(LAND_SQUASH_X, LAND_SQUASH_Y);
    }

    player.squash += (Vec2::ONE - player.squash) * SQUASH_RECOVERY;
    player.was_on_ground = player.on_ground;
}

/// Coin pickup: advance decorative spin, collect on overlap. Collected
/// coins are inert; collection is one-way within a level.
pub fn update_coins(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let GameState {
        player,
        coin_items,
        particles,
        rng,
        score,
        coins,
        level,
        ..
    } = state;

    for coin in coin_items.iter_mut() {
        if coin.collected {
            continue;
        }
        coin.rotation += COIN_SPIN;
        if overlaps(&player.aabb(), &coin.aabb()) {
            coin.collected = true;
            *coins += 1;
            *score += COIN_SCORE;
            events.push(GameEvent::CoinCollected);
            events.push(GameEvent::ProgressChanged {
                score: *score,
                coins: *coins,
                level: *level,
            });
            spawn_burst(particles, rng, coin.aabb().center(), 8, ParticleColor::Gold);
        }
    }
}
