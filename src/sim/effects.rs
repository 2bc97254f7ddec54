//! Particles, reward pop-ups, screen shake and the follow camera
//!
//! Everything here is presentation-adjacent state that the simulation
//! still advances itself, so replays and tests see identical timing. No
//! gameplay logic reads any of it back.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Particle, ParticleColor};
use crate::consts::*;

/// Spawn a burst of particles around a point. Initial velocities are
/// sampled from the state RNG; lifetime is fixed. The oldest particles
/// are evicted when the cap is reached.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    center: Vec2,
    count: usize,
    color: ParticleColor,
) {
    for _ in 0..count {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-6.0..0.0)),
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
            size: rng.random_range(2.0..6.0),
            color,
        });
    }
}

/// Advance particle motion and lifetimes; drop expired particles.
pub fn update_particles(state: &mut GameState) {
    state.particles.retain(|p| p.life > 0);
    for p in &mut state.particles {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life -= 1;
    }
}

/// Advance block bounce countdowns and the coins popping out of hit
/// blocks. A pop-up rises, decelerates under gravity, spins, and fades;
/// it is removed once fully transparent.
pub fn update_popups(state: &mut GameState) {
    for block in &mut state.blocks {
        if block.bounce > 0 {
            block.bounce -= 1;
        }
    }

    state.popups.retain(|a| a.opacity > 0.0);
    for anim in &mut state.popups {
        anim.pos.y += anim.vy;
        anim.vy += POPUP_GRAVITY;
        anim.rotation += POPUP_SPIN;
        anim.opacity -= POPUP_FADE;
    }
}

/// Decay screen shake multiplicatively, snapping to zero near the floor.
pub fn update_screen_shake(state: &mut GameState) {
    if state.screen_shake > 0.0 {
        state.screen_shake *= SHAKE_DECAY;
        if state.screen_shake < SHAKE_FLOOR {
            state.screen_shake = 0.0;
        }
    }
}

/// Keep the player horizontally centered, clamped to level bounds.
pub fn update_camera(state: &mut GameState) {
    let raw = state.player.pos.x - VIEW_WIDTH / 2.0 + PLAYER_WIDTH / 2.0;
    let upper = state.current_def().end_x + CAMERA_END_MARGIN - VIEW_WIDTH;
    state.camera.x = raw.min(upper).max(0.0);
}
