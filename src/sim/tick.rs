//! Per-frame simulation tick
//!
//! Advances the round by one variable-length frame. Order within a tick:
//! player integration, enemy AI, bullet movement and culling, bullet
//! spawning, decorations, collisions, boundary check, win/lose evaluation.
//!
//! Nothing here uses a fixed timestep: movement per tick scales with the
//! frame delta, and bullet velocity is baked from the delta of the frame
//! that fired it.

use glam::Vec2;

use super::collision::{circles_overlap, on_screen, outside_boundary};
use super::input::TickInput;
use super::pool::PoolKind;
use super::state::{GameEvent, GamePhase, GameState, LossReason, drain_health};
use crate::{bearing, heading, normalize_angle};

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase.is_terminal() {
        return;
    }

    if input.quit {
        log::info!("Round abandoned at tick {}", state.time_ticks);
        state.set_phase(GamePhase::Abandoned);
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.set_phase(GamePhase::Paused);
                return;
            }
            GamePhase::Paused => state.set_phase(GamePhase::Playing),
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = sanitize_delta(dt);
    state.time_ticks += 1;
    state.elapsed += dt;

    integrate_player(state, input, dt);
    update_enemies(state, dt);
    move_bullets(state);
    spawn_bullets(state, input, dt);
    animate_decorations(state, dt);
    resolve_collisions(state);

    // Boundary check
    if outside_boundary(state.player.pos, state.boundary.radius) {
        state.lose(LossReason::OutOfBounds);
        return;
    }

    // Win/lose evaluation
    if state.player.health <= 0.0 {
        state.lose(LossReason::HealthDepleted);
    } else if state.all_enemies_defeated() {
        log::info!("All enemies defeated in {:.2}s", state.elapsed);
        state.set_phase(GamePhase::Won);
    }
}

/// Treat a stalled or broken clock as a zero-length frame
fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame delta {dt}");
        0.0
    }
}

/// Unit-speed movement direction for the held keys at a facing angle.
///
/// Diagonal input is scaled by √2/2 so its length matches a single key.
pub fn movement_direction(input: &TickInput, angle: f32) -> Vec2 {
    let forward = heading(angle);
    // Right-hand side of the ship
    let right = Vec2::new(forward.y, -forward.x);

    let mut dir = Vec2::ZERO;
    if input.forward {
        dir += forward;
    }
    if input.back {
        dir -= forward;
    }
    if input.strafe_left {
        dir -= right;
    }
    if input.strafe_right {
        dir += right;
    }

    if input.is_diagonal() {
        dir * std::f32::consts::FRAC_1_SQRT_2
    } else {
        dir
    }
}

fn integrate_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    player.rotation_rate = input.rotation_sign() * tuning.player_rotation_rate;
    player.angle = normalize_angle(player.angle + player.rotation_rate * dt);

    player.vel = movement_direction(input, player.angle) * tuning.player_speed * dt;
    player.pos += player.vel;
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let player_pos = state.player.pos;
    let speed = state.tuning.enemy_speed;

    for enemy in state.enemies.iter_mut().filter(|e| e.active) {
        enemy.angle = bearing(enemy.pos, player_pos);
        enemy.on_screen = on_screen(player_pos, enemy.pos, state.aspect_ratio);
        if enemy.on_screen {
            enemy.pos += heading(enemy.angle) * speed * dt;
        }
    }
}

fn move_bullets(state: &mut GameState) {
    let center = state.player.pos;
    let aspect = state.aspect_ratio;

    for pool in [&mut state.player_bullets, &mut state.enemy_bullets] {
        let kind = pool.kind;
        for (slot, bullet) in pool.slots_mut().iter_mut().enumerate() {
            if !bullet.active {
                continue;
            }
            bullet.pos += bullet.vel;
            if !on_screen(center, bullet.pos, aspect) {
                bullet.active = false;
                state.events.push(GameEvent::BulletExpired { pool: kind, slot });
            }
        }
    }
}

/// Accumulate `dt` into a fire timer; true when a shot is due.
///
/// The period is subtracted rather than the timer reset, so time owed from
/// long frames carries into later ticks. At most one shot per call.
pub fn advance_fire_timer(timer: &mut f32, dt: f32, period: f32) -> bool {
    *timer += dt;
    if *timer >= period {
        *timer -= period;
        true
    } else {
        false
    }
}

fn spawn_bullets(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;

    if input.shoot
        && advance_fire_timer(&mut state.player.fire_timer, dt, tuning.player_fire_period())
    {
        let player = &state.player;
        let vel = heading(player.angle) * tuning.player_bullet_speed * dt;
        match state.player_bullets.spawn(player.pos, player.angle, vel) {
            Some(slot) => state.events.push(GameEvent::PlayerFired { slot }),
            None => state.events.push(GameEvent::SpawnDropped {
                pool: PoolKind::Player,
            }),
        }
    }

    let period = tuning.enemy_fire_period();
    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if !(enemy.active && enemy.on_screen) {
            continue;
        }
        if !advance_fire_timer(&mut enemy.fire_timer, dt, period) {
            continue;
        }
        let vel = heading(enemy.angle) * tuning.enemy_bullet_speed * dt;
        match state.enemy_bullets.spawn(enemy.pos, enemy.angle, vel) {
            Some(slot) => state.events.push(GameEvent::EnemyFired { enemy: index, slot }),
            None => state.events.push(GameEvent::SpawnDropped {
                pool: PoolKind::Enemy,
            }),
        }
    }
}

fn animate_decorations(state: &mut GameState, dt: f32) {
    state.wormhole_angle =
        normalize_angle(state.wormhole_angle + state.tuning.wormhole_spin_rate * dt);
    for asteroid in &mut state.asteroids {
        asteroid.angle = normalize_angle(asteroid.angle + asteroid.spin_rate * dt);
    }
    state.tint.advance(state.tuning.tint_fade_rate, dt);
}

fn resolve_collisions(state: &mut GameState) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    // Player <-> enemy: the enemy is destroyed outright
    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if !enemy.active {
            continue;
        }
        if circles_overlap(
            player.pos,
            tuning.player_hitbox_radius,
            enemy.pos,
            tuning.enemy_hitbox_radius,
        ) {
            enemy.active = false;
            enemy.health = 0.0;
            drain_health(&mut player.health, tuning.ram_damage);
            state.events.push(GameEvent::PlayerRammed { enemy: index });
            state.events.push(GameEvent::EnemyDestroyed { enemy: index });
        }
    }

    // Enemy <-> player bullets
    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if !enemy.active {
            continue;
        }
        for (slot, bullet) in state.player_bullets.slots_mut().iter_mut().enumerate() {
            if !bullet.active {
                continue;
            }
            if circles_overlap(
                enemy.pos,
                tuning.enemy_hitbox_radius,
                bullet.pos,
                tuning.player_bullet_radius,
            ) {
                bullet.active = false;
                drain_health(&mut enemy.health, tuning.player_bullet_damage);
                state.events.push(GameEvent::EnemyHit { enemy: index, slot });
                if enemy.health <= 0.0 {
                    enemy.active = false;
                    state.events.push(GameEvent::EnemyDestroyed { enemy: index });
                    break;
                }
            }
        }
    }

    // Player <-> enemy bullets
    for (slot, bullet) in state.enemy_bullets.slots_mut().iter_mut().enumerate() {
        if !bullet.active {
            continue;
        }
        if circles_overlap(
            player.pos,
            tuning.player_hitbox_radius,
            bullet.pos,
            tuning.enemy_bullet_radius,
        ) {
            bullet.active = false;
            drain_health(&mut player.health, tuning.enemy_bullet_damage);
            state.events.push(GameEvent::PlayerHit { slot });
        }
    }
}
