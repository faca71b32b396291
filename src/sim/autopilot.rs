//! Demo autopilot
//!
//! Produces a `TickInput` from the current state: turn toward the nearest
//! enemy, close in when it is off screen, back off when it gets too close,
//! and fire once lined up. Used by the headless binary and for soak tests.

use super::collision::on_screen;
use super::input::TickInput;
use super::state::GameState;
use crate::{bearing, normalize_angle};

/// Facing error (radians) under which the autopilot fires
const AIM_TOLERANCE: f32 = 0.08;
/// Preferred standoff distance from the target
const STANDOFF: f32 = 0.6;
/// Fraction of the boundary radius the autopilot refuses to cross
const BOUNDARY_MARGIN: f32 = 0.85;

/// Decide this tick's input
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = &state.player;

    let target = state
        .enemies
        .iter()
        .filter(|e| e.active)
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return input;
    };

    // Signed facing error in [0, 2π): small = target slightly clockwise
    let error = normalize_angle(bearing(player.pos, target.pos) - player.angle);
    let aligned = error < AIM_TOLERANCE || error > std::f32::consts::TAU - AIM_TOLERANCE;

    if !aligned {
        if error < std::f32::consts::PI {
            input.rotate_right = true;
        } else {
            input.rotate_left = true;
        }
    }

    let distance = target.pos.distance(player.pos);
    let near_edge = player.pos.length() > state.boundary.radius * BOUNDARY_MARGIN;
    if aligned {
        input.shoot = on_screen(player.pos, target.pos, state.aspect_ratio);
        if distance > STANDOFF && !near_edge {
            input.forward = true;
        } else if distance < STANDOFF * 0.5 {
            input.back = true;
        }
    }

    input
}
