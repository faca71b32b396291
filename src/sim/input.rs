//! Per-tick input snapshot
//!
//! The platform layer polls its keyboard once per frame and flattens the
//! result into a `TickInput`; the simulation never queries devices itself.

use serde::{Deserialize, Serialize};

/// The fixed key set the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Shift,
    Space,
    P,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::Escape,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Shift,
        Key::Space,
        Key::P,
    ];
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move along the facing direction (W / Up)
    pub forward: bool,
    /// Move against the facing direction (S / Down)
    pub back: bool,
    /// Strafe left of the facing direction (A)
    pub strafe_left: bool,
    /// Strafe right of the facing direction (D)
    pub strafe_right: bool,
    /// Turn counter-clockwise (Left arrow)
    pub rotate_left: bool,
    /// Turn clockwise (Right arrow)
    pub rotate_right: bool,
    /// Fire while held (Space)
    pub shoot: bool,
    /// Pause toggle (P / Shift), set only on the frame the key goes down
    pub pause: bool,
    /// Abandon the round (Escape)
    pub quit: bool,
}

impl TickInput {
    /// Build a snapshot from an "is key down" query.
    ///
    /// `pause` mirrors the raw key level here; frontends polling every frame
    /// should go through `InputLatch` so a held key toggles only once.
    pub fn from_keys(is_down: impl Fn(Key) -> bool) -> Self {
        Self {
            forward: is_down(Key::W) || is_down(Key::Up),
            back: is_down(Key::S) || is_down(Key::Down),
            strafe_left: is_down(Key::A),
            strafe_right: is_down(Key::D),
            rotate_left: is_down(Key::Left),
            rotate_right: is_down(Key::Right),
            shoot: is_down(Key::Space),
            pause: is_down(Key::P) || is_down(Key::Shift),
            quit: is_down(Key::Escape),
        }
    }

    /// Signed rotation direction: -1 left, +1 right, right wins when both are held
    pub fn rotation_sign(&self) -> f32 {
        if self.rotate_right {
            1.0
        } else if self.rotate_left {
            -1.0
        } else {
            0.0
        }
    }

    /// True when opposing keys don't cancel on both axes
    pub fn is_diagonal(&self) -> bool {
        self.forward != self.back && self.strafe_left != self.strafe_right
    }
}

/// Turns per-frame key levels into tick input with press edges for toggles
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    pause_held: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the keyboard for this frame
    pub fn sample(&mut self, is_down: impl Fn(Key) -> bool) -> TickInput {
        let mut input = TickInput::from_keys(is_down);
        let held = input.pause;
        input.pause = held && !self.pause_held;
        self.pause_held = held;
        input
    }
}
