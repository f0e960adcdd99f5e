//! Components attached to entities.
//!
//! Components are plain data. Game logic lives in systems, not components;
//! `Lifespan` is the exception because its counters carry an invariant.

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Vec2};

/// Position, per-frame displacement and rotation (degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
}

impl Transform {
    pub fn new(pos: Vec2, velocity: Vec2, angle: f32) -> Self {
        Self {
            pos,
            velocity,
            angle,
        }
    }
}

/// Visual polygon: a regular `vertex_count`-gon inscribed in `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    pub vertex_count: u32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
}

/// Gameplay hit-test radius, independent of the visual radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    pub radius: f32,
}

/// Frames left to live. `remaining <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    total: u32,
    remaining: u32,
}

impl Lifespan {
    /// Fresh lifespan with `remaining == total`.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Count down one frame. Returns false once nothing was left to count.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Linear fade `255 * remaining / total`, truncated.
    pub fn alpha(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (255 * u64::from(self.remaining) / u64::from(self.total)) as u8
    }
}

/// Held state of the four directional controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Input {
    /// Per-axis direction in {-1, 0, 1}; opposing controls cancel out.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| f32::from(i8::from(pos) - i8::from(neg));
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifespan_fade_is_linear_and_truncating() {
        let mut life = Lifespan::new(10);
        assert_eq!(life.alpha(), 255);
        for _ in 0..4 {
            assert!(life.tick());
        }
        assert_eq!(life.remaining(), 6);
        assert_eq!(life.alpha(), (255 * 6 / 10) as u8);

        let mut life = Lifespan::new(3);
        life.tick();
        // 255 * 2 / 3 = 170
        assert_eq!(life.alpha(), 170);
    }

    #[test]
    fn lifespan_stops_at_zero() {
        let mut life = Lifespan::new(1);
        assert!(life.tick());
        assert!(life.is_expired());
        assert!(!life.tick());
        assert_eq!(life.remaining(), 0);
        assert!(life.remaining() <= life.total());
    }

    #[test]
    fn zero_lifespan_is_born_expired() {
        let life = Lifespan::new(0);
        assert!(life.is_expired());
        assert_eq!(life.alpha(), 0);
    }

    #[test]
    fn input_direction() {
        let mut input = Input::default();
        assert_eq!(input.direction(), Vec2::ZERO);

        input.up = true;
        assert_eq!(input.direction(), Vec2::new(0.0, -1.0));

        input.right = true;
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));

        input.down = true;
        input.left = true;
        assert_eq!(input.direction(), Vec2::ZERO);
    }
}
