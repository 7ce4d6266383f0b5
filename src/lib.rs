//! Lava Dash - a 2D tile-platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid geometry, actors, level state machine)
//!
//! Rendering, input capture and the animation loop are external collaborators;
//! this crate only models the level, its obstacle grid, and the actors moving
//! through it. The bundled binary is a headless reference driver.

pub mod sim;

pub use sim::{
    Actor, ActorKind, Behavior, Contact, Grid, Level, LevelParser, Obstacle, ParseError, SpawnFn,
    Status,
};

/// Gameplay constants, all in grid units (one cell = 1.0 x 1.0)
pub mod consts {
    use glam::Vec2;

    /// Default actor size (one grid cell)
    pub const UNIT_SIZE: Vec2 = Vec2::ONE;

    /// Player hitbox: narrower than a cell, half a cell taller
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    /// Offset from the plan cell to the player spawn (anchor is the feet)
    pub const PLAYER_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

    /// Coin hitbox, centered inside its cell by COIN_OFFSET
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    pub const COIN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    /// Phase advance per time unit of the coin's vertical bob
    pub const COIN_WOBBLE_SPEED: f32 = 8.0;
    /// Amplitude of the coin's vertical bob
    pub const COIN_WOBBLE_DIST: f32 = 0.07;

    /// Travel speeds of the fireball variants
    pub const HORIZONTAL_FIREBALL_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vec2 = Vec2::new(0.0, 3.0);

    /// Grace period (in simulation time units) between a win/loss and the
    /// level reporting itself finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Fixed timestep used by the demo driver (20 Hz of simulated time)
    pub const SIM_DT: f32 = 1.0 / 20.0;
    /// Safety cap on demo driver ticks for levels that never resolve
    pub const MAX_DEMO_TICKS: u64 = 100_000;
}
