//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (actor insertion order from parsing)
//! - No rendering or platform dependencies

pub mod actor;
pub mod grid;
pub mod level;
pub mod parser;

pub use actor::{Actor, ActorKind, Behavior};
pub use grid::{Grid, Obstacle};
pub use level::{Contact, Level, Status};
pub use parser::{LevelParser, ParseError, SpawnFn};
