//! Level parsing: textual plans into grids and actors
//!
//! A plan is an ordered list of rows; each character is either an obstacle
//! glyph (`x` wall, `!` lava), a symbol registered in the parser's spawn
//! dictionary, or empty space. The dictionary is injected configuration, so
//! drivers can ship their own entity sets.

use std::collections::HashMap;

use glam::Vec2;
use rand_pcg::Pcg32;
use thiserror::Error;

use super::actor::Actor;
use super::grid::{Grid, Obstacle};
use super::level::Level;

/// Spawn function for one plan symbol: cell position plus the level RNG
/// (coins draw their bob phase from it)
pub type SpawnFn = fn(Vec2, &mut Pcg32) -> Actor;

/// Registration-time errors; parsing itself never fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("symbol '{0}' is already registered")]
    DuplicateSymbol(char),
    #[error("symbol '{0}' is reserved for obstacles")]
    ReservedSymbol(char),
}

/// Maps plan symbols to actor spawn functions
pub struct LevelParser {
    symbols: HashMap<char, SpawnFn>,
}

impl LevelParser {
    /// Parser with an empty dictionary; plans parse to pure terrain
    pub fn new() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// The standard dictionary: `@` player, `o` coin, `=` and `|` patrolling
    /// fireballs, `v` fire rain
    pub fn standard() -> Self {
        let mut parser = Self::new();
        // The standard glyphs cannot collide, so registration cannot fail
        let entries: [(char, SpawnFn); 5] = [
            ('@', |pos, _| Actor::player(pos)),
            ('o', |pos, rng| Actor::coin(pos, rng)),
            ('=', |pos, _| Actor::horizontal_fireball(pos)),
            ('|', |pos, _| Actor::vertical_fireball(pos)),
            ('v', |pos, _| Actor::fire_rain(pos)),
        ];
        for (symbol, spawn) in entries {
            let _ = parser.register(symbol, spawn);
        }
        parser
    }

    /// Register a spawn function for a symbol. Duplicates and the obstacle
    /// glyphs are rejected here, at registration time, so parsing stays
    /// infallible.
    pub fn register(&mut self, symbol: char, spawn: SpawnFn) -> Result<(), ParseError> {
        if Self::obstacle_from_symbol(symbol).is_some() {
            return Err(ParseError::ReservedSymbol(symbol));
        }
        if self.symbols.contains_key(&symbol) {
            return Err(ParseError::DuplicateSymbol(symbol));
        }
        self.symbols.insert(symbol, spawn);
        Ok(())
    }

    /// Obstacle glyph lookup; anything unrecognized is empty terrain
    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    /// Build the obstacle matrix from a plan. Rows may be jagged; actor
    /// symbols read as empty terrain.
    pub fn create_grid(plan: &[&str]) -> Grid {
        let rows = plan
            .iter()
            .map(|row| row.chars().map(Self::obstacle_from_symbol).collect())
            .collect();
        Grid::from_rows(rows)
    }

    /// Instantiate every registered symbol in the plan, scanning rows outer
    /// and columns inner so actors appear in row-major order
    pub fn create_actors(&self, plan: &[&str], rng: &mut Pcg32) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                if let Some(spawn) = self.symbols.get(&symbol) {
                    actors.push(spawn(Vec2::new(x as f32, y as f32), rng));
                }
            }
        }
        actors
    }

    /// Parse a whole plan into a playable level
    pub fn parse(&self, plan: &[&str], rng: &mut Pcg32) -> Level {
        let grid = Self::create_grid(plan);
        let actors = self.create_actors(plan, rng);
        log::debug!(
            "parsed level: {}x{} cells, {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::standard()
    }
}
