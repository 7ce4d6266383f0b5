//! Level state: obstacle grid, actor list, and the win/lose state machine
//!
//! The level owns its actors and arbitrates every interaction between them:
//! actor-vs-grid queries, actor-vs-actor overlap, and the single entry point
//! (`player_touched`) through which touches become outcome transitions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::grid::{Grid, Obstacle};
use crate::consts::FINISH_DELAY;

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Won,
    Lost,
}

/// Something the player came into contact with during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Wall,
    Lava,
    /// Overlap with another actor, identified by its kind tag and id
    Actor { kind: ActorKind, id: u32 },
}

impl From<Obstacle> for Contact {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => Contact::Wall,
            Obstacle::Lava => Contact::Lava,
        }
    }
}

/// A parsed level: static grid plus dynamic actors
///
/// `status` only ever transitions from unset to a terminal value; once set it
/// is never overwritten. `finish_delay` counts down after that transition so
/// a driver can let a brief pause play out before tearing the level down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    pub actors: Vec<Actor>,
    /// Id of the first player actor in insertion order, if the plan had one
    pub player: Option<u32>,
    pub status: Option<Status>,
    pub finish_delay: f32,
    next_id: u32,
}

impl Level {
    /// Assemble a level, renumbering the actors in insertion order. A plan
    /// without a player is legal; `player` is simply left unset.
    pub fn new(grid: Grid, mut actors: Vec<Actor>) -> Self {
        let mut next_id = 1;
        for actor in &mut actors {
            actor.id = next_id;
            next_id += 1;
        }
        let player = actors
            .iter()
            .find(|a| a.kind == ActorKind::Player)
            .map(|a| a.id);

        Self {
            grid,
            actors,
            player,
            status: None,
            finish_delay: FINISH_DELAY,
            next_id,
        }
    }

    /// Level width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Level height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Insert an actor mid-game, assigning it a fresh id
    pub fn add_actor(&mut self, mut actor: Actor) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        actor.id = id;
        if self.player.is_none() && actor.kind == ActorKind::Player {
            self.player = Some(id);
        }
        self.actors.push(actor);
        id
    }

    /// Look an actor up by its identity handle
    pub fn actor_by_id(&self, id: u32) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// The player actor, when present and not yet removed
    pub fn player_actor(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor_by_id(id))
    }

    /// First actor in insertion order whose box overlaps `probe`
    pub fn actor_at(&self, probe: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.intersects(probe))
    }

    /// Obstacle query for a box at `target` with extent `size`
    #[inline]
    pub fn obstacle_at(&self, target: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(target, size)
    }

    /// Drop an actor by id; no-op when absent
    pub fn remove_actor(&mut self, id: u32) {
        let before = self.actors.len();
        self.actors.retain(|a| a.id != id);
        if self.actors.len() < before {
            log::debug!("removed actor {id}");
        }
    }

    /// True when no remaining actor carries the given kind tag
    pub fn no_more_actors(&self, kind: ActorKind) -> bool {
        !self.actors.iter().any(|a| a.kind == kind)
    }

    /// The single outcome-transition entry point.
    ///
    /// Coins are collected (removed) on touch and grant the win once the last
    /// one is gone; lava and fireballs lose the level. An already-set status
    /// is never overwritten, though coin removal still executes.
    pub fn player_touched(&mut self, contact: Contact) {
        match contact {
            Contact::Lava
            | Contact::Actor {
                kind: ActorKind::Fireball,
                ..
            } => {
                if self.status.is_none() {
                    self.status = Some(Status::Lost);
                    log::info!("player touched {contact:?}: level lost");
                }
            }
            Contact::Actor {
                kind: ActorKind::Coin,
                id,
            } => {
                self.remove_actor(id);
                if self.status.is_none() && self.no_more_actors(ActorKind::Coin) {
                    self.status = Some(Status::Won);
                    log::info!("last coin collected: level won");
                }
            }
            _ => {}
        }
    }

    /// True once a terminal status is set and the grace period has elapsed
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// Run one simulation tick of length `time`: advance every actor, route
    /// the player's contacts through [`player_touched`], then count the
    /// finish delay down while a terminal status is set.
    ///
    /// Drivers are expected to stop calling this once [`is_finished`] reports
    /// true; extra ticks only count the delay further down.
    ///
    /// [`player_touched`]: Level::player_touched
    /// [`is_finished`]: Level::is_finished
    pub fn step(&mut self, time: f32) {
        let grid = &self.grid;
        for actor in &mut self.actors {
            actor.act(time, grid);
        }

        if let Some(player) = self.player_actor().cloned() {
            if let Some(obstacle) = self.grid.obstacle_at(player.pos, player.size) {
                self.player_touched(obstacle.into());
            }
            let touched = self
                .actor_at(&player)
                .map(|a| Contact::Actor { kind: a.kind, id: a.id });
            if let Some(contact) = touched {
                self.player_touched(contact);
            }
        }

        if self.status.is_some() {
            self.finish_delay -= time;
        }
    }
}
