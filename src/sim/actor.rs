//! Actors: movable entities with an axis-aligned bounding box
//!
//! One `Actor` record holds the common geometry (position, size, velocity)
//! plus a behavior variant selecting the per-type movement rule. The kind tag
//! is what collision handling dispatches on; several behaviors can share a
//! kind (all fireball variants are `ActorKind::Fireball`).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::consts::*;

/// Collision-semantics tag, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Plain actor with no special touch semantics
    Generic,
    Player,
    Fireball,
    Coin,
}

/// Per-type movement rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// No intrinsic movement; the player and generic actors are driven
    /// externally
    Inert,
    /// Travel along `speed`, reversing it when the projected move hits an
    /// obstacle
    Bounce,
    /// Travel along `speed`, teleporting back to the spawn point on hitting
    /// an obstacle
    Rain { start: Vec2 },
    /// Vertical sinusoidal bob around a base position; never consults the
    /// grid
    Spring { base: Vec2, phase: f32 },
}

/// A movable entity in a level
///
/// Identity is the `id` field, assigned by the owning [`Level`] in insertion
/// order; `pos` and `speed` are replaced wholesale each tick while the actor
/// itself persists until removed.
///
/// [`Level`]: super::level::Level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    pub kind: ActorKind,
    pub behavior: Behavior,
}

impl Actor {
    /// Generic actor with explicit geometry and velocity
    pub fn new(pos: Vec2, size: Vec2, speed: Vec2) -> Self {
        Self {
            id: 0,
            pos,
            size,
            speed,
            kind: ActorKind::Generic,
            behavior: Behavior::Inert,
        }
    }

    /// The player: anchor is the feet cell, hitbox is taller than a cell
    pub fn player(pos: Vec2) -> Self {
        Self {
            pos: pos + PLAYER_OFFSET,
            size: PLAYER_SIZE,
            kind: ActorKind::Player,
            ..Self::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO)
        }
    }

    /// Unit-size fireball that bounces back along its travel line
    pub fn fireball(pos: Vec2, speed: Vec2) -> Self {
        Self {
            pos,
            speed,
            kind: ActorKind::Fireball,
            behavior: Behavior::Bounce,
            ..Self::new(Vec2::ZERO, UNIT_SIZE, Vec2::ZERO)
        }
    }

    /// Fireball patrolling left-right
    pub fn horizontal_fireball(pos: Vec2) -> Self {
        Self::fireball(pos, HORIZONTAL_FIREBALL_SPEED)
    }

    /// Fireball patrolling up-down
    pub fn vertical_fireball(pos: Vec2) -> Self {
        Self::fireball(pos, VERTICAL_FIREBALL_SPEED)
    }

    /// Endlessly falling fire that resets to its spawn point on impact
    pub fn fire_rain(pos: Vec2) -> Self {
        Self {
            behavior: Behavior::Rain { start: pos },
            ..Self::fireball(pos, FIRE_RAIN_SPEED)
        }
    }

    /// A coin bobbing inside its cell. The phase is drawn from the supplied
    /// RNG so coins don't bob in lockstep; seed it for deterministic tests.
    pub fn coin(pos: Vec2, rng: &mut impl Rng) -> Self {
        let base = pos + COIN_OFFSET;
        let phase = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            pos: base,
            size: COIN_SIZE,
            kind: ActorKind::Coin,
            behavior: Behavior::Spring { base, phase },
            ..Self::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO)
        }
    }

    /// Override the identity handle (levels renumber on insertion; tests use
    /// this to build standalone actors)
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap test. An actor never intersects itself (same id),
    /// and touching edges do not count as overlap.
    pub fn intersects(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.right() > other.left()
            && other.right() > self.left()
            && self.bottom() > other.top()
            && other.bottom() > self.top()
    }

    /// Projected position after `time`, without committing it.
    ///
    /// For spring actors this is the bob position at the advanced phase; for
    /// everything else it is straight-line travel.
    pub fn next_position(&self, time: f32) -> Vec2 {
        match self.behavior {
            Behavior::Spring { base, phase } => {
                let phase = phase + COIN_WOBBLE_SPEED * time;
                base + Vec2::new(0.0, phase.sin() * COIN_WOBBLE_DIST)
            }
            _ => self.pos + self.speed * time,
        }
    }

    /// Obstacle response: bouncers reverse their velocity, rain resets to its
    /// spawn point, everything else ignores obstacles
    pub fn handle_obstacle(&mut self) {
        match self.behavior {
            Behavior::Bounce => self.speed = self.speed * -1.0,
            Behavior::Rain { start } => self.pos = start,
            Behavior::Inert | Behavior::Spring { .. } => {}
        }
    }

    /// Advance this actor by one tick of length `time`, consulting `grid` for
    /// obstacles where the behavior calls for it
    pub fn act(&mut self, time: f32, grid: &Grid) {
        match self.behavior {
            Behavior::Inert => {}
            Behavior::Bounce | Behavior::Rain { .. } => {
                let next = self.next_position(time);
                if grid.obstacle_at(next, self.size).is_some() {
                    self.handle_obstacle();
                } else {
                    self.pos = next;
                }
            }
            Behavior::Spring { base, phase } => {
                let phase = phase + COIN_WOBBLE_SPEED * time;
                self.behavior = Behavior::Spring { base, phase };
                self.pos = base + Vec2::new(0.0, phase.sin() * COIN_WOBBLE_DIST);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Obstacle;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn unit_actor(id: u32, x: f32, y: f32) -> Actor {
        Actor::new(Vec2::new(x, y), Vec2::ONE, Vec2::ZERO).with_id(id)
    }

    /// One open row above a solid floor, three cells wide
    fn corridor() -> Grid {
        Grid::from_rows(vec![
            vec![None, None, None],
            vec![Some(Obstacle::Wall); 3],
        ])
    }

    #[test]
    fn no_self_intersection() {
        let a = unit_actor(1, 0.0, 0.0);
        assert!(!a.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = unit_actor(1, 0.0, 0.0);
        let b = unit_actor(2, 1.0, 0.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = unit_actor(1, 0.0, 0.0);
        let b = unit_actor(2, 0.5, 0.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn bounce_keeps_position_and_reverses_speed_on_hit() {
        // Walls on both sides of a single open cell
        let grid = Grid::from_rows(vec![vec![
            Some(Obstacle::Wall),
            None,
            Some(Obstacle::Wall),
        ]]);
        let mut ball = Actor::horizontal_fireball(Vec2::new(1.0, 0.0));

        ball.act(1.0, &grid);
        assert_eq!(ball.pos, Vec2::new(1.0, 0.0));
        assert_eq!(ball.speed, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn bounce_travels_with_reversed_speed_next_tick() {
        let grid = Grid::from_rows(vec![vec![None; 8]]);
        let mut ball = Actor::fireball(Vec2::new(5.0, 0.0), Vec2::new(2.0, 0.0));
        ball.speed = Vec2::new(-2.0, 0.0);

        ball.act(1.0, &grid);
        assert_eq!(ball.pos, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn free_fireball_commits_projected_position() {
        let grid = corridor();
        let mut ball = Actor::fireball(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0));

        ball.act(1.0, &grid);
        assert_eq!(ball.pos, Vec2::new(0.5, 0.0));
        // Projection alone must not move the actor
        let projected = ball.next_position(1.0);
        assert_eq!(ball.pos, Vec2::new(0.5, 0.0));
        assert_eq!(projected, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn fire_rain_resets_to_spawn_on_hit() {
        // Two open rows over a solid floor
        let grid = Grid::from_rows(vec![
            vec![None],
            vec![None],
            vec![Some(Obstacle::Wall)],
        ]);
        let spawn = Vec2::new(0.0, 0.0);
        let mut rain = Actor::fire_rain(spawn);

        // Speed (0,3) projects straight into the floor
        rain.act(1.0, &grid);
        assert_eq!(rain.pos, spawn);
        assert_eq!(rain.speed, crate::consts::FIRE_RAIN_SPEED);

        // A partial step that stays clear still falls
        rain.act(0.1, &grid);
        assert!((rain.pos.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn coin_spawns_offset_and_bobs_around_base() {
        let mut rng = Pcg32::seed_from_u64(7);
        let cell = Vec2::new(3.0, 2.0);
        let mut coin = Actor::coin(cell, &mut rng);

        let base = cell + COIN_OFFSET;
        assert_eq!(coin.pos, base);
        assert_eq!(coin.size, COIN_SIZE);
        assert_eq!(coin.kind, ActorKind::Coin);

        let Behavior::Spring { phase: start_phase, .. } = coin.behavior else {
            panic!("coin must carry a spring behavior");
        };
        assert!((0.0..std::f32::consts::TAU).contains(&start_phase));

        // One tick advances the phase by COIN_WOBBLE_SPEED * time
        let time = 0.25;
        coin.act(time, &Grid::default());
        let phase = start_phase + COIN_WOBBLE_SPEED * time;
        let expected = base + Vec2::new(0.0, phase.sin() * COIN_WOBBLE_DIST);
        assert!((coin.pos - expected).length() < 1e-6);
        // x never drifts
        assert_eq!(coin.pos.x, base.x);
    }

    #[test]
    fn coin_ignores_obstacles() {
        // A coin buried in solid wall still bobs
        let grid = Grid::from_rows(vec![vec![Some(Obstacle::Wall)]]);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut coin = Actor::coin(Vec2::ZERO, &mut rng);
        let before = coin.pos;

        coin.act(0.3, &grid);
        assert_ne!(coin.pos, before);
    }

    #[test]
    fn coin_phase_is_deterministic_under_a_seed() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        assert_eq!(
            Actor::coin(Vec2::ZERO, &mut a),
            Actor::coin(Vec2::ZERO, &mut b)
        );
    }

    #[test]
    fn player_spawn_applies_offset_and_size() {
        let player = Actor::player(Vec2::new(1.0, 0.0));
        assert_eq!(player.pos, Vec2::new(1.0, -0.5));
        assert_eq!(player.size, PLAYER_SIZE);
        assert_eq!(player.kind, ActorKind::Player);
        assert_eq!(player.behavior, Behavior::Inert);
    }

    proptest! {
        // Intersection is symmetric for any pair of boxes
        #[test]
        fn intersection_is_symmetric(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
            aw in 0.1f32..5.0, ah in 0.1f32..5.0,
            bw in 0.1f32..5.0, bh in 0.1f32..5.0,
        ) {
            let a = Actor::new(Vec2::new(ax, ay), Vec2::new(aw, ah), Vec2::ZERO).with_id(1);
            let b = Actor::new(Vec2::new(bx, by), Vec2::new(bw, bh), Vec2::ZERO).with_id(2);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        // Straight-line projection is linear in time
        #[test]
        fn projection_is_linear(
            t in 0.0f32..4.0,
            sx in -3.0f32..3.0,
            sy in -3.0f32..3.0,
        ) {
            let ball = Actor::fireball(Vec2::ZERO, Vec2::new(sx, sy)).with_id(1);
            let next = ball.next_position(t);
            prop_assert!((next - Vec2::new(sx, sy) * t).length() < 1e-4);
        }
    }
}
