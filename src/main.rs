//! Lava Dash entry point
//!
//! Headless reference driver: parses a level plan, then steps the simulation
//! at a fixed timestep until the level resolves or a tick cap is reached.
//! Rendering and input belong to external collaborators; without input the
//! player simply stands where the plan put it.
//!
//! Usage: `lava-dash [plan.json] [seed]` where `plan.json` holds a JSON array
//! of row strings.

use std::error::Error;
use std::fs;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use lava_dash::consts::{MAX_DEMO_TICKS, SIM_DT};
use lava_dash::sim::{LevelParser, Status};

/// Built-in plan: a patrolling fireball closes in on the standing player
const DEMO_PLAN: &[&str] = &[
    "xxxxxxxxxxxx",
    "x          x",
    "x o        x",
    "x  =     @ x",
    "xxxxxxxxxxxx",
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let plan_path = args.next();
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 0,
    };

    let owned_plan: Option<Vec<String>> = match &plan_path {
        Some(path) => Some(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => None,
    };
    let plan: Vec<&str> = match &owned_plan {
        Some(rows) => rows.iter().map(String::as_str).collect(),
        None => DEMO_PLAN.to_vec(),
    };

    let mut rng = Pcg32::seed_from_u64(seed);
    let parser = LevelParser::standard();
    let mut level = parser.parse(&plan, &mut rng);
    log::info!(
        "level loaded: {}x{} cells, {} actors, seed {seed}",
        level.width(),
        level.height(),
        level.actors.len()
    );

    let mut ticks: u64 = 0;
    while !level.is_finished() && ticks < MAX_DEMO_TICKS {
        level.step(SIM_DT);
        ticks += 1;
    }

    match level.status {
        Some(Status::Won) => println!("won after {ticks} ticks"),
        Some(Status::Lost) => println!("lost after {ticks} ticks"),
        None => println!("unresolved after {ticks} ticks"),
    }

    Ok(())
}
