//! Runs one descent and prints what a renderer would receive.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trajectory -- <function-id> <x> <y> [learning-rate] [window]
//! RUST_LOG=slope::descent=debug cargo run --example trajectory -- 2 1 2
//! ```
//!
//! Prints the first `window` points of the trajectory (all of them by
//! default) and the value range of the surface underneath it.

use std::{error::Error, str::FromStr};

use slope_core::Point;
use slope_fields::{Registry, Surface};
use slope_observers::LogObserver;
use slope_solvers::descent::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("Usage: trajectory <function-id> <x> <y> [learning-rate] [window]");
        std::process::exit(1);
    }

    let id: u32 = parse(&args[0], "function id")?;
    let x: f64 = parse(&args[1], "x")?;
    let y: f64 = parse(&args[2], "y")?;
    let learning_rate = args
        .get(3)
        .map(|arg| parse(arg, "learning rate"))
        .transpose()?
        .unwrap_or(0.1);
    let window = args
        .get(4)
        .map(|arg| parse(arg, "window"))
        .transpose()?
        .unwrap_or(usize::MAX);

    let registry = Registry::new();
    let field = registry.get(id)?;

    let config = Config {
        start: Point::new(x, y),
        learning_rate,
        ..Config::default()
    };
    let trajectory = descent::descend_observed(field, &config, LogObserver::new())?;

    println!("f(x, y) = {field}");
    println!(
        "{:?} after {} steps ({} points)",
        trajectory.status(),
        trajectory.steps(),
        trajectory.len()
    );
    for (step, point) in trajectory.window(window).iter().enumerate() {
        println!(
            "{step:>4}  x={:>12.6}  y={:>12.6}  z={:>12.6e}",
            point.x, point.y, point.z
        );
    }

    let surface = Surface::sample_default(field);
    if let Some([lo, hi]) = surface.value_range() {
        let [from, to] = Surface::DEFAULT_LIMITS;
        println!(
            "surface on [{from}, {to}]² at {n}×{n}: z in [{lo:.6}, {hi:.6}]",
            n = Surface::DEFAULT_RESOLUTION
        );
    }

    Ok(())
}

fn parse<T>(arg: &str, what: &str) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
{
    arg.parse()
        .map_err(|err: T::Err| format!("invalid {what} {arg:?}: {err}").into())
}
