use ant_foraging::prelude::*;
use ant_foraging::simulation::recorder::{write_snapshot, Recorder};
use clap::Parser;
use std::time::Instant;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.to_config();

    let mut engine = SimulationEngine::new(config)?;
    if !args.quiet {
        engine.print_startup_details();
    }

    let mut recorder = if args.record {
        Some(Recorder::create(&args.record_path)?)
    } else {
        None
    };

    // Run simulation
    let sim_start = Instant::now();
    for _ in 0..args.ticks {
        engine.step();
        if let Some(rec) = recorder.as_mut() {
            rec.append(engine.stats())?;
        }
    }
    let simulation_time = sim_start.elapsed();
    engine.stop();

    if let Some(rec) = recorder.take() {
        rec.finish()?;
    }
    if let Some(path) = &args.snapshot_path {
        write_snapshot(&engine.snapshot(), path)?;
    }

    // Print results
    engine.print_summary(simulation_time);

    Ok(())
}
