//! classic — the canonical rust_evo contest run.
//!
//! Seeds ten birds of every catalog species into an arena with room for 500
//! fighting pairs and lets the payoff table sort them out over 300 ticks.
//! Writes the per-tick census and tick summaries as CSV plus the full
//! history as JSON for external plotting.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use evo_agent::Species;
use evo_core::{SimConfig, Tick};
use evo_output::{CsvWriter, OutputWriter, SimOutputObserver};
use evo_sim::{Census, SimBuilder, SimObserver, TickStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const BIRDS_PER_SPECIES: usize = 10;
const MAP_SIZE: usize = 500; // fighting pairs per tick
const TICKS: u64 = 300;
const SEED: u64 = 42;

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    census_rows: usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, census_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, stats);
    }

    fn on_census(&mut self, tick: Tick, census: &Census) {
        self.census_rows += Species::COUNT;
        self.inner.on_census(tick, census);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== classic — rust_evo contest ===");
    println!(
        "Species: {}  |  Birds each: {BIRDS_PER_SPECIES}  |  Ticks: {TICKS}  |  Seed: {SEED}",
        Species::COUNT
    );
    println!();

    // 1. Configure the run.
    let config = SimConfig {
        map_size: MAP_SIZE,
        total_ticks: TICKS,
        seed: SEED,
        num_threads: None, // all logical cores when built with `parallel`
        census_interval_ticks: 1,
    };

    // 2. Seed the full catalog.
    let mut builder = SimBuilder::new(config);
    for &species in &Species::ALL {
        builder = builder.populate(species, BIRDS_PER_SPECIES);
    }
    let mut sim = builder.build()?;
    println!("Seeded {} birds", sim.population());

    // 3. Set up output.
    std::fs::create_dir_all("output/classic")?;
    let writer = CsvWriter::new(Path::new("output/classic"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Dump the full history for external plotting.
    let json = std::fs::File::create("output/classic/history.json")?;
    serde_json::to_writer_pretty(json, sim.history())?;

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  census.csv         : {} rows", obs.census_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!("  history.json       : {} series", Species::COUNT);
    println!();

    // 7. Final population table.
    println!("{:<14} {:>8} {:>8}", "Species", "Final", "Peak");
    println!("{}", "-".repeat(32));
    for (species, series) in sim.history().iter() {
        let last = series.last().copied().unwrap_or(0);
        let peak = series.iter().copied().max().unwrap_or(0);
        println!("{:<14} {:>8} {:>8}", species.name(), last, peak);
    }
    println!();
    println!("Total alive after {}: {}", sim.tick(), sim.population());

    Ok(())
}
