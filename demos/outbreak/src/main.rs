//! outbreak — demo run of the epidemic simulator.
//!
//! Simulates a 2 500-agent population on a 10×10 torus: an initial handful of
//! infected agents wander, transmit within a short radius, and a vaccination
//! campaign kicks in once the infectious share crosses a threshold.  Scale
//! comment: bump POPULATION (and enable the `parallel` feature on epi-sim) to
//! run six-figure populations on a workstation.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use epi_agent::Population;
use epi_core::{EpiConfig, StateCounts, Tick};
use epi_output::{CsvWriter, OutputWriter, RunOutputObserver};
use epi_sim::{RunBuilder, RunObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:           u32 = 2_500;
const INITIAL_INFECTED:     u32 = 10;
const SEED:                 u64 = 42;
const MAX_TICKS:            u64 = 5_000; // safety cap; burnout usually ends it first
const FRAME_INTERVAL_TICKS: u64 = 10;
const REPORT_INTERVAL:      u64 = 10;    // console progress line every N ticks

// ── Observer: CSV output + console progress + peak tracking ──────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:        RunOutputObserver<W>,
    frame_rows:   usize,
    count_rows:   usize,
    peak_infected: u32,
    peak_tick:    Tick,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: RunOutputObserver<W>) -> Self {
        Self {
            inner,
            frame_rows:    0,
            count_rows:    0,
            peak_infected: 0,
            peak_tick:     Tick::ZERO,
        }
    }
}

impl<W: OutputWriter> RunObserver for ConsoleObserver<W> {
    fn on_frame(&mut self, tick: Tick, population: &Population) {
        self.frame_rows += population.count;
        self.inner.on_frame(tick, population);
    }

    fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
        self.count_rows += 1;
        if counts.infected > self.peak_infected {
            self.peak_infected = counts.infected;
            self.peak_tick = tick;
        }
        if tick.0 % REPORT_INTERVAL == 0 {
            let [s, e, i, v, r] = counts.as_array();
            println!("{:>6}  S={s:<5} E={e:<5} I={i:<5} V={v:<5} R={r:<5}", tick.0);
        }
        self.inner.on_tick_end(tick, counts);
    }

    fn on_run_end(&mut self, final_tick: Tick, results: &[StateCounts]) {
        self.inner.on_run_end(final_tick, results);
        // The terminal census row is written on run end, not via a tick-end.
        self.count_rows = results.len();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== outbreak — epidemic simulator demo ===");
    println!("Population: {POPULATION}  |  Initial infected: {INITIAL_INFECTED}  |  Seed: {SEED}");
    println!();

    // 1. Config: defaults scaled down to a quarter of the reference scenario.
    let config = EpiConfig {
        population:           POPULATION,
        initial_infected:     INITIAL_INFECTED,
        seed:                 SEED,
        max_ticks:            MAX_TICKS,
        frame_interval_ticks: FRAME_INTERVAL_TICKS,
        ..Default::default()
    };
    println!(
        "World: {}×{} torus  |  infection radius {}  |  vaccinations/tick {}",
        config.width, config.height, config.infection_radius, config.vaccinations_per_tick
    );
    println!();

    // 2. Build the run (spawns the population from the seed).
    let mut run = RunBuilder::new(config).build()?;

    // 3. Set up output.
    std::fs::create_dir_all("output/outbreak")?;
    let writer = CsvWriter::new(Path::new("output/outbreak"))?;
    let mut obs = ConsoleObserver::new(RunOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    let outcome = run.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Run ended after {} ticks ({outcome:?}) in {:.3} s", run.tick.0, elapsed.as_secs_f64());
    println!("  frames.csv      : {} rows", obs.frame_rows);
    println!("  tick_counts.csv : {} rows", obs.count_rows);
    println!();

    if let Some(last) = run.results().last() {
        println!("{:<14} {:>8}", "Compartment", "Count");
        println!("{}", "-".repeat(24));
        let [s, e, i, v, r] = last.as_array();
        for (name, n) in [
            ("susceptible", s),
            ("exposed", e),
            ("infected", i),
            ("vaccinated", v),
            ("removed", r),
        ] {
            println!("{name:<14} {n:>8}");
        }
        println!();
        println!(
            "Peak infections: {} at {}  |  attack share: {:.1} %",
            obs.peak_infected,
            obs.peak_tick,
            (r + i + e) as f64 / POPULATION as f64 * 100.0
        );
    }

    Ok(())
}
