//! The `Sim` struct and its tick loop.

use evo_agent::{Bird, Outcome, Species, decide, resolve};
use evo_core::{BirdId, BirdRng, SimConfig, SimRng, Tick};

use crate::{Census, PopulationHistory, SimObserver};

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Turnover statistics for one completed tick, handed to
/// [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    /// Fights resolved this tick (`min(map_size, live / 2)`).
    pub fights: usize,
    /// Birds that sat out and paid the idle penalty.
    pub idle: usize,
    /// Birds culled at the death threshold.
    pub deaths: usize,
    /// Offspring spawned at the reproduction threshold.
    pub births: usize,
    /// Live population after the rebuild.
    pub population: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the live population and drives the six-step tick cycle:
///
/// 1. **Shuffle** — randomly permute the live list (fresh pairing each tick).
/// 2. **Pair & fight** — positions `(2i, 2i+1)` for `i < k` fight, where
///    `k = min(map_size, live / 2)`; both birds decide, the payoff table
///    resolves, both receive points and observe the opponent's choice.
/// 3. **Idle penalty** — every bird at position `>= 2k` pays
///    [`Outcome::Idle`] with no opponent observation.
/// 4. **Cull & reproduce** — one scan: dead birds are marked for removal,
///    survivors at the reproduction threshold queue one fresh same-species
///    offspring.  Nothing is removed or added mid-scan.
/// 5. **Rebuild** — next population = survivors ++ offspring.
/// 6. **Record** — the post-tick census is appended to the history for every
///    catalog species, extinct ones included.
///
/// The birds and their RNG streams live in two index-aligned `Vec`s: a fight
/// needs `&Bird` views of both combatants while drawing from each bird's
/// `&mut BirdRng`, which a single `Vec` of combined state cannot lend out
/// disjointly.  The alignment is an engine invariant, asserted every tick.
///
/// Total extinction is not a terminal state — further ticks simply record
/// all-zero censuses until the configured tick count is reached.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (tick count, seed, fight capacity, …).
    pub config: SimConfig,

    tick: Tick,
    birds: Vec<Bird>,
    rngs: Vec<BirdRng>,
    /// Run-level RNG; owns the shuffle stream.
    rng: SimRng,
    history: PopulationHistory,
    /// Next id to hand out; ids are never reused within a run.
    next_id: u32,
}

impl Sim {
    pub(crate) fn new(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self {
            config,
            tick: Tick::ZERO,
            birds: Vec::new(),
            rngs: Vec::new(),
            rng,
            history: PopulationHistory::new(),
            next_id: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Append `count` freshly constructed birds of `species` to the live
    /// population.
    ///
    /// Intended for seeding before the first tick; repeated calls accumulate
    /// and their order affects the outcome only through the shuffle stream.
    pub fn populate(&mut self, species: Species, count: usize) {
        self.birds.reserve(count);
        self.rngs.reserve(count);
        for _ in 0..count {
            let id = self.alloc_id();
            self.birds.push(Bird::new(id, species));
            self.rngs.push(BirdRng::new(self.config.seed, id));
        }
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// The current tick (the next one to be simulated).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Read-only view of the live population.
    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    /// Current live population size.
    #[inline]
    pub fn population(&self) -> usize {
        self.birds.len()
    }

    /// Per-species counts of the current live population.
    pub fn census(&self) -> Census {
        Census::of(&self.birds)
    }

    /// The per-tick population history recorded so far.  Shared reference —
    /// consumers cannot mutate it.
    pub fn history(&self) -> &PopulationHistory {
        &self.history
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);
        let stats = self.process_tick();
        observer.on_tick_end(now, &stats);

        let interval = self.config.census_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_census(now, &self.census());
        }

        self.tick = now + 1;
    }

    fn process_tick(&mut self) -> TickStats {
        assert_eq!(
            self.birds.len(),
            self.rngs.len(),
            "bird and RNG lists out of alignment (engine bug)"
        );

        // ── Phase 1: shuffle ──────────────────────────────────────────────
        self.co_shuffle();

        // ── Phase 2: pair & fight ─────────────────────────────────────────
        let live = self.birds.len();
        let fights = self.config.map_size.min(live / 2);
        self.resolve_fights(fights);

        // ── Phase 3: idle penalty ─────────────────────────────────────────
        //
        // Everyone not selected into a pair starves a little: position
        // 2 * fights onward, which covers both the capacity overflow and the
        // odd bird out.  No opponent, so memory stays untouched.
        let idle = live - 2 * fights;
        for bird in &mut self.birds[2 * fights..] {
            bird.assign_points(Outcome::Idle, None);
        }

        // ── Phases 4 + 5: cull, reproduce, rebuild ────────────────────────
        let (deaths, births) = self.cull_and_spawn();

        // ── Phase 6: record history ───────────────────────────────────────
        let census = Census::of(&self.birds);
        self.history.record(&census);

        TickStats {
            fights,
            idle,
            deaths,
            births,
            population: self.birds.len(),
        }
    }

    /// Permute birds and their RNG streams together through one draw on the
    /// run-level shuffle stream.
    fn co_shuffle(&mut self) {
        let mut paired: Vec<(Bird, BirdRng)> = std::mem::take(&mut self.birds)
            .into_iter()
            .zip(std::mem::take(&mut self.rngs))
            .collect();
        self.rng.shuffle(&mut paired);
        let (birds, rngs): (Vec<Bird>, Vec<BirdRng>) = paired.into_iter().unzip();
        self.birds = birds;
        self.rngs = rngs;
    }

    /// Resolve `fights` pairwise fights over the first `2 * fights` shuffled
    /// positions.
    ///
    /// Each pair touches only its own two birds and two RNG streams, so with
    /// the `parallel` feature the pairs run on Rayon's pool; results are
    /// identical either way because every stochastic draw comes from the
    /// deciding bird's own stream.
    fn resolve_fights(&mut self, fights: usize) {
        let (fighters, _) = self.birds.split_at_mut(2 * fights);
        let (streams, _) = self.rngs.split_at_mut(2 * fights);

        #[cfg(not(feature = "parallel"))]
        {
            for (pair, pair_streams) in fighters
                .chunks_exact_mut(2)
                .zip(streams.chunks_exact_mut(2))
            {
                fight(pair, pair_streams);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            fighters
                .par_chunks_exact_mut(2)
                .zip(streams.par_chunks_exact_mut(2))
                .for_each(|(pair, pair_streams)| fight(pair, pair_streams));
        }
    }

    /// One scan over the post-update population: mark the dead, queue
    /// offspring, then materialize the next tick's population in one pass.
    ///
    /// Death is checked first and the two outcomes are exclusive — a bird
    /// marked dead is never asked to reproduce.  Removal decisions use the
    /// scan-time indices; offspring are appended after all removals.
    fn cull_and_spawn(&mut self) -> (usize, usize) {
        let mut doomed = vec![false; self.birds.len()];
        let mut offspring: Vec<Species> = Vec::new();

        for (i, bird) in self.birds.iter_mut().enumerate() {
            if bird.is_dead() {
                doomed[i] = true;
            } else if bird.maybe_reproduce() {
                offspring.push(bird.species());
            }
        }

        let deaths = doomed.iter().filter(|&&d| d).count();
        let births = offspring.len();
        if deaths == 0 && births == 0 {
            return (0, 0);
        }

        let survivors = self.birds.len() - deaths;
        let mut birds = Vec::with_capacity(survivors + births);
        let mut rngs = Vec::with_capacity(survivors + births);

        let old_birds = std::mem::take(&mut self.birds);
        let old_rngs = std::mem::take(&mut self.rngs);
        for (i, (bird, rng)) in old_birds.into_iter().zip(old_rngs).enumerate() {
            if !doomed[i] {
                birds.push(bird);
                rngs.push(rng);
            }
        }

        for species in offspring {
            let id = self.alloc_id();
            birds.push(Bird::new(id, species));
            rngs.push(BirdRng::new(self.config.seed, id));
        }

        self.birds = birds;
        self.rngs = rngs;
        (deaths, births)
    }

    fn alloc_id(&mut self) -> BirdId {
        let id = BirdId(self.next_id);
        self.next_id += 1;
        id
    }
}

// ── Fight resolution ──────────────────────────────────────────────────────────

/// Resolve one fight between the two birds of `pair`, drawing from each
/// bird's stream in `streams`.
///
/// Both decide against the other, the payoff table resolves the choices, and
/// both receive their delta along with the REAL opponent choice (which is
/// what memory-based species store — not the outcome).
fn fight(pair: &mut [Bird], streams: &mut [BirdRng]) {
    let (first, second) = pair.split_at_mut(1);
    let (first, second) = (&mut first[0], &mut second[0]);
    let (first_stream, second_stream) = streams.split_at_mut(1);

    let first_choice = decide(first, second, &mut first_stream[0]);
    let second_choice = decide(second, first, &mut second_stream[0]);

    let (first_outcome, second_outcome) = resolve(first_choice, second_choice);
    first.assign_points(first_outcome, Some(second_choice));
    second.assign_points(second_outcome, Some(first_choice));
}
