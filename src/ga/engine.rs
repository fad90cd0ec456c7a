//! Generic genetic-algorithm driver.
//!
//! The driver knows nothing about scheduling: it maintains a population of
//! opaque states, selects parents, recombines, mutates, and keeps the best
//! state found. Everything problem-specific lives behind [`GaProblem`] —
//! the four-operation contract a problem model exposes.
//!
//! Higher value = better state (maximization convention).
//!
//! # Example
//! ```no_run
//! use clinic_schedule::ga::{GaConfig, GaRunner};
//! # use clinic_schedule::ga::ScheduleProblem;
//!
//! # let problem: ScheduleProblem = unimplemented!();
//! let config = GaConfig::default()
//!     .with_population_size(100)
//!     .with_mutation_chance(0.3)
//!     .with_max_generations(300)
//!     .with_seed(42);
//! let result = GaRunner::run(&problem, &config);
//! println!("best score {}", result.best_value);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Contract between a problem model and the evolutionary driver.
///
/// All operations are pure with respect to the problem's own data: `value`
/// may be called concurrently on independent states, and the stochastic
/// operations draw only from the caller-supplied random source.
pub trait GaProblem {
    /// Candidate solution type. A cheap-to-clone value object.
    type State: Clone;

    /// Produces a fresh random candidate.
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Scores a candidate. Deterministic for a fixed state.
    fn value(&self, state: &Self::State) -> f64;

    /// Returns a locally perturbed copy of `state`.
    fn mutate<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;

    /// Recombines two parents into a child.
    fn crossover<R: Rng>(&self, a: &Self::State, b: &Self::State, rng: &mut R) -> Self::State;
}

/// Driver parameters.
///
/// Defaults match the production run profile: population 100, mutation
/// chance 0.3, 300 generations.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of states kept per generation (minimum 2).
    pub population_size: usize,
    /// Probability of mutating each newly bred child, in `[0, 1]`.
    pub mutation_chance: f64,
    /// Number of generations to breed before stopping.
    pub max_generations: usize,
    /// Fixed seed for reproducible runs; `None` draws OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_chance: 0.3,
            max_generations: 300,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the per-child mutation probability (clamped to `[0, 1]`).
    pub fn with_mutation_chance(mut self, mutation_chance: f64) -> Self {
        self.mutation_chance = mutation_chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of a driver run.
#[derive(Debug, Clone)]
pub struct GaResult<S> {
    /// Best state encountered across all generations.
    pub best_state: S,
    /// Score of the best state.
    pub best_value: f64,
    /// Generations bred.
    pub generations: usize,
}

/// Evolutionary search loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the search and returns the best state found.
    ///
    /// Selection is binary tournament; the best state is tracked across
    /// generations rather than re-injected into the population.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::State> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let population_size = config.population_size.max(2);
        let mutation_chance = config.mutation_chance.clamp(0.0, 1.0);

        let mut population: Vec<(P::State, f64)> = (0..population_size)
            .map(|_| {
                let state = problem.generate_random_state(&mut rng);
                let value = problem.value(&state);
                (state, value)
            })
            .collect();

        let (mut best_state, mut best_value) = {
            let best = population
                .iter()
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .expect("population is non-empty");
            (best.0.clone(), best.1)
        };

        for _ in 0..config.max_generations {
            let mut next = Vec::with_capacity(population_size);
            for _ in 0..population_size {
                let parent_a = tournament(&population, &mut rng);
                let parent_b = tournament(&population, &mut rng);
                let mut child = problem.crossover(parent_a, parent_b, &mut rng);
                if rng.random_bool(mutation_chance) {
                    child = problem.mutate(&child, &mut rng);
                }
                let value = problem.value(&child);
                if value > best_value {
                    best_value = value;
                    best_state = child.clone();
                }
                next.push((child, value));
            }
            population = next;
        }

        GaResult {
            best_state,
            best_value,
            generations: config.max_generations,
        }
    }
}

/// Binary tournament: the better of two uniformly drawn states.
fn tournament<'p, S, R: Rng>(population: &'p [(S, f64)], rng: &mut R) -> &'p S {
    let a = &population[rng.random_range(0..population.len())];
    let b = &population[rng.random_range(0..population.len())];
    if a.1 >= b.1 {
        &a.0
    } else {
        &b.0
    }
}
