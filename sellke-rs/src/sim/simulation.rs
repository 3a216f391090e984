use crate::{
    final_size::{final_size, FinalSize},
    params::SirParams,
    sampler::Draws,
    sim::TrajectoryEngine,
    trackers::Trajectory,
    Result,
};
use getset::Getters;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Everything produced by one realization: the draws, the closed form final
/// size and the reconstructed trajectory.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Outcome {
    draws: Draws,
    final_size: FinalSize,
    trajectory: Trajectory,
}

impl Outcome {
    /// Solve the final size and reconstruct the trajectory from the same
    /// draws.
    pub fn from_draws(params: &SirParams, draws: Draws) -> Result<Self> {
        let size = final_size(&draws, params.lambda());
        let log = TrajectoryEngine::new(params, &draws)?.run()?;
        let trajectory = Trajectory::assemble(&log, params.population().size())?;
        Ok(Outcome {
            draws,
            final_size: size,
            trajectory,
        })
    }
}

/// A seeded driver for realizations of the stochastic SIR model.
///
/// Each call to [`Simulation::run`] draws a fresh set of thresholds and
/// infectious periods from the internal generator, so consecutive runs are
/// independent realizations and a seed reproduces the whole sequence.
///
/// The generator is ChaCha8, whose output for a given seed is fixed across
/// platforms and releases of `rand`.
#[derive(Debug, Clone, Getters)]
pub struct Simulation {
    #[getset(get = "pub")]
    params: SirParams,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Create new simulation seeded from system entropy.
    pub fn new(params: SirParams) -> Self {
        Simulation {
            params,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create new simulation with a fixed seed.
    pub fn seeded(params: SirParams, seed: u64) -> Self {
        Simulation {
            params,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Set seed for random number generator
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        return self;
    }

    /// Continue from the state of another generator.
    pub fn seed_from(&mut self, rng: &ChaCha8Rng) -> &mut Self {
        self.rng = rng.clone();
        return self;
    }

    /// Draw thresholds and infectious periods for a new realization.
    pub fn draw(&mut self) -> Result<Draws> {
        Draws::sample(&self.params, &mut self.rng)
    }

    /// Final size of a new realization, skipping the trajectory.
    pub fn final_size(&mut self) -> Result<FinalSize> {
        let draws = self.draw()?;
        Ok(final_size(&draws, self.params.lambda()))
    }

    /// Run a new realization to extinction.
    pub fn run(&mut self) -> Result<Outcome> {
        let draws = self.draw()?;
        let outcome = Outcome::from_draws(&self.params, draws)?;
        info!(
            "final size {} of {}, {} events, extinct at t = {:.2}",
            outcome.final_size.total(),
            self.params.population().size(),
            outcome.trajectory.len(),
            outcome.trajectory.duration()
        );
        Ok(outcome)
    }
}
