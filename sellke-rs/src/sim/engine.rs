use crate::{
    error::Error,
    params::SirParams,
    prelude::Real,
    sampler::Draws,
    sim::RecoveryQueue,
    trackers::EventLog,
    Result,
};
use getset::{CopyGetters, Getters};
use log::{debug, trace};

/// Kind of state change produced by a single engine step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    Infection,
    Recovery,
}

/// Event-driven reconstruction of an SIR trajectory from a set of draws.
///
/// Between events the number of infectious individuals is constant, so the
/// accumulated hazard grows linearly in time. At each step the engine
/// compares the next unconsumed threshold with the hazard accumulated up to
/// the next recovery: if the threshold is reached first, the infection time
/// is found by linear interpolation, otherwise the recovery happens.
///
/// The engine consumes the same draws as [`crate::final_size::final_size`]
/// and always ends with the same number of infections.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct TrajectoryEngine<'a> {
    draws: &'a Draws,
    lambda: Real,

    /// Simulated time.
    #[getset(get_copy = "pub")]
    time: Real,

    /// Infection pressure accumulated up to the current time.
    #[getset(get_copy = "pub")]
    hazard: Real,

    /// Rank of the next susceptible to be infected.
    #[getset(get_copy = "pub")]
    next_threshold: usize,

    #[getset(get_copy = "pub")]
    susceptible: usize,

    #[getset(get_copy = "pub")]
    infectious: usize,

    queue: RecoveryQueue,

    #[getset(get = "pub")]
    log: EventLog,
}

impl<'a> TrajectoryEngine<'a> {
    /// Create an engine at t = 0. The initial state is the first row of the
    /// event log.
    pub fn new(params: &SirParams, draws: &'a Draws) -> Result<Self> {
        draws.check(params)?;
        let pop = params.population();
        let mut log = EventLog::for_population(&pop);
        log.record(0.0, pop.susceptible(), pop.infectious());

        Ok(TrajectoryEngine {
            draws,
            lambda: params.lambda(),
            time: 0.0,
            hazard: 0.0,
            next_threshold: 0,
            susceptible: pop.susceptible(),
            infectious: pop.infectious(),
            queue: RecoveryQueue::seeded(draws.initial_periods()),
            log,
        })
    }

    /// True once there are no infectious individuals left.
    pub fn is_extinct(&self) -> bool {
        self.infectious == 0
    }

    /// Process the next event. Return None once the epidemic is extinct.
    pub fn step(&mut self) -> Result<Option<EventKind>> {
        if self.is_extinct() {
            return Ok(None);
        }
        let next_recovery = match self.queue.peek() {
            Some(t) => t,
            None => {
                return Err(Error::EmptyRecoveryQueue {
                    time: self.time,
                    infectious: self.infectious,
                })
            }
        };
        let dt = next_recovery - self.time;
        let hazard = self.hazard + self.lambda * self.infectious as Real * dt;

        let draws = self.draws;
        let event = match draws.thresholds().get(self.next_threshold) {
            Some(&threshold) if threshold <= hazard => {
                self.infect(threshold, next_recovery, hazard);
                EventKind::Infection
            }
            _ => {
                self.recover(next_recovery, hazard);
                EventKind::Recovery
            }
        };
        trace!(
            "{:?} at t = {:.4}: S = {}, I = {}",
            event,
            self.time,
            self.susceptible,
            self.infectious
        );
        self.log.record(self.time, self.susceptible, self.infectious);
        Ok(Some(event))
    }

    /// Run until extinction and return the event log.
    pub fn run(mut self) -> Result<EventLog> {
        let mut infections = 0usize;
        while let Some(event) = self.step()? {
            if event == EventKind::Infection {
                infections += 1;
            }
        }
        debug!(
            "extinct at t = {:.4} after {} infections, {} thresholds unused",
            self.time,
            infections,
            self.draws.susceptible() - self.next_threshold
        );
        Ok(self.log)
    }

    /// Infection of the next ranked susceptible before the next recovery.
    ///
    /// `hazard` is the pressure accumulated by the time of the next recovery.
    fn infect(&mut self, threshold: Real, next_recovery: Real, hazard: Real) {
        assert!(
            self.infectious > 0,
            "infection interpolated with no infectious individuals"
        );
        let growth = hazard - self.hazard;
        if growth > 0.0 {
            let dt = next_recovery - self.time;
            let time = self.time + dt * (threshold - self.hazard) / growth;
            // never past the recovery that bounds the interval
            self.time = time.min(next_recovery);
        }
        self.hazard = threshold;
        self.infectious += 1;
        self.susceptible -= 1;
        self.queue.push(self.time + self.draws.periods()[self.next_threshold]);
        self.next_threshold += 1;
    }

    fn recover(&mut self, at: Real, hazard: Real) {
        self.queue.pop();
        self.time = at;
        self.hazard = hazard;
        self.infectious -= 1;
    }
}
