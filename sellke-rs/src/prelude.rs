pub use crate::{
    config::Config,
    ensemble::{Ensemble, FinalSizeSummary},
    error::{Error, Result},
    final_size::{final_size, FinalSize},
    params::{Population, Rates, SirParams},
    sampler::{sample_thresholds, Draws, InfectiousPeriodSampler},
    sim::{EventKind, Outcome, RecoveryQueue, Simulation, TrajectoryEngine},
    trackers::{EventLog, Trajectory, TrajectoryRow},
    Real,
};
