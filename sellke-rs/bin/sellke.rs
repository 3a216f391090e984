use log::{error, info, warn, LevelFilter};
use sellke::prelude::*;
use simple_logger::SimpleLogger;
use std::{env, fs, io, path::Path, process};

const DEFAULT_CONFIG: &str = "conf.toml";

pub fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Debug).init() {
        eprintln!("could not start logger: {}", err);
    }
    log::set_max_level(LevelFilter::Info);
    if let Err(err) = run(&path) {
        error!("{}", err);
        process::exit(1);
    }
}

fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        info!("reading configuration from {}", path);
        Config::read(path)
    } else {
        warn!("{} not found, using the reference scenario", path);
        Ok(Config::default())
    }
}

fn run(path: &str) -> Result<()> {
    let cfg = load_config(path)?;
    log::set_max_level(cfg.log_level());
    if cfg.verbose() {
        info!("{:#?}", cfg);
    }

    let mut sim = cfg.simulation()?;
    info!(
        "lambda = {:.6}, R0 = {:.3}",
        sim.params().lambda(),
        sim.params().basic_reproduction_number()
    );
    let outcome = sim.run()?;
    if let Some(peak) = outcome.trajectory().peak() {
        info!("peak of {} infectious at t = {:.2}", peak.infectious, peak.time);
    }

    match cfg.output() {
        Some(out) => {
            outcome.trajectory().write_csv(fs::File::create(out)?)?;
            info!("trajectory written to {}", out);
        }
        None => outcome.trajectory().write_csv(io::stdout())?,
    }

    if let Some(ensemble) = cfg.ensemble()? {
        let summary = ensemble.summary(cfg.major_outbreak_fraction())?;
        let z = summary.final_size();
        info!(
            "{} realizations: final size {:.1} +- {:.1} (min {}, max {}), {:.1}% major outbreaks",
            z.size(),
            z.mean(),
            z.std(),
            z.min(),
            z.max(),
            100.0 * summary.major_outbreaks()
        );
    }
    Ok(())
}
