use clap::ArgMatches;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    color::{ColoringInstance, CheckerResult},
    error::{Error, Result},
    registration::{read_registrations, sample_conflicts},
    scheduler::{ColoringStrategy, Scheduler},
};

/** parameters shared by the executables */
#[derive(Debug)]
pub struct RunParams {
    /// instance name (file name, or "sample")
    pub inst_name: String,
    /// scheduler populated with the instance
    pub scheduler: Scheduler,
    /// number of trials
    pub trials: usize,
    /// seed of the random source (random if not given)
    pub seed: Option<u64>,
    /// if true, the first course colored is drawn at random
    pub random_first: bool,
    /// where to write the schedule
    pub sol_file: Option<String>,
    /// where to write the statistics (json)
    pub perf_file: Option<String>,
}

/// installs the log subscriber (RUST_LOG, defaults to "info")
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_value<T:std::str::FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(e) => e.parse::<T>().map(Some).map_err(|_| Error::InvalidParameter {
            name: name.to_string(), value: e.to_string()
        }),
    }
}

/** reads command line input, builds the scheduler and reads the instance */
pub fn read_params(main_args:&ArgMatches) -> Result<RunParams> {
    let strategy:ColoringStrategy = match main_args.value_of("strategy") {
        None => ColoringStrategy::default(),
        Some(s) => s.parse()?,
    };
    let trials:usize = parse_value(main_args, "trials")?.unwrap_or(1);
    let seed:Option<u64> = parse_value(main_args, "seed")?;
    let random_first = main_args.is_present("random-first");
    let sol_file = main_args.value_of("solution").map(|e| e.to_string());
    let perf_file = main_args.value_of("perf").map(|e| e.to_string());
    let mut scheduler = Scheduler::new(strategy);
    let inst_name = match main_args.value_of("instance") {
        Some(inst_filename) => {
            read_registrations(&mut scheduler, inst_filename)?;
            inst_filename.to_string()
        },
        None if main_args.is_present("sample") => {
            sample_conflicts(&mut scheduler);
            "sample".to_string()
        },
        None => return Err(Error::InvalidParameter {
            name: "instance".to_string(), value: String::default()
        }),
    };
    println!("{}", scheduler.graph());
    scheduler.graph().display_statistics();
    println!("=======================");
    Ok(RunParams { inst_name, scheduler, trials, seed, random_first, sol_file, perf_file })
}

/** prints the schedule, its number of slots and its validity */
pub fn print_schedule(scheduler:&Scheduler) {
    println!("Number of time slots needed: {}", scheduler.slot_count());
    println!("Exam Schedule:");
    print!("{}", scheduler.schedule_to_string());
    match scheduler.check() {
        CheckerResult::Ok(_) => println!("\nIs valid coloring: true"),
        res => println!("\nIs valid coloring: false ({:?})", res),
    }
}

/// exports search results to files
pub fn export_results(
    scheduler:&Scheduler,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename, serde_json::to_string(stats)?)
            .map_err(|source| Error::Export { path: filename.into(), source })?;
        info!(file = filename, "statistics written");
    }
    // export solution
    if let Some(filename) = sol_file {
        scheduler.write_schedule(filename)?;
        info!(file = filename, "schedule written");
    }
    Ok(())
}
