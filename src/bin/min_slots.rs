use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use fastrand::Rng;
use serde_json::json;
use tracing::error;

use exam_color::error::Result;
use exam_color::trials::run_trials;
use exam_color::util::{init_logging, read_params, print_schedule, export_results};


fn run(main_args:&clap::ArgMatches) -> Result<()> {
    let mut params = read_params(main_args)?;
    let seed = params.seed.unwrap_or_else(|| Rng::new().u64(..));

    // solve it (several times)
    let t_start = Instant::now();
    let summary = run_trials(&mut params.scheduler, params.trials, seed)?;
    let duration = t_start.elapsed().as_secs_f32();
    println!(
        "{} trials took {:.3} seconds. Minimum is: {} (trial {}, seed {})",
        summary.slot_counts.len(), duration, summary.min_slots, summary.best_trial, seed
    );
    print_schedule(&params.scheduler);
    let stats = json!({
        "primal_list": summary.slot_counts,
        "min_slots": summary.min_slots,
        "lower_bound": params.scheduler.clique_lower_bound(),
        "seed": seed,
        "time_searched": duration,
        "inst_name": params.inst_name,
        "schedule": summary.best_schedule,
    });

    // export results
    export_results(&params.scheduler, &stats, params.perf_file.as_deref(), params.sol_file.as_deref())
}

/** colors the conflict graph several times and keeps the schedule using the fewest slots */
pub fn main() {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("min_slots.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        error!("{}", e);
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
