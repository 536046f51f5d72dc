use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use fastrand::Rng;
use serde_json::json;
use tracing::error;

use exam_color::error::Result;
use exam_color::util::{init_logging, read_params, print_schedule, export_results};


fn run(main_args:&clap::ArgMatches) -> Result<()> {
    let mut params = read_params(main_args)?;
    if params.random_first {
        let rng = match params.seed {
            None => Rng::new(),
            Some(seed) => Rng::with_seed(seed),
        };
        params.scheduler.set_rng(Some(rng));
    }

    // solve it
    let t_start = Instant::now();
    params.scheduler.color_graph()?;
    let duration = t_start.elapsed().as_secs_f32();
    let nb_slots = params.scheduler.slot_count();
    println!("{:?} took {:.3} seconds. Nb slots: {}", params.scheduler.strategy(), duration, nb_slots);
    print_schedule(&params.scheduler);
    let stats = json!({
        "primal_list": vec![nb_slots],
        "lower_bound": params.scheduler.clique_lower_bound(),
        "valid": params.scheduler.is_valid_coloring(),
        "time_searched": duration,
        "inst_name": params.inst_name,
        "schedule": params.scheduler.schedule_view(),
    });

    // export results
    export_results(&params.scheduler, &stats, params.perf_file.as_deref(), params.sol_file.as_deref())
}

/** assigns exam slots to the courses of a registration file */
pub fn main() {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("exam_schedule.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        error!("{}", e);
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
