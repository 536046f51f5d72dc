use fastrand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::scheduler::{Scheduler, TimeSlot};


/** outcome of a series of colorings */
#[derive(Clone, Debug, Serialize)]
pub struct TrialSummary {
    /// slot_counts[i]: number of slots used by trial i
    pub slot_counts: Vec<usize>,
    /// smallest number of slots found
    pub min_slots: usize,
    /// index of the first trial reaching min_slots
    pub best_trial: usize,
    /// schedule of the best trial
    pub best_schedule: Vec<TimeSlot>,
    /// true iff every trial produced a valid coloring
    pub all_valid: bool,
}

/** colors the scheduler graph nb_trials times (at least once), each trial
drawing its first vertex from its own random source forked from seed.
Keeps the running minimum of the number of slots.

When done, the scheduler holds the coloring of the best trial and its
random source is the one it had before the call.
*/
pub fn run_trials(scheduler:&mut Scheduler, nb_trials:usize, seed:u64) -> Result<TrialSummary> {
    let master = Rng::with_seed(seed);
    let trial_seeds:Vec<u64> = (0..nb_trials.max(1)).map(|_| master.u64(..)).collect();
    let mut slot_counts = Vec::with_capacity(trial_seeds.len());
    let mut best_trial:usize = 0;
    let mut all_valid = true;
    let previous_rng = scheduler.set_rng(None);
    for (i, trial_seed) in trial_seeds.iter().enumerate() {
        scheduler.set_rng(Some(Rng::with_seed(*trial_seed)));
        scheduler.color_graph()?;
        let nb_slots = scheduler.slot_count();
        let valid = scheduler.is_valid_coloring();
        all_valid &= valid;
        debug!(trial = i, slots = nb_slots, valid, "trial done");
        if nb_slots < slot_counts.get(best_trial).copied().unwrap_or(usize::MAX) {
            best_trial = i;
        }
        slot_counts.push(nb_slots);
    }
    // replay the best trial
    scheduler.set_rng(Some(Rng::with_seed(trial_seeds[best_trial])));
    scheduler.color_graph()?;
    scheduler.set_rng(previous_rng);
    let min_slots = slot_counts[best_trial];
    info!(trials = slot_counts.len(), min_slots, best_trial, all_valid, "trials finished");
    Ok(TrialSummary {
        slot_counts,
        min_slots,
        best_trial,
        best_schedule: scheduler.schedule_view(),
        all_valid,
    })
}
