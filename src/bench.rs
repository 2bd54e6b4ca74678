//! Randomized benchmark trials over classic Countdown draws.
//!
//! Each trial draws six numbers the way the televised game does, picks a
//! three-digit target, and times the value-space build and the search for a
//! first claim separately. Trials are independent and run in parallel; the
//! solver itself stays single-threaded within a trial.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

use crate::search::{search, Claim, SearchError};
use crate::space::build_value_space;

const BIG_ONES: [i64; 4] = [25, 50, 75, 100];
const SMALL_ONES: [i64; 20] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
];
/// How many big numbers a draw takes; weighted towards two, as contestants
/// tend to pick.
const BIG_COUNT_CHOICES: [usize; 7] = [2, 2, 2, 2, 1, 1, 0];
const DRAW_SIZE: usize = 6;

struct TrialOutcome {
    items: Vec<i64>,
    target: i64,
    claim: Option<Claim>,
    build: Duration,
    search: Duration,
}

fn run_trial() -> Result<TrialOutcome, SearchError> {
    let mut rng = rand::thread_rng();
    let big_count = BIG_COUNT_CHOICES.choose(&mut rng).copied().unwrap_or(2);
    let mut items: Vec<i64> = BIG_ONES
        .choose_multiple(&mut rng, big_count)
        .copied()
        .collect();
    items.extend(
        SMALL_ONES
            .choose_multiple(&mut rng, DRAW_SIZE - big_count)
            .copied(),
    );
    let target = rng.gen_range(100..1000);

    let started = Instant::now();
    let space = build_value_space(&items)?;
    let build = started.elapsed();

    let started = Instant::now();
    let claim = search(&space, target).next().transpose()?;
    let search_time = started.elapsed();

    Ok(TrialOutcome {
        items,
        target,
        claim,
        build,
        search: search_time,
    })
}

/// Run `trials` random rounds and print each outcome plus average timings.
pub fn run(trials: usize) -> Result<()> {
    let outcomes: Vec<TrialOutcome> = (0..trials)
        .into_par_iter()
        .map(|_| run_trial())
        .collect::<Result<_, _>>()
        .context("benchmark trial failed")?;

    let mut build_total = Duration::ZERO;
    let mut search_total = Duration::ZERO;
    let mut solved = 0usize;
    for outcome in &outcomes {
        match &outcome.claim {
            Some(claim) => {
                solved += 1;
                println!("{}", claim);
            }
            None => println!("Not possible! {} {:?}", outcome.target, outcome.items),
        }
        build_total += outcome.build;
        search_total += outcome.search;
    }

    if trials > 0 {
        println!(
            "{} of {} solvable; avg build {:?}, avg first-claim search {:?}",
            solved,
            trials,
            build_total / trials as u32,
            search_total / trials as u32
        );
    }
    Ok(())
}
