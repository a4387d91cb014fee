// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel best hand search for pools with jokers.
use log::debug;
use std::{panic, thread};

use crate::{Hand, Token, error::Result, wild::WildPool};

/// Parallel version of [best_wild_hand](crate::best_wild_hand) that splits
/// the candidates between `num_tasks` threads.
///
/// Each task searches a contiguous range of candidates and the tasks results
/// are reduced in candidates order, so the returned hand is the same as the
/// one returned by the sequential search.
///
/// Panics if `num_tasks` is 0.
pub fn par_best_wild_hand(pool: &[Token], num_tasks: usize) -> Result<Hand> {
    assert!(num_tasks > 0);

    let wild = WildPool::new(pool)?;
    let num_candidates = wild.num_candidates();
    let candidates_per_task = num_candidates.div_ceil(num_tasks);

    debug!("Searching {num_candidates} candidates with {num_tasks} tasks");

    let results = thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let start = (task_id * candidates_per_task).min(num_candidates);
                let end = (start + candidates_per_task).min(num_candidates);
                start..end
            })
            .filter(|range| !range.is_empty())
            .map(|range| {
                let wild = &wild;
                s.spawn(move || wild.best_in(range))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let mut hands = results.into_iter();
    let (mut best_idx, mut best) = hands
        .next()
        .unwrap_or_else(|| wild.best_in(0..num_candidates))?;
    for result in hands {
        let (idx, hand) = result?;
        if hand.value() > best.value() {
            best_idx = idx;
            best = hand;
        }
    }

    wild.log_best(best_idx, &best);
    Ok(best)
}
