// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Random draw selection.
//!
//! The sorteio proper: a uniformly random, non-overlapping pick of titular
//! and suplente jurors from the eligible pool. The RNG is caller-supplied,
//! so a seeded generator makes the selection reproducible in tests and in
//! officiated draws that must be replayable. Manual assignment remains
//! available alongside this; eligibility is advisory for manual overrides
//! but authoritative here, because the pool is the input.

use crate::error::CoreError;
use jurado_domain::DomainError;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

/// The outcome of a random selection over the eligible pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSelection {
    /// Jurors selected as titulars.
    pub titulars: Vec<i64>,
    /// Jurors selected as suplentes.
    pub suplentes: Vec<i64>,
}

/// Selects `num_titular + num_suplente` distinct jurors from the pool.
///
/// The first `num_titular` sampled jurors become titulars, the rest
/// suplentes. Sampling is without replacement, so a juror never holds both
/// roles.
///
/// # Errors
///
/// Returns `DomainError::InsufficientPool` (wrapped in
/// `CoreError::DomainViolation`) if the pool holds fewer jurors than
/// requested.
pub fn select_draw<R: Rng + ?Sized>(
    pool: &[i64],
    num_titular: usize,
    num_suplente: usize,
    rng: &mut R,
) -> Result<DrawSelection, CoreError> {
    let requested = num_titular + num_suplente;
    if requested > pool.len() {
        return Err(CoreError::DomainViolation(DomainError::InsufficientPool {
            requested,
            available: pool.len(),
        }));
    }

    let sampled: Vec<i64> = index::sample(rng, pool.len(), requested)
        .into_iter()
        .map(|i| pool[i])
        .collect();

    let (titulars, suplentes) = sampled.split_at(num_titular);
    Ok(DrawSelection {
        titulars: titulars.to_vec(),
        suplentes: suplentes.to_vec(),
    })
}
