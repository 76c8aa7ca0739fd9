// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod ballots;
mod clock;
mod draw;
mod error;
mod lifecycle;
mod titular;

#[cfg(test)]
mod tests;

pub use ballots::{BallotCandidate, BallotSlot, number_ballots};
pub use clock::{Clock, FixedClock, SystemClock};
pub use draw::{DrawSelection, select_draw};
pub use error::CoreError;
pub use lifecycle::{Normalization, is_due_for_reactivation, normalize_for_write, reactivate};
pub use titular::{TitularResolution, ensure_can_demote, resolve_titular, verify_titular};
