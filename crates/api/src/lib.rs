// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the jurado juror draw engine.
//!
//! Handlers validate raw input, translate it into domain types, call the
//! persistence layer, and translate every lower-layer error into the
//! [`ApiError`] contract. Nothing below this layer leaks raw.

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
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod handlers;
pub mod request_response;
pub mod roster;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use roster::{RosterError, RosterImportResult, RosterPreview, RosterRowResult, RosterRowStatus};
