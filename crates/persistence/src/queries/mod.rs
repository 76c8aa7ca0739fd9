// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-path queries over the record store.
//!
//! All functions here are Diesel DSL reads; none of them mutate. Row
//! parsing happens in `data_models`, so every function returns domain
//! types or public DTOs.

pub mod ballots;
pub mod draws;
pub mod judges;
pub mod jurors;
