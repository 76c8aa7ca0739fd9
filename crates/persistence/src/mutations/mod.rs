// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-path mutations over the record store.
//!
//! Functions here perform single Diesel writes; transaction boundaries
//! and the rule hooks (normalization, titular fix-up, ballot numbering)
//! are owned by the `Persistence` adapter in `lib.rs`, so every
//! multi-step operation commits or rolls back as a whole.

pub mod ballots;
pub mod draws;
pub mod judges;
pub mod jurors;
