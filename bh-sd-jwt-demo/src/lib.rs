// Copyright (C) 2020-2026  The Blockhouse Technology Limited (TBTL).
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! One-shot wrappers around `bh-sd-jwt` for demonstrations.
//!
//! The wrappers bundle the issuer and holder steps of the SD-JWT VC flow into
//! single calls that return every intermediate artifact, so that they can be
//! shown with `bh-sd-jwt-explain`.
//!
//! * [`issue_simple_sd_jwt`] -- Issues a credential with every top-level claim
//!   selectively disclosable.
//! * [`create_presentation`] -- Imports an issued credential as a holder and
//!   presents a subset of its claims.
//! * [`DisclosureHashing`] -- Computes the digest of a disclosure.
//!
//! The keys and certificates involved are not managed here; callers bring
//! their own `bh-jws-utils` signers. Issuers are trusted based on their X.509
//! certificate chain alone, which is only acceptable for demonstrations.

pub use digest::DisclosureHashing;
pub use error::{DemoError, Result};
pub use issuance::{issue_simple_sd_jwt, SimpleIssuance};
pub use presentation::{create_presentation, Presentation, DEFAULT_AUDIENCE};

mod digest;
mod error;
mod issuance;
mod presentation;
#[cfg(test)]
mod test_utils;
mod utils;
