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

//! This crate renders Selective Disclosure JSON Web Tokens for humans.
//!
//! It is meant for teaching material and debugging sessions, where the
//! structure of an [SD-JWT][1] needs to be shown on an ANSI terminal.
//!
//! [1]: <https://datatracker.ietf.org/doc/html/draft-ietf-oauth-selective-disclosure-jwt>
//!
//! # Details
//!
//! The main components of this crate are the following.
//!
//! * [`explain_jwt`] -- Colors the segments of a JWT, SD-JWT or SD-JWT
//!   presentation.
//! * [`explain_disclosure`] -- Annotates the salt, claim name and claim value of
//!   a disclosure.
//! * [`explain_hashing`] -- Draws the pipeline from a disclosure to its digest.
//! * [`b64decode`], [`highlight`] and [`pretty`] -- Small helpers for the
//!   above.
//!
//! Nothing in this crate verifies signatures or digests; see `bh-sd-jwt` for
//! that.

pub use color::{
    colorize, highlight, strip_ansi, visible_width, Palette, DEFAULT_HIGHLIGHT_COLOR, RESET,
};
pub use disclosure::{explain_disclosure, explain_encoded_disclosure};
pub use error::{ExplainError, Result};
pub use hashing::{
    explain_hashing, HashingDiagram, HashingLayout, LineGroup, DEFAULT_SCREEN_WIDTH,
    ENCODING_LABEL, HASHING_LABEL,
};
pub use jwt::{explain_jwt, explain_jwt_with_palette, JwtParts};
pub use utils::{b64decode, pretty};

mod color;
mod disclosure;
mod error;
mod hashing;
mod jwt;
mod utils;
