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

/// Error type for the explainer operations.
#[derive(strum_macros::Display, Debug, PartialEq, Eq, Clone)]
pub enum ExplainError {
    /// The serialized JWT does not contain the header, body and signature
    /// segments.
    #[strum(to_string = "Malformed JWT: {0}")]
    MalformedJwt(String),

    /// The input is not valid JSON.
    #[strum(to_string = "Invalid JSON")]
    InvalidJson,

    /// The disclosure is not a JSON array of exactly three elements.
    #[strum(to_string = "Invalid disclosure: {0}")]
    InvalidDisclosure(String),

    /// The input is not valid `base64url`.
    #[strum(to_string = "Invalid base64url input")]
    InvalidBase64,

    /// The decoded bytes are not valid UTF-8.
    #[strum(to_string = "Decoded payload is not valid UTF-8")]
    InvalidUtf8,

    /// The decoded bytes are not ASCII text.
    #[strum(to_string = "Decoded payload is not ASCII text")]
    NonAsciiPayload,

    /// A palette needs at least one color.
    #[strum(to_string = "Color palette is empty")]
    EmptyPalette,
}

impl bherror::BhError for ExplainError {}

/// Result type used across the crate.
pub type Result<T> = bherror::Result<T, ExplainError>;
