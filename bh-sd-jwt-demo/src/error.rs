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

/// Error type for the demo wrappers.
#[derive(strum_macros::Display, Debug, PartialEq, Eq, Clone)]
pub enum DemoError {
    /// The issuer refused to issue or sign the SD-JWT.
    #[strum(to_string = "SD-JWT issuance failed")]
    Issuance,

    /// The holder rejected the issued SD-JWT.
    #[strum(to_string = "Holder could not import the issued SD-JWT")]
    HolderImport,

    /// The holder could not build or sign the presentation.
    #[strum(to_string = "Presentation could not be created")]
    Presentation,

    /// A serialized SD-JWT produced by the library could not be split back
    /// into its parts.
    #[strum(to_string = "Malformed SD-JWT artifact")]
    MalformedArtifact,

    /// An encoded disclosure is not a valid disclosure.
    #[strum(to_string = "Invalid disclosure")]
    InvalidDisclosure,

    /// The system clock is set before the UNIX epoch.
    #[strum(to_string = "System clock is before the UNIX epoch")]
    Clock,
}

impl bherror::BhError for DemoError {}

/// Result type used across the crate.
pub type Result<T> = bherror::Result<T, DemoError>;
