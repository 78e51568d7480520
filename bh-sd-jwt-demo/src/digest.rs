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

//! The digest of a single disclosure, as embedded in the `_sd` array of an
//! SD-JWT.

use bh_jws_utils::{base64_url_decode, base64_url_encode};
use bh_sd_jwt::{Disclosure, Hasher as _, Sha256};
use bh_sd_jwt_explain::{explain_hashing, HashingDiagram, HashingLayout};
use bherror::traits::{ErrorContext as _, ForeignError as _, PropagateError as _};

use crate::error::{DemoError, Result};

/// The three stages of hashing a disclosure: the JSON array, its `base64url`
/// encoding and the `base64url`-encoded `SHA-256` digest of the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureHashing {
    /// The disclosure as JSON text.
    pub disclosure: String,
    /// The disclosure as it appears in the serialized SD-JWT.
    pub encoded: String,
    /// The digest as it appears in the `_sd` array.
    pub digest: String,
}

impl DisclosureHashing {
    /// Decode the `base64url`-encoded disclosure and compute its digest.
    ///
    /// Returns [`DemoError::InvalidDisclosure`] if `encoded` is not a valid
    /// disclosure.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        Disclosure::try_from(encoded.to_owned())
            .with_err(|| DemoError::InvalidDisclosure)
            .ctx(|| encoded.to_owned())?;

        let decoded = base64_url_decode(encoded).foreign_err(|| DemoError::InvalidDisclosure)?;
        let disclosure = String::from_utf8(decoded).foreign_err(|| DemoError::InvalidDisclosure)?;

        Ok(Self {
            disclosure,
            encoded: encoded.to_owned(),
            digest: base64_url_encode(Sha256.digest(encoded.as_bytes())),
        })
    }

    /// Lay out the hashing pipeline of this disclosure.
    pub fn diagram(&self, layout: &HashingLayout) -> HashingDiagram {
        HashingDiagram::new(&self.disclosure, &self.encoded, &self.digest, layout)
    }

    /// Print the hashing pipeline of this disclosure to the standard output.
    pub fn explain(&self, screen_width: usize) {
        explain_hashing(&self.disclosure, &self.encoded, &self.digest, screen_width);
    }
}

impl TryFrom<&Disclosure> for DisclosureHashing {
    type Error = bherror::Error<DemoError>;

    fn try_from(disclosure: &Disclosure) -> Result<Self> {
        Self::from_encoded(disclosure.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://datatracker.ietf.org/doc/html/draft-ietf-oauth-selective-disclosure-jwt-07
    const ENCODED: &str = "WyI2cU1RdlJMNWhhaiIsICJmYW1pbHlfbmFtZSIsICJNw7ZiaXVzIl0";
    const DIGEST: &str = "uutlBuYeMDyjLLTpf6Jxi7yNkEF35jdyWMn9U7b_RYY";

    #[test]
    fn digest_of_known_disclosure() {
        let hashing = DisclosureHashing::from_encoded(ENCODED).unwrap();

        assert_eq!(hashing.disclosure, r#"["6qMQvRL5haj", "family_name", "Möbius"]"#);
        assert_eq!(hashing.encoded, ENCODED);
        assert_eq!(hashing.digest, DIGEST);
    }

    #[test]
    fn diagram_contains_every_stage() {
        let hashing = DisclosureHashing::from_encoded(ENCODED).unwrap();

        let rendered = hashing.diagram(&HashingLayout::default()).to_string();

        assert!(rendered.contains("| [\"6qMQvRL5haj\", \"family_name\", \"Möbius\"] |"));
        assert!(rendered.contains(&format!("| {ENCODED} |")));
        assert!(rendered.contains(&format!("| {DIGEST} |")));
    }

    #[test]
    fn narrow_screen_wraps_the_diagram() {
        let hashing = DisclosureHashing::from_encoded(ENCODED).unwrap();

        let diagram = hashing.diagram(&HashingLayout { screen_width: 80 });

        assert!(diagram.groups().len() > 1);
    }

    #[test]
    fn invalid_disclosure() {
        for encoded in ["not base64!", "WyJzYWx0Il0"] {
            let error = DisclosureHashing::from_encoded(encoded).unwrap_err();

            assert_eq!(error.error, DemoError::InvalidDisclosure);
        }
    }
}
