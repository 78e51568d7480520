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

//! One-shot SD-JWT issuance.

use bh_jws_utils::{HasJwkKid, HasX5Chain, JwkPublic, JwtSigner};
use bh_sd_jwt::{
    iref::UriBuf, issuer::Issuer, Disclosure, IssuerJwt, JsonNodePath, JsonNodePathSegment,
    JsonObject, Sha256,
};
use bh_sd_jwt_explain::JwtParts;
use bherror::{traits::PropagateError as _, Error};
use serde_json::Value;

use crate::{
    error::{DemoError, Result},
    utils::parse_disclosures,
};

/// Everything produced by a single call to [`issue_simple_sd_jwt`].
#[derive(Debug, Clone)]
pub struct SimpleIssuance {
    /// The signed claim set, with the `_sd` digests in place of the
    /// selectively disclosable claims.
    pub claims: JsonObject,
    /// The compact issuer-signed JWT, i.e. `header.body.signature`.
    pub serialized_sd_jwt: String,
    /// The disclosures sent from the issuer to the holder.
    pub disclosures: Vec<Disclosure>,
    /// The full issuance, `jwt~disclosure~...~`.
    pub issuance: String,
}

/// Issue an SD-JWT VC of type `vct` over `claims`, bound to `holder_key`.
///
/// Every top-level claim is made selectively disclosable. The credential is
/// signed by `issuer_key` with `SHA-256` used for the digests.
///
/// # Errors
///
/// Returns [`DemoError::Issuance`] if the issuer rejects the claims, e.g. when
/// one of them is a registered JWT claim name, or if signing fails.
pub fn issue_simple_sd_jwt<S>(
    issuer_key: &S,
    iss: UriBuf,
    vct: &str,
    claims: JsonObject,
    holder_key: JwkPublic,
) -> Result<SimpleIssuance>
where
    S: JwtSigner + HasJwkKid + HasX5Chain,
{
    let claim_names: Vec<String> = claims.keys().cloned().collect();
    let paths: Vec<[JsonNodePathSegment; 1]> = claim_names
        .iter()
        .map(|name| [JsonNodePathSegment::Key(name.as_str())])
        .collect();
    let disclosable: Vec<&JsonNodePath> = paths.iter().map(|path| path.as_slice()).collect();

    let jwt_payload = IssuerJwt::new(vct.to_owned(), iss, holder_key, claims)
        .with_err(|| DemoError::Issuance)?;

    let issuance = Issuer::new(Sha256)
        .issue(jwt_payload, &disclosable, issuer_key, &mut rand::thread_rng())
        .with_err(|| DemoError::Issuance)?
        .into_string_compact();

    let (claims, serialized_sd_jwt, disclosures) = {
        let parts = JwtParts::parse(&issuance, false).with_err(|| DemoError::MalformedArtifact)?;

        let claims = match parts
            .body_json()
            .with_err(|| DemoError::MalformedArtifact)?
        {
            Value::Object(claims) => claims,
            _ => {
                return Err(Error::root(DemoError::MalformedArtifact)
                    .ctx("issued JWT body is not a JSON object"))
            }
        };

        let serialized_sd_jwt = format!("{}.{}.{}", parts.header, parts.body, parts.signature);

        (claims, serialized_sd_jwt, parse_disclosures(&parts)?)
    };

    tracing::debug!(
        disclosures = disclosures.len(),
        "issued SD-JWT with every top-level claim disclosable"
    );

    Ok(SimpleIssuance {
        claims,
        serialized_sd_jwt,
        disclosures,
        issuance,
    })
}

#[cfg(test)]
mod tests {
    use bh_sd_jwt::json_object;

    use super::*;
    use crate::{test_utils::*, DisclosureHashing};

    #[test]
    fn every_top_level_claim_is_disclosed() {
        let issuance = issue_test_credential(&holder_signer());

        let mut names: Vec<&str> = issuance
            .disclosures
            .iter()
            .filter_map(Disclosure::claim_name)
            .collect();
        names.sort_unstable();

        assert_eq!(names, vec!["address", "family_name", "given_name"]);
        assert!(!issuance.claims.contains_key("given_name"));
        assert_eq!(issuance.claims["vct"], "personal_identity_card");
        assert_eq!(issuance.claims["iss"], ISSUER);
    }

    #[test]
    fn issuance_bundles_jwt_and_disclosures() {
        let issuance = issue_test_credential(&holder_signer());

        let mut expected = issuance.serialized_sd_jwt.clone();
        for disclosure in &issuance.disclosures {
            expected.push('~');
            expected.push_str(disclosure.as_str());
        }
        expected.push('~');

        assert_eq!(issuance.issuance, expected);
        assert_eq!(issuance.serialized_sd_jwt.matches('.').count(), 2);
    }

    #[test]
    fn digests_of_disclosures_are_signed() {
        let issuance = issue_test_credential(&holder_signer());
        let digests = issuance.claims["_sd"].as_array().unwrap();

        for disclosure in &issuance.disclosures {
            let hashing = DisclosureHashing::from_encoded(disclosure.as_str()).unwrap();

            assert!(digests.contains(&Value::String(hashing.digest)));
        }
    }

    #[test]
    fn registered_claim_names_are_rejected() {
        let error = issue_simple_sd_jwt(
            &issuer_signer(),
            issuer_uri(),
            "personal_identity_card",
            json_object!({ "exp": 100 }),
            holder_signer().public_jwk().unwrap(),
        )
        .unwrap_err();

        assert_eq!(error.error, DemoError::Issuance);
    }
}
