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

//! One-shot SD-JWT presentation.

use bh_jws_utils::{Es256Verifier, JwtSigner, SigningAlgorithm};
use bh_sd_jwt::{
    holder::Holder, lookup::X5ChainIssuerPublicKeyLookup, verifier::generate_nonce, Disclosure,
    HashingAlgorithm, JsonNodePath, JsonNodePathSegment, KeyBindingChallenge, Sha256,
};
use bh_sd_jwt_explain::JwtParts;
use bherror::traits::PropagateError as _;

use crate::{
    error::{DemoError, Result},
    utils::{current_time, parse_disclosures},
};

/// Audience of the Key Binding JWT when the caller does not name one.
pub const DEFAULT_AUDIENCE: &str = "https://example.com/verifier";

/// A presentation of a held SD-JWT.
#[derive(Debug, Clone)]
pub struct Presentation {
    /// The serialized presentation, `jwt~disclosure~...~kb_jwt`.
    pub presentation: String,
    /// The disclosures included in the presentation.
    pub disclosures: Vec<Disclosure>,
}

/// Import the issued SD-JWT `full_issuance_payload` as a holder and present
/// the top-level claims named in `disclosed_attributes`.
///
/// Each named claim is disclosed as a whole. The Key Binding JWT is signed by
/// `holder_key` for the challenge made of `nonce` and `aud`; a fresh nonce and
/// [`DEFAULT_AUDIENCE`] are used when they are not given.
///
/// The issuer is trusted if its X.509 certificate chain matches its `iss`
/// claim; the chain itself is not checked against any trust anchor.
///
/// # Errors
///
/// - [`DemoError::HolderImport`] if the issued SD-JWT does not verify.
/// - [`DemoError::Presentation`] if one of the `disclosed_attributes` does not
///   exist, or if signing the Key Binding JWT fails.
pub async fn create_presentation(
    full_issuance_payload: &str,
    disclosed_attributes: &[&str],
    nonce: Option<String>,
    aud: Option<String>,
    holder_key: &impl JwtSigner,
) -> Result<Presentation> {
    let current_time = current_time()?;

    let holder = Holder::verify_issued(
        full_issuance_payload,
        &X5ChainIssuerPublicKeyLookup::trust_all(),
        |alg| (alg == HashingAlgorithm::Sha256).then_some(Box::new(Sha256)),
        |alg| (alg == SigningAlgorithm::Es256).then_some(&Es256Verifier),
        current_time,
    )
    .await
    .with_err(|| DemoError::HolderImport)?;

    let nonce = match nonce {
        Some(nonce) => nonce,
        None => generate_nonce(&mut rand::thread_rng()).with_err(|| DemoError::Presentation)?,
    };
    let challenge = KeyBindingChallenge {
        aud: aud.unwrap_or_else(|| DEFAULT_AUDIENCE.to_owned()),
        nonce,
    };

    let paths: Vec<[JsonNodePathSegment; 1]> = disclosed_attributes
        .iter()
        .map(|&attribute| [JsonNodePathSegment::Key(attribute)])
        .collect();
    let requested: Vec<&JsonNodePath> = paths.iter().map(|path| path.as_slice()).collect();

    let presentation = holder
        .present(&requested, challenge, current_time, holder_key)
        .with_err(|| DemoError::Presentation)?
        .to_string();

    let disclosures = {
        let parts =
            JwtParts::parse(&presentation, true).with_err(|| DemoError::MalformedArtifact)?;
        parse_disclosures(&parts)?
    };

    tracing::debug!(
        requested = disclosed_attributes.len(),
        disclosures = disclosures.len(),
        "created SD-JWT presentation"
    );

    Ok(Presentation {
        presentation,
        disclosures,
    })
}

#[cfg(test)]
mod tests {
    use bh_sd_jwt::verifier::Verifier;

    use super::*;
    use crate::test_utils::*;

    fn claim_names(disclosures: &[Disclosure]) -> Vec<&str> {
        let mut names: Vec<&str> = disclosures
            .iter()
            .filter_map(Disclosure::claim_name)
            .collect();
        names.sort_unstable();
        names
    }

    #[tokio::test]
    async fn only_requested_claims_are_disclosed() {
        let holder = holder_signer();
        let issuance = issue_test_credential(&holder);

        let presentation = create_presentation(
            &issuance.issuance,
            &["given_name", "address"],
            None,
            None,
            &holder,
        )
        .await
        .unwrap();

        assert_eq!(
            claim_names(&presentation.disclosures),
            vec!["address", "given_name"]
        );

        let parts = JwtParts::parse(&presentation.presentation, true).unwrap();
        assert!(parts.includes_key_binding());
        assert!(presentation
            .presentation
            .starts_with(&issuance.serialized_sd_jwt));
    }

    #[tokio::test]
    async fn presentation_without_disclosures() {
        let holder = holder_signer();
        let issuance = issue_test_credential(&holder);

        let presentation =
            create_presentation(&issuance.issuance, &[], None, None, &holder)
                .await
                .unwrap();

        assert!(presentation.disclosures.is_empty());
        assert!(JwtParts::parse(&presentation.presentation, true)
            .unwrap()
            .includes_key_binding());
    }

    #[tokio::test]
    async fn verifier_accepts_presentation() {
        let holder = holder_signer();
        let issuance = issue_test_credential(&holder);
        let verifier =
            Verifier::new(DEFAULT_AUDIENCE.to_owned(), &mut rand::thread_rng()).unwrap();
        let challenge = verifier.key_binding_challenge().clone();

        let presentation = create_presentation(
            &issuance.issuance,
            &["family_name"],
            Some(challenge.nonce),
            Some(challenge.aud),
            &holder,
        )
        .await
        .unwrap();

        let claims = verifier
            .verify(
                presentation.presentation.parse().unwrap(),
                &X5ChainIssuerPublicKeyLookup::trust_all(),
                current_time().unwrap(),
                |alg| (alg == HashingAlgorithm::Sha256).then_some(Box::new(Sha256)),
                |alg| (alg == SigningAlgorithm::Es256).then_some(&Es256Verifier),
            )
            .await
            .unwrap()
            .0;

        assert_eq!(claims.claims["family_name"], "Möbius");
        assert!(!claims.claims.contains_key("given_name"));
    }

    #[tokio::test]
    async fn unknown_attribute_is_rejected() {
        let holder = holder_signer();
        let issuance = issue_test_credential(&holder);

        let error = create_presentation(
            &issuance.issuance,
            &["nationality"],
            None,
            None,
            &holder,
        )
        .await
        .unwrap_err();

        assert_eq!(error.error, DemoError::Presentation);
    }

    #[tokio::test]
    async fn tampered_issuance_is_rejected() {
        let holder = holder_signer();
        let issuance = issue_test_credential(&holder);
        let tampered = issuance.issuance.replacen('.', ".e30", 1);

        let error = create_presentation(&tampered, &[], None, None, &holder)
            .await
            .unwrap_err();

        assert_eq!(error.error, DemoError::HolderImport);
    }
}
