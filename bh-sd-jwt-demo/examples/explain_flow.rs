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

use bh_jws_utils::{Es256Signer, SignerWithChain};
use bh_sd_jwt::{iref::UriBuf, json_object};
use bh_sd_jwt_demo::{create_presentation, issue_simple_sd_jwt, DisclosureHashing};
use bh_sd_jwt_explain::{
    explain_encoded_disclosure, explain_jwt, highlight, pretty, DEFAULT_HIGHLIGHT_COLOR,
    DEFAULT_SCREEN_WIDTH,
};

/// The claims the holder is asked to present.
const REQUESTED_CLAIMS: &[&str] = &["given_name", "nationalities"];

#[tokio::main]
async fn main() {
    // the actual issued claims
    let claims = json_object!({
        "given_name": "John",
        "family_name": "Doe",
        "address": {
            "street_address": "Street 17",
            "locality": "New York",
            "country": "US"
        },
        "nationalities": ["US", "DE"],
    });

    println!("Claims:\n{}", pretty(&claims).unwrap());

    let iss = UriBuf::new("https://example.com/issuer".into()).unwrap();

    let issuer_signer = Es256Signer::generate("issuer_kid".to_owned()).unwrap();
    let cert_chain = bhx5chain::Builder::dummy()
        .generate_x5chain(&issuer_signer.public_key_pem().unwrap(), Some(&iss))
        .unwrap();
    let issuer_signer = SignerWithChain::new(issuer_signer, cert_chain).unwrap();

    let holder_signer = Es256Signer::generate("holder_kid".to_owned()).unwrap();

    let issuance = issue_simple_sd_jwt(
        &issuer_signer,
        iss,
        "personal_identity_card",
        claims,
        holder_signer.public_jwk().unwrap(),
    )
    .unwrap();

    println!(
        "\nIssuer-signed JWT:\n{}",
        explain_jwt(&issuance.serialized_sd_jwt, false).unwrap()
    );
    println!(
        "\nSigned claims:\n{}",
        highlight(
            &pretty(&issuance.claims).unwrap(),
            "_sd",
            DEFAULT_HIGHLIGHT_COLOR
        )
    );

    for disclosure in &issuance.disclosures {
        println!(
            "\nDisclosure:\n{}",
            explain_encoded_disclosure(disclosure.as_str()).unwrap()
        );

        DisclosureHashing::try_from(disclosure)
            .unwrap()
            .explain(DEFAULT_SCREEN_WIDTH);
    }

    println!(
        "\nIssuance:\n{}",
        explain_jwt(&issuance.issuance, true).unwrap()
    );

    let presentation = create_presentation(
        &issuance.issuance,
        REQUESTED_CLAIMS,
        None,
        None,
        &holder_signer,
    )
    .await
    .unwrap();

    assert_eq!(presentation.disclosures.len(), REQUESTED_CLAIMS.len());

    println!(
        "\nPresentation of {REQUESTED_CLAIMS:?}:\n{}",
        explain_jwt(&presentation.presentation, true).unwrap()
    );
}
