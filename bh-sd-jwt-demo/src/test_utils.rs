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

use crate::{issue_simple_sd_jwt, SimpleIssuance};

pub(crate) const ISSUER: &str = "https://example.com/issuer";

pub(crate) fn issuer_uri() -> UriBuf {
    UriBuf::new(ISSUER.into()).unwrap()
}

/// A fresh issuer key with a dummy X.509 chain issued for [`ISSUER`].
pub(crate) fn issuer_signer() -> SignerWithChain<Es256Signer> {
    let signer = Es256Signer::generate("issuer_kid".to_owned()).unwrap();
    let chain = bhx5chain::Builder::dummy()
        .generate_x5chain(&signer.public_key_pem().unwrap(), Some(&issuer_uri()))
        .unwrap();

    SignerWithChain::new(signer, chain).unwrap()
}

pub(crate) fn holder_signer() -> Es256Signer {
    Es256Signer::generate("holder_kid".to_owned()).unwrap()
}

/// Issue a small identity credential bound to `holder`.
pub(crate) fn issue_test_credential(holder: &Es256Signer) -> SimpleIssuance {
    issue_simple_sd_jwt(
        &issuer_signer(),
        issuer_uri(),
        "personal_identity_card",
        json_object!({
            "given_name": "Erika",
            "family_name": "Möbius",
            "address": {
                "locality": "Köln",
                "country": "DE"
            }
        }),
        holder.public_jwk().unwrap(),
    )
    .unwrap()
}
