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

use bherror::{
    traits::{ErrorContext as _, ForeignError as _},
    Error,
};
use serde_json::Value;

use crate::{
    color::colorize,
    error::{ExplainError, Result},
    utils::decode_base64url_utf8,
};

const SALT_COLOR: u8 = 31;
const CLAIM_NAME_COLOR: u8 = 32;
const CLAIM_VALUE_COLOR: u8 = 33;

/// Annotate the elements of a disclosure given as its JSON array text, i.e.
/// `[salt, claim_name, claim_value]`.
///
/// Each element is put on its own line, colored (salt red, claim name green,
/// claim value yellow) and labelled. String elements are shown without quotes.
///
/// # Errors
///
/// Returns [`ExplainError::InvalidJson`] if `disclosure` is not JSON, and
/// [`ExplainError::InvalidDisclosure`] if it is not an array of exactly three
/// elements.
pub fn explain_disclosure(disclosure: &str) -> Result<String> {
    let array: Value = serde_json::from_str(disclosure)
        .foreign_err(|| ExplainError::InvalidJson)
        .ctx(|| disclosure.to_owned())?;

    let Value::Array(elements) = array else {
        return Err(Error::root(ExplainError::InvalidDisclosure(
            "not a JSON array".to_owned(),
        )));
    };

    let [salt, claim_name, claim_value]: [Value; 3] =
        elements.try_into().map_err(|elements: Vec<Value>| {
            Error::root(ExplainError::InvalidDisclosure(format!(
                "expected 3 elements, got {}",
                elements.len()
            )))
        })?;

    Ok(format!(
        "[\n    {}, <--- 🧂\n    {}, <--- claim name\n    {} <--- claim value\n]",
        colorize(SALT_COLOR, &element_text(&salt)),
        colorize(CLAIM_NAME_COLOR, &element_text(&claim_name)),
        colorize(CLAIM_VALUE_COLOR, &element_text(&claim_value)),
    ))
}

/// Decode a `base64url`-encoded disclosure, as embedded in an SD-JWT, and
/// annotate it with [`explain_disclosure`].
pub fn explain_encoded_disclosure(encoded: &str) -> Result<String> {
    let disclosure = decode_base64url_utf8(encoded)?;

    explain_disclosure(&disclosure)
}

fn element_text(element: &Value) -> String {
    match element {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
