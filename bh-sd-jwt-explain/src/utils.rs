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

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use bherror::{
    traits::{ErrorContext as _, ForeignError as _},
    Error,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ExplainError, Result};

/// Decodes the `base64url`-encoded `encoded` string into ASCII text.
///
/// Trailing `=` padding is accepted but not required.
///
/// # Errors
///
/// Returns [`ExplainError::InvalidBase64`] if the input is not `base64url`, and
/// [`ExplainError::NonAsciiPayload`] if the decoded bytes are not ASCII.
pub fn b64decode(encoded: &str) -> Result<String> {
    let decoded = decode_base64url(encoded)?;

    if !decoded.is_ascii() {
        return Err(Error::root(ExplainError::NonAsciiPayload).ctx(encoded.to_owned()));
    }

    String::from_utf8(decoded).foreign_err(|| ExplainError::NonAsciiPayload)
}

/// Re-serializes `value` as JSON indented by 2 spaces, preserving key order.
///
/// A string value (e.g. `&str` or [`String`]) is interpreted as JSON text and
/// parsed first; anything else is taken to be the already parsed structure.
pub fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).foreign_err(|| ExplainError::InvalidJson)?;

    let value: Value = match value {
        Value::String(json) => serde_json::from_str(&json)
            .foreign_err(|| ExplainError::InvalidJson)
            .ctx(|| json.clone())?,
        value => value,
    };

    serde_json::to_string_pretty(&value).foreign_err(|| ExplainError::InvalidJson)
}

pub(crate) fn decode_base64url(encoded: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .foreign_err(|| ExplainError::InvalidBase64)
        .ctx(|| encoded.to_owned())
}

pub(crate) fn decode_base64url_utf8(encoded: &str) -> Result<String> {
    String::from_utf8(decode_base64url(encoded)?).foreign_err(|| ExplainError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn b64decode_round_trips_unpadded_input() {
        for text in ["", "a", "ab", "abc", "abcd", r#"["salt", "name", "value"]"#] {
            let encoded = URL_SAFE_NO_PAD.encode(text);

            assert_eq!(b64decode(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn b64decode_accepts_padded_input() {
        assert_eq!(b64decode("YQ==").unwrap(), "a");
        assert_eq!(b64decode("YWI=").unwrap(), "ab");
    }

    #[test]
    fn b64decode_uses_url_safe_alphabet() {
        let encoded = URL_SAFE_NO_PAD.encode("~~~?");

        assert_eq!(encoded, "fn5-Pw");
        assert_eq!(b64decode(&encoded).unwrap(), "~~~?");
    }

    #[test]
    fn b64decode_rejects_invalid_base64() {
        let error = b64decode("not base64!").unwrap_err();

        assert_eq!(error.error, ExplainError::InvalidBase64);
    }

    #[test]
    fn b64decode_rejects_non_ascii() {
        let encoded = URL_SAFE_NO_PAD.encode("Möbius");

        let error = b64decode(&encoded).unwrap_err();

        assert_eq!(error.error, ExplainError::NonAsciiPayload);
        assert_eq!(decode_base64url_utf8(&encoded).unwrap(), "Möbius");
    }

    #[test]
    fn pretty_indents_with_two_spaces() {
        let formatted = pretty(r#"{"b": 1, "a": [true]}"#).unwrap();

        assert_eq!(formatted, "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}");
    }

    #[test]
    fn pretty_accepts_text_and_structures_alike() {
        let value = json!({"given_name": "John", "address": {"country": "US"}});

        assert_eq!(pretty(&value).unwrap(), pretty(&value.to_string()).unwrap());
    }

    #[test]
    fn pretty_is_idempotent() {
        let once = pretty(r#"["salt", "family_name", {"nested": [1, 2, 3]}]"#).unwrap();
        let twice = pretty(&once).unwrap();

        let once: Value = serde_json::from_str(&once).unwrap();
        let twice: Value = serde_json::from_str(&twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn pretty_rejects_invalid_json_text() {
        let error = pretty("{not json").unwrap_err();

        assert_eq!(error.error, ExplainError::InvalidJson);
    }
}
