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

//! Splitting and coloring of serialized JWTs, SD-JWTs and SD-JWT presentations.

use bherror::{
    traits::{ErrorContext as _, ForeignError as _},
    Error,
};
use serde_json::Value;

use crate::{
    color::{colorize, Palette},
    error::{ExplainError, Result},
    utils::decode_base64url_utf8,
};

pub(crate) const JWT_DELIMITER: &str = ".";
pub(crate) const SD_JWT_DELIMITER: &str = "~";

/// A serialized JWT, SD-JWT or SD-JWT presentation split into its segments.
///
/// The segments borrow from the serialized input and are kept exactly as they
/// appear in it, i.e. still `base64url`-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtParts<'a> {
    /// The encoded JOSE header.
    pub header: &'a str,
    /// The encoded JWT claims.
    pub body: &'a str,
    /// The encoded JWS signature.
    pub signature: &'a str,
    /// The encoded disclosures, in order of appearance.
    ///
    /// If the serialization ends with `~`, the last element is an empty string.
    pub disclosures: Vec<&'a str>,
    /// The Key Binding JWT, only ever present for presentations.
    pub key_binding: Option<&'a str>,
}

impl<'a> JwtParts<'a> {
    /// Split `serialized` into its segments.
    ///
    /// Everything after the second `.` is split on `~`; its first element is
    /// the signature and the following ones are the disclosures. When
    /// `presentation_jwt` is set and the serialization does not end with `~`,
    /// the last element is taken to be the Key Binding JWT.
    ///
    /// # Errors
    ///
    /// Returns [`ExplainError::MalformedJwt`] if `serialized` has fewer than two
    /// `.` separators, or if no signature remains once the Key Binding JWT has
    /// been taken off a presentation.
    pub fn parse(serialized: &'a str, presentation_jwt: bool) -> Result<Self> {
        let mut segments = serialized.splitn(3, JWT_DELIMITER);
        let (Some(header), Some(body), Some(rest)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(Error::root(ExplainError::MalformedJwt(
                "expected header, body and signature separated by `.`".to_owned(),
            )));
        };

        if presentation_jwt && rest.is_empty() {
            return Err(Error::root(ExplainError::MalformedJwt(
                "presentation has no signature".to_owned(),
            )));
        }

        // no Key Binding JWT after the final `~` means the holder opted out of it
        let includes_key_binding = presentation_jwt && !rest.ends_with(SD_JWT_DELIMITER);

        let mut tokens: Vec<&'a str> = rest.split(SD_JWT_DELIMITER).collect();
        let key_binding = if includes_key_binding {
            tokens.pop()
        } else {
            None
        };

        let Some((signature, disclosures)) = tokens.split_first() else {
            return Err(Error::root(ExplainError::MalformedJwt(
                "only a Key Binding JWT follows the body".to_owned(),
            )));
        };

        let parts = Self {
            header,
            body,
            signature: *signature,
            disclosures: disclosures.to_vec(),
            key_binding,
        };

        tracing::debug!(
            disclosures = parts.disclosures.len(),
            key_binding = parts.includes_key_binding(),
            "split serialized JWT"
        );

        Ok(parts)
    }

    /// Whether a Key Binding JWT was found.
    pub fn includes_key_binding(&self) -> bool {
        self.key_binding.is_some()
    }

    /// Decode the JOSE header into JSON.
    pub fn header_json(&self) -> Result<Value> {
        decode_json_segment(self.header).ctx(|| "JWT header")
    }

    /// Decode the JWT claims into JSON.
    pub fn body_json(&self) -> Result<Value> {
        decode_json_segment(self.body).ctx(|| "JWT body")
    }

    /// Color every segment with consecutive colors of the `palette` and join
    /// them back together.
    ///
    /// Disclosures and the Key Binding JWT are only rendered when
    /// `presentation_jwt` is set. The `~` before the disclosures is always
    /// emitted for presentations, so a presentation without disclosures renders
    /// as `header.body.signature~~key_binding`.
    pub fn colorize(&self, palette: &Palette, presentation_jwt: bool) -> String {
        let mut index = 0;
        let mut paint = |segment: &str| {
            let colored = colorize(palette.color(index), segment);
            index += 1;
            colored
        };

        let mut explained = [
            paint(self.header),
            paint(self.body),
            paint(self.signature),
        ]
        .join(JWT_DELIMITER);

        if presentation_jwt {
            let disclosures: Vec<String> =
                self.disclosures.iter().copied().map(&mut paint).collect();

            explained.push_str(SD_JWT_DELIMITER);
            explained.push_str(&disclosures.join(SD_JWT_DELIMITER));

            if let Some(key_binding) = self.key_binding {
                explained.push_str(SD_JWT_DELIMITER);
                explained.push_str(&paint(key_binding));
            }
        }

        explained
    }
}

fn decode_json_segment(segment: &str) -> Result<Value> {
    let json = decode_base64url_utf8(segment)?;

    serde_json::from_str(&json).foreign_err(|| ExplainError::InvalidJson)
}

/// Colorize the segments of a serialized JWT using the default [`Palette`].
///
/// See [`explain_jwt_with_palette`].
pub fn explain_jwt(serialized: &str, presentation_jwt: bool) -> Result<String> {
    explain_jwt_with_palette(serialized, presentation_jwt, &Palette::default())
}

/// Colorize the segments of a serialized JWT, assigning the colors of the
/// `palette` in the order header, body, signature, disclosures, Key Binding
/// JWT.
///
/// For plain JWTs and SD-JWTs (`presentation_jwt == false`) only
/// `header.body.signature` is returned. For presentations the disclosures and
/// the Key Binding JWT, if any, follow, separated by `~`.
pub fn explain_jwt_with_palette(
    serialized: &str,
    presentation_jwt: bool,
    palette: &Palette,
) -> Result<String> {
    let parts = JwtParts::parse(serialized, presentation_jwt)?;

    Ok(parts.colorize(palette, presentation_jwt))
}
