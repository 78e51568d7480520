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

use std::time::{SystemTime, UNIX_EPOCH};

use bh_sd_jwt::{Disclosure, SecondsSinceEpoch};
use bh_sd_jwt_explain::JwtParts;
use bherror::traits::{ErrorContext as _, ForeignError as _, PropagateError as _};

use crate::error::{DemoError, Result};

/// Parse the non-empty disclosure segments of `parts`.
pub(crate) fn parse_disclosures(parts: &JwtParts<'_>) -> Result<Vec<Disclosure>> {
    parts
        .disclosures
        .iter()
        .filter(|encoded| !encoded.is_empty())
        .map(|&encoded| {
            Disclosure::try_from(encoded.to_owned())
                .with_err(|| DemoError::InvalidDisclosure)
                .ctx(|| encoded.to_owned())
        })
        .collect()
}

pub(crate) fn current_time() -> Result<SecondsSinceEpoch> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .foreign_err(|| DemoError::Clock)?;

    Ok(elapsed.as_secs())
}
