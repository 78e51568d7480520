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

//! ANSI color helpers.

use bherror::Error;
use regex::Regex;

use crate::error::{ExplainError, Result};

/// The SGR sequence resetting all attributes.
pub const RESET: &str = "\x1b[0m";

/// Color used by [`highlight`] when the caller has no preference (red).
pub const DEFAULT_HIGHLIGHT_COLOR: u8 = 31;

lazy_static::lazy_static! {
    /// Matches a single ANSI CSI escape sequence, e.g. `\x1b[31m`.
    static ref ANSI_ESCAPE: Regex =
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]").expect("Implementation error: invalid ANSI pattern");
}

/// An ordered, non-empty list of ANSI foreground color codes assigned to
/// consecutive segments, wrapping around once exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<u8>);

impl Palette {
    /// Construct a new [`Palette`] from the given color codes.
    ///
    /// Returns [`ExplainError::EmptyPalette`] if `codes` is empty.
    pub fn new(codes: Vec<u8>) -> Result<Self> {
        if codes.is_empty() {
            return Err(Error::root(ExplainError::EmptyPalette));
        }
        Ok(Self(codes))
    }

    /// The color of the segment at `index`.
    pub fn color(&self, index: usize) -> u8 {
        self.0[index % self.0.len()]
    }

    /// The color codes of this palette, in assignment order.
    pub fn codes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Palette {
    /// The six standard foreground colors, red (`31`) through cyan (`36`).
    fn default() -> Self {
        Self((31..=36).collect())
    }
}

/// Wrap `text` in the ANSI foreground color `code`, resetting afterwards.
pub fn colorize(code: u8, text: &str) -> String {
    format!("\x1b[{code}m{text}{RESET}")
}

/// Wrap every occurrence of `pattern` within `original` in the ANSI color
/// `color`.
///
/// This is a plain substitution; color codes already present in `original` are
/// not taken into account.
pub fn highlight(original: &str, pattern: &str, color: u8) -> String {
    original.replace(pattern, &colorize(color, pattern))
}

/// Remove all ANSI escape sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// The number of characters of `text` that are visible on the terminal, i.e.
/// excluding ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    if !text.contains('\x1b') {
        return text.chars().count();
    }
    strip_ansi(text).chars().count()
}
