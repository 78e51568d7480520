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

//! Box-and-arrow rendering of the pipeline turning a disclosure into its
//! digest.

use std::fmt;

use crate::color::visible_width;

/// Label of the encoding step.
pub const ENCODING_LABEL: &str = "URL-safe base 64";

/// Label of the hashing step.
pub const HASHING_LABEL: &str = "SHA-256";

/// Screen width used by [`HashingLayout::default`].
pub const DEFAULT_SCREEN_WIDTH: usize = 200;

const ARROW: &str = "--->";
const ARROW_PADDING_WIDTH: usize = ARROW.len() + 2;
const OPERAND_PADDING_WIDTH: usize = 4;
const LABEL_PADDING_WIDTH: usize = 2;

/// Layout options of a [`HashingDiagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingLayout {
    /// Maximum visible width of a line before the diagram wraps.
    pub screen_width: usize,
}

impl Default for HashingLayout {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
        }
    }
}

/// A single row of the diagram: a content line framed by two identical
/// border lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineGroup {
    /// The border printed above and below the content.
    pub border: String,
    /// The boxed operands, labels and arrows.
    pub content: String,
}

/// The hashing pipeline `disclosure ---> encoded disclosure ---> digest`, laid
/// out in boxes and arrows and wrapped to fit the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashingDiagram {
    groups: Vec<LineGroup>,
}

impl HashingDiagram {
    /// Lay out the pipeline of the given `disclosure`, its `base64url`
    /// encoding and its digest.
    ///
    /// Any of the inputs may contain ANSI color codes; only visible characters
    /// count towards the width. A new line group is started whenever the next
    /// element would push the current one past
    /// [`screen_width`][HashingLayout::screen_width]. An element wider than the
    /// screen still gets a group of its own.
    pub fn new(
        disclosure: &str,
        encoded_disclosure: &str,
        digest: &str,
        layout: &HashingLayout,
    ) -> Self {
        let elements = [
            disclosure,
            ENCODING_LABEL,
            encoded_disclosure,
            HASHING_LABEL,
            digest,
        ];

        let mut groups = Vec::new();
        let mut current = LineGroup::default();

        for (index, element) in elements.iter().enumerate() {
            let width = visible_width(element);

            // borders never contain escape sequences
            let line_width = current.border.len();
            if line_width > 0
                && line_width + width + OPERAND_PADDING_WIDTH + ARROW_PADDING_WIDTH
                    > layout.screen_width
            {
                tracing::trace!(index, line_width, "wrapping hashing diagram");
                groups.push(std::mem::take(&mut current));
            }

            let is_operand = index % 2 == 0;
            if is_operand {
                current.content.push_str(&format!("| {element} |"));
                current
                    .border
                    .push_str(&"-".repeat(width + OPERAND_PADDING_WIDTH));
            } else {
                current.content.push_str(&format!(" {element} "));
                current
                    .border
                    .push_str(&" ".repeat(width + LABEL_PADDING_WIDTH));
            }

            if index != elements.len() - 1 {
                current.border.push_str(&" ".repeat(ARROW_PADDING_WIDTH));
                current.content.push_str(&format!(" {ARROW} "));
            }
        }
        groups.push(current);

        Self { groups }
    }

    /// The line groups of the diagram, top to bottom.
    pub fn groups(&self) -> &[LineGroup] {
        &self.groups
    }
}

impl fmt::Display for HashingDiagram {
    /// Every line group is preceded by an empty line and printed as border,
    /// content, border.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "\n{0}\n{1}\n{0}\n", group.border, group.content)?;
        }
        Ok(())
    }
}

/// Print the hashing pipeline of a disclosure to the standard output, wrapping
/// at `screen_width` visible characters.
///
/// See [`HashingDiagram::new`].
pub fn explain_hashing(
    disclosure: &str,
    encoded_disclosure: &str,
    digest: &str,
    screen_width: usize,
) {
    let diagram = HashingDiagram::new(
        disclosure,
        encoded_disclosure,
        digest,
        &HashingLayout { screen_width },
    );

    print!("{diagram}");
}
