//! The paper formats a guide sheet can be printed on.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`] trait to convert between portrait and landscape.
//!
//! # Example
//!
//! ```
//! use guide_sheets::pagesize::{PageOrientation, PageSizeName, A4};
//!
//! let landscape = A4.landscape();
//! assert_eq!(PageSizeName::A4.size(true), landscape);
//! ```

use crate::error::GuideError;
use crate::units::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// The named paper formats, in the order they are offered for selection
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum PageSizeName {
    #[default]
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
}

impl PageSizeName {
    pub const ALL: [PageSizeName; 5] = [
        PageSizeName::Letter,
        PageSizeName::Legal,
        PageSizeName::Tabloid,
        PageSizeName::A3,
        PageSizeName::A4,
    ];

    /// The portrait dimensions of this format
    pub fn portrait_size(self) -> PageSize {
        match self {
            PageSizeName::Letter => LETTER,
            PageSizeName::Legal => LEGAL,
            PageSizeName::Tabloid => TABLOID,
            PageSizeName::A3 => A3,
            PageSizeName::A4 => A4,
        }
    }

    /// The dimensions of this format in the requested orientation
    pub fn size(self, landscape: bool) -> PageSize {
        if landscape {
            self.portrait_size().landscape()
        } else {
            self.portrait_size().portrait()
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSizeName::Letter => "Letter",
            PageSizeName::Legal => "Legal",
            PageSizeName::Tabloid => "Tabloid",
            PageSizeName::A3 => "A3",
            PageSizeName::A4 => "A4",
        }
    }
}

impl fmt::Display for PageSizeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a format name (case-insensitive) or its 0-based index in [`PageSizeName::ALL`].
/// An empty string selects the first format.
impl FromStr for PageSizeName {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(PageSizeName::default());
        }
        if let Ok(index) = s.parse::<usize>() {
            return PageSizeName::ALL
                .get(index)
                .copied()
                .ok_or_else(|| GuideError::UnknownPageSize(s.to_string()));
        }
        PageSizeName::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GuideError::UnknownPageSize(s.to_string()))
    }
}
