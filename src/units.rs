//! Length units and the conversions between them.
//!
//! Everything on the page is laid out in PDF points ([`Pt`], 1/72 of an inch). Inputs arrive
//! in inches (page margins) and millimetres (nib widths), and are converted exactly once,
//! when [`LayoutParameters`](crate::LayoutParameters) are built.

use derive_more::{Add, AddAssign, Deref, Display, From, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Millimetres per inch.
pub const MILLIMETRES_PER_INCH: f32 = 25.4;

/// Convert inches to points. Accepts any value, negative ones included.
pub fn points_from_inches(inches: f32) -> Pt {
    Pt(inches * POINTS_PER_INCH)
}

/// Convert millimetres to points. Accepts any value, negative ones included.
///
/// The division happens first so that `25.4mm` lands on exactly `72pt`.
pub fn points_from_millimeters(millimetres: f32) -> Pt {
    Pt(millimetres / MILLIMETRES_PER_INCH * POINTS_PER_INCH)
}

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Deref,
    Display,
    From,
    Sum,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From)]
#[display("{_0}in")]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        points_from_inches(value.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        points_from_millimeters(value.0)
    }
}

impl From<Pt> for f32 {
    fn from(value: Pt) -> Self {
        value.0
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths gives a plain ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}
