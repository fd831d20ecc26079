//! One zone of a guide-set: its two boundary lines and the ladder of nib-width squares
//! between them.
//!
//! The squares step upward in two columns, alternating left and right. A zone whose
//! height is not a whole number of nib widths ends in a shorter square. The column the
//! next zone starts in is carried over in a [`ZonePhase`], so the ladder keeps
//! alternating across the descender, x-height and ascender boundaries.

use crate::canvas::Canvas;
use crate::params::{GuideStyle, LayoutParameters};
use crate::units::Pt;
use log::warn;

/// A zone taller than this many nib widths cannot fit on any page, its squares are skipped
pub const MAX_ZONE_SQUARES: usize = 10_000;

/// Where a zone starts within its guide-set, and which column its first square takes
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZonePhase {
    /// Baseline of the zone, relative to the bottom of the guide-set
    pub start_y: Pt,
    /// 0 starts the ladder in the left column, 1 in the right one
    pub parity_carry: u8,
}

/// The two columns of the square ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// Column of the `index`th square of a zone entered with `parity_carry`
    pub fn for_index(index: usize, parity_carry: u8) -> Column {
        if (index + parity_carry as usize) % 2 == 0 {
            Column::Left
        } else {
            Column::Right
        }
    }

    /// Horizontal offset of the column for squares `nib_width` wide
    pub fn x(self, nib_width: Pt) -> Pt {
        match self {
            Column::Left => Pt(0.0),
            Column::Right => nib_width,
        }
    }
}

/// One square of the ladder. Only the last square of a zone can be shorter than a nib.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub column: Column,
    pub y: Pt,
    pub height: Pt,
}

/// The computed layout of a single zone
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLayout {
    /// y of the lower boundary line
    pub bottom: Pt,
    /// y of the upper boundary line
    pub top: Pt,
    pub squares: Vec<Square>,
    /// Phase for the zone stacked on top of this one
    pub next: ZonePhase,
}

/// Lay out a zone `scale` nib widths tall, entered with `phase`.
///
/// A zone of `scale` nib widths holds `ceil(scale)` squares. Negative scales hold none, and
/// neither do zones of [`MAX_ZONE_SQUARES`] nib widths or more. Those still get their
/// boundary lines, and the next zone starts in the same column this one did.
pub fn layout_zone(scale: f32, nib_width: Pt, phase: ZonePhase) -> ZoneLayout {
    let top = phase.start_y + nib_width * scale;
    let divisions = scale.floor().max(0.0);
    if divisions >= MAX_ZONE_SQUARES as f32 {
        warn!("a zone {scale} nib widths tall is too tall for squares, skipping them");
        return ZoneLayout {
            bottom: phase.start_y,
            top,
            squares: Vec::new(),
            next: ZonePhase {
                start_y: top,
                ..phase
            },
        };
    }
    let remainder = scale - divisions;

    let mut squares = Vec::new();
    let mut y = phase.start_y;
    for i in 0..divisions as usize {
        squares.push(Square {
            column: Column::for_index(i, phase.parity_carry),
            y,
            height: nib_width,
        });
        y += nib_width;
    }

    if remainder > 0.0 {
        squares.push(Square {
            column: Column::for_index(divisions as usize, phase.parity_carry),
            y,
            height: nib_width * remainder,
        });
    }

    ZoneLayout {
        bottom: phase.start_y,
        top,
        next: ZonePhase {
            start_y: top,
            parity_carry: ((phase.parity_carry as usize + squares.len()) % 2) as u8,
        },
        squares,
    }
}

/// Draws zones of a guide-set in its local frame, where x = 0 is the left margin
pub struct ZoneRenderer<'a> {
    params: &'a LayoutParameters,
    style: &'a GuideStyle,
    line_length: Pt,
}

impl<'a> ZoneRenderer<'a> {
    /// `line_length` is the length of the boundary lines, usually the page's usable width
    pub fn new(params: &'a LayoutParameters, style: &'a GuideStyle, line_length: Pt) -> Self {
        ZoneRenderer {
            params,
            style,
            line_length,
        }
    }

    /// Draw one zone and return the phase the next zone should start with. Boundary lines
    /// are always drawn; squares only when the parameters ask for them.
    pub fn render<C: Canvas>(&self, canvas: &mut C, scale: f32, phase: ZonePhase) -> ZonePhase {
        let nib = self.params.nib_width;
        let layout = layout_zone(scale, nib, phase);

        let mut canvas = canvas.saved_state();
        canvas.fill(Some(self.style.guide_colour));
        canvas.stroke(Some(self.style.guide_colour));
        canvas.stroke_width(self.style.stroke_width);

        for y in [layout.bottom, layout.top] {
            canvas.line((Pt(0.0), y), (self.line_length, y));
        }

        if self.params.draw_squares {
            for square in layout.squares.iter() {
                canvas.rect(square.column.x(nib), square.y, nib, square.height);
            }
        }

        layout.next
    }
}
