//! A [`Canvas`] that renders into a PDF content stream.

use crate::canvas::{Canvas, Point, StateStack};
use crate::colour::Colour;
use crate::transform::Transform;
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};

/// Resource name of the caption font on the page
pub(crate) const CAPTION_FONT: &[u8] = b"F0";

/// Draws onto a single page's content stream. Every [`Canvas::save_state`] /
/// [`Canvas::restore_state`] pair becomes a `q` / `Q` pair in the stream, so the PDF
/// graphics state and the canvas' own bookkeeping stay in lockstep.
pub struct PdfCanvas {
    width: Pt,
    height: Pt,
    content: Content,
    states: StateStack,
}

impl PdfCanvas {
    pub fn new(width: Pt, height: Pt) -> PdfCanvas {
        PdfCanvas {
            width,
            height,
            content: Content::new(),
            states: StateStack::default(),
        }
    }

    /// Finish drawing and return the uncompressed content stream. Any states still
    /// saved are restored first so the stream is balanced.
    pub fn finish(mut self) -> Vec<u8> {
        while self.states.pop() {
            self.content.restore_state();
        }
        self.content.finish()
    }
}

impl Canvas for PdfCanvas {
    fn width(&self) -> Pt {
        self.width
    }

    fn height(&self) -> Pt {
        self.height
    }

    fn save_state(&mut self) {
        self.states.push();
        self.content.save_state();
    }

    fn restore_state(&mut self) {
        if self.states.pop() {
            self.content.restore_state();
        } else {
            log::warn!("restore_state called without a matching save_state");
        }
    }

    fn translate(&mut self, dx: Pt, dy: Pt) {
        let local = Transform::translate(dx, dy);
        local.write_to_content(&mut self.content);
        let state = &mut self.states.current;
        state.transform = local.then(state.transform);
    }

    fn fill(&mut self, colour: Option<Colour>) {
        if let Some(colour) = colour {
            set_fill(&mut self.content, colour);
        }
        self.states.current.fill = colour;
    }

    fn stroke(&mut self, colour: Option<Colour>) {
        if let Some(colour) = colour {
            set_stroke(&mut self.content, colour);
        }
        self.states.current.stroke = colour;
    }

    fn stroke_width(&mut self, width: Pt) {
        self.content.set_line_width(*width);
        self.states.current.stroke_width = width;
    }

    fn font_size(&mut self, size: Pt) {
        self.states.current.font_size = size;
    }

    fn line(&mut self, from: Point, to: Point) {
        if self.states.current.stroke.is_none() {
            return;
        }
        self.content.move_to(*from.0, *from.1);
        self.content.line_to(*to.0, *to.1);
        self.content.stroke();
    }

    fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt) {
        self.content.rect(*x, *y, *width, *height);
        let state = &self.states.current;
        match (state.fill.is_some(), state.stroke.is_some()) {
            (true, true) => self.content.fill_nonzero_and_stroke(),
            (true, false) => self.content.fill_nonzero(),
            (false, true) => self.content.stroke(),
            (false, false) => self.content.end_path(),
        };
    }

    fn text(&mut self, text: &str, at: Point) {
        if self.states.current.fill.is_none() {
            return;
        }
        let encoded = win_ansi(text);
        self.content.begin_text();
        self.content
            .set_font(Name(CAPTION_FONT), *self.states.current.font_size);
        self.content.next_line(*at.0, *at.1);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

fn set_stroke(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_stroke_gray(g),
    };
}

/// Encode text for the standard Helvetica font's WinAnsi encoding. Characters outside
/// the encoding become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            _ => b'?',
        })
        .collect()
}
