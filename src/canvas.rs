//! The drawing surface the layout engine talks to.
//!
//! The layout code never touches PDF operators directly; it issues a handful of primitives
//! (lines, rectangles, text) against a [`Canvas`] along with the stateful settings that go
//! with them (fill, stroke, stroke width, font size, translation). State changes are always
//! scoped with [`Canvas::saved_state`], whose guard restores the previous state when it is
//! dropped, so a zone or overlay can never leak its settings into a sibling.
//!
//! Two canvases ship with the crate: [`PdfCanvas`](crate::PdfCanvas), which emits a PDF
//! content stream, and [`Recorder`](crate::Recorder), which records primitives in page
//! coordinates.

use crate::colour::{colours, Colour};
use crate::transform::Transform;
use crate::units::Pt;
use std::ops::{Deref, DerefMut};

/// A position on the canvas, in the current local frame
pub type Point = (Pt, Pt);

/// The settings a canvas applies to the primitives drawn while they are active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    /// Local frame to page mapping
    pub transform: Transform,
    /// Fill colour for rectangles and text, [None] to leave them unfilled
    pub fill: Option<Colour>,
    /// Stroke colour for lines and rectangle outlines, [None] to leave them unstroked
    pub stroke: Option<Colour>,
    pub stroke_width: Pt,
    pub font_size: Pt,
}

impl Default for DrawState {
    fn default() -> Self {
        DrawState {
            transform: Transform::identity(),
            fill: Some(colours::BLACK),
            stroke: None,
            stroke_width: Pt(1.0),
            font_size: Pt(10.0),
        }
    }
}

/// A drawing surface for a single page.
pub trait Canvas {
    /// Width of the page
    fn width(&self) -> Pt;
    /// Height of the page
    fn height(&self) -> Pt;

    /// Push the current drawing state. Prefer [`Canvas::saved_state`], which pops it again.
    fn save_state(&mut self);
    /// Pop the drawing state pushed by the matching [`Canvas::save_state`]
    fn restore_state(&mut self);

    /// Move the origin of the local frame
    fn translate(&mut self, dx: Pt, dy: Pt);
    fn fill(&mut self, colour: Option<Colour>);
    fn stroke(&mut self, colour: Option<Colour>);
    fn stroke_width(&mut self, width: Pt);
    fn font_size(&mut self, size: Pt);

    /// Stroke a straight line between two points
    fn line(&mut self, from: Point, to: Point);
    /// Fill and / or stroke a rectangle anchored at `(x, y)`
    fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt);
    /// Draw a single line of text with its baseline starting at `at`
    fn text(&mut self, text: &str, at: Point);

    /// Save the drawing state, returning a guard that restores it when dropped.
    /// The guard dereferences to the canvas, so drawing continues through it.
    fn saved_state(&mut self) -> SavedState<'_, Self>
    where
        Self: Sized,
    {
        SavedState::new(self)
    }
}

/// Restores the canvas' drawing state on drop. See [`Canvas::saved_state`].
pub struct SavedState<'c, C: Canvas> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas> SavedState<'c, C> {
    fn new(canvas: &'c mut C) -> Self {
        canvas.save_state();
        SavedState { canvas }
    }
}

impl<C: Canvas> Deref for SavedState<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas> DerefMut for SavedState<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas> Drop for SavedState<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore_state();
    }
}

/// The state stack shared by the canvas implementations
#[derive(Debug, Default)]
pub(crate) struct StateStack {
    pub current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Returns false when there was nothing to restore
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(state) => {
                self.current = state;
                true
            }
            None => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::Recorder;

    fn draw_until(canvas: &mut Recorder, stop_early: bool) {
        let mut scoped = canvas.saved_state();
        scoped.stroke(Some(colours::WHITE));
        scoped.translate(Pt(10.0), Pt(10.0));
        if stop_early {
            return;
        }
        scoped.stroke_width(Pt(4.0));
    }

    #[test]
    fn guard_restores_on_every_exit_path() {
        let mut canvas = Recorder::new(Pt(100.0), Pt(100.0));
        let before = *canvas.state();

        draw_until(&mut canvas, true);
        assert_eq!(*canvas.state(), before);
        assert_eq!(canvas.depth(), 0);

        draw_until(&mut canvas, false);
        assert_eq!(*canvas.state(), before);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn guards_nest() {
        let mut canvas = Recorder::new(Pt(100.0), Pt(100.0));
        {
            let mut outer = canvas.saved_state();
            outer.translate(Pt(5.0), Pt(0.0));
            {
                let mut inner = outer.saved_state();
                inner.translate(Pt(5.0), Pt(0.0));
                assert_eq!(inner.depth(), 2);
                assert_eq!(inner.state().transform.e, 10.0);
            }
            assert_eq!(outer.state().transform.e, 5.0);
        }
        assert_eq!(canvas.state().transform, Transform::identity());
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut stack = StateStack::default();
        assert!(!stack.pop());
        stack.push();
        stack.current.stroke_width = Pt(3.0);
        assert!(stack.pop());
        assert_eq!(stack.current.stroke_width, Pt(1.0));
    }
}
