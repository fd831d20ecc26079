use crate::canvas::{Canvas, DrawState, Point, StateStack};
use crate::colour::Colour;
use crate::rect::Rect;
use crate::units::Pt;

/// A primitive drawn on a [`Recorder`], resolved into page coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        colour: Colour,
        width: Pt,
    },
    Rect {
        rect: Rect,
        fill: Option<Colour>,
        stroke: Option<Colour>,
    },
    Text {
        text: String,
        at: Point,
        size: Pt,
        colour: Colour,
    },
}

/// A canvas that remembers what was drawn on it instead of rendering it. Primitives that
/// would be invisible (a line with no stroke, text with no fill) are not recorded.
///
/// ```
/// use guide_sheets::{colours, Canvas, Primitive, Pt, Recorder};
///
/// let mut canvas = Recorder::new(Pt(100.0), Pt(100.0));
/// canvas.translate(Pt(10.0), Pt(0.0));
/// canvas.stroke(Some(colours::BLACK));
/// canvas.line((Pt(0.0), Pt(0.0)), (Pt(5.0), Pt(0.0)));
/// assert!(matches!(
///     canvas.primitives()[0],
///     Primitive::Line { from: (Pt(x), _), .. } if x == 10.0
/// ));
/// ```
#[derive(Debug)]
pub struct Recorder {
    width: Pt,
    height: Pt,
    states: StateStack,
    primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new(width: Pt, height: Pt) -> Recorder {
        Recorder {
            width,
            height,
            states: StateStack::default(),
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    /// The drawing state currently in effect
    pub fn state(&self) -> &DrawState {
        &self.states.current
    }

    /// How many saved states are waiting to be restored
    pub fn depth(&self) -> usize {
        self.states.depth()
    }

    /// Every recorded rectangle
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// Every recorded line, as its two end points
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    fn width(&self) -> Pt {
        self.width
    }

    fn height(&self) -> Pt {
        self.height
    }

    fn save_state(&mut self) {
        self.states.push();
    }

    fn restore_state(&mut self) {
        if !self.states.pop() {
            log::warn!("restore_state called without a matching save_state");
        }
    }

    fn translate(&mut self, dx: Pt, dy: Pt) {
        let state = &mut self.states.current;
        state.transform = crate::Transform::translate(dx, dy).then(state.transform);
    }

    fn fill(&mut self, colour: Option<Colour>) {
        self.states.current.fill = colour;
    }

    fn stroke(&mut self, colour: Option<Colour>) {
        self.states.current.stroke = colour;
    }

    fn stroke_width(&mut self, width: Pt) {
        self.states.current.stroke_width = width;
    }

    fn font_size(&mut self, size: Pt) {
        self.states.current.font_size = size;
    }

    fn line(&mut self, from: Point, to: Point) {
        let state = self.states.current;
        if let Some(colour) = state.stroke {
            self.primitives.push(Primitive::Line {
                from: state.transform.apply(from),
                to: state.transform.apply(to),
                colour,
                width: state.stroke_width,
            });
        }
    }

    fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt) {
        let state = self.states.current;
        let (x, y) = state.transform.apply((x, y));
        self.primitives.push(Primitive::Rect {
            rect: Rect::from_origin(x, y, width, height),
            fill: state.fill,
            stroke: state.stroke,
        });
    }

    fn text(&mut self, text: &str, at: Point) {
        let state = self.states.current;
        if let Some(colour) = state.fill {
            self.primitives.push(Primitive::Text {
                text: text.to_string(),
                at: state.transform.apply(at),
                size: state.font_size,
                colour,
            });
        }
    }
}
