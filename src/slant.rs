use crate::canvas::{Canvas, Point};
use crate::params::{GuideStyle, LayoutParameters};
use crate::units::Pt;

/// Number of slant lines drawn across each guide-set
pub const SLANT_LINES: usize = 15;

/// The right triangle a slant line is the hypotenuse of
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlantGeometry {
    /// Vertical leg, the height of the guide-set's zones
    pub rise: Pt,
    /// Horizontal leg, how far the line leans over its height
    pub run: Pt,
}

impl SlantGeometry {
    /// Solve the triangle for a line leaning `degrees` away from vertical over `rise`.
    ///
    /// Angles outside `(0°, 90°)` are not rejected: 0° is an upright line, 90° an
    /// infinitely long one, and negative angles lean the other way.
    pub fn new(degrees: f32, rise: Pt) -> SlantGeometry {
        let lean = (degrees as f64).to_radians();
        let opposite = std::f64::consts::FRAC_PI_2 - lean;
        let hypotenuse = *rise as f64 / opposite.sin();
        let run = hypotenuse * opposite.cos();
        SlantGeometry {
            rise,
            run: Pt(run as f32),
        }
    }
}

/// Draws the italic slant guides over one guide-set, in its local frame
pub struct SlantOverlay<'a> {
    style: &'a GuideStyle,
    geometry: SlantGeometry,
    first_x: Pt,
    spacing: Pt,
}

impl<'a> SlantOverlay<'a> {
    /// `usable_width` is the page width between the margins
    pub fn new(params: &LayoutParameters, style: &'a GuideStyle, usable_width: Pt) -> Self {
        if !(params.slant_degrees > 0.0 && params.slant_degrees < 90.0) {
            log::warn!(
                "slant angle {}° is outside (0°, 90°), the slant guides will look odd",
                params.slant_degrees
            );
        }

        // the first two nib widths hold the square ladder
        let first_x = params.nib_width * 2.0;
        SlantOverlay {
            style,
            geometry: SlantGeometry::new(params.slant_degrees, params.guide_height()),
            first_x,
            spacing: (usable_width - first_x) / SLANT_LINES as f32,
        }
    }

    pub fn geometry(&self) -> SlantGeometry {
        self.geometry
    }

    /// The end points of every slant line
    pub fn lines(&self) -> Vec<(Point, Point)> {
        (0..SLANT_LINES)
            .map(|i| {
                let x = self.first_x + self.spacing * i as f32;
                (
                    (x, Pt(0.0)),
                    (x + self.geometry.run, self.geometry.rise),
                )
            })
            .collect()
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        let mut canvas = canvas.saved_state();
        canvas.stroke(Some(self.style.slant_colour));
        canvas.stroke_width(self.style.stroke_width);
        for (from, to) in self.lines() {
            canvas.line(from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::config::GuideConfig;
    use crate::recorder::{Primitive, Recorder};

    fn close(a: Pt, b: f32) -> bool {
        (*a - b).abs() < 1e-3
    }

    fn params(slant_degrees: f32) -> LayoutParameters {
        LayoutParameters::new(&GuideConfig {
            nib_mm: 25.4,
            x_height: 1.0,
            slant_guides: true,
            slant_degrees,
            ..GuideConfig::default()
        })
    }

    #[test]
    fn forty_five_degrees_runs_as_far_as_it_rises() {
        let geometry = SlantGeometry::new(45.0, Pt(100.0));
        assert_eq!(geometry.rise, Pt(100.0));
        assert!(close(geometry.run, 100.0));
    }

    #[test]
    fn run_is_rise_times_tangent() {
        for degrees in [5.0_f32, 10.0, 30.0, 60.0] {
            let geometry = SlantGeometry::new(degrees, Pt(50.0));
            let expected = 50.0 * degrees.to_radians().tan();
            assert!(close(geometry.run, expected), "{degrees}°");
        }
    }

    #[test]
    fn zero_degrees_is_upright() {
        let geometry = SlantGeometry::new(0.0, Pt(100.0));
        assert!(close(geometry.run, 0.0));
    }

    #[test_log::test]
    fn out_of_range_angles_are_accepted() {
        let negative = SlantGeometry::new(-10.0, Pt(100.0));
        assert!(negative.run < Pt(0.0));

        let style = GuideStyle::default();
        let overlay = SlantOverlay::new(&params(120.0), &style, Pt(500.0));
        assert_eq!(overlay.lines().len(), SLANT_LINES);
    }

    #[test]
    fn lines_are_spread_after_the_ladder() {
        let style = GuideStyle::default();
        let params = params(10.0);
        let overlay = SlantOverlay::new(&params, &style, Pt(600.0));
        let lines = overlay.lines();

        assert_eq!(lines.len(), 15);
        // two nib widths in
        assert_eq!(lines[0].0, (Pt(144.0), Pt(0.0)));
        let spacing = (600.0 - 144.0) / 15.0;
        for (i, (from, to)) in lines.iter().enumerate() {
            assert!(close(from.0, 144.0 + spacing * i as f32));
            assert!(close(to.0 - from.0, *overlay.geometry().run));
            assert_eq!(to.1, params.guide_height());
        }
    }

    #[test]
    fn renders_in_the_slant_colour_and_restores_state() {
        let style = GuideStyle::default();
        let params = params(10.0);
        let mut canvas = Recorder::new(Pt(612.0), Pt(792.0));
        SlantOverlay::new(&params, &style, Pt(576.0)).render(&mut canvas);

        assert_eq!(canvas.primitives().len(), SLANT_LINES);
        assert!(canvas.primitives().iter().all(|p| matches!(
            p,
            Primitive::Line { colour, .. } if *colour == colours::SLANT_GREY
        )));
        assert_eq!(canvas.state().stroke, None);
        assert_eq!(canvas.depth(), 0);
    }
}
