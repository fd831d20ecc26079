use crate::colour::{colours, Colour};
use crate::config::GuideConfig;
use crate::units::*;

/// Stroke width of every guide line and square outline
pub const GUIDE_STROKE: Pt = Pt(0.5);

/// Heights of the three zones of a guide-set, in nib widths, bottom to top
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZoneScales {
    pub descender: f32,
    pub x_height: f32,
    pub ascender: f32,
}

impl ZoneScales {
    pub fn total(&self) -> f32 {
        self.descender + self.x_height + self.ascender
    }

    /// The scales in drawing order
    pub fn bottom_up(&self) -> [f32; 3] {
        [self.descender, self.x_height, self.ascender]
    }
}

/// The geometry of a guide sheet, derived once from a [`GuideConfig`]. Nothing is
/// validated: a zero or negative nib width simply produces degenerate geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParameters {
    /// The nib width as entered, kept for the caption
    pub nib_mm: f32,
    /// Side of one guide square
    pub nib_width: Pt,
    pub zones: ZoneScales,
    /// Gap below each guide-set, in nib widths
    pub spacing: f32,
    pub margin: Pt,
    pub slant_enabled: bool,
    pub slant_degrees: f32,
    pub draw_squares: bool,
}

impl LayoutParameters {
    pub fn new(config: &GuideConfig) -> LayoutParameters {
        let mut nib_width = points_from_millimeters(config.nib_mm);
        if config.stroke_correction {
            // the stroke is centred on the square's edge, half of it lands outside
            nib_width -= GUIDE_STROKE * 2.0;
        }

        LayoutParameters {
            nib_mm: config.nib_mm,
            nib_width,
            zones: ZoneScales {
                descender: config.descender,
                x_height: config.x_height,
                ascender: config.ascender,
            },
            spacing: config.spacing,
            margin: points_from_inches(config.page_margin_inches),
            slant_enabled: config.slant_guides,
            slant_degrees: config.slant_degrees,
            draw_squares: config.draw_squares,
        }
    }

    /// Height of the three zones stacked together
    pub fn guide_height(&self) -> Pt {
        self.nib_width * self.zones.total()
    }

    /// Height of one guide-set including the spacing below it
    pub fn guide_set_height(&self) -> Pt {
        self.guide_height() + self.nib_width * self.spacing
    }
}

/// Colours and sizes used when drawing, independent of the layout geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideStyle {
    pub guide_colour: Colour,
    pub slant_colour: Colour,
    pub mask_colour: Colour,
    pub stroke_width: Pt,
    pub caption_size: Pt,
}

impl Default for GuideStyle {
    fn default() -> Self {
        GuideStyle {
            guide_colour: colours::BLACK,
            slant_colour: colours::SLANT_GREY,
            mask_colour: colours::WHITE,
            stroke_width: GUIDE_STROKE,
            caption_size: Pt(5.0),
        }
    }
}

impl GuideStyle {
    pub fn new(config: &GuideConfig) -> GuideStyle {
        let defaults = GuideStyle::default();
        GuideStyle {
            guide_colour: config.guide_colour.unwrap_or(defaults.guide_colour),
            slant_colour: config.slant_colour.unwrap_or(defaults.slant_colour),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GuideConfig {
        GuideConfig {
            nib_mm: 25.4,
            ascender: 3.0,
            x_height: 4.0,
            descender: 3.0,
            spacing: 0.5,
            page_margin_inches: 0.25,
            ..GuideConfig::default()
        }
    }

    #[test]
    fn derives_heights_in_points() {
        let params = LayoutParameters::new(&config());
        assert_eq!(params.nib_width, Pt(72.0));
        assert_eq!(params.margin, Pt(18.0));
        assert_eq!(params.guide_height(), Pt(720.0));
        assert_eq!(params.guide_set_height(), Pt(756.0));
    }

    #[test]
    fn stroke_correction_removes_both_half_strokes() {
        let params = LayoutParameters::new(&GuideConfig {
            stroke_correction: true,
            ..config()
        });
        assert_eq!(params.nib_width, Pt(71.0));
        assert_eq!(params.nib_mm, 25.4);
    }

    #[test]
    fn zero_nib_is_degenerate_but_accepted() {
        let params = LayoutParameters::new(&GuideConfig {
            nib_mm: 0.0,
            stroke_correction: true,
            ..config()
        });
        assert_eq!(params.nib_width, Pt(-1.0));
        assert!(params.guide_set_height() < Pt(0.0));
    }

    #[test]
    fn style_falls_back_to_default_colours() {
        let style = GuideStyle::new(&GuideConfig {
            guide_colour: Some(colours::SLANT_GREY),
            ..GuideConfig::default()
        });
        assert_eq!(style.guide_colour, colours::SLANT_GREY);
        assert_eq!(style.slant_colour, colours::SLANT_GREY);
        assert_eq!(style.mask_colour, colours::WHITE);
    }
}
