use crate::config::GuideConfig;
use crate::params::LayoutParameters;
use crate::rect::Rect;
use crate::units::Pt;
use log::warn;

/// More guide-sets than this on one page means the nib or the zones are degenerate
pub const MAX_GUIDE_SETS: usize = 1000;

/// The size of the page being laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
}

impl PageGeometry {
    pub fn new(config: &GuideConfig) -> PageGeometry {
        let (width, height) = config.page_size.size(config.landscape);
        PageGeometry { width, height }
    }

    pub fn media_box(&self) -> Rect {
        Rect::from_origin(Pt(0.0), Pt(0.0), self.width, self.height)
    }

    /// The page inset by `margin` on every side
    pub fn content_box(&self, margin: Pt) -> Rect {
        Rect {
            x1: margin,
            y1: margin,
            x2: self.width - margin,
            y2: self.height - margin,
        }
    }

    /// Horizontal room between the left and right margins
    pub fn usable_width(&self, margin: Pt) -> Pt {
        self.width - margin * 2.0
    }

    /// Vertical room between the top and bottom margins
    pub fn available_height(&self, margin: Pt) -> Pt {
        self.height - margin * 2.0
    }
}

/// How many guide-sets fit on the page, and where the first one starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatPlan {
    pub count: usize,
    /// Distance from the bottom margin to the origin of the first guide-set. Centers the
    /// block of guide-sets vertically, plus half a nib width.
    pub top_offset: Pt,
}

impl RepeatPlan {
    /// Only whole guide-sets are planned. A non-positive guide-set height plans none, and so
    /// does one so small that more than [`MAX_GUIDE_SETS`] would fit.
    ///
    /// ```
    /// use guide_sheets::{GuideConfig, LayoutParameters, PageGeometry, RepeatPlan, Pt};
    ///
    /// let config = GuideConfig {
    ///     nib_mm: 25.4,
    ///     x_height: 1.0,
    ///     ..GuideConfig::default()
    /// };
    /// let plan = RepeatPlan::new(&PageGeometry::new(&config), &LayoutParameters::new(&config));
    /// assert_eq!(plan.count, 11);
    /// assert_eq!(plan.top_offset, Pt(36.0));
    /// ```
    pub fn new(page: &PageGeometry, params: &LayoutParameters) -> RepeatPlan {
        let available = page.available_height(params.margin);
        let set_height = params.guide_set_height();

        let count = if set_height > Pt(0.0) {
            let fits = (available / set_height).floor().max(0.0);
            if fits.is_finite() && fits <= MAX_GUIDE_SETS as f32 {
                fits as usize
            } else {
                warn!("guide-sets of {set_height} would repeat {fits} times, drawing none");
                0
            }
        } else {
            0
        };

        let top_offset =
            (available - set_height * count as f32) / 2.0 + params.nib_width / 2.0;

        RepeatPlan { count, top_offset }
    }

    /// Height of the bottom of the first guide-set above the page's bottom edge
    pub fn origin_y(&self, params: &LayoutParameters) -> Pt {
        params.margin + self.top_offset
    }
}
