use crate::canvas::Canvas;
use crate::params::{GuideStyle, LayoutParameters};
use crate::planner::{PageGeometry, RepeatPlan};
use crate::slant::SlantOverlay;
use crate::units::Pt;
use crate::zone::{ZonePhase, ZoneRenderer};
use log::{debug, trace};

/// Lays out a whole page of guide-sets onto a canvas
pub struct PageComposer<'a> {
    page: PageGeometry,
    params: &'a LayoutParameters,
    style: &'a GuideStyle,
}

impl<'a> PageComposer<'a> {
    pub fn new(page: PageGeometry, params: &'a LayoutParameters, style: &'a GuideStyle) -> Self {
        PageComposer {
            page,
            params,
            style,
        }
    }

    /// Draw every guide-set that fits, bottom to top, then the caption and the right
    /// margin mask. Returns the plan that was drawn.
    pub fn compose<C: Canvas>(&self, canvas: &mut C) -> RepeatPlan {
        let params = self.params;
        let plan = RepeatPlan::new(&self.page, params);
        debug!(
            "{} guide-sets of {} each, first one {} above the bottom margin",
            plan.count,
            params.guide_set_height(),
            plan.top_offset
        );

        let usable_width = self.page.usable_width(params.margin);
        let zones = ZoneRenderer::new(params, self.style, usable_width);
        let slant = params
            .slant_enabled
            .then(|| SlantOverlay::new(params, self.style, usable_width));

        {
            let mut frame = canvas.saved_state();
            frame.translate(params.margin, plan.origin_y(params));

            for set in 0..plan.count {
                trace!("guide-set {set}");
                if let Some(slant) = &slant {
                    slant.render(&mut *frame);
                }

                // every guide-set starts its ladder afresh in the left column
                let phase = params
                    .zones
                    .bottom_up()
                    .into_iter()
                    .fold(ZonePhase::default(), |phase, scale| {
                        zones.render(&mut *frame, scale, phase)
                    });
                trace!("guide-set {set} ends at {}", phase.start_y);

                frame.translate(Pt(0.0), params.guide_set_height());
            }
        }

        self.draw_caption(canvas);
        self.mask_right_margin(canvas);
        plan
    }

    fn draw_caption<C: Canvas>(&self, canvas: &mut C) {
        let mut canvas = canvas.saved_state();
        canvas.fill(Some(self.style.guide_colour));
        canvas.font_size(self.style.caption_size);
        canvas.text(&caption(self.params), (self.params.margin, self.params.margin));
    }

    /// Slant lines run past the right edge of the guide lines, cover what reaches the margin
    fn mask_right_margin<C: Canvas>(&self, canvas: &mut C) {
        let margin = self.params.margin;
        let mut canvas = canvas.saved_state();
        canvas.fill(Some(self.style.mask_colour));
        canvas.stroke(None);
        canvas.rect(self.page.width - margin, Pt(0.0), margin, self.page.height);
    }
}

/// The label printed in the bottom margin, e.g. `Nib: 3.8mm • Scale: 3/4/3`. Zone scales
/// are listed top to bottom.
pub fn caption(params: &LayoutParameters) -> String {
    let zones = &params.zones;
    format!(
        "Nib: {}mm • Scale: {}/{}/{}",
        format_number(params.nib_mm),
        format_number(zones.ascender),
        format_number(zones.x_height),
        format_number(zones.descender)
    )
}

/// Whole numbers without a decimal part
fn format_number(number: f32) -> String {
    if number.fract() == 0.0 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}
