use guide_sheets::{build_document, GuideConfig, PageSizeName};

fn main() {
    let config = GuideConfig {
        page_size: PageSizeName::A4,
        page_margin_inches: 0.5,
        nib_mm: 2.4,
        ascender: 4.0,
        x_height: 5.0,
        descender: 4.0,
        spacing: 1.0,
        slant_guides: true,
        slant_degrees: 7.0,
        draw_squares: true,
        stroke_correction: true,
        ..GuideConfig::default()
    };

    let (doc, plan) = build_document(&config);
    println!("{} guide-sets", plan.count);

    let mut out = std::fs::File::create("guide-sheet.pdf").unwrap();
    doc.write(&mut out).unwrap();
}
