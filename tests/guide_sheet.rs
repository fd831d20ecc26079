use guide_sheets::{
    build_document, params_from_toml, save_document, GuideConfig, GuideError, PageSizeName, Pt,
};

fn italic_hand() -> Vec<(&'static str, &'static str)> {
    vec![
        ("page_size", "Letter"),
        ("landscape", "false"),
        ("page_margin_inches", "0.25"),
        ("nib_mm", "3.8"),
        ("ascender", "3"),
        ("x_height", "4"),
        ("descender", "3"),
        ("spacing", "0.75"),
        ("slant_guides", "true"),
        ("slant_degrees", "10"),
        ("draw_squares", "true"),
    ]
}

fn content(params: Vec<(&str, &str)>) -> String {
    let config = GuideConfig::from_params(params).unwrap();
    let (document, _) = build_document(&config);
    String::from_utf8_lossy(document.content()).into_owned()
}

#[test]
fn letter_portrait_pdf() {
    let config = GuideConfig::from_params(italic_hand()).unwrap();
    let (document, plan) = build_document(&config);
    assert_eq!(plan.count, 6);
    assert!((*plan.top_offset - 36.0).abs() < 1e-3);

    let mut pdf = Vec::new();
    document.write(&mut pdf).unwrap();
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.starts_with("%PDF-"));
    assert!(text.contains("/MediaBox [0 0 612 792]"));
    assert!(text.contains("/BaseFont /Helvetica"));
    assert!(text.contains("/FlateDecode"));
    assert!(text.contains("Calligraphy guide sheet"));
}

#[test]
fn content_stream_is_balanced() {
    let stream = content(italic_hand());
    let saves = stream.lines().filter(|l| *l == "q").count();
    let restores = stream.lines().filter(|l| *l == "Q").count();
    assert!(saves > 0);
    assert_eq!(saves, restores);
    // the caption
    assert!(stream.contains("/F0 5 Tf"));
    assert_eq!(stream.matches(" Tj").count(), 1);
}

#[test]
fn landscape_swaps_the_media_box() {
    let mut params = italic_hand();
    params.push(("landscape", "1"));
    let config = GuideConfig::from_params(params).unwrap();
    let (document, plan) = build_document(&config);
    assert_eq!(document.media_box.x2, Pt(792.0));
    assert_eq!(document.media_box.y2, Pt(612.0));
    assert!(plan.count < 6);
}

#[test]
fn empty_fields_render_like_zero() {
    let mut empty = italic_hand();
    empty.push(("spacing", ""));
    let mut zero = italic_hand();
    zero.push(("spacing", "0"));
    let mut missing = italic_hand();
    missing.retain(|(key, _)| *key != "spacing");

    assert_eq!(content(empty.clone()), content(zero));
    assert_eq!(content(empty), content(missing));
}

#[test]
fn degenerate_nibs_still_produce_a_page() {
    let cases = [
        vec![("nib_mm", "1e-30"), ("x_height", "1")],
        vec![("nib_mm", "1e-9"), ("x_height", "1e9"), ("draw_squares", "true")],
        vec![("nib_mm", "0.001"), ("ascender", "1e20"), ("draw_squares", "true")],
    ];
    for params in cases {
        let config = GuideConfig::from_params(params.clone()).unwrap();
        let (document, plan) = build_document(&config);
        assert!(plan.count <= guide_sheets::MAX_GUIDE_SETS, "{params:?}");

        let mut pdf = Vec::new();
        document.write(&mut pdf).unwrap();
        assert!(pdf.starts_with(b"%PDF-"), "{params:?}");
    }
}

#[test]
fn unknown_page_size_stops_the_render() {
    let mut params = italic_hand();
    params.push(("page_size", "Crown Quarto"));
    assert!(matches!(
        GuideConfig::from_params(params),
        Err(GuideError::UnknownPageSize(_))
    ));
}

#[test]
fn sample_configuration_renders() {
    let params = params_from_toml(include_str!("../guide-sheet.toml")).unwrap();
    let config = GuideConfig::from_params(params).unwrap();
    assert_eq!(config.page_size, PageSizeName::Letter);
    assert!(config.landscape);
    assert!(config.stroke_correction);

    let (_, plan) = build_document(&config);
    assert!(plan.count > 0);
}

#[test]
fn saves_into_missing_directories() {
    let dir = std::env::temp_dir().join(format!("guide-sheets-test-{}", std::process::id()));
    let path = dir.join("nested").join("guidelines.pdf");

    let config = GuideConfig::from_params(italic_hand()).unwrap();
    let (document, _) = build_document(&config);
    save_document(&document, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let dir = std::env::temp_dir().join(format!("guide-sheets-blocker-{}", std::process::id()));
    std::fs::write(&dir, b"not a directory").unwrap();

    let config = GuideConfig::from_params(italic_hand()).unwrap();
    let (document, _) = build_document(&config);
    let result = save_document(&document, dir.join("guidelines.pdf"));
    assert!(matches!(result, Err(GuideError::Io(_))));
    std::fs::remove_file(&dir).unwrap();
}
