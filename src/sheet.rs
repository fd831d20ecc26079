//! From a configuration to a PDF on disk.

use crate::composer::{caption, PageComposer};
use crate::config::GuideConfig;
use crate::document::Document;
use crate::info::Info;
use crate::params::{GuideStyle, LayoutParameters};
use crate::planner::{PageGeometry, RepeatPlan};
use crate::GuideError;
use log::info;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Where the guide sheet is written, relative to the working directory
pub const OUTPUT_PATH: &str = "guide-sheets/guidelines.pdf";

/// Lay out and render the guide sheet described by `config`
pub fn build_document(config: &GuideConfig) -> (Document, RepeatPlan) {
    let page = PageGeometry::new(config);
    let params = LayoutParameters::new(config);
    let style = GuideStyle::new(config);

    let mut canvas = Document::canvas(&page);
    let plan = PageComposer::new(page, &params, &style).compose(&mut canvas);

    let mut document = Document::from_canvas(&page, params.margin, canvas);
    let mut info = Info::new();
    info.title("Calligraphy guide sheet")
        .subject(caption(&params))
        .keywords(format!(
            "calligraphy, guidelines, {}{}",
            config.page_size,
            if config.landscape { " landscape" } else { "" }
        ));
    document.set_info(info);

    (document, plan)
}

/// Write `document` to `path`, creating missing parent directories
pub fn save_document<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), GuideError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    document.write(&mut out)?;
    out.flush()?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Render `config` and write it to [`OUTPUT_PATH`]
pub fn render_guide_sheet(config: &GuideConfig) -> Result<RepeatPlan, GuideError> {
    config.log_effective();
    let (document, plan) = build_document(config);
    save_document(&document, OUTPUT_PATH)?;
    Ok(plan)
}
