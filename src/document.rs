use crate::{
    info::Info,
    pdf_canvas::{PdfCanvas, CAPTION_FONT},
    planner::PageGeometry,
    rect::Rect,
    refs::{ObjectReferences, RefType},
    GuideError, Pt,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};
use std::io::Write;

/// A single-page PDF: the page's media box and its rendered content stream,
/// written out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    content: Vec<u8>,
}

impl Document {
    /// Open a canvas the size of the page described by `geometry`
    pub fn canvas(geometry: &PageGeometry) -> PdfCanvas {
        PdfCanvas::new(geometry.width, geometry.height)
    }

    /// Wrap up a finished canvas as a document
    pub fn from_canvas(geometry: &PageGeometry, margin: Pt, canvas: PdfCanvas) -> Document {
        Document {
            info: None,
            media_box: geometry.media_box(),
            content_box: geometry.content_box(margin),
            content: canvas.finish(),
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// The uncompressed page content stream
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Write the entire document to the writer. The document is rendered in memory first
    /// and then written in one go.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), GuideError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);
        let font_id = refs.gen(RefType::CaptionFont);
        let content_id = refs.gen(RefType::ContentForPage);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        writer.pages(page_tree_id).count(1).kids([page_id]);

        // the caption only needs one of the standard fonts, nothing is embedded
        writer
            .type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let mut page = writer.page(page_id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(Name(CAPTION_FONT), font_id);
        page.finish();

        let compressed = compress_to_vec_zlib(
            &self.content,
            CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        writer.catalog(catalog_id).pages(page_tree_id);

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
