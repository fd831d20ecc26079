//! Printable calligraphy guide sheets.
//!
//! A guide sheet is a page of repeating guide-sets: descender, x-height and ascender zones
//! measured in nib widths, each with a ladder of nib-sized squares down its left edge and,
//! optionally, slanted lines marking the italic angle.
//!
//! ```
//! use guide_sheets::{build_document, GuideConfig};
//!
//! let config = GuideConfig::from_params([
//!     ("nib_mm", "3.8"),
//!     ("ascender", "3"),
//!     ("x_height", "4"),
//!     ("descender", "3"),
//!     ("spacing", "0.75"),
//!     ("page_margin_inches", "0.25"),
//!     ("draw_squares", "true"),
//! ]).unwrap();
//!
//! let (document, plan) = build_document(&config);
//! assert_eq!(plan.count, 6);
//!
//! let mut pdf = Vec::new();
//! document.write(&mut pdf).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod composer;
pub use composer::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod info;
pub use info::*;

/// Page formats and orientation
pub mod pagesize;
pub use pagesize::PageSizeName;

mod params;
pub use params::*;

mod pdf_canvas;
pub use pdf_canvas::PdfCanvas;

mod planner;
pub use planner::*;

mod recorder;
pub use recorder::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod sheet;
pub use sheet::*;

mod slant;
pub use slant::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod zone;
pub use zone::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
