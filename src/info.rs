use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, TimeZone, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// The document information dictionary of a guide sheet
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    /// The layout the sheet was drawn with, e.g. its caption
    pub subject: Option<String>,
    /// Comma separated
    pub keywords: Option<String>,
    /// When the sheet was made. Unset means the moment it is written.
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Stamp the sheet with a fixed creation time instead of the current one
    pub fn created<Tz: TimeZone>(&mut self, at: DateTime<Tz>) -> &mut Self {
        self.created = Some(at.fixed_offset());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let mut info = writer.document_info(refs.gen(RefType::Info));

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self.created.unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(&created));
    }
}

fn pdf_date(at: &DateTime<FixedOffset>) -> Date {
    let offset_minutes = at.offset().fix().local_minus_utc() / 60;
    Date::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}
