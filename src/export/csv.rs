//! CSV download format.
//!
//! Column order follows the record: caption, date, link, and the submitter
//! column only when at least one record carries a submitter.

use std::io::Write;

use crate::export::ExportError;
use crate::ingest::{has_submitters, Record};

pub const HEADER: [&str; 3] = ["Caption", "Tanggal", "Link"];
pub const SUBMITTER_HEADER: &str = "Penginput";

/// Default file name offered for downloads.
pub const DEFAULT_FILE_NAME: &str = "hasil_scraping_instagram.csv";

/// Writes `records` with a header row.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<(), ExportError> {
    let with_submitter = has_submitters(records);
    let mut out = ::csv::Writer::from_writer(writer);

    if with_submitter {
        out.write_record(HEADER.iter().copied().chain([SUBMITTER_HEADER]))?;
    } else {
        out.write_record(HEADER)?;
    }

    for record in records {
        let base = [
            record.caption.as_str(),
            record.date.as_str(),
            record.link.as_str(),
        ];
        if with_submitter {
            out.write_record(base.into_iter().chain([record.submitter_or_empty()]))?;
        } else {
            out.write_record(base)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Renders records to a CSV string.
pub fn to_string(records: &[Record]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
