//! Plain text table of records for terminal output.
//!
//! Newest records are listed first. The caption column takes whatever width
//! is left after the fixed columns and is truncated with `...` to fit.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ingest::{has_submitters, Record};

/// Width used when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 120;

/// Narrowest caption column we will render.
const MIN_CAPTION_WIDTH: usize = 10;

const DATE_WIDTH: usize = 10;
const GAP: &str = "  ";

/// Terminal width, or [`DEFAULT_WIDTH`] when not attached to a terminal.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Truncates `s` to at most `max` display columns, marking cuts with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }

    let budget = max - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// Renders records as a table no wider than `width` (when possible).
pub fn render(records: &[Record], width: usize) -> String {
    let with_submitter = has_submitters(records);
    let number_width = records.len().to_string().len().max(1);
    let link_width = records
        .iter()
        .map(|r| r.link.width())
        .max()
        .unwrap_or(0)
        .max("Link".len());
    let submitter_width = if with_submitter {
        records
            .iter()
            .map(|r| r.submitter_or_empty().width())
            .max()
            .unwrap_or(0)
            .max("Penginput".len())
    } else {
        0
    };

    let mut fixed = number_width + DATE_WIDTH + link_width + GAP.len() * 3;
    if with_submitter {
        fixed += submitter_width + GAP.len();
    }
    let caption_width = width.saturating_sub(fixed).max(MIN_CAPTION_WIDTH);

    let mut lines = Vec::with_capacity(records.len() + 2);
    let mut header = vec![
        pad("#", number_width),
        pad("Tanggal", DATE_WIDTH),
        pad("Caption", caption_width),
        pad("Link", link_width),
    ];
    if with_submitter {
        header.push("Penginput".to_string());
    }
    lines.push(header.join(GAP).trim_end().to_string());
    lines.push("-".repeat(lines[0].width()));

    for (idx, record) in records.iter().enumerate().rev() {
        let mut cells = vec![
            pad(&(idx + 1).to_string(), number_width),
            pad(&record.date, DATE_WIDTH),
            pad(&truncate(&record.caption, caption_width), caption_width),
            pad(&record.link, link_width),
        ];
        if with_submitter {
            cells.push(record.submitter_or_empty().to_string());
        }
        lines.push(cells.join(GAP).trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
