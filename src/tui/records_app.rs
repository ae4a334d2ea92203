//! Records table viewer
//!
//! Scrollable table of records, newest first. Keys: `j`/`k` or arrows to
//! move, `g`/`G` for first/last, `q` or `Esc` to quit.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::ingest::{has_submitters, Record};
use crate::theme::current_theme;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Viewer state over a borrowed slice of records.
pub struct RecordsApp<'a> {
    records: &'a [Record],
    title: String,
    state: TableState,
}

impl<'a> RecordsApp<'a> {
    pub fn new(records: &'a [Record], title: impl Into<String>) -> Self {
        let mut state = TableState::default();
        if !records.is_empty() {
            state.select(Some(0));
        }
        Self {
            records,
            title: title.into(),
            state,
        }
    }

    /// Selected row in display order (0 = newest).
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// The record under the cursor.
    pub fn selected_record(&self) -> Option<&Record> {
        let idx = self.selected()?;
        self.records.iter().rev().nth(idx)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyResult::Quit;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::PageDown => self.move_by(10),
            KeyCode::PageUp => self.move_by(-10),
            KeyCode::Home | KeyCode::Char('g') => self.select_edge(false),
            KeyCode::End | KeyCode::Char('G') => self.select_edge(true),
            _ => {}
        }
        KeyResult::Continue
    }

    fn move_by(&mut self, delta: isize) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() as isize - 1;
        let current = self.state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, last);
        self.state.select(Some(next as usize));
    }

    fn select_edge(&mut self, end: bool) {
        if self.records.is_empty() {
            return;
        }
        let idx = if end { self.records.len() - 1 } else { 0 };
        self.state.select(Some(idx));
    }

    /// Draws the viewer into `frame`.
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = current_theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        let with_submitter = has_submitters(self.records);
        let total = self.records.len();

        let mut header_cells = vec!["#", "Tanggal", "Caption", "Link"];
        if with_submitter {
            header_cells.push("Penginput");
        }
        let header = Row::new(header_cells.into_iter().map(Cell::from)).style(theme.header_style());

        let rows = self.records.iter().enumerate().rev().map(|(idx, r)| {
            let mut cells = vec![
                Cell::from((idx + 1).to_string()),
                Cell::from(r.date.clone()),
                Cell::from(r.caption.clone()),
                Cell::from(r.link.clone()),
            ];
            if with_submitter {
                cells.push(Cell::from(r.submitter_or_empty().to_string()));
            }
            Row::new(cells).style(theme.text_style())
        });

        let mut widths = vec![
            Constraint::Length(total.to_string().len().max(1) as u16),
            Constraint::Length(10),
            Constraint::Fill(3),
            Constraint::Fill(2),
        ];
        if with_submitter {
            widths.push(Constraint::Length(12));
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.header_style())
                    .title(format!(" {} ({}) ", self.title, total)),
            )
            .row_highlight_style(theme.selected_style())
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, chunks[0], &mut self.state);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("j/k", theme.header_style()),
            Span::styled(" move  ", theme.text_secondary_style()),
            Span::styled("g/G", theme.header_style()),
            Span::styled(" first/last  ", theme.text_secondary_style()),
            Span::styled("q", theme.header_style()),
            Span::styled(" quit", theme.text_secondary_style()),
        ]));
        frame.render_widget(footer, chunks[1]);
    }

    /// Runs the viewer until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && self.handle_key(key) == KeyResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}
