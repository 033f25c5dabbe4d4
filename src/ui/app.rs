use std::mem;

use anyhow::{Error, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::db::VocabStore;
use crate::projection::{Grid, COLUMN_TITLES};

use super::forms::{WordField, WordForm};
use super::helpers::{centered_rect, surface_error, to_cells};
use super::screens::TableScreen;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Message shown instead of a table when nothing has been saved yet.
const NO_DATA_MESSAGE: &str = "No data to display";

/// Which view is in front.
enum Screen {
    Form,
    Table(TableScreen),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. The store is owned here for the whole session
/// and released when the app is dropped.
pub struct App {
    store: VocabStore,
    form: WordForm,
    screen: Screen,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: VocabStore) -> Self {
        Self {
            store,
            form: WordForm::default(),
            screen: Screen::Form,
            status: None,
        }
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let screen = mem::replace(&mut self.screen, Screen::Form);

        self.screen = match screen {
            Screen::Form => self.handle_form_key(code, &mut exit),
            Screen::Table(table) => self.handle_table_key(code, table),
        };

        Ok(exit)
    }

    /// Route a full key event. Control chords are shortcuts only: Ctrl+T opens
    /// the table, Ctrl+C quits, and any other chord is swallowed so it never
    /// types into the form.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => {
                    self.open_table();
                    return Ok(false);
                }
                KeyCode::Char('c') => return Ok(true),
                KeyCode::Char(_) => return Ok(false),
                _ => {}
            }
        }
        self.handle_key(key.code)
    }

    fn handle_form_key(&mut self, code: KeyCode, exit: &mut bool) -> Screen {
        match code {
            KeyCode::Esc => *exit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.toggle_field()
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::F(2) => return self.load_table(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
        Screen::Form
    }

    fn handle_table_key(&mut self, code: KeyCode, mut table: TableScreen) -> Screen {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return Screen::Form,
            KeyCode::Up | KeyCode::Char('k') => table.scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => table.scroll(1),
            KeyCode::PageUp => table.scroll(-10),
            KeyCode::PageDown => table.scroll(10),
            KeyCode::F(5) | KeyCode::Char('r') => return self.load_table(),
            _ => {}
        }
        Screen::Table(table)
    }

    /// Send the form to the store. On failure the fields stay as typed so the
    /// user can retry.
    fn submit_form(&mut self) {
        let command = match self.form.to_command() {
            Ok(command) => command,
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                return;
            }
        };

        match self.store.execute(command) {
            Ok(entry) => {
                self.form.clear();
                self.set_status(
                    format!("Added #{}: {}.", entry.id, entry),
                    StatusKind::Info,
                );
            }
            Err(err) => {
                let err = Error::from(err);
                warn!("event=form_submit module=ui status=error error={err:#}");
                self.set_status(surface_error(&err), StatusKind::Error);
            }
        }
    }

    fn open_table(&mut self) {
        self.screen = self.load_table();
    }

    fn load_table(&mut self) -> Screen {
        let table = TableScreen::load(&self.store);
        info!(
            "event=table_open module=ui status=ok rows={}",
            table.row_count()
        );
        self.clear_status();
        Screen::Table(table)
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Form => self.draw_form(frame, content_area),
            Screen::Table(table) => self.draw_table(frame, content_area, table),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Vocabulary")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let heading = Line::from(Span::styled(
            "Add a new word",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);

        let lines = vec![
            heading,
            Line::from(""),
            self.form.build_line(WordField::Word),
            self.form.build_line(WordField::Translation),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let active = self.form.active;
        let row = match active {
            WordField::Word => 2,
            WordField::Translation => 3,
        };
        frame.set_cursor_position((
            inner.x.saturating_add(self.form.cursor_offset(active)),
            inner.y.saturating_add(row),
        ));
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect, table: &TableScreen) {
        let block = Block::default()
            .title("Saved Words")
            .borders(Borders::ALL);

        match table {
            TableScreen::Loaded { grid, offset } => {
                frame.render_widget(self.build_table(grid, *offset).block(block), area)
            }
            TableScreen::Empty => {
                let paragraph = Paragraph::new(NO_DATA_MESSAGE)
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(paragraph, area);
            }
            TableScreen::Failed(message) => {
                let paragraph = Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Could not read saved words.",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(message.clone()),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
                frame.render_widget(paragraph, area);
            }
        }
    }

    fn build_table(&self, grid: &Grid, offset: usize) -> Table<'static> {
        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(COLUMN_TITLES.iter().map(|title| Cell::from(*title)))
            .style(header_style);

        let rows = grid.rows.iter().skip(offset).map(|row| {
            Row::new(row.iter().map(|value| Cell::from(value.clone())))
        });
        let widths = grid.widths.map(|width| Constraint::Length(to_cells(width)));

        Table::new(rows, widths).header(header).column_spacing(1)
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.screen {
            Screen::Form => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Add   "),
                Span::styled("[F2]", key_style),
                Span::raw(" Show words   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
            Screen::Table(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[r]", key_style),
                Span::raw(" Reload   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Close"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
