//! TUI renderer for the post table
//!
//! Runs the single-threaded UI loop: it owns the view controller, feeds it
//! key input, polls the search debouncer, and draws the screen built by the
//! presenter. The startup fetch arrives once over a channel.
//!
//! ## Design:
//! - Renderer owns UI state (focus, tag cursor, spinner frame)
//! - Controller owns the view state and the data
//! - Views only draw view models

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tagview_runtime::{LocationSink, MemoryLocation, Phase, ViewController};
use tagview_types::Post;

use crate::presentation::presenters::build_screen;
use crate::presentation::view_models::{Focus, ReadyScreenViewModel, ScreenViewModel, UiState};
use crate::presentation::views::{
    FilterBarView, LoadingView, PostTableView, StatusBarView, TagPickerView,
};

const TICK_RATE: Duration = Duration::from_millis(100);
const TAG_PICKER_WIDTH: u16 = 30;

pub struct TuiRenderer {
    controller: ViewController<MemoryLocation>,
    ui: UiState,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(controller: ViewController<MemoryLocation>) -> Self {
        Self {
            controller,
            ui: UiState::default(),
            should_quit: false,
        }
    }

    /// Run until the user quits; returns the final address.
    pub fn run(mut self, rx: Receiver<Vec<Post>>) -> Result<String> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|_| self.controller.location().current().to_string())
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &Receiver<Vec<Post>>,
    ) -> Result<()> {
        loop {
            self.receive_posts(rx);
            self.controller.poll(Instant::now());

            terminal.draw(|f| self.render(f))?;

            if event::poll(self.poll_timeout())?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key, Instant::now());
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    // Wake up in time for a pending search edit.
    fn poll_timeout(&self) -> Duration {
        self.controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(TICK_RATE, |until| until.min(TICK_RATE))
    }

    pub(crate) fn receive_posts(&mut self, rx: &Receiver<Vec<Post>>) {
        if self.controller.phase() != Phase::Loading {
            return;
        }

        match rx.try_recv() {
            Ok(posts) => self.controller.on_posts_loaded(posts),
            Err(TryRecvError::Empty) => {
                self.ui.spinner_frame = self.ui.spinner_frame.wrapping_add(1);
            }
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("fetch thread ended without a result");
                self.controller.on_posts_loaded(Vec::new());
            }
        }
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.controller.phase() == Phase::Loading {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.ui.focus = self.ui.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.ui.focus = self.ui.focus.previous();
                return;
            }
            _ => {}
        }

        match self.ui.focus {
            Focus::Table => self.handle_table_key(key),
            Focus::Tags => self.handle_tags_key(key),
            Focus::Search => self.handle_search_key(key, now),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => self.controller.prev_page(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.controller.next_page()
            }
            KeyCode::Home => {
                let page_size = self.controller.state().page_size();
                self.controller.on_page_changed(1, page_size);
            }
            KeyCode::End => {
                let page_size = self.controller.state().page_size();
                let last = self.controller.page_count();
                self.controller.on_page_changed(last, page_size);
            }
            KeyCode::Char('s') => self.controller.cycle_page_size(),
            KeyCode::Char('c') => self.controller.clear_tags(),
            KeyCode::Char('t') => self.ui.focus = Focus::Tags,
            KeyCode::Char('/') => self.ui.focus = Focus::Search,
            _ => {}
        }
    }

    fn handle_tags_key(&mut self, key: KeyEvent) {
        let count = self.controller.vocabulary().len();

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.ui.focus = Focus::Table,
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.ui.tag_cursor = (self.ui.tag_cursor + 1).min(count - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.ui.tag_cursor = self.ui.tag_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(tag) = self.controller.vocabulary().get(self.ui.tag_cursor) {
                    let tag = tag.to_string();
                    self.controller.toggle_tag(&tag);
                }
            }
            KeyCode::Char('c') => self.controller.clear_tags(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.ui.focus = Focus::Table,
            KeyCode::Enter => {
                self.controller.flush_search();
            }
            KeyCode::Backspace => {
                let mut text = self.controller.search_input().to_string();
                if text.pop().is_some() {
                    self.controller.on_search_changed(text, now);
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.on_search_changed(String::new(), now);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.controller.search_input().to_string();
                text.push(c);
                self.controller.on_search_changed(text, now);
            }
            _ => {}
        }
    }

    pub(crate) fn render(&self, f: &mut Frame) {
        let area = f.area();

        match build_screen(&self.controller, &self.ui, area.width) {
            ScreenViewModel::Loading { spinner } => {
                f.render_widget(LoadingView::new(spinner), area);
            }
            ScreenViewModel::Ready(screen) => render_ready(f, &screen),
        }
    }
}

// Layout: [Address | Filter bar | (Tag picker) Table | Status bar]
fn render_ready(f: &mut Frame, screen: &ReadyScreenViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(f.area());

    let address = Line::from(vec![
        Span::styled(
            " ? ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(screen.address.as_str()),
    ]);
    f.render_widget(Paragraph::new(address), chunks[0]);

    f.render_widget(FilterBarView::new(&screen.filter_bar), chunks[1]);

    let table_focused = screen.filter_bar.focus == Focus::Table;
    match &screen.tag_picker {
        Some(picker) => {
            let body =
                Layout::horizontal([Constraint::Length(TAG_PICKER_WIDTH), Constraint::Min(0)])
                    .split(chunks[2]);
            f.render_widget(TagPickerView::new(picker), body[0]);
            f.render_widget(PostTableView::new(&screen.table, table_focused), body[1]);
        }
        None => f.render_widget(PostTableView::new(&screen.table, table_focused), chunks[2]),
    }

    f.render_widget(StatusBarView::new(&screen.status_bar), chunks[3]);
}
