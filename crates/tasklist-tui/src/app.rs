//! Application state and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::debug;

use tasklist_core::{Filter, NoticeKind, Notifier, TaskId};

use crate::event::UiEvent;
use crate::screen::{EditTrigger, TaskScreen};
use crate::toast::ToastQueue;
use crate::ui;

const BUSY_NOTICE: &str = "Still syncing, try again in a moment";

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The add-task field.
    #[default]
    Input,
    /// The task list.
    List,
    /// The draft field of the row being edited.
    Edit,
}

/// Main application: the task screen plus terminal-only state.
pub struct App {
    screen: TaskScreen<ToastQueue>,

    /// Receiver for completions from the backend.
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    focus: Focus,

    /// Index into the visible rows.
    selected: usize,

    should_quit: bool,
}

impl App {
    pub fn new(screen: TaskScreen<ToastQueue>, ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        Self {
            screen,
            ui_rx,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &TaskScreen<ToastQueue> {
        &self.screen
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Run the main event loop.
    ///
    /// Loads the collection, then draws, reads keys, and applies backend
    /// completions until quit. The screen is shut down on every exit path so
    /// the backend stops.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        self.screen.refresh();
        let result = self.event_loop(&mut terminal);
        self.screen.shutdown();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.should_quit {
            self.process_events();
            self.screen.notifier_mut().prune(Instant::now());

            terminal.draw(|frame| ui::render(frame, self))?;

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply every completion that has arrived.
    fn process_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.screen.apply(event);
        }
        self.sync_view();
    }

    /// Keep focus and selection consistent with the screen state.
    fn sync_view(&mut self) {
        if self.focus == Focus::Edit && self.screen.edit_session().is_none() {
            self.focus = Focus::List;
        }
        let rows = self.screen.rows().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.screen
            .rows()
            .get(self.selected)
            .map(|row| row.task.id.clone())
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.focus {
            Focus::Input => self.handle_input_key(code),
            Focus::List => self.handle_list_key(code),
            Focus::Edit => self.handle_edit_key(code),
        }
        self.sync_view();
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                if self.ready("add") {
                    self.screen.add();
                }
            }
            KeyCode::Char(c) => self.screen.push_input(c),
            KeyCode::Backspace => self.screen.pop_input(),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => self.focus = Focus::List,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') => self.selected = 0,
            KeyCode::Char('G') => self.selected = usize::MAX,
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    if self.ready("toggle") {
                        self.screen.toggle(&id);
                    }
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.screen.begin_edit(&id);
                    if self.screen.draft_mut().is_some() {
                        self.focus = Focus::Edit;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    if self.ready("delete") {
                        self.screen.delete(&id);
                    }
                }
            }
            KeyCode::Char('f') => self.screen.cycle_filter(),
            KeyCode::Char('F') => self.screen.set_filter(self.screen.filter().prev()),
            KeyCode::Char('1') => self.screen.set_filter(Filter::All),
            KeyCode::Char('2') => self.screen.set_filter(Filter::Completed),
            KeyCode::Char('3') => self.screen.set_filter(Filter::Pending),
            KeyCode::Char('r') => self.screen.refresh(),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => self.focus = Focus::Input,
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            // Stay in the field until the update lands; a focus change while
            // it is in flight must not submit again.
            KeyCode::Enter => self.screen.commit_edit(EditTrigger::CommitKey),
            KeyCode::Esc => {
                self.screen.cancel_edit();
                self.focus = Focus::List;
            }
            KeyCode::Tab => self.leave_edit(),
            KeyCode::Up => {
                self.leave_edit();
                self.select_prev();
            }
            KeyCode::Down => {
                self.leave_edit();
                self.select_next();
            }
            KeyCode::Char(c) => {
                if let Some(draft) = self.screen.draft_mut() {
                    draft.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = self.screen.draft_mut() {
                    draft.pop();
                }
            }
            _ => {}
        }
    }

    /// Add, toggle and delete read the local copy, so they wait until no
    /// request is outstanding. Returns false and tells the user otherwise.
    fn ready(&mut self, action: &'static str) -> bool {
        if !self.screen.is_loading() {
            return true;
        }
        debug!(action, "Ignored while loading");
        self.screen.notifier_mut().notify(NoticeKind::Info, BUSY_NOTICE);
        false
    }

    fn leave_edit(&mut self) {
        self.screen.commit_edit(EditTrigger::FocusLost);
        self.focus = Focus::List;
    }

    fn select_next(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
