use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use llmdex_engine::ProviderSummary;
use ratatui::widgets::{ListState, TableState};

use super::keymap::{self, Action};
use crate::presentation::guard::RenderFeatures;
use crate::session::{Command, Dispatch, SessionController};

/// Provider picker: "all providers" followed by every provider in the store.
pub struct Picker {
    pub providers: Vec<ProviderSummary>,
    pub state: ListState,
}

impl Picker {
    fn open(session: &SessionController) -> Self {
        let providers = session.store().providers();
        let current = session
            .query()
            .filters
            .provider
            .as_ref()
            .and_then(|id| providers.iter().position(|p| &p.id == id))
            .map_or(0, |i| i + 1);
        Self {
            providers,
            state: ListState::default().with_selected(Some(current)),
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len() + 1
    }

    fn move_by(&mut self, delta: isize) {
        let last = self.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.state.select(Some(next));
    }

    fn choice(&self) -> Option<String> {
        match self.state.selected() {
            Some(0) | None => None,
            Some(i) => self.providers.get(i - 1).map(|p| p.id.clone()),
        }
    }
}

pub enum Mode {
    Normal,
    /// Live search; `previous` is restored on Esc.
    Search { previous: String },
    Picker(Picker),
}

/// UI-only state of the rich pane. Query state lives in the session.
pub struct App {
    pub mode: Mode,
    pub search_buffer: String,
    pub table: TableState,
    pub features: RenderFeatures,
}

impl App {
    pub fn new(features: RenderFeatures) -> Self {
        Self {
            mode: Mode::Normal,
            search_buffer: String::new(),
            table: TableState::default(),
            features,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, Mode::Search { .. })
    }

    pub fn handle_key(&mut self, key: KeyEvent, session: &mut SessionController) -> Dispatch {
        if key.kind != KeyEventKind::Press {
            return Dispatch::Continue;
        }
        if keymap::is_interrupt(&key) {
            return session.dispatch(Command::Quit);
        }

        match &mut self.mode {
            Mode::Normal => match keymap::normal_mode(key) {
                Action::Dispatch(command) => session.dispatch(command),
                Action::StartSearch => {
                    let previous = session.query().search.clone();
                    self.search_buffer = previous.clone();
                    self.mode = Mode::Search { previous };
                    Dispatch::Continue
                }
                Action::OpenPicker => {
                    self.mode = Mode::Picker(Picker::open(session));
                    Dispatch::Continue
                }
                Action::Ignore => Dispatch::Continue,
            },
            Mode::Search { previous } => match key.code {
                KeyCode::Enter => {
                    self.mode = Mode::Normal;
                    Dispatch::Continue
                }
                KeyCode::Esc => {
                    let restored = std::mem::take(previous);
                    self.search_buffer = restored.clone();
                    self.mode = Mode::Normal;
                    session.dispatch(Command::Search(restored))
                }
                KeyCode::Backspace => {
                    self.search_buffer.pop();
                    session.dispatch(Command::Search(self.search_buffer.clone()))
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.search_buffer.push(c);
                    session.dispatch(Command::Search(self.search_buffer.clone()))
                }
                _ => Dispatch::Continue,
            },
            Mode::Picker(picker) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    picker.move_by(1);
                    Dispatch::Continue
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    picker.move_by(-1);
                    Dispatch::Continue
                }
                KeyCode::Enter => {
                    let choice = picker.choice();
                    self.mode = Mode::Normal;
                    session.dispatch(Command::SetProvider(choice))
                }
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.mode = Mode::Normal;
                    Dispatch::Continue
                }
                _ => Dispatch::Continue,
            },
        }
    }

    /// Keep the table cursor on the session's selection.
    pub fn sync(&mut self, session: &SessionController) {
        self.table.select(session.selected());
        if session.selected().is_none() {
            *self.table.offset_mut() = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use llmdex_engine::{CatalogueStore, QueryState};
    use llmdex_testing::fixtures::sample_entries;

    fn session() -> SessionController {
        SessionController::new(
            CatalogueStore::new(sample_entries()),
            QueryState::default(),
            Box::new(MemoryClipboard::default()),
        )
    }

    fn press(app: &mut App, session: &mut SessionController, code: KeyCode) -> Dispatch {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), session)
    }

    fn type_text(app: &mut App, session: &mut SessionController, text: &str) {
        for c in text.chars() {
            press(app, session, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_live_search_and_enter_keeps_term() {
        let mut session = session();
        let mut app = App::new(RenderFeatures::FULL);

        press(&mut app, &mut session, KeyCode::Char('/'));
        assert!(app.is_searching());
        type_text(&mut app, &mut session, "son");
        assert_eq!(session.query().search, "son");

        press(&mut app, &mut session, KeyCode::Enter);
        assert!(!app.is_searching());
        assert_eq!(session.query().search, "son");
    }

    #[test]
    fn test_escape_restores_previous_search() {
        let mut session = session();
        session.dispatch(Command::Search("gpt".to_string()));
        let mut app = App::new(RenderFeatures::FULL);

        press(&mut app, &mut session, KeyCode::Char('/'));
        press(&mut app, &mut session, KeyCode::Backspace);
        type_text(&mut app, &mut session, "emini");
        assert_eq!(session.query().search, "gpemini");

        press(&mut app, &mut session, KeyCode::Esc);
        assert_eq!(session.query().search, "gpt");
        assert!(!session.is_terminated(), "Esc in search mode does not quit");
    }

    #[test]
    fn test_typing_q_while_searching_does_not_quit() {
        let mut session = session();
        let mut app = App::new(RenderFeatures::FULL);
        press(&mut app, &mut session, KeyCode::Char('/'));
        assert_eq!(press(&mut app, &mut session, KeyCode::Char('q')), Dispatch::Continue);
        assert_eq!(session.query().search, "q");
    }

    #[test]
    fn test_picker_selects_provider() {
        let mut session = session();
        let mut app = App::new(RenderFeatures::FULL);
        let first = session.store().providers()[0].id.clone();

        press(&mut app, &mut session, KeyCode::Char('p'));
        press(&mut app, &mut session, KeyCode::Down);
        press(&mut app, &mut session, KeyCode::Enter);
        assert_eq!(session.query().filters.provider, Some(first));

        // reopening starts on the active provider; going up picks "all"
        press(&mut app, &mut session, KeyCode::Char('p'));
        press(&mut app, &mut session, KeyCode::Up);
        press(&mut app, &mut session, KeyCode::Enter);
        assert_eq!(session.query().filters.provider, None);
    }

    #[test]
    fn test_quit_from_list() {
        let mut session = session();
        let mut app = App::new(RenderFeatures::FULL);
        assert_eq!(press(&mut app, &mut session, KeyCode::Char('q')), Dispatch::Quit);
        assert!(session.is_terminated());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut session = session();
        let mut app = App::new(RenderFeatures::FULL);
        press(&mut app, &mut session, KeyCode::Char('/'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c, &mut session), Dispatch::Quit);
    }
}
