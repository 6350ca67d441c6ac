use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use llmdex_engine::Flag;

use crate::session::{Command, Movement, SortCycle};

/// Rows moved by PgUp / PgDn.
pub const PAGE_STEP: usize = 10;

/// What a key does in the list view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(Command),
    StartSearch,
    OpenPicker,
    Ignore,
}

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

pub fn normal_mode(key: KeyEvent) -> Action {
    if is_interrupt(&key) {
        return Action::Dispatch(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('/') => return Action::StartSearch,
        KeyCode::Char('p') => return Action::OpenPicker,
        KeyCode::Char('t') => Command::CycleFlag(Flag::ToolCall),
        KeyCode::Char('r') => Command::CycleFlag(Flag::Reasoning),
        KeyCode::Char('w') => Command::CycleFlag(Flag::OpenWeights),
        KeyCode::Char('s') => Command::CycleSort(SortCycle::Basic),
        KeyCode::Char('c') | KeyCode::Char('y') => Command::Copy,
        KeyCode::Char('x') => Command::ClearFilters,
        KeyCode::Char('?') => Command::ToggleHelp,
        KeyCode::Down | KeyCode::Char('j') => Command::Select(Movement::Next),
        KeyCode::Up | KeyCode::Char('k') => Command::Select(Movement::Previous),
        KeyCode::PageDown => Command::Select(Movement::Down(PAGE_STEP)),
        KeyCode::PageUp => Command::Select(Movement::Up(PAGE_STEP)),
        KeyCode::Home | KeyCode::Char('g') => Command::Select(Movement::First),
        KeyCode::End | KeyCode::Char('G') => Command::Select(Movement::Last),
        _ => return Action::Ignore,
    };
    Action::Dispatch(command)
}

/// Key hints for the help bar, as (keys, description).
pub const HELP: [(&str, &str); 12] = [
    ("q", "quit"),
    ("/", "search"),
    ("p", "provider"),
    ("t", "tool"),
    ("r", "reasoning"),
    ("w", "weights"),
    ("s", "sort"),
    ("c", "copy id"),
    ("x", "clear"),
    ("j/k", "move"),
    ("g/G", "top/bottom"),
    ("?", "help"),
];
