use super::command::{Command, Movement};
use crate::clipboard::Clipboard;
use llmdex_engine::{CatalogueStore, DerivedView, Flag, QueryState, derive};
use llmdex_types::CatalogueEntry;

/// Lifecycle of an open session.
///
/// Loading happens in [`SessionController::load`] before a controller
/// exists, and each command is applied and re-derived inside one
/// `dispatch` call, so only these two states are ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One-line feedback shown until the next command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Quit,
}

/// Owns the query state and the derived view for one session.
///
/// `dispatch` is the only mutation entry point: it applies one command,
/// re-derives the view, re-locates the selection by identity and clamps
/// the page, in that order.
pub struct SessionController {
    store: CatalogueStore,
    query: QueryState,
    view: DerivedView,
    selected: Option<usize>,
    phase: Phase,
    show_help: bool,
    status: Option<StatusMessage>,
    clipboard: Box<dyn Clipboard>,
}

impl SessionController {
    /// Run the catalogue loader and open a session on its result.
    ///
    /// A failed load never produces a session; the error goes back to the
    /// caller untouched.
    pub fn load<F, E>(loader: F, query: QueryState, clipboard: Box<dyn Clipboard>) -> Result<Self, E>
    where
        F: FnOnce() -> Result<Vec<CatalogueEntry>, E>,
        E: std::fmt::Display,
    {
        tracing::debug!("loading catalogue for session");
        match loader() {
            Ok(entries) => Ok(Self::new(CatalogueStore::new(entries), query, clipboard)),
            Err(e) => {
                tracing::debug!(error = %e, "catalogue load failed; no session");
                Err(e)
            }
        }
    }

    pub fn new(store: CatalogueStore, query: QueryState, clipboard: Box<dyn Clipboard>) -> Self {
        let mut session = Self {
            store,
            query,
            view: DerivedView::default(),
            selected: None,
            phase: Phase::Ready,
            show_help: false,
            status: None,
            clipboard,
        };
        session.recompute();
        tracing::debug!(
            phase = ?session.phase,
            entries = session.store.len(),
            rows = session.view.len(),
            "session ready"
        );
        session
    }

    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        if self.phase == Phase::Terminated {
            return Dispatch::Quit;
        }
        tracing::debug!(?command, "dispatch");
        self.status = None;

        if command == Command::Quit {
            self.terminate();
            return Dispatch::Quit;
        }

        self.apply(command);
        self.recompute();
        Dispatch::Continue
    }

    /// End the session without a user command (e.g. a one-shot listing).
    pub fn terminate(&mut self) {
        self.phase = Phase::Terminated;
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Search(term) => self.query.search = term,
            Command::SetProvider(provider) => {
                if let Some(id) = &provider
                    && !self.store.has_provider(id)
                {
                    self.status = Some(StatusMessage::warning(format!(
                        "no provider '{}' in the catalogue",
                        id
                    )));
                }
                self.query.filters.provider = provider;
            }
            Command::SetFlag(flag, state) => *flag_slot(&mut self.query, flag) = state,
            Command::CycleFlag(flag) => {
                let slot = flag_slot(&mut self.query, flag);
                *slot = slot.cycle();
            }
            Command::SetMinContext(min) => self.query.filters.min_context = min,
            Command::SetMaxInputCost(max) => self.query.filters.max_input_cost = max,
            Command::SetMaxOutputCost(max) => self.query.filters.max_output_cost = max,
            Command::SetModalitiesIn(tags) => self.query.filters.modalities_in = tags,
            Command::SetModalitiesOut(tags) => self.query.filters.modalities_out = tags,
            Command::ClearFilters => {
                self.query.filters = Default::default();
                self.query.search.clear();
            }
            Command::CycleSort(cycle) => {
                self.query.sort = self.query.sort.next_in(cycle.modes());
                self.status = Some(StatusMessage::info(format!("sort: {}", self.query.sort)));
            }
            Command::SetSort(mode) => self.query.sort = mode,
            Command::Select(movement) => self.move_selection(movement),
            Command::NextPage => self.query.page_index += 1,
            Command::PrevPage => self.query.page_index = self.query.page_index.saturating_sub(1),
            Command::GotoPage(page) => self.query.page_index = page,
            Command::SetPageSize(size) => {
                self.query.set_page_size(size);
                self.query.page_index = 0;
            }
            Command::Copy => self.copy_selected(),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Quit => self.terminate(),
        }
    }

    fn recompute(&mut self) {
        self.view = derive(&self.store, &self.query);
        self.selected = self.view.relocate(&self.store, self.query.selection.as_ref());
        self.query.selection = self.selected_entry().map(CatalogueEntry::id);
        self.query.clamp_page(self.view.len());
    }

    fn move_selection(&mut self, movement: Movement) {
        if self.view.is_empty() {
            return;
        }
        let last = self.view.len() - 1;
        let current = self.selected.unwrap_or(0);
        let target = match movement {
            Movement::Next => current.saturating_add(1),
            Movement::Previous => current.saturating_sub(1),
            Movement::First => 0,
            Movement::Last => last,
            Movement::Down(n) => current.saturating_add(n),
            Movement::Up(n) => current.saturating_sub(n),
            Movement::To(row) => row,
        }
        .min(last);

        self.query.selection = self.view.entry(&self.store, target).map(CatalogueEntry::id);
    }

    fn copy_selected(&mut self) {
        let Some(model_id) = self.selected_entry().map(|e| e.model_id.clone()) else {
            self.status = Some(StatusMessage::warning("nothing selected to copy"));
            return;
        };

        self.status = Some(match self.clipboard.set(&model_id) {
            Ok(()) => StatusMessage::info(format!("copied {}", model_id)),
            Err(e) => {
                // The status line carries this; stderr belongs to the UI.
                tracing::debug!(error = %e, "copy failed");
                StatusMessage::warning(format!("copy failed: {}", e))
            }
        });
    }

    pub fn store(&self) -> &CatalogueStore {
        &self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Selected row position within the view.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&CatalogueEntry> {
        self.selected
            .and_then(|position| self.view.entry(&self.store, position))
    }

    pub fn rows(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.view.entries(&self.store)
    }

    /// Entries on the current page, with their view positions.
    pub fn page(&self) -> Vec<(usize, &CatalogueEntry)> {
        let range = self.query.page_range(self.view.len());
        range
            .filter_map(|position| {
                self.view
                    .entry(&self.store, position)
                    .map(|entry| (position, entry))
            })
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.query.page_count(self.view.len())
    }
}

fn flag_slot(query: &mut QueryState, flag: Flag) -> &mut llmdex_engine::TriState {
    match flag {
        Flag::ToolCall => &mut query.filters.tool_call,
        Flag::Reasoning => &mut query.filters.reasoning,
        Flag::OpenWeights => &mut query.filters.open_weights,
        Flag::Temperature => &mut query.filters.temperature,
    }
}
