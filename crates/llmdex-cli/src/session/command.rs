use llmdex_engine::{Flag, SortMode, TriState};
use std::collections::BTreeSet;

/// A single user intent. Front-ends translate keys or typed lines into
/// these and hand them to `SessionController::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    SetProvider(Option<String>),
    SetFlag(Flag, TriState),
    CycleFlag(Flag),
    SetMinContext(Option<u64>),
    SetMaxInputCost(Option<f64>),
    SetMaxOutputCost(Option<f64>),
    SetModalitiesIn(BTreeSet<String>),
    SetModalitiesOut(BTreeSet<String>),
    ClearFilters,
    CycleSort(SortCycle),
    SetSort(SortMode),
    Select(Movement),
    NextPage,
    PrevPage,
    /// Zero-based page index.
    GotoPage(usize),
    SetPageSize(usize),
    Copy,
    ToggleHelp,
    Quit,
}

/// Which list of sort modes `CycleSort` walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCycle {
    Basic,
    Extended,
}

impl SortCycle {
    pub fn modes(self) -> &'static [SortMode] {
        match self {
            SortCycle::Basic => &SortMode::BASIC,
            SortCycle::Extended => &SortMode::EXTENDED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Next,
    Previous,
    First,
    Last,
    Down(usize),
    Up(usize),
    /// Absolute row in the view.
    To(usize),
}
