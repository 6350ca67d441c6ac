//! Ratatui widgets for the rich pane.
//!
//! Every widget honours `RenderFeatures`: ASCII borders and markers when
//! unicode is off, no foreground colours when colour is off.

mod detail;
mod list;
mod picker;
mod query_bar;
mod status_bar;

pub use detail::DetailPaneView;
pub use list::ModelListView;
pub use picker::PickerView;
pub use query_bar::QueryBarView;
pub use status_bar::StatusBarView;

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders};

use crate::presentation::guard::RenderFeatures;

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

pub(super) fn block(features: RenderFeatures, title: String) -> Block<'static> {
    let set = if features.unicode {
        border::ROUNDED
    } else {
        ASCII_BORDER
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(set)
        .title(title)
}

pub(super) fn fg(features: RenderFeatures, color: Color) -> Style {
    if features.color {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

pub(super) fn highlight(features: RenderFeatures) -> Style {
    if features.color {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

pub(super) fn marker(features: RenderFeatures) -> &'static str {
    if features.unicode { "▶ " } else { "> " }
}

pub(super) fn check(features: RenderFeatures, value: bool) -> &'static str {
    match (features.unicode, value) {
        (true, true) => "✓",
        (true, false) => "·",
        (false, true) => "y",
        (false, false) => "n",
    }
}
