use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};

use super::{block, check, fg, highlight, marker};
use crate::presentation::formatters::{format_cost, format_tokens};
use crate::presentation::guard::RenderFeatures;
use crate::session::SessionController;

/// Model list pane: one row per view entry.
pub struct ModelListView<'a> {
    session: &'a SessionController,
    features: RenderFeatures,
}

impl<'a> ModelListView<'a> {
    pub fn new(session: &'a SessionController, features: RenderFeatures) -> Self {
        Self { session, features }
    }

    fn title(&self) -> String {
        let view = self.session.view();
        if view.is_truncated() {
            format!(" Models ({} of {}) ", view.len(), view.matched())
        } else {
            format!(" Models ({}) ", view.len())
        }
    }
}

impl StatefulWidget for ModelListView<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let features = self.features;
        let header = Row::new(["Provider", "Model", "In $", "Out $", "Context", "Tool", "Rsn"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.session.rows().map(|entry| {
            Row::new(vec![
                Cell::from(entry.provider_name.clone()).style(fg(features, Color::Cyan)),
                Cell::from(entry.model_name.clone()),
                Cell::from(format_cost(entry.cost.input)),
                Cell::from(format_cost(entry.cost.output)),
                Cell::from(format_tokens(entry.limit.context)),
                Cell::from(check(features, entry.capabilities.tool_call)),
                Cell::from(check(features, entry.capabilities.reasoning)),
            ])
        });

        let widths = [
            Constraint::Length(14),
            Constraint::Min(18),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Length(3),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block(features, self.title()))
            .row_highlight_style(highlight(features))
            .highlight_symbol(marker(features));

        StatefulWidget::render(table, area, buf, state);
    }
}
