use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{block, fg};
use crate::presentation::guard::RenderFeatures;
use crate::session::SessionController;

/// Top bar: search term, active filters and sort.
pub struct QueryBarView<'a> {
    session: &'a SessionController,
    features: RenderFeatures,
    /// Some while the search prompt is open.
    editing: Option<&'a str>,
}

impl<'a> QueryBarView<'a> {
    pub fn new(
        session: &'a SessionController,
        features: RenderFeatures,
        editing: Option<&'a str>,
    ) -> Self {
        Self {
            session,
            features,
            editing,
        }
    }
}

impl Widget for QueryBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let query = self.session.query();
        let label = fg(self.features, Color::Yellow);

        let search = match self.editing {
            Some(buffer) => Span::styled(
                format!("{}_", buffer),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
            None if query.search.is_empty() => Span::raw("-"),
            None => Span::raw(query.search.clone()),
        };
        let filters = query.filters.summary();

        let line = Line::from(vec![
            Span::styled("search: ", label),
            search,
            Span::styled("  filters: ", label),
            Span::raw(if filters.is_empty() { "none".to_string() } else { filters }),
            Span::styled("  sort: ", label),
            Span::raw(query.sort.to_string()),
        ]);

        Paragraph::new(line)
            .block(block(self.features, " llmdex ".to_string()))
            .render(area, buf);
    }
}
