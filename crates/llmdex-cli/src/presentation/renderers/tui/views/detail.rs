use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{block, fg};
use crate::presentation::guard::RenderFeatures;
use crate::presentation::presenters::present_detail;
use crate::session::SessionController;

/// Detail pane for the selected entry.
pub struct DetailPaneView<'a> {
    session: &'a SessionController,
    features: RenderFeatures,
}

impl<'a> DetailPaneView<'a> {
    pub fn new(session: &'a SessionController, features: RenderFeatures) -> Self {
        Self { session, features }
    }
}

impl Widget for DetailPaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let features = self.features;
        let block = block(features, " Detail ".to_string());

        let Some(entry) = self.session.selected_entry() else {
            Paragraph::new("No model selected")
                .block(block)
                .render(area, buf);
            return;
        };

        let detail = present_detail(entry);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(detail.heading, bold)),
            Line::from(Span::styled(detail.id, fg(features, Color::Cyan))),
        ];
        for section in detail.sections {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                section.title,
                fg(features, Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            for (label, value) in section.fields {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {:<13}", label)),
                    Span::raw(value),
                ]));
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
