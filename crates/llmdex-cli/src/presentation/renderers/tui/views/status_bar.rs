use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::super::keymap::HELP;
use super::{block, fg};
use crate::presentation::guard::RenderFeatures;
use crate::session::{SessionController, StatusLevel};

/// Bottom bar: the transient status message and key hints.
pub struct StatusBarView<'a> {
    session: &'a SessionController,
    features: RenderFeatures,
}

impl<'a> StatusBarView<'a> {
    pub fn new(session: &'a SessionController, features: RenderFeatures) -> Self {
        Self { session, features }
    }

    /// Rows needed, borders included.
    pub fn height(session: &SessionController) -> u16 {
        if session.show_help() { 5 } else { 3 }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let features = self.features;
        let key_style = fg(features, Color::Yellow);

        let status = match self.session.status() {
            Some(message) => {
                let color = match message.level {
                    StatusLevel::Info => Color::Green,
                    StatusLevel::Warning => Color::Red,
                };
                Span::styled(message.text.clone(), fg(features, color))
            }
            None => Span::raw(format!("{} models", self.session.view().len())),
        };

        let mut lines = vec![Line::from(vec![
            status,
            Span::raw("  "),
            Span::styled("?", key_style),
            Span::raw(" help"),
        ])];

        if self.session.show_help() {
            let mut spans = Vec::with_capacity(HELP.len() * 2);
            for (keys, what) in HELP {
                spans.push(Span::styled(format!("[{}]", keys), key_style));
                spans.push(Span::raw(format!("{} ", what)));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(block(features, String::new()))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
